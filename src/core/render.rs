use crate::domain::model::Topology;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        }
    }

    pub fn renderer(&self, pretty: bool) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Json => Box::new(JsonRenderer { pretty }),
            OutputFormat::Toml => Box::new(TomlRenderer),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, topology: &Topology) -> Result<String> {
        let output = if self.pretty {
            serde_json::to_string_pretty(topology)?
        } else {
            serde_json::to_string(topology)?
        };
        Ok(output)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TomlRenderer;

impl Renderer for TomlRenderer {
    fn render(&self, topology: &Topology) -> Result<String> {
        Ok(toml::to_string_pretty(topology)?)
    }
}
