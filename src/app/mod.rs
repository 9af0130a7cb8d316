// Application layer: one CLI invocation from parsed flags to rendered output.

use crate::config::catalog;
use crate::config::cli::LocalStorage;
use crate::config::toml_config::TomlConfig;
use crate::config::{CliConfig, Command};
use crate::core::builder::TopologyBuilder;
use crate::core::render::OutputFormat;
use crate::core::{ParameterProvider, Renderer, Storage};
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{validate_path, Validate};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutput {
    /// 要印到 stdout 的內容
    Stdout(String),
    /// 已寫入的檔案路徑
    Written(String),
}

/// 沒有副檔名時補上輸出格式的副檔名
pub fn resolve_output_path(path: &str, format: OutputFormat) -> PathBuf {
    let mut target = PathBuf::from(path);
    if target.extension().is_none() {
        target.set_extension(format.extension());
    }
    target
}

pub fn run(config: &mut CliConfig) -> Result<RunOutput> {
    if let Some(Command::Params) = config.command {
        let definitions = catalog::parameter_definitions();
        return Ok(RunOutput::Stdout(serde_json::to_string_pretty(&definitions)?));
    }

    if config.compact && config.format != OutputFormat::Json {
        return Err(ProfileError::InvalidParameterError {
            field: "compact".to_string(),
            value: config.format.extension().to_string(),
            reason: "--compact only applies to --format json".to_string(),
        });
    }

    // 載入 TOML 配置，命令列參數優先
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading profile from: {}", path);
        let file = TomlConfig::from_file(&path)?;
        config.merge_file(&file);
    }

    // 驗證參數
    let params = config.parameters();
    params.validate()?;
    tracing::info!(
        "Parameters: image={} hardware_type={} username={:?} num_rcnodes={}",
        params.image,
        params.hardware_type,
        params.username,
        params.num_rcnodes
    );

    let topology = TopologyBuilder::new(params).build();
    let rendered = config.format.renderer(!config.compact).render(&topology)?;

    match &config.output {
        Some(path) => {
            validate_path("output", path)?;
            let target = resolve_output_path(path, config.format);
            let storage = LocalStorage::new(".".to_string());
            let written = storage.write_file(&target.to_string_lossy(), rendered.as_bytes())?;
            tracing::info!("📁 Description saved to: {}", written);
            Ok(RunOutput::Written(written))
        }
        None => Ok(RunOutput::Stdout(rendered)),
    }
}
