#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::builder::{build_topology, TopologyBuilder};
pub use core::render::{JsonRenderer, OutputFormat, TomlRenderer};
pub use domain::model::{Parameters, Role, Topology};
pub use utils::error::{ProfileError, Result};
