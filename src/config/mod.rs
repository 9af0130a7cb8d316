pub mod catalog;
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::cli_args::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli_args {
    use crate::config::catalog;
    use crate::config::toml_config::TomlConfig;
    use crate::core::render::OutputFormat;
    use crate::core::ParameterProvider;
    use clap::{Parser, Subcommand};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
    #[command(name = "cluster-profile")]
    #[command(about = "Generate the request description for a RAMCloud cluster on CloudLab")]
    pub struct CliConfig {
        #[command(subcommand)]
        pub command: Option<Command>,

        /// Base disk image every node boots with
        #[arg(long)]
        pub image: Option<String>,

        /// Machine class for every node
        #[arg(long)]
        pub hardware_type: Option<String>,

        /// User the setup script configures software for
        #[arg(long)]
        pub username: Option<String>,

        /// Number of worker nodes (workerNN machines)
        #[arg(long)]
        pub num_rcnodes: Option<usize>,

        /// TOML profile file; flags override its values
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        pub format: OutputFormat,

        /// Write the description to this file instead of stdout
        #[arg(short, long)]
        pub output: Option<String>,

        /// Single-line JSON output (rejected with --format toml)
        #[arg(long)]
        pub compact: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    #[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
    pub enum Command {
        /// List the profile parameters and their legal values
        Params,
    }

    impl CliConfig {
        /// 命令列參數覆蓋 TOML 檔案中的設定
        pub fn merge_file(&mut self, file: &TomlConfig) {
            let profile = &file.profile;
            if self.image.is_none() {
                self.image = profile.image.clone();
            }
            if self.hardware_type.is_none() {
                self.hardware_type = profile.hardware_type.clone();
            }
            if self.username.is_none() {
                self.username = profile.username.clone();
            }
            if self.num_rcnodes.is_none() {
                self.num_rcnodes = profile.num_rcnodes;
            }
        }
    }

    impl ParameterProvider for CliConfig {
        fn hardware_type(&self) -> &str {
            self.hardware_type
                .as_deref()
                .unwrap_or(catalog::DEFAULT_HARDWARE_TYPE)
        }

        fn image(&self) -> &str {
            self.image.as_deref().unwrap_or(catalog::DEFAULT_IMAGE)
        }

        fn username(&self) -> &str {
            self.username.as_deref().unwrap_or("")
        }

        fn num_rcnodes(&self) -> usize {
            self.num_rcnodes.unwrap_or(catalog::DEFAULT_NODE_COUNT)
        }
    }

}
