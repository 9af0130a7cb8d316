use crate::config::catalog;
use crate::core::ParameterProvider;
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub profile: ProfileSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSection {
    pub image: Option<String>,
    pub hardware_type: Option<String>,
    pub username: Option<String>,
    pub num_rcnodes: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ProfileError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProfileError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RC_USER})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProfileError::ConfigError {
            message: format!("env pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ParameterProvider for TomlConfig {
    fn hardware_type(&self) -> &str {
        self.profile
            .hardware_type
            .as_deref()
            .unwrap_or(catalog::DEFAULT_HARDWARE_TYPE)
    }

    fn image(&self) -> &str {
        self.profile.image.as_deref().unwrap_or(catalog::DEFAULT_IMAGE)
    }

    fn username(&self) -> &str {
        self.profile.username.as_deref().unwrap_or("")
    }

    fn num_rcnodes(&self) -> usize {
        self.profile.num_rcnodes.unwrap_or(catalog::DEFAULT_NODE_COUNT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.parameters().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_profile_table() {
        let toml_content = r#"
[profile]
image = "UBUNTU16-64-STD"
hardware_type = "m510"
username = "alice"
num_rcnodes = 8
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.username(), "alice");
        assert_eq!(config.num_rcnodes(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_keys_fall_back_to_catalog_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.image(), "UBUNTU16-64-STD");
        assert_eq!(config.hardware_type(), "m510");
        assert_eq!(config.username(), "");
        assert_eq!(config.num_rcnodes(), 5);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CLUSTER_PROFILE_TEST_USER", "carol");

        let toml_content = r#"
[profile]
username = "${CLUSTER_PROFILE_TEST_USER}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.username(), "carol");

        std::env::remove_var("CLUSTER_PROFILE_TEST_USER");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config = TomlConfig::from_toml_str("[profile]\nnum_rcnodes = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[profile]\nimage = \"WIN10\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[profile\nimage = 1").unwrap_err();
        assert!(matches!(err, ProfileError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[profile]\nusername = \"dave\"\nnum_rcnodes = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.username(), "dave");
        assert_eq!(config.num_rcnodes(), 3);
    }
}
