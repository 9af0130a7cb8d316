use crate::config::catalog;
use crate::domain::model::Parameters;
use crate::utils::error::{ProfileError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ProfileError::InvalidParameterError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ProfileError::InvalidParameterError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 空白使用者名稱允許，否則需符合 POSIX 帳號格式
pub fn validate_username(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }

    let re = Regex::new(r"^[a-z_][a-z0-9_-]*$").map_err(|e| ProfileError::ConfigError {
        message: format!("username pattern: {}", e),
    })?;

    if !re.is_match(value) {
        return Err(ProfileError::InvalidParameterError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Use lowercase letters, digits, '_' or '-', starting with a letter or '_'"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ProfileError::InvalidParameterError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ProfileError::InvalidParameterError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

impl Validate for Parameters {
    fn validate(&self) -> Result<()> {
        validate_one_of("image", &self.image, &catalog::image_ids())?;
        validate_one_of("hardware_type", &self.hardware_type, &catalog::hardware_type_ids())?;
        validate_username("username", &self.username)?;
        validate_range("num_rcnodes", self.num_rcnodes, 1, catalog::MAX_NODE_COUNT)?;

        if self.num_rcnodes < catalog::RECOMMENDED_MIN_NODES {
            tracing::warn!(
                "num_rcnodes = {} is below the recommended minimum of {} (1 master + 3 backups + 1 coordinator)",
                self.num_rcnodes,
                catalog::RECOMMENDED_MIN_NODES
            );
        }
        Ok(())
    }
}
