//! Configuration validation and error reporting

use super::types::Config;
use crate::error::{Error, Result};
use crate::replace::boundary;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending key.
    pub fn validate(config: &Config) -> Result<()> {
        if config.max_file_size == Some(0) {
            return Err(Error::InvalidConfig {
                key: "max_file_size",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if config.binary_probe_len == Some(0) {
            return Err(Error::InvalidConfig {
                key: "binary_probe_len",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if let Some(separator) = &config.default_separator
            && !separator.chars().all(boundary::is_separator)
        {
            return Err(Error::InvalidConfig {
                key: "default_separator",
                reason: format!("'{separator}' may only contain '_' and '-'"),
            }
            .into());
        }

        if config.hidden_prefix.as_deref() == Some("") {
            return Err(Error::InvalidConfig {
                key: "hidden_prefix",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_config() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_zero_size() {
        let config = Config {
            max_file_size: Some(0),
            ..Config::default()
        };

        let result = ConfigValidator::validate(&config);
        assert!(result.unwrap_err().to_string().contains("max_file_size"));
    }

    #[test]
    fn test_validate_zero_probe() {
        let config = Config {
            binary_probe_len: Some(0),
            ..Config::default()
        };

        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_validate_separator_characters() {
        let config = Config {
            default_separator: Some(".".to_string()),
            ..Config::default()
        };
        let result = ConfigValidator::validate(&config);
        assert!(result.unwrap_err().to_string().contains("default_separator"));

        let config = Config {
            default_separator: Some("__".to_string()),
            ..Config::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_hidden_prefix() {
        let config = Config {
            hidden_prefix: Some(String::new()),
            ..Config::default()
        };

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidConfig {
                key: "hidden_prefix",
                ..
            })
        ));
    }
}
