use crate::{ConfigError, FromEnv};
use std::env;

/// Allowed CORS origins, read from `CORS_ALLOWED_ORIGIN`.
///
/// An empty list means the variable was not set. Whether that is acceptable
/// depends on the environment and is decided by the HTTP layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_configured(&self) -> bool {
        !self.allowed_origins.is_empty()
    }
}

impl FromEnv for CorsConfig {
    /// `CORS_ALLOWED_ORIGIN` is a comma-separated list, e.g.
    /// `http://localhost:3000,https://example.com`. When set it must contain
    /// at least one origin.
    fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = env::var("CORS_ALLOWED_ORIGIN") else {
            return Ok(Self::default());
        };

        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "no origins listed".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_is_empty() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let config = CorsConfig::from_env().unwrap();
            assert!(!config.is_configured());
        });
    }

    #[test]
    fn test_splits_and_trims_origins() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000, https://example.com ,"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["http://localhost:3000", "https://example.com"]
                );
            },
        );
    }

    #[test]
    fn test_blank_value_is_rejected() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }
}
