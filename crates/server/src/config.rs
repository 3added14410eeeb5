use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` when present)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub oidc_issuer_url: String,
    pub bind_addr: String,
    /// Load the starter catalog into an empty database on startup
    pub seed_data: bool,
}

impl Config {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:3000";

    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine, real environment variables take over
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let seed_data = match lookup("SEED_DATA") {
            None => true,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "SEED_DATA",
                        value,
                    });
                }
            },
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            oidc_issuer_url: required("OIDC_ISSUER_URL")?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.to_owned()),
            seed_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/registration"),
            ("OIDC_ISSUER_URL", "https://idp.example.edu"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/registration");
        assert_eq!(config.oidc_issuer_url, "https://idp.example.edu");
        assert_eq!(config.bind_addr, Config::DEFAULT_BIND_ADDR);
        assert!(config.seed_data);
    }

    #[test]
    fn test_missing_required() {
        assert_eq!(
            config_from(&[("OIDC_ISSUER_URL", "https://idp.example.edu")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
        assert_eq!(
            config_from(&[
                ("DATABASE_URL", "postgres://localhost/registration"),
                ("OIDC_ISSUER_URL", "  "),
            ]),
            Err(ConfigError::Missing("OIDC_ISSUER_URL"))
        );
    }

    #[test]
    fn test_seed_flag() {
        let base = [
            ("DATABASE_URL", "sqlite::memory:"),
            ("OIDC_ISSUER_URL", "https://idp.example.edu"),
        ];

        let mut vars = base.to_vec();
        vars.push(("SEED_DATA", "false"));
        assert!(!config_from(&vars).unwrap().seed_data);

        let mut vars = base.to_vec();
        vars.push(("SEED_DATA", "maybe"));
        assert_eq!(
            config_from(&vars),
            Err(ConfigError::Invalid {
                var: "SEED_DATA",
                value: "maybe".to_owned()
            })
        );
    }
}
