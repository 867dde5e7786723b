use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PAGE_SIZE: u64 = 12;
const MAX_PAGE_SIZE: u64 = 100;

/// Page size limits applied to every paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDefaults {
    /// Used when a request omits `size`.
    pub default_size: u64,
    /// Largest accepted `size`.
    pub max_size: u64,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
    pub page_defaults: PageDefaults,

    /// Insert demo roles, categories and products when the catalog is empty.
    pub seed_data: bool,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let page_defaults = PageDefaults {
            default_size: optional_var("DEFAULT_PAGE_SIZE")?.unwrap_or(DEFAULT_PAGE_SIZE),
            max_size: optional_var("MAX_PAGE_SIZE")?.unwrap_or(MAX_PAGE_SIZE),
        };

        if page_defaults.default_size == 0 || page_defaults.default_size > page_defaults.max_size {
            return Err(ConfigError::InvalidEnvVar {
                name: "DEFAULT_PAGE_SIZE".to_string(),
                value: page_defaults.default_size.to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: match optional_var("SERVER_ADDR")? {
                Some(addr) => addr,
                None => parse_var("SERVER_ADDR", DEFAULT_SERVER_ADDR)?,
            },
            page_defaults,
            seed_data: optional_var("SEED_DATA")?.unwrap_or(false),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        })
    }
}

/// Reads and parses an optional environment variable.
///
/// # Returns
/// - `Ok(None)` - Variable is unset
/// - `Ok(Some(T))` - Variable is set and parsed
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but cannot be parsed as `T`
fn optional_var<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_var(name, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typed_values() {
        let size: u64 = parse_var("MAX_PAGE_SIZE", " 50 ").unwrap();
        let seed: bool = parse_var("SEED_DATA", "true").unwrap();
        let addr: SocketAddr = parse_var("SERVER_ADDR", DEFAULT_SERVER_ADDR).unwrap();

        assert_eq!(size, 50);
        assert!(seed);
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn reports_invalid_value() {
        let result: Result<u64, _> = parse_var("DEFAULT_PAGE_SIZE", "twelve");

        match result {
            Err(ConfigError::InvalidEnvVar { name, value }) => {
                assert_eq!(name, "DEFAULT_PAGE_SIZE");
                assert_eq!(value, "twelve");
            }
            other => panic!("expected InvalidEnvVar, got {:?}", other.map(|_| ())),
        }
    }
}
