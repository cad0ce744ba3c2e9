use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub common: core_config::Config,
    pub store: StoreConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongodb,
    /// Process-local store, contents are lost on restart.
    Memory,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    /// Upper bound on server selection and connection setup.
    pub timeout_ms: u64,
}

impl MongoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl SiteConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let backend = parse_backend(&get_env("STORE_BACKEND", Some("mongodb"), false)?)?;

        Ok(SiteConfig {
            common: common_config,
            store: StoreConfig {
                backend,
                mongodb: MongoConfig {
                    uri: get_env(
                        "MONGODB_URI",
                        Some("mongodb://localhost:27017"),
                        is_prod && backend == StoreBackend::Mongodb,
                    )?,
                    database: get_env("MONGODB_DATABASE", Some("benefits_site"), false)?,
                    timeout_ms: parse_timeout_ms(&get_env(
                        "MONGODB_TIMEOUT_MS",
                        Some("2000"),
                        false,
                    )?)?,
                },
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&get_env("CORS_ALLOWED_ORIGINS", Some("*"), false)?),
            },
        })
    }
}

fn parse_backend(value: &str) -> Result<StoreBackend, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mongodb" | "mongo" => Ok(StoreBackend::Mongodb),
        "memory" => Ok(StoreBackend::Memory),
        other => Err(AppError::ConfigError(anyhow::anyhow!(
            "STORE_BACKEND must be 'mongodb' or 'memory', got '{}'",
            other
        ))),
    }
}

fn parse_timeout_ms(value: &str) -> Result<u64, AppError> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(AppError::ConfigError(anyhow::anyhow!(
            "MONGODB_TIMEOUT_MS must be a positive number of milliseconds, got '{}'",
            value
        ))),
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins("https://a.example, https://b.example ,"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn wildcard_or_empty_origin_list_allows_any() {
        assert!(CorsConfig::default().allows_any_origin());
        assert!(CorsConfig {
            allowed_origins: vec![]
        }
        .allows_any_origin());
        assert!(!CorsConfig {
            allowed_origins: vec!["https://site.example".to_string()]
        }
        .allows_any_origin());
    }

    #[test]
    fn timeout_must_be_a_positive_integer() {
        assert_eq!(parse_timeout_ms("2000").unwrap(), 2000);
        assert_eq!(parse_timeout_ms(" 750 ").unwrap(), 750);
        for bad in ["", "0", "-5", "2s", "fast"] {
            assert!(
                matches!(parse_timeout_ms(bad), Err(AppError::ConfigError(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn backend_names_are_case_insensitive() {
        assert_eq!(parse_backend("MongoDB").unwrap(), StoreBackend::Mongodb);
        assert_eq!(parse_backend(" memory ").unwrap(), StoreBackend::Memory);
        assert!(parse_backend("postgres").is_err());
    }
}
