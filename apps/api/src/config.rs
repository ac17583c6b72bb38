use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; the project store is simply disabled
/// when `DATABASE_URL` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub cors_allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            database_max_connections: optional_env("DATABASE_MAX_CONNECTIONS")
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?
                .unwrap_or(5),
            cors_allowed_origins: optional_env("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when CORS should allow any origin.
    pub fn cors_is_permissive(&self) -> bool {
        self.cors_allowed_origins.is_empty() || self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

/// Returns the variable's value, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
impl Config {
    /// Defaults used by router tests: no database, permissive CORS.
    pub fn for_tests() -> Self {
        Config {
            database_url: None,
            database_max_connections: 5,
            cors_allowed_origins: Vec::new(),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_blanks() {
        let origins = parse_origins(" http://localhost:3000, ,https://app.example.org ");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://app.example.org"]
        );
    }

    #[test]
    fn test_empty_origin_list_is_permissive() {
        assert!(Config::for_tests().cors_is_permissive());
    }

    #[test]
    fn test_wildcard_origin_is_permissive() {
        let config = Config {
            cors_allowed_origins: vec!["http://localhost:5173".to_string(), "*".to_string()],
            ..Config::for_tests()
        };
        assert!(config.cors_is_permissive());
    }

    #[test]
    fn test_explicit_origins_are_restrictive() {
        let config = Config {
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
            ..Config::for_tests()
        };
        assert!(!config.cors_is_permissive());
    }
}
