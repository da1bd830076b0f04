//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Deployment environment, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    Production,
    /// `APP_ENV` unset or unrecognized.
    #[default]
    Unspecified,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            "production" | "prod" => Self::Production,
            _ => Self::Unspecified,
        }
    }

    /// Internal error text is only sent to clients in development.
    pub fn exposes_error_details(self) -> bool {
        self == Self::Development
    }

    /// Production deployments are mounted by an external host unless `LISTEN` says otherwise.
    pub fn binds_listener(self) -> bool {
        self != Self::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Unspecified => "unspecified",
        })
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// Whether the binary binds a socket itself.
    pub listen: bool,
    /// Directory holding the front-end (`index.html` and assets).
    pub public_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let environment = env::var("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or_default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment,
            listen: env::var("LISTEN")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or_else(|| environment.binds_listener()),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(" PROD "), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Unspecified);
    }

    #[test]
    fn test_only_development_exposes_details() {
        assert!(Environment::Development.exposes_error_details());
        assert!(!Environment::Production.exposes_error_details());
        assert!(!Environment::Unspecified.exposes_error_details());
    }

    #[test]
    fn test_production_does_not_bind_by_default() {
        assert!(!Environment::Production.binds_listener());
        assert!(Environment::Development.binds_listener());
        assert!(Environment::Unspecified.binds_listener());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
