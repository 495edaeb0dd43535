use std::fmt;
use std::str::FromStr;

use carfleet_core::validation::DEFAULT_MAX_BUILD_AGE_YEARS;

/// What to do with existing data when the server starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StartupMode {
    /// Leave the database as it is.
    #[default]
    Keep,
    /// Truncate both tables and reinsert the seed colours and car.
    Reset,
    /// Delete every car and colour.
    Clear,
}

impl FromStr for StartupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "reset" => Ok(Self::Reset),
            "clear" => Ok(Self::Clear),
            other => Err(format!(
                "unknown startup mode '{other}', expected keep, reset or clear"
            )),
        }
    }
}

impl fmt::Display for StartupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keep => "keep",
            Self::Reset => "reset",
            Self::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum age of a new car's build date, in years (default: `4`).
    pub max_build_age_years: u32,
    /// Data reset applied once at startup (default: `keep`).
    pub startup_mode: StartupMode,
    /// Mount `GET /metrics` (default: `false`).
    pub enable_metrics: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `BUILD_DATE_MAX_YEARS` | `4`                        |
    /// | `DB_STARTUP_MODE`      | `keep`                     |
    /// | `ENABLE_METRICS`       | `false`                    |
    ///
    /// Panics on unparseable values: misconfiguration should stop startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_build_age_years: u32 = std::env::var("BUILD_DATE_MAX_YEARS")
            .map(|v| v.parse().expect("BUILD_DATE_MAX_YEARS must be a valid u32"))
            .unwrap_or(DEFAULT_MAX_BUILD_AGE_YEARS);

        let startup_mode: StartupMode = std::env::var("DB_STARTUP_MODE")
            .map(|v| v.parse().unwrap_or_else(|e| panic!("DB_STARTUP_MODE: {e}")))
            .unwrap_or_default();

        let enable_metrics = std::env::var("ENABLE_METRICS")
            .map(|v| {
                parse_flag(&v).unwrap_or_else(|| panic!("ENABLE_METRICS: '{v}' is not a boolean"))
            })
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_build_age_years,
            startup_mode,
            enable_metrics,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
