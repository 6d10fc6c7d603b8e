use crate::people::domain::{EmploymentStatus, UnknownStatus};
use crate::people::roster::StatusFilter;
use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_OVER_ALLOCATION_THRESHOLD: f64 = 1.5;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the cockpit.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub dataset: DatasetConfig,
    pub analytics: AnalyticsConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = env::var("APP_DATASET")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let default_statuses = match env::var("APP_DEFAULT_STATUSES") {
            Ok(raw) if !raw.trim().is_empty() => parse_statuses(&raw)?,
            _ => StatusFilter::default(),
        };

        let over_allocation_threshold = match env::var("APP_OVER_ALLOCATION_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_OVER_ALLOCATION_THRESHOLD,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            dataset: DatasetConfig { path },
            analytics: AnalyticsConfig {
                default_statuses,
                over_allocation_threshold,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_statuses(raw: &str) -> Result<StatusFilter, ConfigError> {
    let statuses = raw
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| value.parse::<EmploymentStatus>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ConfigError::InvalidStatus { source })?;

    Ok(StatusFilter::new(statuses))
}

fn parse_threshold(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidThreshold {
            value: raw.to_string(),
        }),
    }
}

/// Where the people dataset is read from when the CLI is not told explicitly.
#[derive(Debug, Clone, Default)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
}

/// Defaults for roster selection and squad utilisation.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub default_statuses: StatusFilter,
    pub over_allocation_threshold: f64,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidThreshold { value: String },
    InvalidStatus { source: UnknownStatus },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { value } => write!(
                f,
                "APP_OVER_ALLOCATION_THRESHOLD must be a positive number (got '{}')",
                value
            ),
            ConfigError::InvalidStatus { source } => {
                write!(f, "APP_DEFAULT_STATUSES is invalid: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidThreshold { .. } => None,
            ConfigError::InvalidStatus { source } => Some(source),
        }
    }
}
