use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::compat::notifications::DEFAULT_NOTIFICATION_CAPACITY;

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("BOUNDARYSPACE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("BOUNDARYSPACE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("BOUNDARYSPACE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level =
            env::var("BOUNDARYSPACE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let notification_capacity = match env::var("BOUNDARYSPACE_NOTIFICATION_CAP") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidNotificationCap)?,
            Err(_) => DEFAULT_NOTIFICATION_CAPACITY,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engine: EngineConfig {
                notification_capacity,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Runtime knobs for the scoring/notification engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub notification_capacity: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidNotificationCap,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "BOUNDARYSPACE_PORT must be a valid u16"),
            ConfigError::InvalidNotificationCap => {
                write!(f, "BOUNDARYSPACE_NOTIFICATION_CAP must be a non-negative integer")
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "BOUNDARYSPACE_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNotificationCap => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
