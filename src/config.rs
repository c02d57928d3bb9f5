//! Configuration loading and constants.
//!
//! The service has no configuration file. Everything it needs is read once from
//! the process environment at startup and is immutable afterwards:
//! `PORT` selects the listening port, `RUST_LOG` and `LOG_FORMAT` control logging.
//! `AppConfig` is the root configuration struct containing all settings.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::str::FromStr;

use const_format::formatcp;

// =============================================================================
// HTTP Listener
// =============================================================================

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 5005;

/// Listen on all interfaces so the service is reachable from outside a container
pub const BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Seconds to wait for in-flight connections to drain on shutdown
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

/// Logged at startup when the port falls back to the default
pub const DEFAULT_PORT_NOTICE: &str = formatcp!(
    "{} environment variable was not specified, defaulting to {}",
    ENV_PORT,
    DEFAULT_PORT
);

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_LOG_FILTER: &str = "RUST_LOG";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hello_probe=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// True when `PORT` was absent or empty and `DEFAULT_PORT` was used
    pub port_defaulted: bool,
}

impl HttpServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Startup notice to log when the port fell back to `DEFAULT_PORT`.
    pub fn default_port_notice(&self) -> Option<&'static str> {
        self.port_defaulted.then_some(DEFAULT_PORT_NOTICE)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directives
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format: human-readable text (default) or structured JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(read_env_var)
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let (port, port_defaulted) = match lookup(ENV_PORT) {
            Some(value) => (parse_port(&value)?, false),
            None => (DEFAULT_PORT, true),
        };

        let format = match lookup(ENV_LOG_FORMAT) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            http: HttpServerConfig {
                host: BIND_HOST,
                port,
                port_defaulted,
            },
            logging: LoggingConfig {
                filter: lookup(ENV_LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
                format,
            },
        })
    }
}

/// Read a variable from the process environment.
///
/// Only an absent variable yields `None`. A value that is not valid UTF-8 is
/// converted lossily so it is still validated instead of being ignored.
fn read_env_var(key: &str) -> Option<String> {
    std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidPort {
        value: value.to_string(),
        source,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid LOG_FORMAT value {0:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat(String),
}
