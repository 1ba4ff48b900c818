//! Typed service configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

/// Environment variable holding the status artifact path.
pub const ENV_STATUS_FILE: &str = "STATUS_FILE";
/// Environment variable holding the listen port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable holding the listen address.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
/// Environment variable holding the default log level.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Environment variable selecting `json` or `pretty` log output.
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Artifact path used when `STATUS_FILE` is unset.
pub const DEFAULT_STATUS_FILE: &str = "superseedr_output_example.json";
/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;
/// Address used when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Level used when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Immutable configuration shared by the reader and the HTTP host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Path of the status artifact.
    pub status_file: PathBuf,
    /// Listen address.
    pub bind_addr: IpAddr,
    /// Listen port.
    pub port: u16,
    /// Default log level (`RUST_LOG` still takes precedence).
    pub log_level: String,
    /// Requested log format (`json` or `pretty`); `None` lets the build decide.
    pub log_format: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            status_file: PathBuf::from(DEFAULT_STATUS_FILE),
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: None,
        }
    }
}

impl ServiceConfig {
    /// Resolve configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unparseable value.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let status_file = read(ENV_STATUS_FILE).map_or(defaults.status_file, PathBuf::from);
        let port = read(ENV_PORT)
            .map(|value| parse_port(&value))
            .transpose()?
            .unwrap_or(defaults.port);
        let bind_addr = read(ENV_BIND_ADDR)
            .map(|value| {
                value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidField {
                    field: ENV_BIND_ADDR,
                    reason: "not_an_ip_address",
                    value: Some(value.clone()),
                })
            })
            .transpose()?
            .unwrap_or(defaults.bind_addr);
        let log_level = read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level);
        let log_format = read(ENV_LOG_FORMAT)
            .map(|value| parse_log_format(&value))
            .transpose()?;

        Ok(Self {
            status_file,
            bind_addr,
            port,
            log_level,
            log_format,
        })
    }

    /// Listen socket address.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(value: &str) -> ConfigResult<u16> {
    let port = value.parse::<u16>().map_err(|_| ConfigError::InvalidField {
        field: ENV_PORT,
        reason: "not_a_port_number",
        value: Some(value.to_string()),
    })?;
    if port == 0 {
        return Err(ConfigError::InvalidField {
            field: ENV_PORT,
            reason: "zero",
            value: Some(value.to_string()),
        });
    }
    Ok(port)
}

fn parse_log_format(value: &str) -> ConfigResult<String> {
    let normalized = value.to_ascii_lowercase();
    match normalized.as_str() {
        "json" | "pretty" => Ok(normalized),
        _ => Err(ConfigError::InvalidField {
            field: ENV_LOG_FORMAT,
            reason: "unsupported_format",
            value: Some(value.to_string()),
        }),
    }
}
