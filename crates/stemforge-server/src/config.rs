//! Startup configuration.
//!
//! Environment validation is an explicit call made once at startup and
//! returns a result object. Nothing here runs at import time or mutates
//! process-global state.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Environment variable naming the bind address.
pub const ENV_BIND: &str = "STEMFORGE_BIND";
/// Environment variable naming the listen port.
pub const ENV_PORT: &str = "STEMFORGE_PORT";

/// Default bind address.
pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
/// Default listen port.
pub const DEFAULT_PORT: u16 = 8787;

/// Resolved server configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Address the listener binds to.
    pub bind: IpAddr,
    /// Port the listener binds to.
    pub port: u16,
}

impl Config {
    /// The full socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<(Self, EnvReport), ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an injectable variable lookup.
    ///
    /// Unset variables fall back to defaults and are recorded in the
    /// report; set-but-invalid values are errors.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, EnvReport), ConfigError> {
        let mut report = EnvReport::default();

        let bind = match lookup(ENV_BIND) {
            Some(raw) => {
                report.present.push(ENV_BIND);
                raw.parse::<IpAddr>()
                    .map_err(|_| ConfigError::InvalidBind { value: raw })?
            }
            None => {
                report.defaulted.push(ENV_BIND);
                DEFAULT_BIND
            }
        };

        let port = match lookup(ENV_PORT) {
            Some(raw) => {
                report.present.push(ENV_PORT);
                raw.parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort { value: raw })?
            }
            None => {
                report.defaulted.push(ENV_PORT);
                DEFAULT_PORT
            }
        };

        Ok((Self { bind, port }, report))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            port: DEFAULT_PORT,
        }
    }
}

/// Which environment variables were set and which fell back to defaults.
#[derive(Debug, Clone, Default)]
pub struct EnvReport {
    /// Variables found in the environment.
    pub present: Vec<&'static str>,
    /// Variables that were unset; defaults were used.
    pub defaulted: Vec<&'static str>,
}

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `STEMFORGE_BIND` did not parse as an IP address.
    #[error("invalid STEMFORGE_BIND value '{value}': expected an IP address")]
    InvalidBind { value: String },

    /// `STEMFORGE_PORT` did not parse as a port number.
    #[error("invalid STEMFORGE_PORT value '{value}': expected a port number")]
    InvalidPort { value: String },
}
