//! Application settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `HABITS_*` environment variables over an
//! optional config file. Unset values fall back to the defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_MAX_CONNECTIONS;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8000;

/// Resolved against the working directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors raised when settings hold unusable values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid host '{host}': {message}")]
    InvalidHost { host: String, message: String },
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HABITS")]
pub struct AppSettings {
    /// Address to listen on.
    pub host: Option<String>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL URL. Entries are kept in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Directory holding `index.html`.
    pub static_dir: Option<PathBuf>,
    /// Seed a week of demo entries when the store is empty.
    #[ortho_config(default = false)]
    pub seed_demo_data: bool,
}

impl AppSettings {
    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref() {
            Some(host) => host
                .parse::<IpAddr>()
                .map_err(|err| SettingsError::InvalidHost {
                    host: host.to_owned(),
                    message: err.to_string(),
                })?,
            None => DEFAULT_HOST,
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Maximum pooled database connections.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Directory holding the landing page.
    pub fn static_dir(&self) -> PathBuf {
        self.static_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
    }
}
