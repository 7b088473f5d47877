//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use habits_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) static_dir: PathBuf,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_demo_data: bool,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a configuration serving `static_dir` on `bind_addr` with
    /// the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr,
            static_dir: static_dir.into(),
            db_pool: None,
            seed_demo_data: false,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach a database connection pool; entries are then stored in
    /// PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Insert a week of demo entries at startup when the store is empty.
    #[must_use]
    pub fn with_demo_data(mut self, enabled: bool) -> Self {
        self.seed_demo_data = enabled;
        self
    }

    /// Socket address the HTTP server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Directory holding the landing page.
    #[must_use]
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
