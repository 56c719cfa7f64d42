//! Runtime settings loaded via OrthoConfig.
//!
//! Environment variables use the `STOCKROOM_` prefix, e.g.
//! `STOCKROOM_PORT`, `STOCKROOM_DATABASE_URL`, `STOCKROOM_ALLOWED_ORIGIN`.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values consumed at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOCKROOM")]
pub struct Settings {
    /// Port the HTTP server listens on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL connection string; required, startup fails without it.
    pub database_url: Option<String>,
    /// Single origin allowed to make cross-origin calls; omitted means no
    /// cross-origin callers are permitted.
    pub allowed_origin: Option<String>,
}

impl Settings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
