//! HTTP server configuration object.

use std::net::SocketAddr;

use stockroom::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) allowed_origin: Option<String>,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and an opened
    /// connection pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            allowed_origin: None,
        }
    }

    /// Allow a single cross-origin caller address.
    #[must_use]
    pub fn with_allowed_origin(mut self, origin: Option<String>) -> Self {
        self.allowed_origin = origin;
        self
    }
}
