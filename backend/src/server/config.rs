//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use cars_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_fixture_cars: bool,
}

impl ServerConfig {
    /// Configuration for an in-memory server listening on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            seed_fixture_cars: false,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, cars are stored in PostgreSQL and `/status` probes the
    /// database; otherwise an in-memory store is used.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Seed the in-memory store with sample cars. Ignored with a database.
    #[must_use]
    pub fn with_fixture_cars(mut self, seed: bool) -> Self {
        self.seed_fixture_cars = seed;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
