//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool driven by
//! `diesel-async`.
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use cars_backend::outbound::persistence::{DbPool, DieselCarRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cars"))?;
//! let repository = DieselCarRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod connection_tester;
mod diesel_basic_error_mapping;
mod diesel_car_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use connection_tester::DbPoolConnectionTester;
pub use diesel_car_repository::DieselCarRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
