//! In-process adapters used when no database is configured.
//!
//! State lives for the lifetime of the process; restarting the server resets
//! the store to its seed contents.

mod car_repository;
mod connection_tester;

pub use car_repository::{InMemoryCarRepository, fixture_cars};
pub use connection_tester::InMemoryConnectionTester;
