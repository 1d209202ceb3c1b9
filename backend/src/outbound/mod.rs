//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local store used when no database is configured.
//! - **persistence**: PostgreSQL-backed repository using Diesel.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business rules.

pub mod memory;
pub mod persistence;
