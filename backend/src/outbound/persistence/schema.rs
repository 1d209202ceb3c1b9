//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Stored cars.
    ///
    /// `revision` starts at 1 and increments on every update.
    cars (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Cylinder count, constrained to 1..=20.
        cylinders -> Int2,
        make -> Varchar,
        model -> Varchar,
        /// Optimistic concurrency token.
        revision -> Int4,
    }
}
