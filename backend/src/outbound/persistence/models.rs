//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::cars;

/// Row struct for reading from the cars table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CarRow {
    pub id: i32,
    pub cylinders: i16,
    pub make: String,
    pub model: String,
    pub revision: i32,
}

/// Insertable struct for creating new car records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cars)]
pub(crate) struct NewCarRow<'a> {
    pub cylinders: i16,
    pub make: &'a str,
    pub model: &'a str,
    pub revision: i32,
}

/// Changeset struct for replacing a car's mutable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cars)]
pub(crate) struct CarUpdate<'a> {
    pub cylinders: i16,
    pub make: &'a str,
    pub model: &'a str,
    pub revision: i32,
}
