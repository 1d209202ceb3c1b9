//! Driven port for car persistence.
//!
//! Adapters own identity assignment and revision bookkeeping. Missing rows
//! are values (`None`, `false`) rather than errors, except where an update
//! targets an id that no longer exists.

use std::num::NonZeroU32;

use async_trait::async_trait;
use pagination::{PageRequest, total_pages};

use crate::domain::{Car, CarDetails, CarId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by car repository adapters.
    pub enum CarRepositoryError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "car repository connection failed: {message}",
        /// A statement failed during execution.
        Query { message: String } =>
            "car repository query failed: {message}",
        /// The car to update does not exist.
        NotFound { id: i32 } =>
            "car {id} does not exist",
        /// The stored revision moved on since the car was read.
        RevisionMismatch { expected: u32, actual: u32 } =>
            "revision mismatch: expected {expected}, found {actual}",
    }
}

/// Port for storing and retrieving cars.
///
/// # Revision semantics
///
/// - [`CarRepository::add`] stores revision 1.
/// - [`CarRepository::update`] writes only when the stored revision equals
///   `expected_revision`, then stores `expected_revision + 1`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Persist a new car, assigning its id.
    async fn add(&self, details: CarDetails) -> Result<Car, CarRepositoryError>;

    /// Fetch a car by id. `None` when absent.
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarRepositoryError>;

    /// Fetch one page of cars ordered by ascending id.
    async fn list_page(&self, request: PageRequest) -> Result<Vec<Car>, CarRepositoryError>;

    /// Number of stored cars.
    async fn count(&self) -> Result<u64, CarRepositoryError>;

    /// Replace every mutable field of `car`, keyed by its id.
    ///
    /// Returns the stored car carrying its new revision.
    async fn update(&self, car: Car, expected_revision: u32) -> Result<Car, CarRepositoryError>;

    /// Remove a car. Returns `false` when nothing was stored under `id`.
    async fn delete(&self, id: CarId) -> Result<bool, CarRepositoryError>;

    /// Pages needed to list every car `page_size` at a time.
    async fn total_pages(&self, page_size: NonZeroU32) -> Result<u64, CarRepositoryError> {
        Ok(total_pages(self.count().await?, page_size))
    }
}
