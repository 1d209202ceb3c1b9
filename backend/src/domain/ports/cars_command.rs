//! Driving port for changing cars.
//!
//! Inbound adapters validate request bodies into [`CarDetails`] before
//! calling in, so invalid input never reaches an implementation. Patch
//! documents are the exception: they are validated after application.

use async_trait::async_trait;

use crate::domain::{Car, CarDetails, CarId, Error, PatchDocument};

/// Write-side car use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarsCommand: Send + Sync {
    /// Store a new car and return it with its assigned id.
    async fn create_car(&self, details: CarDetails) -> Result<Car, Error>;

    /// Replace every mutable field of an existing car.
    async fn replace_car(&self, id: CarId, details: CarDetails) -> Result<Car, Error>;

    /// Apply a patch document to an existing car.
    async fn patch_car(&self, id: CarId, patch: PatchDocument) -> Result<Car, Error>;

    /// Remove a car.
    async fn delete_car(&self, id: CarId) -> Result<(), Error>;
}
