//! Driving port for reading cars.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Car, CarId, Error};

/// Read-side car use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarsQuery: Send + Sync {
    /// Fetch one car. Missing ids yield a `not_found` error.
    async fn get_car(&self, id: CarId) -> Result<Car, Error>;

    /// Fetch one page of cars.
    ///
    /// A page past the end of a non-empty collection yields `not_found`;
    /// any page of an empty collection is an empty page.
    async fn get_car_page(&self, request: PageRequest) -> Result<Page<Car>, Error>;
}
