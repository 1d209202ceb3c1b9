//! Car use cases behind the [`CarsQuery`] and [`CarsCommand`] ports.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{CarRepository, CarRepositoryError, CarsCommand, CarsQuery};
use crate::domain::{Car, CarDetails, CarId, Error, PatchDocument, PatchError};

/// Car service implementing the driving ports.
#[derive(Clone)]
pub struct CarsService<R> {
    repository: Arc<R>,
}

impl<R> CarsService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> CarsService<R>
where
    R: CarRepository,
{
    fn map_repository_error(error: CarRepositoryError) -> Error {
        match error {
            CarRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("car repository unavailable: {message}"))
            }
            CarRepositoryError::Query { message } => {
                Error::internal(format!("car repository error: {message}"))
            }
            CarRepositoryError::NotFound { id } => Self::car_not_found(CarId::new(id)),
            CarRepositoryError::RevisionMismatch { expected, actual } => {
                Error::conflict("car was modified concurrently").with_details(json!({
                    "expectedRevision": expected,
                    "actualRevision": actual,
                    "code": "revision_mismatch",
                }))
            }
        }
    }

    fn car_not_found(id: CarId) -> Error {
        Error::not_found(format!("car {id} not found")).with_details(json!({ "carId": id }))
    }

    fn invalid_patch(error: PatchError) -> Error {
        Error::invalid_request(error.to_string()).with_details(json!({
            "code": "invalid_patch",
            "operation": error.index(),
        }))
    }

    async fn fetch(&self, id: CarId) -> Result<Car, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::car_not_found(id))
    }

    async fn store(&self, current: Car, details: CarDetails) -> Result<Car, Error> {
        let expected_revision = current.revision();
        let updated = self
            .repository
            .update(current.with_details(details), expected_revision)
            .await
            .map_err(Self::map_repository_error)?;
        info!(car_id = %updated.id(), revision = updated.revision(), "car updated");
        Ok(updated)
    }
}

#[async_trait]
impl<R> CarsQuery for CarsService<R>
where
    R: CarRepository,
{
    async fn get_car(&self, id: CarId) -> Result<Car, Error> {
        self.fetch(id).await
    }

    async fn get_car_page(&self, request: PageRequest) -> Result<Page<Car>, Error> {
        let total_pages = self
            .repository
            .total_pages(request.page_size())
            .await
            .map_err(Self::map_repository_error)?;
        if request.is_past_end(total_pages) {
            debug!(page = request.page(), total_pages, "page past the end");
            return Err(
                Error::not_found(format!("page {} does not exist", request.page())).with_details(
                    json!({
                        "page": request.page(),
                        "count": request.count(),
                        "totalPages": total_pages,
                    }),
                ),
            );
        }

        let total_count = self
            .repository
            .count()
            .await
            .map_err(Self::map_repository_error)?;
        let items = if total_count == 0 {
            Vec::new()
        } else {
            self.repository
                .list_page(request)
                .await
                .map_err(Self::map_repository_error)?
        };
        Ok(Page::new(request, total_count, items))
    }
}

#[async_trait]
impl<R> CarsCommand for CarsService<R>
where
    R: CarRepository,
{
    async fn create_car(&self, details: CarDetails) -> Result<Car, Error> {
        let car = self
            .repository
            .add(details)
            .await
            .map_err(Self::map_repository_error)?;
        info!(car_id = %car.id(), "car created");
        Ok(car)
    }

    async fn replace_car(&self, id: CarId, details: CarDetails) -> Result<Car, Error> {
        let current = self.fetch(id).await?;
        self.store(current, details).await
    }

    async fn patch_car(&self, id: CarId, patch: PatchDocument) -> Result<Car, Error> {
        let current = self.fetch(id).await?;
        let patched = patch
            .apply(&(&current).into())
            .map_err(Self::invalid_patch)?;
        let details = CarDetails::try_from(patched)?;
        self.store(current, details).await
    }

    async fn delete_car(&self, id: CarId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        if !removed {
            return Err(Self::car_not_found(id));
        }
        info!(car_id = %id, "car deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
