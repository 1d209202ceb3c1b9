//! `BTreeMap`-backed car repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use pagination::PageRequest;
use tokio::sync::RwLock;

use crate::domain::ports::{CarRepository, CarRepositoryError};
use crate::domain::{Car, CarDetails, CarId, SaveCar};

/// Sample cars loaded into a fresh in-memory store.
///
/// Entries that fail validation are skipped.
#[must_use]
pub fn fixture_cars() -> Vec<CarDetails> {
    [
        (6, "Honda", "Civic"),
        (8, "Ford", "Mustang"),
        (4, "Mazda", "MX-5"),
        (12, "Lamborghini", "Countach"),
    ]
    .into_iter()
    .filter_map(|(cylinders, make, model)| {
        CarDetails::try_from(SaveCar::new(cylinders, make, model)).ok()
    })
    .collect()
}

/// Car repository holding every car in memory.
///
/// Each operation takes the lock once, so operations are atomic with
/// respect to each other. Ids start at 1 and are never reused, even after
/// the car holding the highest id is deleted.
#[derive(Debug, Default)]
pub struct InMemoryCarRepository {
    store: RwLock<Store>,
}

#[derive(Debug, Default)]
struct Store {
    cars: BTreeMap<CarId, Car>,
    last_id: i32,
}

impl Store {
    fn allocate_id(&mut self) -> Result<CarId, CarRepositoryError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| CarRepositoryError::query("car id space exhausted"))?;
        self.last_id = next;
        Ok(CarId::new(next))
    }
}

impl InMemoryCarRepository {
    /// Build a store pre-populated with `details`, ids assigned in order.
    #[must_use]
    pub fn with_cars(details: impl IntoIterator<Item = CarDetails>) -> Self {
        let cars: BTreeMap<CarId, Car> = details
            .into_iter()
            .zip(1..)
            .map(|(details, id)| {
                let id = CarId::new(id);
                (id, Car::new(id, 1, details))
            })
            .collect();
        let last_id = cars.keys().next_back().map_or(0, |id| id.get());
        Self {
            store: RwLock::new(Store { cars, last_id }),
        }
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn add(&self, details: CarDetails) -> Result<Car, CarRepositoryError> {
        let mut store = self.store.write().await;
        let id = store.allocate_id()?;
        let car = Car::new(id, 1, details);
        store.cars.insert(id, car.clone());
        Ok(car)
    }

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarRepositoryError> {
        Ok(self.store.read().await.cars.get(&id).cloned())
    }

    async fn list_page(&self, request: PageRequest) -> Result<Vec<Car>, CarRepositoryError> {
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.count()).unwrap_or(usize::MAX);
        Ok(self
            .store
            .read()
            .await
            .cars
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, CarRepositoryError> {
        Ok(self.store.read().await.cars.len() as u64)
    }

    async fn update(&self, car: Car, expected_revision: u32) -> Result<Car, CarRepositoryError> {
        let mut store = self.store.write().await;
        let stored = store
            .cars
            .get_mut(&car.id())
            .ok_or_else(|| CarRepositoryError::not_found(car.id().get()))?;
        if stored.revision() != expected_revision {
            return Err(CarRepositoryError::revision_mismatch(
                expected_revision,
                stored.revision(),
            ));
        }
        let updated = Car::new(
            car.id(),
            expected_revision.saturating_add(1),
            car.details().clone(),
        );
        *stored = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: CarId) -> Result<bool, CarRepositoryError> {
        Ok(self.store.write().await.cars.remove(&id).is_some())
    }
}
