//! PostgreSQL-backed `CarRepository` implementation using Diesel ORM.
//!
//! Updates are conditional on the stored revision, so two writers racing on
//! the same car cannot both succeed.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::ports::{CarRepository, CarRepositoryError};
use crate::domain::{Car, CarDetails, CarId, SaveCar};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CarRow, CarUpdate, NewCarRow};
use super::pool::{DbPool, PoolError};
use super::schema::cars;

/// Diesel-backed implementation of the `CarRepository` port.
#[derive(Clone)]
pub struct DieselCarRepository {
    pool: DbPool,
}

impl DieselCarRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CarRepositoryError {
    map_basic_pool_error(error, |message| CarRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> CarRepositoryError {
    map_basic_diesel_error(
        error,
        CarRepositoryError::query,
        CarRepositoryError::connection,
    )
}

fn revision_from_db(revision: i32) -> Result<u32, CarRepositoryError> {
    u32::try_from(revision)
        .map_err(|_| CarRepositoryError::query(format!("negative revision {revision} stored")))
}

fn revision_for_db(revision: u32) -> Result<i32, CarRepositoryError> {
    i32::try_from(revision)
        .map_err(|_| CarRepositoryError::query(format!("revision {revision} out of range")))
}

/// Convert a database row into a domain car, re-validating stored values.
fn row_to_car(row: CarRow) -> Result<Car, CarRepositoryError> {
    let CarRow {
        id,
        cylinders,
        make,
        model,
        revision,
    } = row;
    let revision = revision_from_db(revision)?;
    let details = CarDetails::try_from(SaveCar::new(i64::from(cylinders), make, model))
        .map_err(|err| CarRepositoryError::query(format!("car {id} is invalid: {err}")))?;
    Ok(Car::new(CarId::new(id), revision, details))
}

/// Explain why a conditional update touched no rows.
async fn update_failure<C>(conn: &mut C, id: CarId, expected_revision: u32) -> CarRepositoryError
where
    C: diesel_async::AsyncConnection<Backend = diesel::pg::Pg> + Send,
{
    let current = cars::table
        .find(id.get())
        .select(cars::revision)
        .first::<i32>(conn)
        .await
        .optional()
        .map_err(map_diesel_error);

    match current {
        Ok(Some(actual)) => match revision_from_db(actual) {
            Ok(actual) => CarRepositoryError::revision_mismatch(expected_revision, actual),
            Err(err) => err,
        },
        Ok(None) => CarRepositoryError::not_found(id.get()),
        Err(err) => err,
    }
}

#[async_trait]
impl CarRepository for DieselCarRepository {
    async fn add(&self, details: CarDetails) -> Result<Car, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewCarRow {
            cylinders: i16::from(details.cylinders()),
            make: details.make(),
            model: details.model(),
            revision: 1,
        };

        let row = diesel::insert_into(cars::table)
            .values(&new_row)
            .returning(CarRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_car(row)
    }

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CarRow> = cars::table
            .find(id.get())
            .select(CarRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_car).transpose()
    }

    async fn list_page(&self, request: PageRequest) -> Result<Vec<Car>, CarRepositoryError> {
        let offset = i64::try_from(request.offset())
            .map_err(|_| CarRepositoryError::query("page offset out of range"))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CarRow> = cars::table
            .order(cars::id.asc())
            .limit(i64::from(request.count()))
            .offset(offset)
            .select(CarRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_car).collect()
    }

    async fn count(&self) -> Result<u64, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = cars::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(total).map_err(|_| CarRepositoryError::query("negative row count"))
    }

    async fn update(&self, car: Car, expected_revision: u32) -> Result<Car, CarRepositoryError> {
        let expected = revision_for_db(expected_revision)?;
        let next = revision_for_db(expected_revision.saturating_add(1))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let details = car.details();
        let changes = CarUpdate {
            cylinders: i16::from(details.cylinders()),
            make: details.make(),
            model: details.model(),
            revision: next,
        };

        let row: Option<CarRow> = diesel::update(
            cars::table.filter(cars::id.eq(car.id().get()).and(cars::revision.eq(expected))),
        )
        .set(&changes)
        .returning(CarRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

        match row {
            Some(row) => row_to_car(row),
            None => Err(update_failure(&mut conn, car.id(), expected_revision).await),
        }
    }

    async fn delete(&self, id: CarId) -> Result<bool, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(cars::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
