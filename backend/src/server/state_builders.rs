//! Builders wiring repository adapters into HTTP state.

use std::sync::Arc;

use cars_backend::domain::ports::{CarRepository, ConnectionTester};
use cars_backend::domain::{CarsService, StatusService};
use cars_backend::inbound::http::state::HttpState;
use cars_backend::outbound::memory::{
    InMemoryCarRepository, InMemoryConnectionTester, fixture_cars,
};
use cars_backend::outbound::persistence::{DbPoolConnectionTester, DieselCarRepository};
use tracing::info;

use super::ServerConfig;

/// Share one service between the command and query ports.
fn state_over<R>(repository: R, tester: Arc<dyn ConnectionTester>) -> HttpState
where
    R: CarRepository + 'static,
{
    let service = Arc::new(CarsService::new(Arc::new(repository)));
    HttpState::new(
        service.clone(),
        service,
        Arc::new(StatusService::new(vec![tester])),
    )
}

fn in_memory_repository(seed: bool) -> InMemoryCarRepository {
    if seed {
        let cars = fixture_cars();
        info!(count = cars.len(), "seeding in-memory store with sample cars");
        InMemoryCarRepository::with_cars(cars)
    } else {
        InMemoryCarRepository::default()
    }
}

/// Build HTTP state from the configured storage backend.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!(storage = "postgres", "using database-backed car repository");
            state_over(
                DieselCarRepository::new(pool.clone()),
                Arc::new(DbPoolConnectionTester::new(pool.clone())),
            )
        }
        None => {
            info!(storage = "memory", "using in-memory car repository");
            state_over(
                in_memory_repository(config.seed_fixture_cars),
                Arc::new(InMemoryConnectionTester),
            )
        }
    }
}
