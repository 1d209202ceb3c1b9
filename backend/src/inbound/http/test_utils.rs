//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

use crate::domain::{CarDetails, CarsService, SaveCar, StatusService};
use crate::domain::ports::CarRepository;
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryCarRepository;

/// Build HTTP state over an in-memory store holding `cars`.
pub async fn seeded_state(cars: &[(i64, &str, &str)]) -> HttpState {
    let repository = Arc::new(InMemoryCarRepository::default());
    for (cylinders, make, model) in cars {
        let details = CarDetails::try_from(SaveCar::new(*cylinders, *make, *model))
            .expect("seed car is valid");
        repository.add(details).await.expect("seed car stored");
    }
    let service = Arc::new(CarsService::new(repository));
    HttpState::new(service.clone(), service, Arc::new(StatusService::default()))
}

/// Initialise the full route set over `state`.
pub async fn init_app(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await
}
