//! HTTP inbound adapter exposing REST endpoints.

pub mod cars;
pub mod cars_dto;
pub mod error;
pub mod home;
pub mod schemas;
pub mod state;
pub mod status;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register extractor configuration and every API route.
///
/// Extractor failures are mapped onto the shared error payload so clients
/// see the same 400 shape for malformed bodies, queries and paths. JSON
/// bodies are accepted as `application/json` or any `+json` type, which
/// covers `application/json-patch+json`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use cars_backend::domain::{CarsService, StatusService};
/// use cars_backend::inbound::http::{configure, state::HttpState};
/// use cars_backend::outbound::memory::InMemoryCarRepository;
///
/// let cars = Arc::new(CarsService::new(Arc::new(InMemoryCarRepository::default())));
/// let state = HttpState::new(cars.clone(), cars, Arc::new(StatusService::default()));
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(error::json_error_handler),
    )
    .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
    .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
    .service(home::home)
    .service(status::status)
    .service(cars::cars_scope());
}
