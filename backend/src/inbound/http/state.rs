//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::StatusService;
use crate::domain::ports::{CarsCommand, CarsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub cars: Arc<dyn CarsCommand>,
    pub cars_query: Arc<dyn CarsQuery>,
    pub status: Arc<StatusService>,
}

impl HttpState {
    /// Construct state from the car ports and the status checker.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cars_backend::domain::{CarsService, StatusService};
    /// use cars_backend::inbound::http::state::HttpState;
    /// use cars_backend::outbound::memory::InMemoryCarRepository;
    ///
    /// let service = Arc::new(CarsService::new(Arc::new(InMemoryCarRepository::default())));
    /// let state = HttpState::new(service.clone(), service, Arc::new(StatusService::default()));
    /// let _status = state.status.clone();
    /// ```
    pub fn new(
        cars: Arc<dyn CarsCommand>,
        cars_query: Arc<dyn CarsQuery>,
        status: Arc<StatusService>,
    ) -> Self {
        Self {
            cars,
            cars_query,
            status,
        }
    }
}
