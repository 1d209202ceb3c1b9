//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod car_repository;
mod cars_command;
mod cars_query;
mod connection_tester;

#[cfg(test)]
pub use car_repository::MockCarRepository;
pub use car_repository::{CarRepository, CarRepositoryError};
#[cfg(test)]
pub use cars_command::MockCarsCommand;
pub use cars_command::CarsCommand;
#[cfg(test)]
pub use cars_query::MockCarsQuery;
pub use cars_query::CarsQuery;
#[cfg(test)]
pub use connection_tester::MockConnectionTester;
pub use connection_tester::{ConnectionTestError, ConnectionTester};
