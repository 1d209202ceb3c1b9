//! Domain primitives, aggregates and use cases.
//!
//! Purpose: Define strongly typed car entities and the services that operate
//! on them, independent of HTTP and storage. Adapters reach this layer only
//! through the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload and stable codes.
//! - TraceId: request correlation identifier.
//! - Car, CarDetails, SaveCar, CarId: the car aggregate and its projections.
//! - PatchDocument: partial updates against [`SaveCar`].
//! - CarsService, StatusService: implementations of the driving ports.

pub mod cars;
pub mod error;
pub mod ports;
pub mod status;
pub mod trace_id;

pub use self::cars::{
    Car, CarDetails, CarId, CarValidationError, CarsService, MAX_CYLINDERS, MIN_CYLINDERS,
    PatchDocument, PatchError, PatchOperation, SaveCar,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::status::StatusService;
pub use self::trace_id::TraceId;

