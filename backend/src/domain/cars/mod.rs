//! Car aggregate and its editable projection.
//!
//! Three shapes exist on purpose:
//!
//! - [`SaveCar`]: the unvalidated, editable projection (`cylinders`, `make`,
//!   `model`). Request bodies and patch documents operate on this shape.
//! - [`CarDetails`]: the validated field set. It can only be built through
//!   [`CarDetails::try_from`], so every stored car satisfies the invariants.
//! - [`Car`]: a stored car; details plus a server-assigned [`CarId`] and an
//!   optimistic-concurrency revision.
//!
//! Translation between them is total and side-effect free:
//!
//! ```
//! use cars_backend::domain::{Car, CarDetails, CarId, SaveCar};
//!
//! let save = SaveCar::new(6, "Honda", "Civic");
//! let details = CarDetails::try_from(save.clone()).expect("valid car");
//! let car = Car::new(CarId::new(1), 1, details);
//! assert_eq!(SaveCar::from(&car), save);
//! ```

mod patch;
mod service;

pub use patch::{PatchDocument, PatchError, PatchOperation};
pub use service::CarsService;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::Error;

/// Smallest accepted cylinder count.
pub const MIN_CYLINDERS: i64 = 1;
/// Largest accepted cylinder count.
pub const MAX_CYLINDERS: i64 = 20;

/// Server-assigned car identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(i32);

impl CarId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for CarId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a [`SaveCar`] projection is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarValidationError {
    #[error("cylinders must be between {MIN_CYLINDERS} and {MAX_CYLINDERS}")]
    CylindersOutOfRange { value: i64 },
    #[error("make must not be empty")]
    EmptyMake,
    #[error("model must not be empty")]
    EmptyModel,
}

impl CarValidationError {
    /// Wire name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::CylindersOutOfRange { .. } => "cylinders",
            Self::EmptyMake => "make",
            Self::EmptyModel => "model",
        }
    }

    /// Stable machine-readable validation code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CylindersOutOfRange { .. } => "cylinders_out_of_range",
            Self::EmptyMake => "empty_make",
            Self::EmptyModel => "empty_model",
        }
    }
}

impl From<CarValidationError> for Error {
    fn from(value: CarValidationError) -> Self {
        let details = match &value {
            CarValidationError::CylindersOutOfRange { value: cylinders } => json!({
                "field": value.field(),
                "code": value.code(),
                "value": cylinders,
                "min": MIN_CYLINDERS,
                "max": MAX_CYLINDERS,
            }),
            CarValidationError::EmptyMake | CarValidationError::EmptyModel => json!({
                "field": value.field(),
                "code": value.code(),
            }),
        };
        Error::invalid_request(value.to_string()).with_details(details)
    }
}

/// Editable projection of a car, as exchanged on create/replace and patched
/// by patch documents. Carries no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveCar {
    pub cylinders: i64,
    pub make: String,
    pub model: String,
}

impl SaveCar {
    /// Build a projection from its parts.
    pub fn new(cylinders: i64, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            cylinders,
            make: make.into(),
            model: model.into(),
        }
    }
}

/// Validated car fields.
///
/// ## Invariants
/// - `MIN_CYLINDERS <= cylinders <= MAX_CYLINDERS`
/// - `make` and `model` are non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDetails {
    cylinders: u8,
    make: String,
    model: String,
}

impl CarDetails {
    /// Number of cylinders.
    #[must_use]
    pub fn cylinders(&self) -> u8 {
        self.cylinders
    }

    /// Manufacturer name.
    #[must_use]
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TryFrom<SaveCar> for CarDetails {
    type Error = CarValidationError;

    fn try_from(value: SaveCar) -> Result<Self, Self::Error> {
        let SaveCar {
            cylinders,
            make,
            model,
        } = value;

        let cylinders = u8::try_from(cylinders)
            .ok()
            .filter(|n| (MIN_CYLINDERS..=MAX_CYLINDERS).contains(&i64::from(*n)))
            .ok_or(CarValidationError::CylindersOutOfRange { value: cylinders })?;
        if make.trim().is_empty() {
            return Err(CarValidationError::EmptyMake);
        }
        if model.trim().is_empty() {
            return Err(CarValidationError::EmptyModel);
        }

        Ok(Self {
            cylinders,
            make,
            model,
        })
    }
}

impl From<&CarDetails> for SaveCar {
    fn from(value: &CarDetails) -> Self {
        Self {
            cylinders: i64::from(value.cylinders),
            make: value.make.clone(),
            model: value.model.clone(),
        }
    }
}

/// A stored car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    id: CarId,
    revision: u32,
    details: CarDetails,
}

impl Car {
    /// Assemble a stored car. Repositories are the only expected callers.
    #[must_use]
    pub fn new(id: CarId, revision: u32, details: CarDetails) -> Self {
        Self {
            id,
            revision,
            details,
        }
    }

    /// Server-assigned identifier.
    #[must_use]
    pub fn id(&self) -> CarId {
        self.id
    }

    /// Revision the car was read at.
    #[must_use]
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Validated fields.
    #[must_use]
    pub fn details(&self) -> &CarDetails {
        &self.details
    }

    /// Replace every mutable field, keeping identity and revision.
    #[must_use]
    pub fn with_details(self, details: CarDetails) -> Self {
        Self { details, ..self }
    }
}

impl From<&Car> for SaveCar {
    fn from(value: &Car) -> Self {
        Self::from(value.details())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn details(cylinders: i64, make: &str, model: &str) -> Result<CarDetails, CarValidationError> {
        CarDetails::try_from(SaveCar::new(cylinders, make, model))
    }

    #[rstest]
    #[case(1)]
    #[case(6)]
    #[case(20)]
    fn accepts_cylinders_in_range(#[case] cylinders: i64) {
        let car = details(cylinders, "Honda", "Civic").expect("valid car");
        assert_eq!(i64::from(car.cylinders()), cylinders);
    }

    #[rstest]
    #[case(0)]
    #[case(21)]
    #[case(-4)]
    #[case(256)]
    #[case(i64::MAX)]
    fn rejects_cylinders_out_of_range(#[case] cylinders: i64) {
        let err = details(cylinders, "Honda", "Civic").expect_err("out of range");
        assert_eq!(err, CarValidationError::CylindersOutOfRange { value: cylinders });
        assert_eq!(err.field(), "cylinders");
    }

    #[rstest]
    #[case("", "Civic", CarValidationError::EmptyMake)]
    #[case("   ", "Civic", CarValidationError::EmptyMake)]
    #[case("Honda", "", CarValidationError::EmptyModel)]
    #[case("Honda", "\t", CarValidationError::EmptyModel)]
    fn rejects_blank_names(
        #[case] make: &str,
        #[case] model: &str,
        #[case] expected: CarValidationError,
    ) {
        assert_eq!(details(4, make, model), Err(expected));
    }

    #[rstest]
    fn validation_errors_become_invalid_requests() {
        let err = Error::from(CarValidationError::CylindersOutOfRange { value: 42 });
        assert_eq!(err.code(), crate::domain::ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({
                "field": "cylinders",
                "code": "cylinders_out_of_range",
                "value": 42,
                "min": 1,
                "max": 20,
            }))
        );
    }

    #[rstest]
    fn round_trip_preserves_fields() {
        let save = SaveCar::new(8, "Ford", "Mustang");
        let car = Car::new(
            CarId::new(3),
            2,
            CarDetails::try_from(save.clone()).expect("valid car"),
        );

        let projected = SaveCar::from(&car);
        assert_eq!(projected, save);

        let rebuilt = car
            .clone()
            .with_details(CarDetails::try_from(projected).expect("still valid"));
        assert_eq!(rebuilt, car);
    }

    #[rstest]
    fn with_details_keeps_identity_and_revision() {
        let car = Car::new(
            CarId::new(9),
            4,
            details(4, "Fiat", "Panda").expect("valid car"),
        );
        let replaced = car.with_details(details(12, "Ferrari", "F12").expect("valid car"));

        assert_eq!(replaced.id(), CarId::new(9));
        assert_eq!(replaced.revision(), 4);
        assert_eq!(replaced.details().make(), "Ferrari");
    }
}
