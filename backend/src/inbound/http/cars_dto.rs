//! Request and response shapes for the cars endpoints.
//!
//! ```text
//! {"carId":1,"cylinders":6,"make":"Honda","model":"Civic"}
//! ```

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Car, CarDetails, Error, SaveCar};
use crate::inbound::http::validation::{FieldName, require};

/// Car as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    /// Server-assigned identifier.
    #[schema(example = 1)]
    pub car_id: i32,
    /// Number of cylinders, between 1 and 20.
    #[schema(example = 6, minimum = 1, maximum = 20)]
    pub cylinders: u8,
    #[schema(example = "Honda")]
    pub make: String,
    #[schema(example = "Civic")]
    pub model: String,
}

impl From<Car> for CarResponse {
    fn from(value: Car) -> Self {
        let id = value.id();
        let details = value.details();
        Self {
            car_id: id.get(),
            cylinders: details.cylinders(),
            make: details.make().to_owned(),
            model: details.model().to_owned(),
        }
    }
}

/// Body for `POST /cars` and `PUT /cars/{id}`.
///
/// Every field is required; absence is reported per field rather than as a
/// generic JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveCarRequest {
    #[schema(example = 6, minimum = 1, maximum = 20)]
    pub cylinders: Option<i64>,
    #[schema(example = "Honda")]
    pub make: Option<String>,
    #[schema(example = "Civic")]
    pub model: Option<String>,
}

impl SaveCarRequest {
    /// Request body carrying every field.
    pub fn new(cylinders: i64, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            cylinders: Some(cylinders),
            make: Some(make.into()),
            model: Some(model.into()),
        }
    }
}

impl TryFrom<SaveCarRequest> for CarDetails {
    type Error = Error;

    fn try_from(value: SaveCarRequest) -> Result<Self, Self::Error> {
        let save = SaveCar {
            cylinders: require(value.cylinders, FieldName::new("cylinders"))?,
            make: require(value.make, FieldName::new("make"))?,
            model: require(value.model, FieldName::new("model"))?,
        };
        Ok(CarDetails::try_from(save)?)
    }
}

/// Page options accepted by `GET /cars`.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number. Defaults to 1.
    #[param(minimum = 1, example = 1)]
    pub page: Option<i64>,
    /// Page size between 1 and 50. Defaults to 10.
    #[param(minimum = 1, maximum = 50, example = 10)]
    pub count: Option<i64>,
}

/// Page envelope as documented in the OpenAPI schema.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CarPageSchema {
    #[schema(example = 1)]
    page: u32,
    #[schema(example = 10)]
    count: u32,
    #[schema(example = 1)]
    total_count: u64,
    #[schema(example = 1)]
    total_pages: u64,
    has_previous_page: bool,
    has_next_page: bool,
    items: Vec<CarResponse>,
}
