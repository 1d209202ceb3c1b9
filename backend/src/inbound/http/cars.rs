//! Cars API handlers.
//!
//! ```text
//! GET    /cars?page=1&count=10
//! GET    /cars/{id}
//! POST   /cars            {"cylinders":6,"make":"Honda","model":"Civic"}
//! PUT    /cars/{id}       {"cylinders":6,"make":"Honda","model":"Accord"}
//! PATCH  /cars/{id}       [{"op":"replace","path":"/model","value":"Accord"}]
//! DELETE /cars/{id}
//! OPTIONS /cars, /cars/{id}
//! ```
//!
//! `HEAD` is served by the `GET` handlers; the server drops the body.

use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, delete, options, patch, post, put, route, web};
use pagination::{Page, PageLinks};
use tracing::warn;

use crate::domain::{CarDetails, CarId, PatchDocument};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cars_dto::{CarPageSchema, CarResponse, PageQuery, SaveCarRequest};
use crate::inbound::http::schemas::{ErrorSchema, PatchOperationSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_page_request;

/// Methods allowed on the collection resource.
pub const COLLECTION_ALLOW: &str = "GET,HEAD,OPTIONS,POST";
/// Methods allowed on an individual car.
pub const ITEM_ALLOW: &str = "DELETE,GET,HEAD,OPTIONS,PATCH,POST,PUT";

/// Header carrying the collection size on paged responses.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

fn location(id: CarId) -> String {
    format!("/cars/{id}")
}

fn link_header(req: &HttpRequest, page: &Page<CarResponse>) -> Option<HeaderValue> {
    let links = PageLinks::for_page(&req.full_url(), page)?;
    match HeaderValue::from_str(&links.to_header_value()) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(%error, "failed to encode Link header");
            None
        }
    }
}

/// List one page of cars.
#[utoipa::path(
    get,
    path = "/cars",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of cars", body = CarPageSchema, headers(
            ("Link" = String, description = "RFC 8288 navigation links"),
            ("X-Total-Count" = u64, description = "Number of cars across all pages")
        )),
        (status = 400, description = "Invalid page options", body = ErrorSchema),
        (status = 404, description = "Page past the end of the collection", body = ErrorSchema),
        (status = 503, description = "Repository unavailable", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "listCars"
)]
#[route("", method = "GET", method = "HEAD")]
pub async fn list_cars(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let PageQuery { page, count } = query.into_inner();
    let request = parse_page_request(page, count)?;
    let page = state
        .cars_query
        .get_car_page(request)
        .await?
        .map(CarResponse::from);

    let mut response = HttpResponse::Ok();
    response.insert_header((TOTAL_COUNT_HEADER, page.total_count()));
    if let Some(links) = link_header(&req, &page) {
        response.insert_header((header::LINK, links));
    }
    Ok(response.json(page))
}

/// Fetch one car.
#[utoipa::path(
    get,
    path = "/cars/{id}",
    params(("id" = i32, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car", body = CarResponse),
        (status = 404, description = "Unknown car", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "getCar"
)]
#[route("/{id}", method = "GET", method = "HEAD")]
pub async fn get_car(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<CarResponse>> {
    let car = state.cars_query.get_car(CarId::new(path.into_inner())).await?;
    Ok(web::Json(car.into()))
}

/// Create a car.
#[utoipa::path(
    post,
    path = "/cars",
    request_body = SaveCarRequest,
    responses(
        (status = 201, description = "Car created", body = CarResponse, headers(
            ("Location" = String, description = "URL of the new car")
        )),
        (status = 400, description = "Invalid car", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "createCar"
)]
#[post("")]
pub async fn create_car(
    state: web::Data<HttpState>,
    payload: web::Json<SaveCarRequest>,
) -> ApiResult<HttpResponse> {
    let details = CarDetails::try_from(payload.into_inner())?;
    let car = state.cars.create_car(details).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location(car.id())))
        .json(CarResponse::from(car)))
}

/// Replace every field of a car.
#[utoipa::path(
    put,
    path = "/cars/{id}",
    params(("id" = i32, Path, description = "Car identifier")),
    request_body = SaveCarRequest,
    responses(
        (status = 200, description = "Car replaced", body = CarResponse),
        (status = 400, description = "Invalid car", body = ErrorSchema),
        (status = 404, description = "Unknown car", body = ErrorSchema),
        (status = 409, description = "Car changed concurrently", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "replaceCar"
)]
#[put("/{id}")]
pub async fn replace_car(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<SaveCarRequest>,
) -> ApiResult<web::Json<CarResponse>> {
    let details = CarDetails::try_from(payload.into_inner())?;
    let car = state
        .cars
        .replace_car(CarId::new(path.into_inner()), details)
        .await?;
    Ok(web::Json(car.into()))
}

/// Apply a JSON Patch document to a car.
#[utoipa::path(
    patch,
    path = "/cars/{id}",
    params(("id" = i32, Path, description = "Car identifier")),
    request_body(content = [PatchOperationSchema], content_type = "application/json-patch+json"),
    responses(
        (status = 200, description = "Car patched", body = CarResponse),
        (status = 400, description = "Invalid patch or resulting car", body = ErrorSchema),
        (status = 404, description = "Unknown car", body = ErrorSchema),
        (status = 409, description = "Car changed concurrently", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "patchCar"
)]
#[patch("/{id}")]
pub async fn patch_car(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<PatchDocument>,
) -> ApiResult<web::Json<CarResponse>> {
    let car = state
        .cars
        .patch_car(CarId::new(path.into_inner()), payload.into_inner())
        .await?;
    Ok(web::Json(car.into()))
}

/// Delete a car.
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    params(("id" = i32, Path, description = "Car identifier")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 404, description = "Unknown car", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "deleteCar"
)]
#[delete("/{id}")]
pub async fn delete_car(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.cars.delete_car(CarId::new(path.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Methods supported by the collection.
#[utoipa::path(
    options,
    path = "/cars",
    responses((status = 200, description = "Allowed methods", headers(("Allow" = String)))),
    tags = ["cars"],
    operation_id = "carsOptions"
)]
#[options("")]
pub async fn cars_options() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ALLOW, COLLECTION_ALLOW))
        .finish()
}

/// Methods supported by an individual car.
#[utoipa::path(
    options,
    path = "/cars/{id}",
    params(("id" = i32, Path, description = "Car identifier")),
    responses((status = 200, description = "Allowed methods", headers(("Allow" = String)))),
    tags = ["cars"],
    operation_id = "carOptions"
)]
#[options("/{id}")]
pub async fn car_options() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ALLOW, ITEM_ALLOW))
        .finish()
}

/// Register the cars routes under `/cars`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use cars_backend::inbound::http::cars::cars_scope;
///
/// let app = App::new().service(cars_scope());
/// ```
#[must_use]
pub fn cars_scope() -> actix_web::Scope {
    web::scope("/cars")
        .service(list_cars)
        .service(create_car)
        .service(cars_options)
        .service(get_car)
        .service(replace_car)
        .service(patch_car)
        .service(delete_car)
        .service(car_options)
}

#[cfg(test)]
#[path = "cars_tests.rs"]
mod tests;
