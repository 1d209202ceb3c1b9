//! Root redirect to the interactive API documentation.

use actix_web::{HttpResponse, get, http::header};

/// Location of the Swagger UI.
pub const DOCS_PATH: &str = "/docs/";

/// Redirect `/` to the API documentation.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 308, description = "Redirect to the API documentation")),
    tags = ["docs"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::PermanentRedirect()
        .insert_header((header::LOCATION, DOCS_PATH))
        .finish()
}
