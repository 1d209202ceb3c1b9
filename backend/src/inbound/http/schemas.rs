//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The resource changed since it was read.
    #[schema(rename = "conflict")]
    Conflict,
    /// A dependency is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "car 7 not found")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "8e0d3a6c-5b0e-4c57-8f5f-1c2d3e4f5a6b")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::PatchOperation`].
///
/// `value` is required by `add`, `replace` and `test`; `from` by `move` and
/// `copy`.
#[derive(ToSchema)]
#[schema(as = PatchOperation)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PatchOperationSchema {
    #[schema(example = "replace")]
    op: PatchOpSchema,
    /// JSON Pointer to `/cylinders`, `/make` or `/model`.
    #[schema(example = "/model")]
    path: String,
    #[schema(example = "Accord")]
    value: Option<serde_json::Value>,
    /// Source pointer for `move` and `copy`.
    from: Option<String>,
}

/// Operation names accepted in a patch document.
#[derive(ToSchema)]
#[schema(as = PatchOp)]
pub enum PatchOpSchema {
    #[schema(rename = "add")]
    Add,
    #[schema(rename = "remove")]
    Remove,
    #[schema(rename = "replace")]
    Replace,
    #[schema(rename = "move")]
    Move,
    #[schema(rename = "copy")]
    Copy,
    #[schema(rename = "test")]
    Test,
}
