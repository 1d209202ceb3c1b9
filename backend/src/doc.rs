//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives. The document is served by Swagger UI in
//! debug builds and exported by the `openapi-dump` binary.

use crate::inbound::http::cars_dto::{CarPageSchema, CarResponse, SaveCarRequest};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, PatchOpSchema, PatchOperationSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cars API",
        description = "Create, list, update, patch and delete cars, plus a dependency status probe."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cars::list_cars,
        crate::inbound::http::cars::create_car,
        crate::inbound::http::cars::cars_options,
        crate::inbound::http::cars::get_car,
        crate::inbound::http::cars::replace_car,
        crate::inbound::http::cars::patch_car,
        crate::inbound::http::cars::delete_car,
        crate::inbound::http::cars::car_options,
        crate::inbound::http::status::status,
        crate::inbound::http::home::home,
    ),
    components(schemas(
        CarResponse,
        SaveCarRequest,
        CarPageSchema,
        PatchOperationSchema,
        PatchOpSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "cars", description = "Car resources"),
        (name = "status", description = "Dependency health"),
        (name = "docs", description = "API documentation")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("CarResponse", &["carId", "cylinders", "make", "model"])]
    #[case("CarPageSchema", &["page", "count", "totalCount", "totalPages", "items"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    fn item_path_documents_every_method() {
        let json = ApiDoc::openapi().to_json().expect("JSON");
        let doc: serde_json::Value = serde_json::from_str(&json).expect("parse");
        let item = &doc["paths"]["/cars/{id}"];
        for method in ["get", "put", "patch", "delete", "options"] {
            assert!(item.get(method).is_some(), "missing {method}");
        }
    }

    #[rstest]
    fn patch_body_uses_json_patch_media_type() {
        let json = ApiDoc::openapi().to_json().expect("JSON");
        assert!(json.contains("application/json-patch+json"));
    }
}
