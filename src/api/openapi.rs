//! OpenAPI documentation and schema generation
//!
//! Defines the OpenAPI specification for the userflow auth API using utoipa
//! for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the userflow auth API
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation (if enabled)
#[derive(OpenApi)]
#[openapi(
    info(
        title = "userflow auth API",
        version = "0.1.0",
        description = "Credential check and token issuance for the userflow user store",
        license(name = "MIT OR Apache-2.0")
    ),
    paths(
        crate::api::routes::login,
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        crate::api::routes::LoginRequest,
        crate::api::routes::LoginResponse,
    )),
    tags(
        (name = "auth", description = "Credential check and token issuance"),
        (name = "system", description = "Health and documentation")
    )
)]
pub struct ApiDoc;
