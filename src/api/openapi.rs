//! OpenAPI document rendered by the Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::api::dto::hello::HelloResponse;
use crate::api::dto::token::{
    TokenObtainRequest, TokenPairResponse, TokenRefreshRequest, TokenRefreshResponse,
    TokenVerifyRequest, TokenVerifyResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "API Console", description = "Token endpoints and authenticated API"),
    paths(
        crate::api::handlers::token::token_obtain_handler,
        crate::api::handlers::token::token_refresh_handler,
        crate::api::handlers::token::token_verify_handler,
        crate::api::handlers::hello::hello_handler,
        crate::api::handlers::health::health_handler,
    ),
    components(schemas(
        TokenObtainRequest,
        TokenPairResponse,
        TokenRefreshRequest,
        TokenRefreshResponse,
        TokenVerifyRequest,
        TokenVerifyResponse,
        HelloResponse,
        HealthResponse,
        HealthChecks,
        CheckStatus,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "JWT issuance and validation"),
        (name = "api", description = "Authenticated endpoints"),
        (name = "system", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;

/// Registers the `jwt` bearer scheme referenced by protected paths.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_endpoints() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        for path in [
            "/api/token/",
            "/api/token/refresh/",
            "/api/token/verify/",
            "/api/hello/",
            "/health",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_document_has_bearer_scheme() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert_eq!(
            doc["components"]["securitySchemes"]["jwt"]["scheme"],
            "bearer"
        );
    }
}
