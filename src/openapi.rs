use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// probe handlers.
///
/// # Endpoints
/// - Liveness: `GET /healthcheck/live`
/// - Readiness: `GET /healthcheck/ready`
///
/// # Schemas
/// - `HealthResponse`: probe payload
/// - `HealthStatus`: `UP` / `READY` / `NOT_READY`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::live,
        crate::routes::health::ready,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::health::HealthStatus
        )
    ),
    tags(
        (name = "Health Check", description = "Orchestrator liveness and readiness probes")
    ),
    info(
        description = "Health probes for the doctor service",
        title = "Doctor Service Health API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

/// Mounts Swagger UI at `/swagger-ui/` and the raw document at `/api-docs/openapi.json`.
pub fn configure_swagger(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};

    #[test]
    fn test_document_lists_both_probes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert!(doc["paths"]["/healthcheck/live"]["get"].is_object());
        assert!(doc["paths"]["/healthcheck/ready"]["get"].is_object());
        assert!(doc["paths"]["/healthcheck/ready"]["get"]["responses"]["503"].is_object());
        assert!(doc["components"]["schemas"]["HealthResponse"].is_object());
    }

    #[actix_web::test]
    async fn test_openapi_json_is_served() {
        let app = actix_test::init_service(App::new().configure(configure_swagger)).await;
        let req = actix_test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["info"]["title"], "Doctor Service Health API");
    }
}
