use crate::models::HealthResponse;
use crate::readiness::ReadinessProbe;
use actix_web::{HttpResponse, Responder, get, web};

/// # Liveness Probe
///
/// Answers whether the process can handle HTTP requests at all. Never fails.
///
/// ## Response
///
/// - **200 OK**: `{"status": "UP", "timestamp": "...", "service": "doctor-service"}`
#[utoipa::path(
    get,
    path = "/healthcheck/live",
    responses(
        (status = 200, description = "Process is alive", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/live")]
pub async fn live() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up())
}

/// # Readiness Probe
///
/// Runs the registered [`ReadinessProbe`] checks. With no probe registered in
/// app data, the service is ready as soon as it is live.
///
/// ## Responses
///
/// - **200 OK**: `{"status": "READY", ...}`
/// - **503 Service Unavailable**: `{"status": "NOT_READY", ..., "error": "<message>"}`
#[utoipa::path(
    get,
    path = "/healthcheck/ready",
    responses(
        (status = 200, description = "Service can take traffic", body = HealthResponse),
        (status = 503, description = "A readiness check failed", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/ready")]
pub async fn ready(probe: Option<web::Data<ReadinessProbe>>) -> impl Responder {
    let outcome = match probe {
        Some(probe) => probe.evaluate().await,
        None => Ok(()),
    };

    match outcome {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::ready()),
        Err(error) => {
            HttpResponse::ServiceUnavailable().json(HealthResponse::not_ready(error.to_string()))
        }
    }
}

/// # Route Configuration
///
/// - `GET /healthcheck/live`
/// - `GET /healthcheck/ready`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/healthcheck").service(live).service(ready));
}
