use actix_web::web;

/// # Health Probe Endpoints
///
/// Liveness and readiness probes for the orchestration layer.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789+00:00",
///   "service": "doctor-service"
/// }
/// ```
pub mod health;


/// # API Route Configuration
///
/// Probes are mounted at the root, outside any versioned prefix, so that
/// orchestrator probe paths stay stable.
///
/// ```text
/// GET /healthcheck/live  - Liveness probe
/// GET /healthcheck/ready - Readiness probe
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
}
