/// # Health Probe Payloads
///
/// Response body shared by `GET /healthcheck/live` and `GET /healthcheck/ready`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "service": "doctor-service"
/// }
/// ```
pub mod health;

pub use health::{HealthResponse, HealthStatus, SERVICE_NAME};
