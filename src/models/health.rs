use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service name reported in every probe payload.
pub const SERVICE_NAME: &str = "doctor-service";

/// # Probe Status
///
/// Status tag carried in the `status` field of a [`HealthResponse`].
///
/// - `UP`: the process answers HTTP requests (liveness)
/// - `READY`: every readiness check passed
/// - `NOT_READY`: a readiness check failed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Up,
    Ready,
    NotReady,
}

/// # Health Status Response
///
/// Payload returned by the liveness and readiness probes. Built fresh for
/// every request, so `timestamp` is the time the probe was answered.
///
/// ## Fields
/// - `status`: one of `UP`, `READY`, `NOT_READY`
/// - `timestamp`: ISO 8601 timestamp with UTC offset
/// - `service`: always `doctor-service`
/// - `error`: failure message, only present on `NOT_READY`
///
/// ## Example JSON
/// ```json
/// {
///   "status": "NOT_READY",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "service": "doctor-service",
///   "error": "database unreachable"
/// }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn new(status: HealthStatus, error: Option<String>) -> Self {
        Self {
            status,
            timestamp: Local::now().to_rfc3339(),
            service: SERVICE_NAME.to_string(),
            error,
        }
    }

    pub fn up() -> Self {
        Self::new(HealthStatus::Up, None)
    }

    pub fn ready() -> Self {
        Self::new(HealthStatus::Ready, None)
    }

    pub fn not_ready(error: impl Into<String>) -> Self {
        Self::new(HealthStatus::NotReady, Some(error.into()))
    }
}
