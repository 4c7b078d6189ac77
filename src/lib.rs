pub mod config;
pub mod models;
pub mod openapi;
pub mod readiness;
pub mod routes;
pub mod telemetry;
