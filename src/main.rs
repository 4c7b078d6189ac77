use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use doctor_service::config::Config;
use doctor_service::readiness::ReadinessProbe;
use doctor_service::{openapi, routes, telemetry};
use tracing::info;

/// Doctor Service Health Probe Entry Point
///
/// Boots the Actix-web HTTP server with:
/// - `GET /healthcheck/live` and `GET /healthcheck/ready`
/// - Swagger UI at `/swagger-ui/` unless `SWAGGER_UI=false`
/// - Environment configuration via `.env` file (see [`Config`])
///
/// No readiness checks are registered, so readiness follows liveness.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env().map_err(std::io::Error::other)?;
    telemetry::init(&config.log_level).map_err(std::io::Error::other)?;

    let probe = Data::new(ReadinessProbe::new());
    let swagger_ui = config.swagger_ui;

    info!(
        host = %config.host,
        port = config.port,
        readiness_checks = ?probe.check_names(),
        swagger_ui,
        "starting doctor-service"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(probe.clone())
            .configure(routes::configure)
            .configure(|cfg| {
                if swagger_ui {
                    openapi::configure_swagger(cfg);
                }
            })
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
