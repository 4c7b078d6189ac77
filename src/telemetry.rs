use tracing::warn;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds the log filter. `RUST_LOG` wins when it parses; otherwise the
/// configured level is used and the parse error is handed back.
pub fn build_filter(rust_log: Option<&str>, default_level: &str) -> (EnvFilter, Option<ParseError>) {
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => (filter, None),
            Err(error) => (EnvFilter::new(default_level), Some(error)),
        },
        None => (EnvFilter::new(default_level), None),
    }
}

/// Installs the global tracing subscriber.
///
/// actix-web's `log` records (the access log from `middleware::Logger`) are
/// forwarded into the same subscriber. Fails if a global subscriber is
/// already set.
pub fn init(default_level: &str) -> Result<(), TryInitError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (filter, rejected) = build_filter(rust_log.as_deref(), default_level);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()?;

    if let Some(error) = rejected {
        warn!(
            rust_log = rust_log.as_deref().unwrap_or_default(),
            %error,
            fallback = default_level,
            "ignoring invalid RUST_LOG"
        );
    }
    Ok(())
}
