use async_trait::async_trait;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Failure raised while evaluating readiness.
///
/// The `Display` output is the bare message, which is what the readiness
/// endpoint reports in the `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadinessError {
    #[error("{0}")]
    Failed(String),

    #[error("{0}")]
    Panicked(String),
}

impl ReadinessError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A single dependency that must be reachable before the service takes traffic.
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use doctor_service::readiness::{ReadinessCheck, ReadinessError, ReadinessProbe};
///
/// struct Database;
///
/// #[async_trait]
/// impl ReadinessCheck for Database {
///     fn name(&self) -> &'static str {
///         "database"
///     }
///
///     async fn check(&self) -> Result<(), ReadinessError> {
///         Ok(())
///     }
/// }
///
/// let probe = ReadinessProbe::new().with_check(Database);
/// ```
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReadinessCheck: Send + Sync {
    fn name(&self) -> &'static str;

    async fn check(&self) -> Result<(), ReadinessError>;
}

/// Ordered set of readiness checks shared across workers.
///
/// An empty probe is always ready.
#[derive(Clone, Default)]
pub struct ReadinessProbe {
    checks: Vec<Arc<dyn ReadinessCheck>>,
}

impl ReadinessProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(mut self, check: impl ReadinessCheck + 'static) -> Self {
        self.checks.push(Arc::new(check));
        self
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every check in registration order and returns the first failure.
    ///
    /// A check that panics is reported as [`ReadinessError::Panicked`] instead
    /// of tearing down the worker. Failures are returned, not logged.
    pub async fn evaluate(&self) -> Result<(), ReadinessError> {
        for check in &self.checks {
            let outcome = AssertUnwindSafe(async { check.check().await })
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| Err(ReadinessError::Panicked(panic_message(payload))));

            outcome?;
        }
        Ok(())
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast_ref::<&str>() {
            Some(message) => message.to_string(),
            None => "readiness check panicked".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn passing(name: &'static str) -> MockReadinessCheck {
        let mut check = MockReadinessCheck::new();
        check.expect_name().return_const(name);
        check.expect_check().times(1).returning(|| Ok(()));
        check
    }

    #[tokio::test]
    async fn test_empty_probe_is_ready() {
        let probe = ReadinessProbe::new();

        assert!(probe.is_empty());
        assert_eq!(probe.evaluate().await, Ok(()));
    }

    #[tokio::test]
    async fn test_all_checks_pass() {
        let probe = ReadinessProbe::new()
            .with_check(passing("database"))
            .with_check(passing("cache"));

        assert_eq!(probe.check_names(), vec!["database", "cache"]);
        assert_eq!(probe.evaluate().await, Ok(()));
    }

    #[tokio::test]
    async fn test_failure_message_is_preserved() {
        let mut failing = MockReadinessCheck::new();
        failing.expect_name().return_const("database");
        failing
            .expect_check()
            .returning(|| Err(ReadinessError::failed("connection refused")));

        let probe = ReadinessProbe::new().with_check(failing);
        let error = probe.evaluate().await.unwrap_err();

        assert_eq!(error, ReadinessError::Failed("connection refused".to_string()));
        assert_eq!(error.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn test_first_failure_short_circuits() {
        let mut failing = MockReadinessCheck::new();
        failing.expect_name().return_const("database");
        failing
            .expect_check()
            .times(1)
            .returning(|| Err(ReadinessError::failed("database down")));

        let mut never_run = MockReadinessCheck::new();
        never_run.expect_name().return_const("cache");
        never_run.expect_check().times(0);

        let probe = ReadinessProbe::new().with_check(failing).with_check(never_run);

        assert_eq!(
            probe.evaluate().await.unwrap_err().to_string(),
            "database down"
        );
    }

    struct PanickingCheck;

    #[async_trait]
    impl ReadinessCheck for PanickingCheck {
        fn name(&self) -> &'static str {
            "broker"
        }

        async fn check(&self) -> Result<(), ReadinessError> {
            panic!("broker handshake failed")
        }
    }

    #[tokio::test]
    async fn test_panicking_check_is_caught() {
        let probe = ReadinessProbe::new().with_check(PanickingCheck);
        let error = probe.evaluate().await.unwrap_err();

        assert_eq!(
            error,
            ReadinessError::Panicked("broker handshake failed".to_string())
        );
    }

    struct EventCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_failed_evaluation_emits_no_events() {
        let mut failing = MockReadinessCheck::new();
        failing.expect_name().return_const("db");
        failing
            .expect_check()
            .returning(|| Err(ReadinessError::failed("boom")));
        let failing_probe = ReadinessProbe::new().with_check(failing);
        let panicking_probe = ReadinessProbe::new().with_check(PanickingCheck);

        let events = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(EventCounter(events.clone()));
        let (failed, panicked) = tracing::subscriber::with_default(subscriber, || {
            (
                block_on(failing_probe.evaluate()),
                block_on(panicking_probe.evaluate()),
            )
        });

        assert_eq!(failed, Err(ReadinessError::failed("boom")));
        assert!(matches!(panicked, Err(ReadinessError::Panicked(_))));
        assert_eq!(events.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_panic_message_fallback() {
        assert_eq!(panic_message(Box::new("static")), "static");
        assert_eq!(panic_message(Box::new(String::from("owned"))), "owned");
        assert_eq!(panic_message(Box::new(42_u8)), "readiness check panicked");
    }
}
