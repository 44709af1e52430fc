use std::future::Future;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};
use crate::error::{StoreError, StoreResult};

/// Extension points around every data access call made by a handler.
///
/// Implementations observe only; they cannot change the outcome of the call.
pub trait OperationHooks: Send + Sync {
    fn before(&self, operation: &'static str, detail: &str);
    fn after(&self, operation: &'static str, outcome: &str);
    fn failed(&self, operation: &'static str, error: &StoreError);
}

/// Emits a debug line at each extension point.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHooks;

impl OperationHooks for TracingHooks {
    fn before(&self, operation: &'static str, detail: &str) {
        tracing::debug!(operation, "{}", detail);
    }

    fn after(&self, operation: &'static str, outcome: &str) {
        tracing::debug!(operation, "{}", outcome);
    }

    fn failed(&self, operation: &'static str, error: &StoreError) {
        tracing::debug!(operation, kind = error.kind(), error = %error, "operation failed");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl OperationHooks for NoopHooks {
    fn before(&self, _operation: &'static str, _detail: &str) {}
    fn after(&self, _operation: &'static str, _outcome: &str) {}
    fn failed(&self, _operation: &'static str, _error: &StoreError) {}
}

pub fn hooks_for(debug: bool) -> Arc<dyn OperationHooks> {
    if debug {
        Arc::new(TracingHooks)
    } else {
        Arc::new(NoopHooks)
    }
}

/// Runs `call` between the `before` and `after`/`failed` hooks and returns its
/// result unchanged.
pub async fn observe<T, F, D>(
    hooks: &dyn OperationHooks,
    operation: &'static str,
    detail: &str,
    call: F,
    describe: D,
) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>>,
    D: FnOnce(&T) -> String,
{
    hooks.before(operation, detail);
    let result = call.await;
    match &result {
        Ok(value) => hooks.after(operation, &describe(value)),
        Err(err) => hooks.failed(operation, err),
    }
    result
}

pub fn init_tracing(config: &Config) {
    let default_directive = if config.debug {
        "info,user_service=debug,tower_http=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
