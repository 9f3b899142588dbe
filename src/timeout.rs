//! Timeout utilities for bounding the symbol dump subprocess.
//!
//! The dumper is an external program; a hung dumper would otherwise hang the
//! whole run. Operations are wrapped in a tokio timeout on a current-thread
//! runtime so callers stay synchronous.

use crate::error::{Result, SymaddrError};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error};

/// Default timeout duration in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 300; // 5 minutes

/// Timeout configuration for a bounded operation
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Maximum duration for the operation; `None` waits forever
    pub duration: Option<Duration>,
    /// Operation name for logging
    pub operation_name: String,
}

impl TimeoutConfig {
    /// Create a new timeout configuration. Zero seconds disables the limit.
    pub fn new(seconds: u64, operation: impl Into<String>) -> Self {
        Self {
            duration: (seconds > 0).then(|| Duration::from_secs(seconds)),
            operation_name: operation.into(),
        }
    }
}

/// Execute an async operation with a timeout
pub async fn with_timeout<T, F>(config: TimeoutConfig, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let Some(duration) = config.duration else {
        debug!("Starting operation '{}' without timeout", config.operation_name);
        return future.await;
    };

    debug!(
        "Starting operation '{}' with timeout of {}s",
        config.operation_name,
        duration.as_secs()
    );

    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => {
            error!(
                "Operation '{}' timed out after {}s",
                config.operation_name,
                duration.as_secs()
            );
            Err(SymaddrError::Timeout {
                seconds: duration.as_secs(),
            })
        }
    }
}

/// Run a future to completion on a fresh current-thread runtime.
pub fn block_on<T, F>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}
