use crate::gateway::error::{GatewayError, Result};
use crate::gateway::types::{Operation, PollPolicy};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Re-fetch `operation` by name until it reports `done`.
///
/// Sleeps `policy.interval` before every status check. Returns
/// `GatewayError::Cancelled` as soon as `cancel` fires and
/// `GatewayError::PollLimit` once `policy.max_attempts` checks came back
/// unfinished.
pub async fn poll_until_done<F, Fut>(
    mut operation: Operation,
    policy: &PollPolicy,
    cancel: &CancellationToken,
    mut refresh: F,
) -> Result<Operation>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Operation>>,
{
    let mut attempts: u32 = 0;

    while !operation.done {
        if let Some(max) = policy.max_attempts {
            if attempts >= max.get() {
                return Err(GatewayError::PollLimit { attempts });
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => return Err(GatewayError::Cancelled),
            _ = tokio::time::sleep(policy.interval) => {}
        }

        attempts += 1;
        debug!(operation = %operation.name, attempt = attempts, "Checking video operation");
        operation = refresh(operation.name.clone()).await?;
    }

    Ok(operation)
}
