use std::{future::Future, io};

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum InterruptError {
    /// The signal handler could not be installed, so nothing could ever stop
    /// the poller.
    #[error("Failed to listen for ctrl_c.")]
    Listen(#[source] io::Error),
}

/// Task: Wait until `interrupt` fires or something else cancels `token`.
/// The token is always cancelled on return so the poller stops.
#[tracing::instrument(skip_all)]
pub async fn task_wait_for_interrupt(
    token: CancellationToken,
    interrupt: impl Future<Output = io::Result<()>>,
) -> Result<(), InterruptError> {
    let result = tokio::select! {
        _ = token.cancelled() => Ok(()),
        res = interrupt => match res {
            Ok(()) => {
                info!("Interrupted.");
                Ok(())
            },
            Err(e) => {
                error!("Failed to listen for ctrl_c. Error: {}", e);
                Err(InterruptError::Listen(e))
            }
        },
    };
    token.cancel();
    result
}
