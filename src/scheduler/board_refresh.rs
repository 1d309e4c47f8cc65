//! Periodic votemap board refresh job.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::api::votemap::VotemapStatusSource;
use crate::error::AppError;
use crate::service::votemap_board::gateway::BoardMessenger;
use crate::service::votemap_board::VotemapBoardService;

/// Starts the votemap board refresh scheduler.
///
/// Runs one refresh cycle on a fixed period. Cycles are never overlapped: a
/// tick that finds the previous refresh still holding the service lock logs
/// and skips, leaving the retry to the next tick. Refresh errors are logged
/// and never stop the scheduler.
///
/// # Arguments
/// - `service` - The board service, shared with nothing else once scheduled
/// - `interval` - Time between refresh cycles
///
/// # Returns
/// - `Ok(())` - Scheduler started
/// - `Err(AppError)` - The refresh job could not be created or started
pub async fn start_scheduler<S, M>(
    service: Arc<Mutex<VotemapBoardService<S, M>>>,
    interval: Duration,
) -> Result<(), AppError>
where
    S: VotemapStatusSource + 'static,
    M: BoardMessenger + 'static,
{
    let scheduler = JobScheduler::new().await?;

    let job_service = service.clone();

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let service = job_service.clone();

        Box::pin(async move {
            // In-flight guard: skip the tick instead of overlapping a slow cycle
            match service.try_lock() {
                Ok(mut board) => {
                    if let Err(e) = board.refresh().await {
                        tracing::error!("Error updating votemap board: {}", e);
                    }
                }
                Err(_) => {
                    tracing::warn!("Previous votemap refresh still running, skipping tick");
                }
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Votemap board refresh scheduler started (every {}s)",
        interval.as_secs()
    );

    Ok(())
}
