pub mod config;
pub mod externals;
pub mod internals;
pub mod models;

use anyhow::Result;
use config::{PollerConfig, DHT_PIN, POLL_INTERVAL, SENSOR_MODEL};
use externals::{console::ConsoleModule, dht::DhtModule};
use internals::{interrupt::task_wait_for_interrupt, poller::task::task_poll_sensor};
use tokio::signal;
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{error, info, level_filters::LevelFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // NOTE: Logs go to stderr, stdout only carries readings.
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = PollerConfig::new(DHT_PIN, POLL_INTERVAL, SENSOR_MODEL)?;
    info!("Starting with {}.", config);

    let DhtModule { sensor_adapter } = DhtModule::initialize(&config)?;
    let ConsoleModule { report_adapter } = ConsoleModule::initialize();

    let tracker = TaskTracker::new();
    let token = CancellationToken::new();

    let token_clone = token.clone();
    let interval = config.interval;
    let poller = tracker.spawn(async move {
        let mut sensor = sensor_adapter;
        let mut report = report_adapter;
        let result =
            task_poll_sensor(token_clone.clone(), interval, &mut sensor, &mut report).await;
        // NOTE: Wake main up if the poller died on its own.
        token_clone.cancel();
        result
    });
    tracker.close();

    let interrupted = task_wait_for_interrupt(token.clone(), signal::ctrl_c()).await;

    tracker.wait().await;

    interrupted?;

    if let Err(e) = poller.await? {
        error!("Poller stopped. Error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
