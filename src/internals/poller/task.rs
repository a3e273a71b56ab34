use std::{io, time::Duration};

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::ports::{ReportPort, SensorPort};

#[derive(Error, Debug)]
pub enum PollerError {
    /// The output sink refused a line (closed pipe, full disk, ...).
    #[error("Failed to write report line.")]
    Report(#[source] io::Error),
}

/// Task: Waits `interval`, reads the sensor and reports the result, forever.
/// Read failures are reported and the next poll goes ahead as usual.
/// Only cancellation ends the loop cleanly; a broken sink ends it with an error.
#[tracing::instrument(skip_all)]
pub async fn task_poll_sensor(
    token: CancellationToken,
    interval: Duration,
    sensor: &mut impl SensorPort,
    report: &mut impl ReportPort,
) -> Result<(), PollerError> {
    info!("Started.");
    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                warn!("Cancelled.");
                return Ok(());
            },
            _ = tokio::time::sleep(interval) => {}
        };

        let line = business_logic(sensor);

        // The read blocks the runtime; let a pending interrupt land before
        // anything is written.
        tokio::task::yield_now().await;
        if token.is_cancelled() {
            warn!("Cancelled during read. Dropping result.");
            return Ok(());
        }

        report.emit(&line).map_err(PollerError::Report)?;
    }
}

/// Perform task business logic.
/// Read the sensor once and turn the outcome into an output line.
fn business_logic(sensor: &mut impl SensorPort) -> String {
    trace!("Executing business logic.");
    match sensor.read() {
        Ok(reading) => {
            debug!(
                "Got reading: {} {}",
                reading.temperature, reading.humidity
            );
            reading.to_string()
        }
        Err(e) => {
            warn!("Failed to read sensor. Error: {}", e);
            format!("Reading failed: {}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use tokio::time::Instant;

    use super::*;
    use crate::models::{reading::Reading, sensor_error::SensorError};

    const INTERVAL: Duration = Duration::from_secs(2);

    /// Plays back a fixed list of results, then cancels the token on the
    /// first read past the end.
    struct ScriptedSensor {
        script: VecDeque<Result<Reading, SensorError>>,
        token: CancellationToken,
        read_times: Vec<Instant>,
    }

    impl ScriptedSensor {
        fn new(token: CancellationToken, script: Vec<Result<Reading, SensorError>>) -> Self {
            Self {
                script: script.into(),
                token,
                read_times: vec![],
            }
        }
    }

    impl SensorPort for ScriptedSensor {
        fn read(&mut self) -> Result<Reading, SensorError> {
            self.read_times.push(Instant::now());
            match self.script.pop_front() {
                Some(result) => result,
                None => {
                    self.token.cancel();
                    Err(SensorError::Timeout)
                }
            }
        }
    }

    #[derive(Default)]
    struct CapturingReport {
        lines: Vec<String>,
    }

    impl ReportPort for CapturingReport {
        fn emit(&mut self, line: &str) -> io::Result<()> {
            self.lines.push(line.to_owned());
            Ok(())
        }
    }

    struct BrokenReport;

    impl ReportPort for BrokenReport {
        fn emit(&mut self, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }
    }

    fn reading(temperature: f32, humidity: f32) -> Result<Reading, SensorError> {
        Ok(Reading::try_new(temperature, humidity).expect("Failed to build reading"))
    }

    #[tokio::test(start_paused = true)]
    async fn test_reports_readings_and_failures() {
        let token = CancellationToken::new();
        let mut sensor = ScriptedSensor::new(
            token.clone(),
            vec![
                reading(21.4, 55.6),
                Err(SensorError::Checksum),
                Err(SensorError::NoData),
                reading(22.0, 40.0),
            ],
        );
        let mut report = CapturingReport::default();

        let result = task_poll_sensor(token, INTERVAL, &mut sensor, &mut report).await;

        assert!(result.is_ok());
        assert_eq!(
            report.lines,
            vec![
                "Temp: 21.4C  Humidity: 55.6%",
                "Reading failed: checksum error",
                "Reading failed: sensor returned no data",
                "Temp: 22.0C  Humidity: 40.0%",
            ]
        );
        // The fifth read cancelled the token and its result was dropped.
        assert_eq!(sensor.read_times.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_full_interval_before_each_read() {
        let token = CancellationToken::new();
        let mut sensor = ScriptedSensor::new(
            token.clone(),
            vec![
                Err(SensorError::Timeout),
                Err(SensorError::Checksum),
                reading(18.0, 60.0),
            ],
        );
        let mut report = CapturingReport::default();
        let start = Instant::now();

        task_poll_sensor(token, INTERVAL, &mut sensor, &mut report)
            .await
            .expect("Poller should stop cleanly");

        assert!(sensor.read_times[0] - start >= INTERVAL);
        for pair in sensor.read_times.windows(2) {
            assert!(pair[1] - pair[0] >= INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_first_read() {
        let token = CancellationToken::new();
        token.cancel();
        let mut sensor = ScriptedSensor::new(token.clone(), vec![reading(21.4, 55.6)]);
        let mut report = CapturingReport::default();

        let result = task_poll_sensor(token, INTERVAL, &mut sensor, &mut report).await;

        assert!(result.is_ok());
        assert!(sensor.read_times.is_empty());
        assert!(report.lines.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_wait_stops_without_output() {
        let token = CancellationToken::new();
        let mut sensor = ScriptedSensor::new(
            token.clone(),
            vec![
                reading(21.4, 55.6),
                reading(21.5, 55.0),
                reading(21.6, 54.0),
                reading(21.7, 53.0),
            ],
        );
        let mut report = CapturingReport::default();

        let cancel = async {
            tokio::time::sleep(INTERVAL * 2 + INTERVAL / 2).await;
            token.cancel();
        };
        let (result, _) = tokio::join!(
            task_poll_sensor(token.clone(), INTERVAL, &mut sensor, &mut report),
            cancel
        );

        assert!(result.is_ok());
        assert_eq!(sensor.read_times.len(), 2);
        assert_eq!(
            report.lines,
            vec!["Temp: 21.4C  Humidity: 55.6%", "Temp: 21.5C  Humidity: 55.0%"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_broken_report_ends_loop() {
        let token = CancellationToken::new();
        let mut sensor = ScriptedSensor::new(token.clone(), vec![reading(21.4, 55.6)]);
        let mut report = BrokenReport;

        let result = task_poll_sensor(token, INTERVAL, &mut sensor, &mut report).await;

        assert!(matches!(result, Err(PollerError::Report(_))));
        assert_eq!(sensor.read_times.len(), 1);
    }
}
