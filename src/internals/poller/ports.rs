use std::io;

use crate::models::{reading::Reading, sensor_error::SensorError};

/// Anything that can hand the poller a fresh temperature/humidity sample.
/// Reads may block; the poller does not bound them.
pub trait SensorPort {
    fn read(&mut self) -> Result<Reading, SensorError>;
}

/// Destination for formatted output lines.
pub trait ReportPort {
    /// Write one line. The line is passed without a trailing newline.
    fn emit(&mut self, line: &str) -> io::Result<()>;
}
