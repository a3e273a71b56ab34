use thiserror::Error;

/// Anything that can go wrong during a single sensor read.
///
/// The display text is the description printed after `Reading failed: `.
/// The poller does not branch on the variant; every read failure is
/// reported and the next poll is attempted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensorError {
    /// The transferred bytes did not add up to the checksum byte.
    #[error("checksum error")]
    Checksum,

    /// The sensor did not answer or stopped toggling the line mid-frame.
    #[error("timeout")]
    Timeout,

    #[error("gpio pin error: {0}")]
    Pin(String),

    /// The driver produced no usable value (NaN or infinite).
    #[error("sensor returned no data")]
    NoData,

    /// A value came back but is outside what the sensor can report.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
