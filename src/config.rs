use std::{fmt::Display, time::Duration};

use thiserror::Error;

/// BCM GPIO number the sensor data line is wired to.
pub const DHT_PIN: u8 = 4;

/// Delay between two read attempts. The DHT11 needs at least a second
/// between conversions.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Which sensor is wired to `DHT_PIN`.
pub const SENSOR_MODEL: SensorModel = SensorModel::Dht11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorModel {
    Dht11,
    Dht22,
}

impl Display for SensorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorModel::Dht11 => write!(f, "DHT11"),
            SensorModel::Dht22 => write!(f, "DHT22"),
        }
    }
}

/// Start-up configuration handed to the modules. Never changes after `main`
/// builds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    pub pin: u8,
    pub interval: Duration,
    pub model: SensorModel,
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Polling interval must be greater than zero.")]
    ZeroInterval,
}

impl PollerConfig {
    pub fn new(pin: u8, interval: Duration, model: SensorModel) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self {
            pin,
            interval,
            model,
        })
    }
}

impl Display for PollerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(PollerConfig: model={}, pin={}, interval={:?})",
            self.model, self.pin, self.interval
        )
    }
}
