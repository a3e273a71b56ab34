use std::fmt::Display;

use super::{
    humidity::{Humidity, HumidityError},
    sensor_error::SensorError,
    temperature::{Temperature, TemperatureError},
};

/// A single temperature + humidity sample. Created per poll and dropped
/// once it has been printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature: Temperature,
    pub humidity: Humidity,
}

impl Reading {
    /// Validate raw driver output into a `Reading`.
    /// A non-finite value on either channel means the sensor gave us nothing
    /// and maps to `SensorError::NoData`. Finite but impossible values map to
    /// `SensorError::InvalidData`.
    pub fn try_new(temperature_c: f32, humidity_percent: f32) -> Result<Self, SensorError> {
        let temperature = Temperature::try_from(temperature_c).map_err(|e| match e {
            TemperatureError::NotFinite => SensorError::NoData,
            e => SensorError::InvalidData(format!("{} ({})", e, temperature_c)),
        })?;
        let humidity = Humidity::try_from(humidity_percent).map_err(|e| match e {
            HumidityError::NotFinite => SensorError::NoData,
            e => SensorError::InvalidData(format!("{} ({})", e, humidity_percent)),
        })?;

        Ok(Self {
            temperature,
            humidity,
        })
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Temp: {:.1}C  Humidity: {:.1}%",
            self.temperature.value,
            f32::from(self.humidity)
        )
    }
}
