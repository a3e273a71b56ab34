use std::fmt::Display;

use thiserror::Error;

/// Lowest temperature the DHT family reports (DHT22 lower bound).
const MIN_CELSIUS: f32 = -40f32;

/// Highest temperature the DHT family reports (DHT22 upper bound).
const MAX_CELSIUS: f32 = 80f32;

/// Temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature {
    pub value: f32,
}

#[derive(Error, Debug, PartialEq)]
pub enum TemperatureError {
    #[error("Temperature is not a finite number")]
    NotFinite,

    #[error("Temperature too high")]
    TooHigh,

    #[error("Temperature too low")]
    TooLow,
}

impl TryFrom<f32> for Temperature {
    type Error = TemperatureError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(TemperatureError::NotFinite);
        }
        if value > MAX_CELSIUS {
            return Err(TemperatureError::TooHigh);
        }
        if value < MIN_CELSIUS {
            return Err(TemperatureError::TooLow);
        }
        Ok(Temperature { value })
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1} degC)", self.value)
    }
}
