use std::fmt::Display;

use thiserror::Error;

/// Relative humidity as a 0-100% value.
///
/// ```ignore
/// let humidity = Humidity::try_from(55.6f32).expect("Failed to get Humidity representation");
/// assert_eq!(f32::from(humidity), 55.6f32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Humidity {
    value: f32,
}

/// Represents errors in creating a `Humidity`.
#[derive(Error, Debug, PartialEq)]
pub enum HumidityError {
    /// NaN or infinite input, usually a sensor that produced nothing.
    #[error("Humidity is not a finite number")]
    NotFinite,

    /// Either negative or above 100%.
    #[error("Humidity outside of 0-100%")]
    OutOfRange,
}

impl TryFrom<f32> for Humidity {
    type Error = HumidityError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(HumidityError::NotFinite);
        }
        if !(0f32..=100f32).contains(&value) {
            return Err(HumidityError::OutOfRange);
        }
        Ok(Self { value })
    }
}

impl From<Humidity> for f32 {
    fn from(humidity: Humidity) -> Self {
        humidity.value
    }
}

impl Display for Humidity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1} %RH)", self.value)
    }
}
