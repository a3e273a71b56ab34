use std::{convert::Infallible, fmt::Debug};

use dht_sensor::{dht11, dht22, DhtError, DhtReading};
use embedded_hal::{
    blocking::delay::{DelayMs, DelayUs},
    digital::v2::{InputPin, OutputPin},
};
use rppal::{
    gpio::{self, Gpio, IoPin, Mode, PullUpDown},
    hal::Delay,
};
use thiserror::Error;

use crate::{config::SensorModel, models::sensor_error::SensorError};

/// This service separates talking to the sensor hardware from turning its
/// output into a `Reading`, so the conversion can be unit tested without a Pi.
pub trait DhtSensorService {
    /// Run one full transfer with the sensor and return the raw
    /// `(temperature degC, relative humidity %)` pair.
    fn read_raw(&mut self) -> Result<(f32, f32), SensorError>;
}

#[derive(Error, Debug)]
pub enum DhtServiceError {
    /// GPIO peripheral unavailable (not a Pi, no permission) or pin busy.
    #[error("Failed to open gpio pin.")]
    Gpio(#[from] gpio::Error),
}

/// A Pi GPIO line driven like an open-drain output.
///
/// The DHT data line idles high through a pull-up and both ends only ever
/// pull it low. Driving low switches the pin to output low; releasing it
/// switches back to input so the sensor can answer on the same wire.
pub struct OpenDrainPin {
    pin: IoPin,
}

impl OpenDrainPin {
    pub fn new(mut pin: IoPin) -> Self {
        pin.set_mode(Mode::Input);
        pin.set_pullupdown(PullUpDown::PullUp);
        Self { pin }
    }
}

impl InputPin for OpenDrainPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_high())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_low())
    }
}

impl OutputPin for OpenDrainPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        // Latch low before switching so the line never glitches high.
        self.pin.set_low();
        self.pin.set_mode(Mode::Output);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_mode(Mode::Input);
        Ok(())
    }
}

pub struct DhtSensorServiceActual {
    model: SensorModel,
    pin: OpenDrainPin,
    delay: Delay,
}

impl DhtSensorServiceActual {
    /// Claim `pin` on the Pi GPIO header for a sensor of the given model.
    pub fn new(gpio: &Gpio, pin: u8, model: SensorModel) -> Result<Self, DhtServiceError> {
        let io_pin = gpio.get(pin)?.into_io(Mode::Input);
        Ok(Self {
            model,
            pin: OpenDrainPin::new(io_pin),
            delay: Delay::new(),
        })
    }
}

impl DhtSensorService for DhtSensorServiceActual {
    /// Use the dht-sensor crate for the bit-level protocol. DHT11 frames
    /// carry whole numbers, DHT22 frames carry tenths.
    fn read_raw(&mut self) -> Result<(f32, f32), SensorError> {
        read_model(self.model, &mut self.delay, &mut self.pin)
    }
}

/// One transfer for `model` over any open-drain capable pin.
fn read_model<P, E>(
    model: SensorModel,
    delay: &mut (impl DelayMs<u8> + DelayUs<u8>),
    pin: &mut P,
) -> Result<(f32, f32), SensorError>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    E: Debug,
{
    let raw = match model {
        SensorModel::Dht11 => dht11::Reading::read(delay, pin)
            .map(|r| (f32::from(r.temperature), f32::from(r.relative_humidity))),
        SensorModel::Dht22 => dht22::Reading::read(delay, pin)
            .map(|r| (r.temperature, r.relative_humidity)),
    };
    raw.map_err(into_sensor_error)
}

/// Collapse driver errors into the poller's error type.
fn into_sensor_error<E: Debug>(e: DhtError<E>) -> SensorError {
    match e {
        DhtError::ChecksumMismatch => SensorError::Checksum,
        DhtError::Timeout => SensorError::Timeout,
        DhtError::PinError(e) => SensorError::Pin(format!("{:?}", e)),
    }
}
