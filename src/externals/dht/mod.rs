use rppal::gpio::Gpio;
use tracing::info;

use crate::config::PollerConfig;

use self::{
    adapters::DhtSensorAdapter,
    services::{DhtSensorServiceActual, DhtServiceError},
};

pub mod adapters;
pub mod services;

pub struct DhtModule {
    pub sensor_adapter: DhtSensorAdapter<DhtSensorServiceActual>,
}

impl DhtModule {
    pub fn initialize(config: &PollerConfig) -> Result<Self, DhtServiceError> {
        let gpio = Gpio::new()?;
        let service = DhtSensorServiceActual::new(&gpio, config.pin, config.model)?;
        info!("Opened {} on gpio {}.", config.model, config.pin);

        Ok(Self {
            sensor_adapter: DhtSensorAdapter::new(service),
        })
    }
}
