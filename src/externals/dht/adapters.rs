use tracing::trace;

use crate::{
    internals::poller::ports::SensorPort,
    models::{reading::Reading, sensor_error::SensorError},
};

use super::services::DhtSensorService;

pub struct DhtSensorAdapter<S: DhtSensorService> {
    service: S,
}

impl<S: DhtSensorService> DhtSensorAdapter<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

impl<S: DhtSensorService> SensorPort for DhtSensorAdapter<S> {
    fn read(&mut self) -> Result<Reading, SensorError> {
        let (temperature, humidity) = self.service.read_raw()?;
        trace!("Raw sensor values: {} degC, {} %RH", temperature, humidity);
        Reading::try_new(temperature, humidity)
    }
}
