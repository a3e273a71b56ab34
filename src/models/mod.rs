pub mod humidity;
pub mod reading;
pub mod sensor_error;
pub mod temperature;
