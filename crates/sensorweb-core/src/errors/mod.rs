mod sensorweb_error;
mod time_error;

pub use sensorweb_error::{SensorwebError, SensorwebResult};
pub use time_error::TimeError;
