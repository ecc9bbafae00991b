pub(crate) mod capacity;
pub use capacity::{Capacity, CapacityError};

pub(crate) mod config;
pub use config::{ConfigError, LayoutConfig, Orientation, PageSide};
