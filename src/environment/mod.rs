pub mod air_properties;
pub mod gravity;
pub mod location;
