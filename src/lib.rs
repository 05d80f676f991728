pub mod aero;
pub mod constants;
pub mod environment;
pub mod errors;

pub use constants::*;
pub use errors::AtmosphereError;

pub use environment::air_properties::{
    air_density, air_density_optimized, dynamic_viscosity, pressure_at_altitude, speed_of_sound,
    temperature_at_altitude,
};
pub use environment::gravity::local_gravity;
pub use environment::location::{Location, LocationConfig};

// Re-export commonly used items from aero
pub use aero::properties::{dynamic_pressure, mach_number, reynolds_number};
