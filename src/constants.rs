// Physical Constants (Earth, dry air)
pub const STANDARD_LAPSE_RATE: f64 = -0.0065; // K/m, troposphere average
pub const R_SPECIFIC_AIR: f64 = 287.05; // J/(kg·K)
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²
pub const ADIABATIC_INDEX_AIR: f64 = 1.4;
pub const ADIABATIC_INDEX_TIMES_R_AIR: f64 = ADIABATIC_INDEX_AIR * R_SPECIFIC_AIR;

pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Gas and gravity constants consumed by the atmosphere model. Immutable
/// once built; construct a non-default set to model another atmosphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub standard_lapse_rate: f64,
    pub r_specific_air: f64,
    pub standard_gravity: f64,
    pub adiabatic_index_times_r: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            standard_lapse_rate: STANDARD_LAPSE_RATE,
            r_specific_air: R_SPECIFIC_AIR,
            standard_gravity: STANDARD_GRAVITY,
            adiabatic_index_times_r: ADIABATIC_INDEX_TIMES_R_AIR,
        }
    }
}
