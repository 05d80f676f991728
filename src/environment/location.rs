use crate::constants::{PhysicalConstants, CELSIUS_TO_KELVIN};
use crate::environment::air_properties::{
    air_density_optimized, pressure_at_altitude, speed_of_sound, temperature_at_altitude,
};
use crate::environment::gravity::local_gravity;
use crate::errors::AtmosphereError;

// Spaceport America Cup launch site.
// Lapse rate averaged from June radiosonde flights over the site; pressure
// and temperature from historical launch-day data at the pads.
const LAPSE_RATE_SAC: f64 = -0.00817; // K/m
const LAUNCHPAD_PRESSURE_SAC: f64 = 86_400.0; // Pa
const LAUNCHPAD_TEMP_SAC: f64 = 35.0; // °C
const LATITUDE_SAC: f64 = 32.99; // deg
const ELEVATION_SAC: f64 = 1_401.0; // m

// Launch Canada launch site (Camp Kenogaming weather history as proxy).
const LAUNCHPAD_PRESSURE_LC: f64 = 102_000.0; // Pa
const LAUNCHPAD_TEMP_LC: f64 = 20.0; // °C
const LATITUDE_LC: f64 = 47.987; // deg
const ELEVATION_LC: f64 = 364.0; // m

/// Site parameters beyond the required ground temperature and pressure.
/// The defaults are a mid-latitude site at sea level with the standard
/// lapse rate; specify all fields for accurate results.
#[derive(Debug, Clone, Copy)]
pub struct LocationConfig {
    /// Temperature lapse rate in K/m. Must be nonzero.
    pub lapse_rate: f64,
    /// Ground elevation above sea level in meters.
    pub elevation: f64,
    /// Latitude in degrees, in [-90, 90].
    pub latitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        LocationConfig {
            lapse_rate: crate::constants::STANDARD_LAPSE_RATE,
            elevation: 0.0,
            latitude: 40.0,
        }
    }
}

/// A launch site, bundling ground-level reference conditions with the
/// constants derived from them at construction. Immutable once built;
/// changing any ground condition means constructing a new `Location`.
#[derive(Debug, Clone)]
pub struct Location {
    pub ground_temperature: f64, // K
    pub ground_pressure: f64,    // Pa
    pub lapse_rate: f64,         // K/m
    pub elevation: f64,          // m
    pub latitude: f64,           // deg

    // Derived at construction, consumed on every altitude query.
    pub local_gravity: f64,
    pub density_multiplier: f64,
    pub density_exponent: f64,

    pub constants: PhysicalConstants,
}

impl Location {
    /// Build a location from ground temperature in Celsius, ground
    /// pressure in Pascals, and the remaining site parameters.
    ///
    /// Derives local gravity from latitude and elevation, then the
    /// multiplier and exponent that let `air_density_optimized` evaluate
    /// density from temperature alone.
    pub fn new(
        ground_temperature: f64,
        ground_pressure: f64,
        config: LocationConfig,
        constants: PhysicalConstants,
    ) -> Result<Self, AtmosphereError> {
        let ground_temperature_k = ground_temperature + CELSIUS_TO_KELVIN;

        if ground_temperature_k <= 0.0 {
            return Err(AtmosphereError::InvalidParameter(format!(
                "ground temperature must be above absolute zero, got {} K",
                ground_temperature_k
            )));
        }
        if ground_pressure <= 0.0 {
            return Err(AtmosphereError::InvalidParameter(format!(
                "ground pressure must be positive, got {} Pa",
                ground_pressure
            )));
        }
        if config.lapse_rate == 0.0 {
            return Err(AtmosphereError::InvalidParameter(
                "lapse rate must be nonzero".to_string(),
            ));
        }

        let local_gravity = local_gravity(config.latitude, config.elevation);

        let gravity_term = -local_gravity / (constants.r_specific_air * config.lapse_rate);
        let density_multiplier =
            ground_pressure / (constants.r_specific_air * ground_temperature_k.powf(gravity_term));
        let density_exponent = gravity_term - 1.0;

        Ok(Location {
            ground_temperature: ground_temperature_k,
            ground_pressure,
            lapse_rate: config.lapse_rate,
            elevation: config.elevation,
            latitude: config.latitude,
            local_gravity,
            density_multiplier,
            density_exponent,
            constants,
        })
    }

    /// Spaceport America Cup site configuration.
    pub fn spaceport_america_cup(constants: PhysicalConstants) -> Result<Self, AtmosphereError> {
        Location::new(
            LAUNCHPAD_TEMP_SAC,
            LAUNCHPAD_PRESSURE_SAC,
            LocationConfig {
                lapse_rate: LAPSE_RATE_SAC,
                elevation: ELEVATION_SAC,
                latitude: LATITUDE_SAC,
            },
            constants,
        )
    }

    /// Launch Canada site configuration.
    pub fn launch_canada(constants: PhysicalConstants) -> Result<Self, AtmosphereError> {
        Location::new(
            LAUNCHPAD_TEMP_LC,
            LAUNCHPAD_PRESSURE_LC,
            LocationConfig {
                lapse_rate: constants.standard_lapse_rate,
                elevation: ELEVATION_LC,
                latitude: LATITUDE_LC,
            },
            constants,
        )
    }

    /// Air temperature in Kelvin at `h` meters above ground level.
    pub fn temperature_at(&self, h: f64) -> f64 {
        temperature_at_altitude(h, self.ground_temperature, self.lapse_rate)
    }

    /// Air pressure in Pascals at `h` meters above ground level.
    pub fn pressure_at(&self, h: f64) -> Result<f64, AtmosphereError> {
        pressure_at_altitude(
            h,
            self.ground_temperature,
            self.ground_pressure,
            self.lapse_rate,
            self.local_gravity,
            &self.constants,
        )
    }

    /// Air density in kg/m³ at `h` meters above ground level, via the
    /// precomputed multiplier and exponent.
    pub fn density_at(&self, h: f64) -> f64 {
        air_density_optimized(
            self.temperature_at(h),
            self.density_multiplier,
            self.density_exponent,
        )
    }

    /// Speed of sound in m/s at `h` meters above ground level.
    pub fn speed_of_sound_at(&self, h: f64) -> Result<f64, AtmosphereError> {
        speed_of_sound(self.temperature_at(h), &self.constants)
    }
}
