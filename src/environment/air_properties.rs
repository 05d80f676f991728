use crate::constants::PhysicalConstants;
use crate::errors::AtmosphereError;

// Dynamic viscosity of air, (temperature K, viscosity kg/(m·s)).
// Values from Cengel's property tables (Table A-9), temperatures
// converted to Kelvin. Sorted ascending; interpolation clamps outside.
const DYNAMIC_VISCOSITY_TABLE: [(f64, f64); 19] = [
    (173.15, 1.189e-6),
    (223.15, 1.474e-5),
    (233.15, 1.527e-5),
    (243.15, 1.579e-5),
    (253.15, 1.630e-5),
    (263.15, 1.680e-5),
    (273.15, 1.729e-5),
    (278.15, 1.754e-5),
    (283.15, 1.778e-5),
    (288.15, 1.802e-5),
    (293.15, 1.825e-5),
    (298.15, 1.849e-5),
    (303.15, 1.872e-5),
    (308.15, 1.895e-5),
    (313.15, 1.918e-5),
    (318.15, 1.941e-5),
    (323.15, 1.963e-5),
    (333.15, 2.008e-5),
    (343.15, 2.052e-5),
];

/// Temperature at `h` meters above the reference point, assuming a single
/// linear lapse rate (valid within the troposphere).
pub fn temperature_at_altitude(h: f64, reference_temp: f64, lapse_rate: f64) -> f64 {
    reference_temp + h * lapse_rate
}

/// Air pressure at `h` meters above the reference point, from the
/// barometric formula under a linear temperature profile.
///
/// Returns a `DomainError` once `h` is high enough that the linear model
/// predicts a negative absolute temperature; the formula would otherwise
/// produce NaN there.
pub fn pressure_at_altitude(
    h: f64,
    reference_temp: f64,
    reference_pressure: f64,
    lapse_rate: f64,
    gravity: f64,
    constants: &PhysicalConstants,
) -> Result<f64, AtmosphereError> {
    // temperature ratio T(h)/T0
    let base = 1.0 + h * lapse_rate / reference_temp;
    if base < 0.0 {
        return Err(AtmosphereError::DomainError(format!(
            "barometric formula invalid at {} m: linear temperature model predicts {} K",
            h,
            temperature_at_altitude(h, reference_temp, lapse_rate)
        )));
    }

    let exponent = -gravity / (constants.r_specific_air * lapse_rate);
    Ok(reference_pressure * base.powf(exponent))
}

/// Density of air from the ideal gas law.
pub fn air_density(
    pressure: f64,
    temp: f64,
    constants: &PhysicalConstants,
) -> Result<f64, AtmosphereError> {
    if temp <= 0.0 {
        return Err(AtmosphereError::InvalidParameter(format!(
            "air density requires a positive absolute temperature, got {} K",
            temp
        )));
    }
    Ok(pressure / (constants.r_specific_air * temp))
}

/// Density of air directly from temperature, using the multiplier and
/// exponent a `Location` derives at construction. Skips the pressure
/// evaluation and its second `powf` on every query; agrees with
/// `air_density(pressure_at_altitude(..), temperature_at_altitude(..))`
/// for the same location.
pub fn air_density_optimized(temp: f64, multiplier: f64, exponent: f64) -> f64 {
    multiplier * temp.powf(exponent)
}

/// Dynamic viscosity of air at `temp` Kelvin, linearly interpolated from
/// the lookup table. Temperatures outside the table clamp to the nearest
/// boundary value rather than extrapolating.
pub fn dynamic_viscosity(temp: f64) -> f64 {
    let table = &DYNAMIC_VISCOSITY_TABLE;
    let (t_min, visc_min) = table[0];
    let (t_max, visc_max) = table[table.len() - 1];

    if temp <= t_min {
        return visc_min;
    }
    if temp >= t_max {
        return visc_max;
    }

    let i = table.partition_point(|&(t, _)| t <= temp);
    let (t0, visc0) = table[i - 1];
    let (t1, visc1) = table[i];

    visc0 + (visc1 - visc0) * (temp - t0) / (t1 - t0)
}

/// Speed of sound in air at `temp` Kelvin. Negative absolute temperatures
/// are rejected rather than producing an imaginary result.
pub fn speed_of_sound(temp: f64, constants: &PhysicalConstants) -> Result<f64, AtmosphereError> {
    if temp < 0.0 {
        return Err(AtmosphereError::DomainError(format!(
            "speed of sound undefined for negative absolute temperature {} K",
            temp
        )));
    }
    Ok((constants.adiabatic_index_times_r * temp).sqrt())
}
