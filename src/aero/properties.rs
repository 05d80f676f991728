use crate::errors::AtmosphereError;

/// Dynamic pressure on a solid moving through a fluid.
pub fn dynamic_pressure(fluid_density: f64, speed: f64) -> f64 {
    0.5 * fluid_density * speed.powi(2)
}

/// Mach number of a solid moving through a fluid.
pub fn mach_number(speed: f64, speed_of_sound: f64) -> Result<f64, AtmosphereError> {
    if speed_of_sound == 0.0 {
        return Err(AtmosphereError::InvalidParameter(
            "Mach number undefined for zero speed of sound".to_string(),
        ));
    }
    Ok(speed / speed_of_sound)
}

/// Reynolds number of a solid moving through a fluid.
pub fn reynolds_number(
    fluid_density: f64,
    speed: f64,
    len_characteristic: f64,
    dynamic_viscosity: f64,
) -> Result<f64, AtmosphereError> {
    if dynamic_viscosity == 0.0 {
        return Err(AtmosphereError::InvalidParameter(
            "Reynolds number undefined for zero viscosity".to_string(),
        ));
    }
    Ok(fluid_density * speed * len_characteristic / dynamic_viscosity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_dynamic_pressure() {
        assert_relative_eq!(dynamic_pressure(1.225, 100.0), 6_125.0, epsilon = EPSILON);
        assert_relative_eq!(dynamic_pressure(1.225, 0.0), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_mach_number_is_speed_ratio() {
        assert_relative_eq!(
            mach_number(340.3, 340.3).unwrap(),
            1.0,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            mach_number(170.15, 340.3).unwrap(),
            0.5,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_mach_number_zero_speed_of_sound_is_invalid() {
        assert!(matches!(
            mach_number(100.0, 0.0),
            Err(AtmosphereError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_reynolds_number() {
        let re = reynolds_number(1.225, 100.0, 0.5, 1.802e-5).unwrap();
        assert_relative_eq!(re, 1.225 * 100.0 * 0.5 / 1.802e-5, epsilon = EPSILON);
    }

    #[test]
    fn test_reynolds_number_zero_viscosity_is_invalid() {
        assert!(matches!(
            reynolds_number(1.225, 100.0, 0.5, 0.0),
            Err(AtmosphereError::InvalidParameter(_))
        ));
    }
}
