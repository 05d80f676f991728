/// Acceleration due to gravity at a given latitude (degrees) and ground
/// elevation above sea level (meters), from the International Gravity
/// Formula 1980 with a free-air correction for elevation.
pub fn local_gravity(latitude: f64, elevation: f64) -> f64 {
    let phi = latitude.to_radians();
    let sin_sq = phi.sin().powi(2);

    // IGF80 coefficients for the Earth as an oblate spheroid
    let gamma_a = 9.780327; // m/s²
    let c1 = 0.0052790414;
    let c2 = 0.0000232718;
    let c3 = 0.0000001262;
    let c4 = 0.0000000007;

    let gamma_0 = gamma_a
        * (1.0 + c1 * sin_sq + c2 * sin_sq.powi(2) + c3 * sin_sq.powi(3) + c4 * sin_sq.powi(4));

    // Free-air correction coefficients
    let k1 = 3.15704e-07; // 1/m
    let k2 = 2.10269e-09; // 1/m
    let k3 = 7.37452e-14; // 1/m²

    gamma_0 * (1.0 - (k1 - k2 * sin_sq) * elevation + k3 * elevation.powi(2))
}
