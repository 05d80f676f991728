use atmosphere_model::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let constants = PhysicalConstants::default();

    let sites = [
        ("Spaceport America Cup", Location::spaceport_america_cup(constants)?),
        ("Launch Canada", Location::launch_canada(constants)?),
    ];

    for (name, location) in &sites {
        println!("{name}");
        println!(
            "  ground: {:.2} K, {:.0} Pa, lapse {:.5} K/m, gravity {:.4} m/s²",
            location.ground_temperature,
            location.ground_pressure,
            location.lapse_rate,
            location.local_gravity
        );
        println!("  {:>8} {:>10} {:>12} {:>12} {:>10}", "AGL (m)", "T (K)", "p (Pa)", "ρ (kg/m³)", "a (m/s)");

        for altitude in (0..=10_000).step_by(1_000) {
            let h = altitude as f64;
            let temp = location.temperature_at(h);
            let pressure = location.pressure_at(h)?;
            let density = location.density_at(h);
            let sound = location.speed_of_sound_at(h)?;
            println!(
                "  {:>8.0} {:>10.2} {:>12.1} {:>12.5} {:>10.2}",
                h, temp, pressure, density, sound
            );
        }
        println!();
    }

    Ok(())
}
