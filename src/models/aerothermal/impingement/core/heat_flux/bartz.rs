//! Bartz correlation for nozzle-wall heat transfer.
//!
//! The published correlation is dimensional and is evaluated here in its
//! native US customary units: diameters in inches, pressure in psia,
//! viscosity in lbm/(in·s), specific heat in Btu/(lbm·°F) and characteristic
//! velocity in ft/s. The coefficient comes out in Btu/(in²·s·°F) and is
//! converted back to SI.

use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, ThermodynamicTemperature},
    dynamic_viscosity::pascal_second,
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::inch,
    pressure::psi,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::foot_per_second,
};

use crate::{
    models::aerothermal::impingement::core::{DomainError, ExpandedEngine},
    support::gas::isentropic,
};

use super::{recovery_factor, wall_kelvin};

/// Gravitational conversion constant, ft/s².
const GRAVITY: f64 = 32.174;

/// Pa·s to lbm/(in·s).
const VISCOSITY_TO_US: f64 = 0.0254 / 0.453_592_37;

/// J/(kg·K) to Btu/(lbm·°F).
const SPECIFIC_HEAT_TO_US: f64 = 1.0 / 4186.8;

/// Btu/(in²·s·°F) to W/(m²·K).
const COEFFICIENT_TO_SI: f64 = 1055.055_852_62 / (0.0254 * 0.0254 * 5.0 / 9.0);

/// Bartz heat transfer coefficient at the nozzle exit.
///
/// # Errors
///
/// Returns a [`DomainError`] if the wall temperature is not strictly
/// positive.
pub fn bartz_heat_transfer_coefficient(
    engine: &ExpandedEngine,
    wall_temperature: ThermodynamicTemperature,
) -> Result<HeatTransfer, DomainError> {
    let wall = wall_kelvin(wall_temperature)?;
    let config = engine.engine();
    let gamma = config.gamma();
    let mach = engine.exit().mach;

    let throat_diameter = config.throat_diameter();
    let throat_area = throat_diameter * throat_diameter * (std::f64::consts::PI / 4.0);
    let characteristic_velocity = config.chamber_pressure() * throat_area / config.mass_flow();

    let d_t = throat_diameter.get::<inch>();
    let p_c = config.chamber_pressure().get::<psi>();
    let c_star = characteristic_velocity.get::<foot_per_second>();
    let mu = config.viscosity().get::<pascal_second>() * VISCOSITY_TO_US;
    let cp = config.specific_heat().get::<joule_per_kilogram_kelvin>() * SPECIFIC_HEAT_TO_US;
    let prandtl = config.prandtl();

    let curvature = config
        .throat_curvature_radius()
        .map_or(1.0, |radius| (throat_diameter / radius).get::<ratio>().powf(0.1));

    let stagnation_ratio = isentropic::stagnation_temperature_ratio(mach, gamma);
    let t0 = config.chamber_temperature().get::<kelvin>();
    let sigma = 1.0
        / ((0.5 * (wall / t0) * stagnation_ratio + 0.5).powf(0.68)
            * stagnation_ratio.powf(0.12));

    let h = 0.026 / d_t.powf(0.2)
        * (mu.powf(0.2) * cp / prandtl.powf(0.6))
        * (p_c * GRAVITY / c_star).powf(0.8)
        * curvature
        * (1.0 / engine.area_ratio()).powf(0.9)
        * sigma;

    Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(
        h * COEFFICIENT_TO_SI,
    ))
}

/// Bartz heat flux at the nozzle exit, `q = h·(T_aw − T_w)`.
///
/// The adiabatic wall temperature uses the turbulent recovery factor
/// `r = Pr^(1/3)` at the exit Mach number.
///
/// # Errors
///
/// Returns a [`DomainError`] if the wall temperature is not strictly
/// positive.
pub fn bartz_heat_flux(
    engine: &ExpandedEngine,
    wall_temperature: ThermodynamicTemperature,
) -> Result<HeatFluxDensity, DomainError> {
    let h = bartz_heat_transfer_coefficient(engine, wall_temperature)?;
    let config = engine.engine();
    let gamma = config.gamma();
    let m_sq = engine.exit().mach.powi(2);

    let t0 = config.chamber_temperature().get::<kelvin>();
    let r = recovery_factor(config.prandtl());
    let adiabatic_wall = t0 * (1.0 + r * 0.5 * (gamma - 1.0) * m_sq)
        / isentropic::stagnation_temperature_ratio(engine.exit().mach, gamma);

    Ok(HeatFluxDensity::new::<watt_per_square_meter>(
        h.get::<watt_per_square_meter_kelvin>() * (adiabatic_wall - wall_temperature.get::<kelvin>()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::aerothermal::impingement::core::{
        Engine, Expansion, ExpansionConfig,
        test_support::{engine_config, expanded_engine, wall},
    };

    #[test]
    fn exit_flux_for_ambient_expansion() {
        let expanded = expanded_engine();

        let h = bartz_heat_transfer_coefficient(&expanded, wall()).unwrap();
        assert_relative_eq!(
            h.get::<watt_per_square_meter_kelvin>(),
            3219.133_28,
            max_relative = 1e-6
        );

        let q = bartz_heat_flux(&expanded, wall()).unwrap();
        assert_relative_eq!(
            q.get::<watt_per_square_meter>(),
            4_361_295.27,
            max_relative = 1e-6
        );
    }

    #[test]
    fn throat_curvature_scales_coefficient() {
        let mut config = engine_config();
        config.throat_curvature_radius = Some(config.throat_diameter * 2.0);
        let curved = Engine::new(config)
            .unwrap()
            .expand(
                Expansion::ExitPressure(expanded_engine().exit().static_pressure),
                &ExpansionConfig::default(),
            )
            .unwrap();

        let straight = bartz_heat_transfer_coefficient(&expanded_engine(), wall()).unwrap();
        let curved = bartz_heat_transfer_coefficient(&curved, wall()).unwrap();
        assert_relative_eq!(
            curved.get::<watt_per_square_meter_kelvin>(),
            straight.get::<watt_per_square_meter_kelvin>() * 0.5_f64.powf(0.1),
            max_relative = 1e-9
        );
    }

    #[test]
    fn hotter_wall_receives_less_flux() {
        let expanded = expanded_engine();
        let cold = bartz_heat_flux(&expanded, wall()).unwrap();
        let hot = bartz_heat_flux(&expanded, ThermodynamicTemperature::new::<kelvin>(900.0))
            .unwrap();
        assert!(hot < cold);
    }

    #[test]
    fn rejects_non_positive_wall_temperature() {
        let expanded = expanded_engine();
        assert!(
            bartz_heat_flux(&expanded, ThermodynamicTemperature::new::<kelvin>(0.0)).is_err()
        );
    }
}
