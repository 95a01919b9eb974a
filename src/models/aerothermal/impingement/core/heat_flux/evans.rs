//! Turbulent flat-plate boundary layer along the deflector.
//!
//! Uses the Colburn analogy at the post-shock state with the local Reynolds
//! number based on distance from the impingement point:
//!
//! ```text
//! Re_x = ρ₂·v₂·x/μ,   Nu_x = 0.0296·Re_x^0.8·Pr^(1/3),   h = k·Nu_x/x
//! ```

use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, Length, ThermodynamicTemperature},
    dynamic_viscosity::pascal_second,
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use crate::{
    models::aerothermal::impingement::core::{DeflectedEngine, DomainError},
    support::{gas::ideal_gas_eos, units::TemperatureDifference},
};

use super::wall_kelvin;

/// Local heat transfer coefficient at `distance` from the impingement point.
///
/// # Errors
///
/// Returns a [`DomainError`] if `distance` is not strictly positive.
pub fn evans_heat_transfer_coefficient(
    engine: &DeflectedEngine,
    distance: Length,
) -> Result<HeatTransfer, DomainError> {
    let x = DomainError::positive("boundary-layer distance", distance.get::<meter>())?;
    Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(
        BoundaryLayer::new(engine).coefficient(x),
    ))
}

/// Local heat flux `q = h·(T₂ − T_w)` at each distance.
///
/// The flux is signed: it is negative where the wall is hotter than the
/// post-shock gas.
///
/// # Errors
///
/// Returns a [`DomainError`] if the wall temperature or any distance is not
/// strictly positive.
pub fn evans_heat_flux(
    engine: &DeflectedEngine,
    distances: &[Length],
    wall_temperature: ThermodynamicTemperature,
) -> Result<Vec<HeatFluxDensity>, DomainError> {
    wall_kelvin(wall_temperature)?;
    let layer = BoundaryLayer::new(engine);
    let driving = engine
        .post_shock()
        .static_temperature
        .minus(wall_temperature)
        .get::<delta_kelvin>();

    distances
        .iter()
        .map(|distance| {
            let x = DomainError::positive("boundary-layer distance", distance.get::<meter>())?;
            Ok(HeatFluxDensity::new::<watt_per_square_meter>(
                layer.coefficient(x) * driving,
            ))
        })
        .collect()
}

/// Post-shock properties entering the correlation, in SI.
struct BoundaryLayer {
    mass_flux: f64,
    viscosity: f64,
    conductivity: f64,
    prandtl: f64,
}

impl BoundaryLayer {
    fn new(deflected: &DeflectedEngine) -> Self {
        let engine = deflected.expanded().engine();
        let post = deflected.post_shock();
        let density = ideal_gas_eos::density(
            post.static_temperature,
            post.static_pressure,
            engine.exhaust_gas_constant(),
        );
        Self {
            mass_flux: density.get::<kilogram_per_cubic_meter>()
                * post.velocity.get::<meter_per_second>(),
            viscosity: engine.viscosity().get::<pascal_second>(),
            conductivity: engine.thermal_conductivity().get::<watt_per_meter_kelvin>(),
            prandtl: engine.prandtl(),
        }
    }

    fn coefficient(&self, x: f64) -> f64 {
        let reynolds = self.mass_flux * x / self.viscosity;
        let nusselt = 0.0296 * reynolds.powf(0.8) * self.prandtl.cbrt();
        self.conductivity * nusselt / x
    }
}
