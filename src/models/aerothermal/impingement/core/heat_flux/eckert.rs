//! Eckert reference-temperature method for a flat plate.
//!
//! Boundary-layer properties are evaluated at the reference temperature
//! `T* = T₂ + 0.5·(T_w − T₂) + 0.22·(T_aw − T₂)` and the Stanton number
//! follows from the skin friction by the Reynolds–Colburn analogy,
//! `St = (C_f/2)·Pr^(−2/3)`.

use uom::si::{
    f64::{HeatFluxDensity, MassDensity, ThermodynamicTemperature},
    dynamic_viscosity::pascal_second,
    heat_flux_density::watt_per_square_meter,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{
    models::aerothermal::impingement::core::{DeflectedEngine, DomainError},
    support::gas::ideal_gas_eos,
};

use super::{recovery_factor, wall_kelvin};

/// Turbulent flat-plate skin-friction law.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkinFrictionLaw {
    /// `C_f = 0.0592·Re^(−0.2)`
    #[default]
    PowerLaw,
    /// `C_f = 0.370·(log₁₀ Re)^(−2.584)`
    SchultzGrunow,
}

impl SkinFrictionLaw {
    /// Skin-friction coefficient at a Reynolds number.
    #[must_use]
    pub fn coefficient(self, reynolds: f64) -> f64 {
        match self {
            Self::PowerLaw => 0.0592 * reynolds.powf(-0.2),
            Self::SchultzGrunow => 0.370 * reynolds.log10().powf(-2.584),
        }
    }
}

/// Which skin-friction law the Eckert correlation uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkinFrictionPolicy {
    Fixed(SkinFrictionLaw),
    /// Picks a law by comparing the reference density `ρ*` to a threshold.
    DensityThreshold {
        threshold: MassDensity,
        below: SkinFrictionLaw,
        above: SkinFrictionLaw,
    },
}

impl Default for SkinFrictionPolicy {
    fn default() -> Self {
        Self::Fixed(SkinFrictionLaw::default())
    }
}

impl SkinFrictionPolicy {
    /// Selects the law for a reference density.
    #[must_use]
    pub fn law(&self, reference_density: MassDensity) -> SkinFrictionLaw {
        match *self {
            Self::Fixed(law) => law,
            Self::DensityThreshold {
                threshold,
                below,
                above,
            } => {
                if reference_density < threshold {
                    below
                } else {
                    above
                }
            }
        }
    }
}

/// Eckert flat-plate heat flux over the deflector's characteristic length.
///
/// # Errors
///
/// Returns a [`DomainError`] if the wall temperature is not strictly
/// positive.
pub fn eckert_heat_flux(
    engine: &DeflectedEngine,
    wall_temperature: ThermodynamicTemperature,
    policy: &SkinFrictionPolicy,
) -> Result<HeatFluxDensity, DomainError> {
    let wall = wall_kelvin(wall_temperature)?;
    let config = engine.expanded().engine();
    let gamma = config.gamma();
    let post = engine.post_shock();
    let prandtl = config.prandtl();

    let t2 = post.static_temperature.get::<kelvin>();
    let adiabatic_wall =
        t2 * (1.0 + recovery_factor(prandtl) * 0.5 * (gamma - 1.0) * post.mach.powi(2));
    let reference_temperature = t2 + 0.5 * (wall - t2) + 0.22 * (adiabatic_wall - t2);

    let reference_density = ideal_gas_eos::density(
        ThermodynamicTemperature::new::<kelvin>(reference_temperature),
        post.static_pressure,
        config.exhaust_gas_constant(),
    );
    let rho = reference_density.get::<kilogram_per_cubic_meter>();
    let velocity = post.velocity.get::<meter_per_second>();
    let length = engine.deflector().diameter().get::<meter>();
    let reynolds = rho * velocity * length / config.viscosity().get::<pascal_second>();

    let law = policy.law(reference_density);
    let stanton = 0.5 * law.coefficient(reynolds) * prandtl.powf(-2.0 / 3.0);
    let cp = config.specific_heat().get::<joule_per_kilogram_kelvin>();

    Ok(HeatFluxDensity::new::<watt_per_square_meter>(
        stanton * rho * velocity * cp * (adiabatic_wall - wall),
    ))
}
