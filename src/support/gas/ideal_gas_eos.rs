//! Ideal gas equation of state helpers.
//!
//! These functions implement `p = ρ·R·T` and the perfect-gas speed of sound
//! `a = sqrt(γ·R·T)`.

use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature, Velocity};

use crate::support::units::SpecificGasConstant;

/// Computes density using the ideal gas equation of state.
#[must_use]
pub(crate) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

/// Computes the perfect-gas speed of sound `a = sqrt(γ·R·T)`.
#[must_use]
pub(crate) fn speed_of_sound(
    gamma: f64,
    gas_constant: SpecificGasConstant,
    temperature: ThermodynamicTemperature,
) -> Velocity {
    (gas_constant * temperature * gamma).sqrt()
}
