//! Convective heat-flux correlations.
//!
//! - [`bartz_heat_flux`]: nozzle-proximal flux from the exit state.
//! - [`evans_heat_flux`]: turbulent flat-plate flux along the deflector,
//!   evaluated at the post-shock state.
//! - [`eckert_heat_flux`]: reference-temperature flat-plate flux over the
//!   whole deflector, with a configurable skin-friction law.
//!
//! Every correlation returns flux positive into the wall. The correlations
//! are independent; [`stitch()`](super::stitch()) reconciles them.

mod bartz;
mod eckert;
mod evans;

pub use bartz::{bartz_heat_flux, bartz_heat_transfer_coefficient};
pub use eckert::{SkinFrictionLaw, SkinFrictionPolicy, eckert_heat_flux};
pub use evans::{evans_heat_flux, evans_heat_transfer_coefficient};

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::DomainError;

/// Validates a wall temperature and returns it in kelvin.
fn wall_kelvin(wall_temperature: ThermodynamicTemperature) -> Result<f64, DomainError> {
    DomainError::positive("wall temperature", wall_temperature.get::<kelvin>())
}

/// Turbulent recovery factor `r = Pr^(1/3)`.
fn recovery_factor(prandtl: f64) -> f64 {
    prandtl.cbrt()
}
