//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities at its API boundaries.
//! This module provides the pieces that [`uom`] does not include.
//!
//! ## Gas constants
//!
//! [`SpecificGasConstant`] shares its dimension with specific heat capacity,
//! so it is constructed with specific heat capacity units. The
//! [`UNIVERSAL_GAS_CONSTANT`] converts molecular weights into specific gas
//! constants.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_plume::support::units::TemperatureDifference;
//!
//! let t_gas = ThermodynamicTemperature::new::<kelvin>(1059.0);
//! let t_wall = ThermodynamicTemperature::new::<kelvin>(293.15);
//! let delta_t = t_gas.minus(t_wall);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{SpecificGasConstant, UNIVERSAL_GAS_CONSTANT, specific_gas_constant};
pub use temperature_difference::TemperatureDifference;
