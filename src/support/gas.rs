//! Perfect-gas relations used across the plume pipeline.
//!
//! - [`ideal_gas_eos`]: the ideal gas equation of state `p = ρ·R·T`.
//! - [`isentropic`]: stagnation-to-static ratios and the area-Mach relation.
//! - [`normal_shock`]: jump conditions across a normal shock.
//!
//! The isentropic and normal-shock relations are dimensionless, so they work
//! on plain `f64` Mach numbers and ratios of specific heats.

pub mod ideal_gas_eos;
pub mod isentropic;
pub mod normal_shock;
