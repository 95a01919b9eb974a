//! Supporting utilities shared by the models in this crate.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`gas`]: Perfect-gas, isentropic, and normal-shock relations.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod gas;
pub mod units;
