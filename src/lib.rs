//! # Twine Plume
//!
//! Aerothermal models for rocket exhaust plumes impinging on flame deflectors,
//! built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given chamber stagnation conditions and nozzle geometry, the models chain
//! isentropic expansion, free-jet centerline decay, oblique-shock deflection
//! at the deflector surface, three convective heat-flux correlations, and a
//! semi-infinite-solid conduction estimate into one heat-flux (or surface
//! temperature) profile along the deflector.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Gas-dynamic relations start out inside a model's `core` module and move to
//! [`support`] once more than one stage of the pipeline needs them.

pub mod models;
pub mod support;
