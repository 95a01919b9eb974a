//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The public types of
//! the core are re-exported by the model module, while the module layout of
//! `core` itself stays an implementation detail.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the core API, so each pipeline stage stays usable on its own.

pub mod aerothermal;
