//! Plume impingement heating on a flame deflector.
//!
//! The computation runs in stages, each producing an immutable value that
//! feeds the next:
//!
//! 1. [`Engine::expand`] derives the nozzle exit state.
//! 2. [`ExpandedEngine::propagate`] carries the exit velocity downstream.
//! 3. [`ExpandedEngine::deflect`] passes the plume through the oblique shock
//!    at the deflector surface.
//! 4. [`bartz_heat_flux`], [`evans_heat_flux`] and [`eckert_heat_flux`]
//!    estimate convective heating.
//! 5. [`stitch()`] combines the estimates into one [`SurfaceProfile`], which
//!    [`Deflector::hotspot`] can convert to surface temperature.
//!
//! Because each stage is only reachable from the previous one, reading an
//! exit or post-shock state before it has been computed does not compile.

mod deflector;
mod engine;
mod error;
mod expansion;
mod flow_state;
mod heat_flux;
mod hotspot;
mod plume;
mod profile;
mod shock;
mod stitch;
mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use deflector::{DEFAULT_INITIAL_TEMPERATURE, Deflector, DeflectorConfig};
pub use engine::{Engine, EngineConfig, GasSpec};
pub use error::{
    ConfigurationError, DomainError, EngineError, ExpansionError, GasRegion, PipelineError,
    ShockError,
};
pub use expansion::{ExpandedEngine, Expansion, ExpansionConfig, ExpansionInputs};
pub use flow_state::{FlowState, Station};
pub use heat_flux::{
    SkinFrictionLaw, SkinFrictionPolicy, bartz_heat_flux, bartz_heat_transfer_coefficient,
    eckert_heat_flux, evans_heat_flux, evans_heat_transfer_coefficient,
};
pub use profile::{ProfileQuantity, ProfileSample, SurfaceProfile};
pub use shock::{DeflectedEngine, ShockRoots, ShockSolution, shock_angles};
pub use stitch::{CorrelationFluxes, Diagnostic, Grid, StitchConfig, model_disagreement, stitch};
pub use table::{ProfileColumn, ProfileTable, TableError};
