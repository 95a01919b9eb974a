//! Plume impingement heating of flame deflectors.
//!
//! [`ImpingementHeating`] is a [`twine_core::Model`] that runs the whole
//! pipeline for one engine and deflector: nozzle expansion, plume
//! propagation, shock deflection, the three heat-flux correlations and the
//! regime stitcher, optionally followed by the transient surface-temperature
//! conversion. The stages are also available individually.

pub(crate) mod core;

pub use self::core::{
    ConfigurationError, CorrelationFluxes, DEFAULT_INITIAL_TEMPERATURE, DeflectedEngine,
    Deflector, DeflectorConfig, Diagnostic, DomainError, Engine, EngineConfig, EngineError,
    ExpandedEngine, Expansion, ExpansionConfig, ExpansionError, ExpansionInputs, FlowState,
    GasRegion, GasSpec, Grid, PipelineError, ProfileColumn, ProfileQuantity, ProfileSample,
    ProfileTable, ShockError, ShockRoots, ShockSolution, SkinFrictionLaw, SkinFrictionPolicy,
    Station, StitchConfig, SurfaceProfile, TableError, bartz_heat_flux,
    bartz_heat_transfer_coefficient, eckert_heat_flux, evans_heat_flux,
    evans_heat_transfer_coefficient, model_disagreement, shock_angles, stitch,
};

use twine_core::Model;
use uom::si::f64::Time;

/// Solver and correlation settings shared by every scenario.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisConfig {
    pub expansion: ExpansionConfig,
    pub stitch: StitchConfig,
    pub skin_friction: SkinFrictionPolicy,
}

/// What the resulting profile holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    HeatFlux,
    /// Surface temperature after the flux has acted for `burn_time`.
    SurfaceTemperature { burn_time: Time },
}

/// One run of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub expansion: Expansion,
    pub grid: Grid,
    pub output: OutputMode,
}

/// Heating of one deflector by one engine's plume.
///
/// All correlations are evaluated with the wall at the deflector's initial
/// temperature.
#[derive(Debug, Clone, Copy)]
pub struct ImpingementHeating {
    engine: Engine,
    deflector: Deflector,
    config: AnalysisConfig,
}

impl ImpingementHeating {
    /// Creates the model with default solver and correlation settings.
    #[must_use]
    pub fn new(engine: Engine, deflector: Deflector) -> Self {
        Self::with_config(engine, deflector, AnalysisConfig::default())
    }

    #[must_use]
    pub fn with_config(engine: Engine, deflector: Deflector, config: AnalysisConfig) -> Self {
        Self {
            engine,
            deflector,
            config,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn deflector(&self) -> &Deflector {
        &self.deflector
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

impl Model for ImpingementHeating {
    type Input = Scenario;
    type Output = SurfaceProfile;
    type Error = PipelineError;

    fn call(&self, scenario: &Scenario) -> Result<SurfaceProfile, PipelineError> {
        let expanded = self
            .engine
            .expand(scenario.expansion, &self.config.expansion)?;
        let deflected = expanded.deflect(&self.deflector)?;

        let wall = self.deflector.initial_temperature();
        let bartz = bartz_heat_flux(&expanded, wall)?;
        let evans = evans_heat_flux(&deflected, &scenario.grid.band_distances(), wall)?;
        let eckert = eckert_heat_flux(&deflected, wall, &self.config.skin_friction)?;
        log::debug!("fluxes: eckert {eckert:?}, bartz {bartz:?}");

        let profile = stitch(
            &CorrelationFluxes {
                eckert,
                evans: &evans,
                bartz,
            },
            &scenario.grid,
            &self.config.stitch,
        )?;

        match scenario.output {
            OutputMode::HeatFlux => Ok(profile),
            OutputMode::SurfaceTemperature { burn_time } => {
                Ok(profile.to_surface_temperature(&self.deflector, burn_time)?)
            }
        }
    }
}
