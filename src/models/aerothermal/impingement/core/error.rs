use std::fmt;

use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Angle, Pressure};

use num_traits::Zero;

use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive,
};

/// Gas regions of an engine that need their own gas constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasRegion {
    /// Combustion chamber gas, used for the characteristic velocity.
    Combustor,
    /// Nozzle exhaust gas, used for speeds of sound and densities.
    Exhaust,
}

impl fmt::Display for GasRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combustor => f.write_str("combustor"),
            Self::Exhaust => f.write_str("exhaust"),
        }
    }
}

/// A required physical parameter was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Neither a molecular weight nor a gas constant was given for a region.
    #[error("no molecular weight or gas constant supplied for the {region} gas")]
    MissingGasProperties { region: GasRegion },

    /// None of the expansion inputs can define the nozzle exit state.
    #[error("no usable expansion specification")]
    NoExpansionSpecified,
}

/// An input is outside the physical domain of the models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A parameter violates its numeric constraint.
    #[error("invalid {name}: {source}")]
    InvalidParameter {
        name: &'static str,
        source: ConstraintError,
    },

    /// Nozzle area ratios below one have no isentropic solution.
    #[error("area ratio {0} is below the sonic minimum of one")]
    AreaRatioBelowSonic(f64),

    /// The exit pressure must be below the chamber stagnation pressure.
    #[error("exit pressure {exit:?} is not below the chamber pressure {chamber:?}")]
    ExitPressureNotBelowChamber { exit: Pressure, chamber: Pressure },

    /// The deflection angle must lie in `[0°, 90°)`.
    #[error("impingement angle {0:?} is outside [0°, 90°)")]
    ImpingementAngle(Angle),

    /// The spatial grid is not usable.
    #[error("invalid grid: {0}")]
    InvalidGrid(&'static str),

    /// A flux array does not cover the grid band it is stitched into.
    #[error("expected {expected} band samples, got {actual}")]
    BandLengthMismatch { expected: usize, actual: usize },

    /// Only heat-flux profiles can be converted to surface temperature.
    #[error("profile does not hold heat flux")]
    NotAHeatFluxProfile,
}

impl DomainError {
    /// Returns `value` if it is strictly positive.
    pub(super) fn positive(name: &'static str, value: f64) -> Result<f64, Self> {
        StrictlyPositive::check(&value)
            .map(|()| value)
            .map_err(|source| Self::InvalidParameter { name, source })
    }

    /// Returns `value` if it is zero or greater.
    pub(super) fn non_negative(name: &'static str, value: f64) -> Result<f64, Self> {
        NonNegative::check(&value)
            .map(|()| value)
            .map_err(|source| Self::InvalidParameter { name, source })
    }

    /// Wraps a strictly positive input for storage on a validated type.
    pub(super) fn strictly_positive<T: PartialOrd + Zero>(
        name: &'static str,
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, Self> {
        StrictlyPositive::new(value).map_err(|source| Self::InvalidParameter { name, source })
    }

    /// Wraps a non-negative input for storage on a validated type.
    pub(super) fn at_least_zero<T: PartialOrd + Zero>(
        name: &'static str,
        value: T,
    ) -> Result<Constrained<T, NonNegative>, Self> {
        NonNegative::new(value).map_err(|source| Self::InvalidParameter { name, source })
    }
}

/// Errors from constructing an [`Engine`](super::Engine).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Errors from deriving the nozzle exit state.
#[derive(Debug, Error)]
pub enum ExpansionError {
    /// The expansion specification is non-physical.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The area-ratio inversion reached the iteration limit.
    #[error("area-ratio inversion hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best area-ratio residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// The oblique-shock relation has no attached solution.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShockError {
    /// Fewer than two non-negative roots: the shock detaches at this
    /// Mach number and deflection.
    #[error("no attached oblique shock at M = {mach} and deflection {deflection:?}")]
    NoAttachedSolution { mach: f64, deflection: Angle },
}

/// Any failure of the impingement heating pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Expansion(#[from] ExpansionError),

    /// The flow state is beyond what the shock model can represent.
    #[error("physical limit exceeded")]
    PhysicalLimitExceeded(#[from] ShockError),
}

impl From<EngineError> for PipelineError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Configuration(error) => Self::Configuration(error),
            EngineError::Domain(error) => Self::Domain(error),
        }
    }
}
