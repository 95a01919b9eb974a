//! Isentropic nozzle expansion from chamber to exit.
//!
//! An [`Engine`] is expanded with exactly one [`Expansion`] specification,
//! producing an [`ExpandedEngine`] that carries the exit [`FlowState`].
//! Callers holding several optional inputs resolve them with
//! [`ExpansionInputs::resolve`] first.

mod area_ratio;

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::gas::{ideal_gas_eos, isentropic};

use super::{ConfigurationError, DomainError, Engine, ExpansionError, FlowState, Station};

/// How the nozzle exit state is specified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expansion {
    /// Exit-to-throat area ratio `A_e/A*`, at least one.
    AreaRatio(f64),
    /// Exit static pressure, below the chamber pressure.
    ExitPressure(Pressure),
    /// Exit Mach number.
    ExitMach(f64),
    /// Area ratio from the engine's diameters, with a measured throat velocity
    /// as the sonic reference.
    Geometric { throat_velocity: Velocity },
}

/// Optional expansion inputs as an operator might supply them.
///
/// Resolution priority is area ratio, then exit pressure, then exit Mach,
/// then the geometric case keyed on a throat velocity. Lower-priority values
/// are ignored.
///
/// ```
/// use twine_plume::models::aerothermal::impingement::{Expansion, ExpansionInputs};
///
/// let inputs = ExpansionInputs {
///     area_ratio: Some(4.0),
///     exit_mach: Some(2.5),
///     ..ExpansionInputs::default()
/// };
/// assert_eq!(inputs.resolve(), Ok(Expansion::AreaRatio(4.0)));
/// assert!(ExpansionInputs::default().resolve().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpansionInputs {
    pub area_ratio: Option<f64>,
    pub exit_pressure: Option<Pressure>,
    pub exit_mach: Option<f64>,
    pub throat_velocity: Option<Velocity>,
}

impl ExpansionInputs {
    /// Selects the highest-priority expansion that was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NoExpansionSpecified`] if every field is
    /// empty.
    pub fn resolve(&self) -> Result<Expansion, ConfigurationError> {
        if let Some(ratio) = self.area_ratio {
            Ok(Expansion::AreaRatio(ratio))
        } else if let Some(pressure) = self.exit_pressure {
            Ok(Expansion::ExitPressure(pressure))
        } else if let Some(mach) = self.exit_mach {
            Ok(Expansion::ExitMach(mach))
        } else if let Some(throat_velocity) = self.throat_velocity {
            Ok(Expansion::Geometric { throat_velocity })
        } else {
            Err(ConfigurationError::NoExpansionSpecified)
        }
    }
}

/// Solver configuration for the area-ratio inversion.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the Mach number.
    pub mach_tol: f64,

    /// Absolute tolerance on the area-ratio residual.
    pub residual_tol: f64,

    /// Upper end of the supersonic bracket.
    pub max_mach: f64,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            mach_tol: 1e-12,
            residual_tol: 1e-12,
            max_mach: 50.0,
        }
    }
}

impl ExpansionConfig {
    /// Converts this configuration into a bisection solver configuration.
    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.mach_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}

impl Engine {
    /// Expands the chamber gas isentropically to the nozzle exit.
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError::Domain`] for an out-of-range specification
    /// (area ratio below one, exit pressure not in `(0, p₀)`, non-positive
    /// Mach or throat velocity), or a solver error if the area-ratio
    /// inversion fails to converge.
    pub fn expand(
        &self,
        expansion: Expansion,
        config: &ExpansionConfig,
    ) -> Result<ExpandedEngine, ExpansionError> {
        let gamma = self.gamma();

        let mach = match expansion {
            Expansion::AreaRatio(ratio) => area_ratio::supersonic_mach(ratio, gamma, config)?,
            Expansion::ExitPressure(exit) => {
                DomainError::positive("exit pressure", exit.get::<pascal>())?;
                let chamber = self.chamber_pressure();
                if exit >= chamber {
                    return Err(DomainError::ExitPressureNotBelowChamber { exit, chamber }.into());
                }
                isentropic::mach_from_stagnation_pressure_ratio(
                    chamber.get::<pascal>() / exit.get::<pascal>(),
                    gamma,
                )
            }
            Expansion::ExitMach(mach) => DomainError::positive("exit Mach number", mach)?,
            Expansion::Geometric { throat_velocity } => {
                DomainError::positive("throat velocity", throat_velocity.get::<meter_per_second>())?;
                area_ratio::supersonic_mach(self.geometric_area_ratio(), gamma, config)?
            }
        };

        let t0 = self.chamber_temperature().get::<kelvin>();
        let static_temperature = t0 / isentropic::stagnation_temperature_ratio(mach, gamma);
        let static_pressure =
            self.chamber_pressure() / isentropic::stagnation_pressure_ratio(mach, gamma);
        let static_temperature = ThermodynamicTemperature::new::<kelvin>(static_temperature);
        let speed_of_sound =
            ideal_gas_eos::speed_of_sound(gamma, self.exhaust_gas_constant(), static_temperature);

        let velocity = match expansion {
            Expansion::Geometric { throat_velocity } => {
                let sonic_temperature = t0 * isentropic::sonic_temperature_ratio(gamma);
                throat_velocity
                    * mach
                    * (static_temperature.get::<kelvin>() / sonic_temperature).sqrt()
            }
            _ => speed_of_sound * mach,
        };

        let exit = FlowState {
            station: Station::Exit,
            velocity,
            mach,
            static_temperature,
            static_pressure,
            speed_of_sound,
        };
        log::debug!("{expansion:?} expanded to {exit:?}");

        Ok(ExpandedEngine {
            engine: *self,
            expansion,
            exit,
        })
    }
}

/// An engine together with its nozzle exit state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandedEngine {
    engine: Engine,
    expansion: Expansion,
    exit: FlowState,
}

impl ExpandedEngine {
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The specification this state was expanded from.
    #[must_use]
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    #[must_use]
    pub fn exit(&self) -> &FlowState {
        &self.exit
    }

    /// Isentropic area ratio `A_e/A*` at the exit Mach number.
    #[must_use]
    pub fn area_ratio(&self) -> f64 {
        isentropic::area_ratio(self.exit.mach, self.engine.gamma())
    }
}
