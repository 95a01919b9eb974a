//! Supersonic inversion of the isentropic area-Mach relation.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;

use crate::support::gas::isentropic;

use super::{DomainError, ExpansionConfig, ExpansionError};

/// Returns the supersonic Mach number whose area ratio `A/A*` is `ratio`.
///
/// A ratio of exactly one is the sonic throat. Larger ratios are found by
/// bisection on `[1, config.max_mach]`.
pub(super) fn supersonic_mach(
    ratio: f64,
    gamma: f64,
    config: &ExpansionConfig,
) -> Result<f64, ExpansionError> {
    if ratio.is_nan() || ratio < 1.0 {
        return Err(DomainError::AreaRatioBelowSonic(ratio).into());
    }
    if ratio == 1.0 {
        return Ok(1.0);
    }

    let model = AreaMachModel { gamma };
    let problem = AreaRatioProblem { target: ratio };

    let solution = bisection::solve(
        &model,
        &problem,
        [1.0, config.max_mach],
        &config.bisection(),
        |_: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(ExpansionError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.x)
}

/// Maps a Mach number to its isentropic area ratio.
struct AreaMachModel {
    gamma: f64,
}

impl Model for AreaMachModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, mach: &f64) -> Result<f64, Infallible> {
        Ok(isentropic::area_ratio(*mach, self.gamma))
    }
}

/// Residual `A/A*(M) − target`, increasing in `M` on the supersonic branch.
struct AreaRatioProblem {
    target: f64,
}

impl EquationProblem<1> for AreaRatioProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, area_ratio: &f64) -> Result<[f64; 1], Infallible> {
        Ok([area_ratio - self.target])
    }
}
