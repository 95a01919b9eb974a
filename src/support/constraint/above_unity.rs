use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than one.
///
/// Used for the ratio of specific heats, where `γ = 1` makes every
/// isentropic exponent `γ/(γ−1)` singular.
///
/// # Examples
///
/// ```
/// use twine_plume::support::constraint::AboveUnity;
///
/// assert!(AboveUnity::new(1.279).is_ok());
/// assert!(AboveUnity::new(1.0).is_err());
/// assert!(AboveUnity::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveUnity;

impl AboveUnity {
    /// Constructs a [`Constrained<f64, AboveUnity>`] if the value exceeds one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is one or less, or not a number (`NaN`).
    pub fn new(value: f64) -> Result<Constrained<f64, AboveUnity>, ConstraintError> {
        Constrained::<f64, AboveUnity>::new(value)
    }
}

impl Constraint<f64> for AboveUnity {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if *value > 1.0 {
            Ok(())
        } else {
            Err(ConstraintError::BelowMinimum)
        }
    }
}
