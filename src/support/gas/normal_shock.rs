//! Normal-shock jump conditions for a calorically perfect gas.
//!
//! Each function takes the upstream Mach number normal to the shock `m1`
//! (which must be at least one) and the ratio of specific heats `gamma`.

/// Returns the downstream normal Mach number.
///
/// `M₂² = (1 + (γ−1)/2·M₁²) / (γ·M₁² − (γ−1)/2)`
#[must_use]
pub fn downstream_mach(m1: f64, gamma: f64) -> f64 {
    let m1_sq = m1 * m1;
    ((1.0 + 0.5 * (gamma - 1.0) * m1_sq) / (gamma * m1_sq - 0.5 * (gamma - 1.0))).sqrt()
}

/// Returns the static temperature ratio `T₂/T₁`.
#[must_use]
pub fn temperature_ratio(m1: f64, gamma: f64) -> f64 {
    let m1_sq = m1 * m1;
    (2.0 * gamma * m1_sq - (gamma - 1.0)) * ((gamma - 1.0) * m1_sq + 2.0)
        / ((gamma + 1.0).powi(2) * m1_sq)
}

/// Returns the static pressure ratio `p₂/p₁`.
#[must_use]
pub fn pressure_ratio(m1: f64, gamma: f64) -> f64 {
    1.0 + 2.0 * gamma / (gamma + 1.0) * (m1 * m1 - 1.0)
}
