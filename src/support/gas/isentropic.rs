//! Isentropic relations for a calorically perfect gas.
//!
//! All functions take the Mach number `m` and ratio of specific heats `gamma`
//! and return dimensionless ratios. Callers are responsible for `gamma > 1`
//! and `m >= 0`.
//!
//! ```
//! use twine_plume::support::gas::isentropic;
//!
//! // At a sonic throat the static-to-stagnation temperature ratio is 2/(γ+1).
//! let ratio = 1.0 / isentropic::stagnation_temperature_ratio(1.0, 1.279);
//! assert!((ratio - 2.0 / 2.279).abs() < 1e-15);
//! ```

/// Returns `T₀/T = 1 + (γ−1)/2·M²`.
#[must_use]
pub fn stagnation_temperature_ratio(m: f64, gamma: f64) -> f64 {
    1.0 + 0.5 * (gamma - 1.0) * m * m
}

/// Returns `p₀/p = (T₀/T)^(γ/(γ−1))`.
#[must_use]
pub fn stagnation_pressure_ratio(m: f64, gamma: f64) -> f64 {
    stagnation_temperature_ratio(m, gamma).powf(gamma / (gamma - 1.0))
}

/// Returns the area ratio `A/A*` for a Mach number.
///
/// `A/A* = (1/M)·[(2/(γ+1))·(1 + (γ−1)/2·M²)]^((γ+1)/(2(γ−1)))`
///
/// The result is infinite at `M = 0` and has its minimum of one at `M = 1`.
#[must_use]
pub fn area_ratio(m: f64, gamma: f64) -> f64 {
    let base = 2.0 / (gamma + 1.0) * stagnation_temperature_ratio(m, gamma);
    base.powf((gamma + 1.0) / (2.0 * (gamma - 1.0))) / m
}

/// Returns the Mach number at which `p₀/p` equals `pressure_ratio`.
///
/// This is the closed-form inverse of [`stagnation_pressure_ratio`].
/// A ratio of one or less yields zero.
#[must_use]
pub fn mach_from_stagnation_pressure_ratio(pressure_ratio: f64, gamma: f64) -> f64 {
    let temperature_ratio = pressure_ratio.powf((gamma - 1.0) / gamma);
    (2.0 / (gamma - 1.0) * (temperature_ratio - 1.0)).max(0.0).sqrt()
}

/// Returns the sonic (throat) static temperature ratio `T*/T₀ = 2/(γ+1)`.
#[must_use]
pub fn sonic_temperature_ratio(gamma: f64) -> f64 {
    2.0 / (gamma + 1.0)
}
