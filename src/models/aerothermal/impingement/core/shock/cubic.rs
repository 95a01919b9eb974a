//! Closed-form real roots of a monic cubic.

use std::f64::consts::PI;

/// Returns the real roots of `x³ + a2·x² + a1·x + a0 = 0`.
///
/// Uses Cardano's formula when the cubic has a single real root and the
/// trigonometric method when it has three. Repeated roots are returned once
/// per multiplicity found by the method, so callers should not rely on the
/// count of a degenerate cubic.
pub(super) fn real_roots(a2: f64, a1: f64, a0: f64) -> Vec<f64> {
    // Depressed cubic t³ + p·t + q = 0 with x = t − a2/3.
    let shift = -a2 / 3.0;
    let p = a1 - a2 * a2 / 3.0;
    let q = 2.0 * a2.powi(3) / 27.0 - a2 * a1 / 3.0 + a0;
    let discriminant = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    if discriminant > 0.0 || p >= 0.0 {
        let root = discriminant.max(0.0).sqrt();
        let u = (-q / 2.0 + root).cbrt();
        let v = (-q / 2.0 - root).cbrt();
        return vec![u + v + shift];
    }

    let magnitude = 2.0 * (-p / 3.0).sqrt();
    let cos_arg = (3.0 * q / (2.0 * p) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
    let phase = cos_arg.acos() / 3.0;
    (0..3_u8)
        .map(|k| magnitude * (phase - 2.0 * PI * f64::from(k) / 3.0).cos() + shift)
        .collect()
}
