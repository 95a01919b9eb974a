//! Attached oblique shock at the deflector surface.
//!
//! For upstream Mach `M`, deflection `θ` and ratio of specific heats `γ`,
//! the shock angle `β` satisfies a cubic in `c = cot β`:
//!
//! ```text
//! c³ + C·c² − A·c + (B − A·C) = 0
//!
//! A = M² − 1
//! C = tan θ · (1 + (γ+1)/2·M²)
//! B = tan θ · (1 + (γ−1)/2·M²) + A·C
//! ```
//!
//! Non-negative roots are physical. The smaller shock angle is the weak
//! solution and the larger one the strong solution. Only the weak solution
//! is carried downstream.

mod cubic;

use uom::si::{
    angle::radian,
    f64::{Angle, ThermodynamicTemperature},
    length::meter,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::gas::{ideal_gas_eos, normal_shock};

use super::{Deflector, ExpandedEngine, FlowState, ShockError, Station};

/// Roots of the shock cubic within this distance below zero are the normal
/// shock, `β = 90°`.
const ROOT_TOLERANCE: f64 = 1e-9;

/// The two attached shock angles for a Mach number and deflection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockSolution {
    pub weak: Angle,
    pub strong: Angle,
}

/// Outcome of classifying the shock cubic's roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShockRoots {
    Attached(ShockSolution),
    /// The flow cannot turn through the deflection with an attached shock.
    NoAttachedSolution,
}

/// Solves for the weak and strong shock angles.
///
/// Subsonic and sonic flow have no attached solution.
///
/// ```
/// use twine_plume::models::aerothermal::impingement::{ShockRoots, shock_angles};
/// use uom::si::{angle::degree, f64::Angle};
///
/// let ShockRoots::Attached(solution) = shock_angles(2.0, Angle::new::<degree>(10.0), 1.4)
/// else {
///     panic!("Mach 2 turns 10° with an attached shock");
/// };
/// assert!((solution.weak.get::<degree>() - 39.31).abs() < 0.01);
/// ```
#[must_use]
pub fn shock_angles(mach: f64, deflection: Angle, gamma: f64) -> ShockRoots {
    if mach.is_nan() || mach <= 1.0 {
        return ShockRoots::NoAttachedSolution;
    }

    let tan_theta = deflection.get::<radian>().tan();
    let m_sq = mach * mach;
    let a = m_sq - 1.0;
    let c = tan_theta * (1.0 + 0.5 * (gamma + 1.0) * m_sq);
    let b = tan_theta * (1.0 + 0.5 * (gamma - 1.0) * m_sq) + a * c;

    let angles: Vec<f64> = cubic::real_roots(c, -a, b - a * c)
        .into_iter()
        .filter(|&cot| cot >= -ROOT_TOLERANCE)
        .map(|cot| 1.0_f64.atan2(cot.max(0.0)))
        .collect();

    if angles.len() < 2 {
        return ShockRoots::NoAttachedSolution;
    }

    let weak = angles.iter().copied().fold(f64::INFINITY, f64::min);
    let strong = angles.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    ShockRoots::Attached(ShockSolution {
        weak: Angle::new::<radian>(weak),
        strong: Angle::new::<radian>(strong),
    })
}

impl ExpandedEngine {
    /// Carries the plume to the deflector and through the weak oblique shock
    /// formed at its surface.
    ///
    /// The impingement state keeps the exit static temperature, pressure and
    /// speed of sound. Only the velocity decays with distance. Across the
    /// shock the tangential velocity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShockError::NoAttachedSolution`] if the impingement Mach
    /// number cannot turn through the deflector angle with an attached shock.
    pub fn deflect(&self, deflector: &Deflector) -> Result<DeflectedEngine, ShockError> {
        let engine = self.engine();
        let gamma = engine.gamma();
        let exit = self.exit();

        let velocity = self.centerline_velocity(
            deflector.standoff().get::<meter>(),
            engine.exit_diameter().get::<meter>(),
        );
        let impingement = FlowState {
            station: Station::Impingement,
            velocity,
            mach: (velocity / exit.speed_of_sound).get::<ratio>(),
            ..*exit
        };

        let deflection = deflector.impingement_angle();
        let shock = match shock_angles(impingement.mach, deflection, gamma) {
            ShockRoots::Attached(solution) => solution,
            ShockRoots::NoAttachedSolution => {
                return Err(ShockError::NoAttachedSolution {
                    mach: impingement.mach,
                    deflection,
                });
            }
        };

        let beta = shock.weak.get::<radian>();
        let normal_mach = impingement.mach * beta.sin();
        let tangential_mach = impingement.mach * beta.cos();

        let static_temperature = ThermodynamicTemperature::new::<kelvin>(
            impingement.static_temperature.get::<kelvin>()
                * normal_shock::temperature_ratio(normal_mach, gamma),
        );
        let static_pressure =
            impingement.static_pressure * normal_shock::pressure_ratio(normal_mach, gamma);
        let speed_of_sound =
            ideal_gas_eos::speed_of_sound(gamma, engine.exhaust_gas_constant(), static_temperature);

        let downstream_tangential =
            tangential_mach * (impingement.speed_of_sound / speed_of_sound).get::<ratio>();
        let mach = normal_shock::downstream_mach(normal_mach, gamma).hypot(downstream_tangential);

        let post_shock = FlowState {
            station: Station::PostShock,
            velocity: speed_of_sound * mach,
            mach,
            static_temperature,
            static_pressure,
            speed_of_sound,
        };
        log::debug!("weak shock at {shock:?}, post-shock {post_shock:?}");

        Ok(DeflectedEngine {
            expanded: *self,
            deflector: *deflector,
            impingement,
            shock,
            post_shock,
        })
    }
}

/// An expanded engine carried through the shock at a deflector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeflectedEngine {
    expanded: ExpandedEngine,
    deflector: Deflector,
    impingement: FlowState,
    shock: ShockSolution,
    post_shock: FlowState,
}

impl DeflectedEngine {
    #[must_use]
    pub fn expanded(&self) -> &ExpandedEngine {
        &self.expanded
    }

    #[must_use]
    pub fn deflector(&self) -> &Deflector {
        &self.deflector
    }

    /// Centerline state at the deflector, ahead of the shock.
    #[must_use]
    pub fn impingement(&self) -> &FlowState {
        &self.impingement
    }

    #[must_use]
    pub fn shock(&self) -> &ShockSolution {
        &self.shock
    }

    /// State downstream of the weak shock.
    #[must_use]
    pub fn post_shock(&self) -> &FlowState {
        &self.post_shock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, pressure::pascal, velocity::meter_per_second};

    use crate::models::aerothermal::impingement::core::{
        Expansion, ExpansionConfig,
        test_support::{deflected_engine, deflector_config, engine, expanded_engine},
    };

    fn attached(mach: f64, degrees: f64, gamma: f64) -> ShockSolution {
        match shock_angles(mach, Angle::new::<degree>(degrees), gamma) {
            ShockRoots::Attached(solution) => solution,
            ShockRoots::NoAttachedSolution => panic!("expected an attached shock"),
        }
    }

    #[test]
    fn matches_oblique_shock_charts_for_air() {
        let solution = attached(2.0, 10.0, 1.4);
        assert_relative_eq!(solution.weak.get::<degree>(), 39.313_932, epsilon = 1e-5);
        assert_relative_eq!(solution.strong.get::<degree>(), 83.700_080, epsilon = 1e-5);

        let solution = attached(3.0, 20.0, 1.4);
        assert_relative_eq!(solution.weak.get::<degree>(), 37.763_634, epsilon = 1e-5);
    }

    #[test]
    fn weak_angle_never_exceeds_strong() {
        for mach in [1.5, 2.0, 2.5, 4.0, 8.0] {
            for degrees in [0.0, 2.0, 5.0, 10.0] {
                let solution = attached(mach, degrees, 1.279);
                assert!(solution.weak <= solution.strong);
            }
        }
    }

    #[test]
    fn zero_deflection_gives_mach_wave_and_normal_shock() {
        let mach: f64 = 2.5;
        let solution = attached(mach, 0.0, 1.279);
        assert_relative_eq!(
            solution.weak.get::<radian>(),
            (1.0 / mach).asin(),
            epsilon = 1e-12
        );
        assert_relative_eq!(solution.strong.get::<degree>(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn detached_beyond_maximum_deflection() {
        // Maximum deflection at M = 2, γ = 1.4 is about 22.97°.
        assert!(matches!(
            shock_angles(2.0, Angle::new::<degree>(22.9), 1.4),
            ShockRoots::Attached(_)
        ));
        assert_eq!(
            shock_angles(2.0, Angle::new::<degree>(23.0), 1.4),
            ShockRoots::NoAttachedSolution
        );
    }

    #[test]
    fn subsonic_and_sonic_flow_have_no_attached_shock() {
        for mach in [0.5, 1.0] {
            assert_eq!(
                shock_angles(mach, Angle::new::<degree>(10.0), 1.279),
                ShockRoots::NoAttachedSolution
            );
        }
    }

    #[test]
    fn post_shock_state_at_ambient_expansion() {
        let deflected = deflected_engine();

        let impingement = deflected.impingement();
        assert_eq!(impingement.station, Station::Impingement);
        assert_relative_eq!(impingement.mach, 2.563_487_233, max_relative = 1e-8);

        let shock = deflected.shock();
        assert_relative_eq!(shock.weak.get::<degree>(), 30.657_383, epsilon = 1e-5);
        assert_relative_eq!(shock.strong.get::<degree>(), 86.467_813, epsilon = 1e-5);

        let post = deflected.post_shock();
        assert_eq!(post.station, Station::PostShock);
        assert_relative_eq!(
            post.static_temperature.get::<kelvin>(),
            1053.736_928,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            post.static_pressure.get::<pascal>(),
            181_912.505_5,
            max_relative = 1e-7
        );
        assert_relative_eq!(post.mach, 2.205_406_253, max_relative = 1e-7);
        assert_relative_eq!(
            post.velocity.get::<meter_per_second>(),
            1573.967_375,
            max_relative = 1e-7
        );
    }

    #[test]
    fn shock_heats_and_slows_the_flow() {
        let deflected = deflected_engine();
        let before = deflected.impingement();
        let after = deflected.post_shock();

        assert!(after.static_temperature > before.static_temperature);
        assert!(after.static_pressure > before.static_pressure);
        assert!(after.mach < before.mach);
        assert!(after.velocity < before.velocity);
    }

    #[test]
    fn tangential_velocity_is_conserved() {
        let deflected = deflected_engine();
        let beta = deflected.shock().weak.get::<radian>();
        let before = deflected.impingement().velocity.get::<meter_per_second>() * beta.cos();

        let post = deflected.post_shock();
        let normal_mach =
            normal_shock::downstream_mach(deflected.impingement().mach * beta.sin(), 1.279);
        let normal = normal_mach * post.speed_of_sound.get::<meter_per_second>();
        let after = (post.velocity.get::<meter_per_second>().powi(2) - normal.powi(2)).sqrt();

        assert_relative_eq!(after, before, max_relative = 1e-10);
    }

    #[test]
    fn sonic_exit_cannot_be_deflected() {
        let sonic = engine()
            .expand(Expansion::AreaRatio(1.0), &ExpansionConfig::default())
            .unwrap();
        let deflector = Deflector::new(deflector_config()).unwrap();

        assert!(matches!(
            sonic.deflect(&deflector),
            Err(ShockError::NoAttachedSolution { mach, .. }) if mach == 1.0
        ));
    }

    #[test]
    fn deflection_keeps_upstream_states() {
        let expanded = expanded_engine();
        let deflected = deflected_engine();
        assert_eq!(deflected.expanded(), &expanded);
        assert_eq!(
            deflected.impingement().static_temperature,
            expanded.exit().static_temperature
        );
    }
}
