//! Free-jet centerline velocity decay.
//!
//! The exit velocity persists along the axis through the potential core of
//! length `x_c = r_e / 0.053`. Downstream of the core the centerline
//! velocity decays as `u = u_e · (D/2) / (0.053·x)`.

use uom::si::{
    f64::{Length, Velocity},
    length::meter,
};

use super::{DomainError, ExpandedEngine};

/// Spreading constant of the free-jet decay law.
const SPREAD: f64 = 0.053;

impl ExpandedEngine {
    /// Length of the potential core downstream of the nozzle exit.
    #[must_use]
    pub fn potential_core_length(&self) -> Length {
        self.engine().exit_diameter() * 0.5 / SPREAD
    }

    /// Centerline velocity at `distance` downstream of the nozzle exit.
    ///
    /// `plume_diameter` parameterizes the decay law and defaults to the exit
    /// diameter, for which the velocity is continuous at the core boundary.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if `distance` is negative or the plume
    /// diameter is not strictly positive.
    pub fn propagate(
        &self,
        distance: Length,
        plume_diameter: Option<Length>,
    ) -> Result<Velocity, DomainError> {
        let x = DomainError::non_negative("plume distance", distance.get::<meter>())?;
        let diameter = match plume_diameter {
            Some(d) => DomainError::positive("plume diameter", d.get::<meter>())?,
            None => self.engine().exit_diameter().get::<meter>(),
        };

        Ok(self.centerline_velocity(x, diameter))
    }

    /// Centerline velocity for an already validated distance and diameter,
    /// both in meters.
    pub(super) fn centerline_velocity(&self, x: f64, diameter: f64) -> Velocity {
        let exit_velocity = self.exit().velocity;
        if x < self.potential_core_length().get::<meter>() {
            exit_velocity
        } else {
            exit_velocity * (0.5 * diameter / (SPREAD * x))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::millimeter, velocity::meter_per_second};

    use crate::models::aerothermal::impingement::core::test_support::expanded_engine;

    #[test]
    fn core_length_from_exit_radius() {
        let expanded = expanded_engine();
        assert_relative_eq!(
            expanded.potential_core_length().get::<meter>(),
            0.048_77 / 2.0 / 0.053,
            max_relative = 1e-12
        );
    }

    #[test]
    fn velocity_is_unchanged_inside_core() {
        let expanded = expanded_engine();
        let exit = expanded.exit().velocity;
        for x in [0.0, 145.0, 400.0] {
            let v = expanded
                .propagate(Length::new::<millimeter>(x), None)
                .unwrap();
            assert_eq!(v, exit);
        }
    }

    #[test]
    fn decays_inversely_with_distance_beyond_core() {
        let expanded = expanded_engine();
        let core = expanded.potential_core_length();

        let at_core = expanded.propagate(core, None).unwrap();
        assert_relative_eq!(
            at_core.get::<meter_per_second>(),
            expanded.exit().velocity.get::<meter_per_second>(),
            max_relative = 1e-12
        );

        let near = expanded.propagate(core * 2.0, None).unwrap();
        let far = expanded.propagate(core * 4.0, None).unwrap();
        assert_relative_eq!(
            near.get::<meter_per_second>(),
            2.0 * far.get::<meter_per_second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn plume_diameter_scales_decay() {
        let expanded = expanded_engine();
        let x = Length::new::<meter>(1.0);
        let default = expanded.propagate(x, None).unwrap();
        let wide = expanded
            .propagate(x, Some(expanded.engine().exit_diameter() * 2.0))
            .unwrap();
        assert_relative_eq!(
            wide.get::<meter_per_second>(),
            2.0 * default.get::<meter_per_second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_negative_distance_and_empty_plume() {
        let expanded = expanded_engine();
        assert!(
            expanded
                .propagate(Length::new::<meter>(-0.1), None)
                .is_err()
        );
        assert!(
            expanded
                .propagate(Length::new::<meter>(1.0), Some(Length::new::<meter>(0.0)))
                .is_err()
        );
    }
}
