//! Transient surface temperature of a semi-infinite solid.
//!
//! A constant flux `q` applied for time `t` to a semi-infinite solid
//! initially at `T_i` raises its surface to
//! `T_s = T_i + 2·q·√t / √(π·ρ·k·c_p)`.

use std::f64::consts::PI;

use uom::si::{
    f64::{HeatFluxDensity, ThermodynamicTemperature, Time},
    heat_flux_density::watt_per_square_meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
};

use super::{Deflector, DomainError};

impl Deflector {
    /// Surface temperature after a constant flux is applied for `time`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if `time` is not strictly positive.
    pub fn hotspot(
        &self,
        flux: HeatFluxDensity,
        time: Time,
    ) -> Result<ThermodynamicTemperature, DomainError> {
        let rise_per_flux = self.rise_per_flux(time)?;
        Ok(self.surface_temperature(flux, rise_per_flux))
    }

    /// Applies [`hotspot`](Self::hotspot) to each flux.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if `time` is not strictly positive.
    pub fn hotspot_profile(
        &self,
        fluxes: &[HeatFluxDensity],
        time: Time,
    ) -> Result<Vec<ThermodynamicTemperature>, DomainError> {
        let rise_per_flux = self.rise_per_flux(time)?;
        Ok(fluxes
            .iter()
            .map(|&flux| self.surface_temperature(flux, rise_per_flux))
            .collect())
    }

    /// Surface temperature rise per unit flux, `2·√t / √(π·ρ·k·c_p)`, in K·m²/W.
    fn rise_per_flux(&self, time: Time) -> Result<f64, DomainError> {
        let t = DomainError::positive("burn time", time.get::<second>())?;
        let effusivity_sq = self.density().get::<kilogram_per_cubic_meter>()
            * self.thermal_conductivity().get::<watt_per_meter_kelvin>()
            * self.specific_heat().get::<joule_per_kilogram_kelvin>();
        Ok(2.0 * t.sqrt() / (PI * effusivity_sq).sqrt())
    }

    fn surface_temperature(
        &self,
        flux: HeatFluxDensity,
        rise_per_flux: f64,
    ) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(
            self.initial_temperature().get::<kelvin>()
                + flux.get::<watt_per_square_meter>() * rise_per_flux,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::aerothermal::impingement::core::test_support::deflector;

    fn flux(w_per_m2: f64) -> HeatFluxDensity {
        HeatFluxDensity::new::<watt_per_square_meter>(w_per_m2)
    }

    #[test]
    fn steel_under_one_megawatt_per_square_meter() {
        let t = deflector()
            .hotspot(flux(1.0e6), Time::new::<second>(1.0))
            .unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 434.197_396, max_relative = 1e-9);
    }

    #[test]
    fn rise_grows_with_square_root_of_time() {
        let deflector = deflector();
        let rise = |seconds: f64| {
            deflector
                .hotspot(flux(2.0e6), Time::new::<second>(seconds))
                .unwrap()
                .get::<kelvin>()
                - 293.15
        };
        assert_relative_eq!(rise(4.0), 2.0 * rise(1.0), max_relative = 1e-12);
        assert_relative_eq!(rise(9.0), 3.0 * rise(1.0), max_relative = 1e-12);
    }

    #[test]
    fn zero_flux_leaves_surface_at_initial_temperature() {
        let t = deflector()
            .hotspot(flux(0.0), Time::new::<second>(3.0))
            .unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 293.15);
    }

    #[test]
    fn profile_maps_each_flux() {
        let deflector = deflector();
        let time = Time::new::<second>(2.0);
        let fluxes = [flux(4_361_300.385), flux(-1.0e5)];
        let temperatures = deflector.hotspot_profile(&fluxes, time).unwrap();

        assert_eq!(temperatures.len(), 2);
        assert_relative_eq!(
            temperatures[0].get::<kelvin>(),
            1163.103_56,
            max_relative = 1e-8
        );
        assert!(temperatures[1].get::<kelvin>() < 293.15);
    }

    #[test]
    fn rejects_non_positive_time() {
        let deflector = deflector();
        for seconds in [0.0, -1.0, f64::NAN] {
            assert!(
                deflector
                    .hotspot(flux(1.0e6), Time::new::<second>(seconds))
                    .is_err()
            );
        }
        assert!(
            deflector
                .hotspot_profile(&[flux(1.0e6)], Time::new::<second>(0.0))
                .is_err()
        );
    }
}
