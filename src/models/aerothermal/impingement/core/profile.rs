use std::fmt;

use uom::si::{
    f64::{HeatFluxDensity, Length, Time},
    heat_flux_density::watt_per_square_meter,
    thermodynamic_temperature::kelvin,
};

use super::{Deflector, Diagnostic, DomainError};

/// The quantity a [`SurfaceProfile`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileQuantity {
    /// Convective heat flux, W/m².
    HeatFlux,
    /// Surface temperature, K.
    SurfaceTemperature,
}

impl ProfileQuantity {
    /// Unit label used in tabular output.
    #[must_use]
    pub fn unit_label(self) -> &'static str {
        match self {
            Self::HeatFlux => "W/m^2",
            Self::SurfaceTemperature => "K",
        }
    }

    /// Parses a unit label written by [`unit_label`](Self::unit_label).
    #[must_use]
    pub fn from_unit_label(label: &str) -> Option<Self> {
        match label {
            "W/m^2" => Some(Self::HeatFlux),
            "K" => Some(Self::SurfaceTemperature),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeatFlux => f.write_str("heat flux"),
            Self::SurfaceTemperature => f.write_str("surface temperature"),
        }
    }
}

/// One sample of a [`SurfaceProfile`].
///
/// `value` is in the SI unit of the profile's [`ProfileQuantity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub distance: Length,
    pub value: f64,
}

/// A quantity sampled along the deflector surface from the impingement point.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceProfile {
    quantity: ProfileQuantity,
    distances: Vec<Length>,
    values: Vec<f64>,
    diagnostics: Vec<Diagnostic>,
}

impl SurfaceProfile {
    pub(super) fn new(
        quantity: ProfileQuantity,
        distances: Vec<Length>,
        values: Vec<f64>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        debug_assert_eq!(distances.len(), values.len());
        Self {
            quantity,
            distances,
            values,
            diagnostics,
        }
    }

    #[must_use]
    pub fn quantity(&self) -> ProfileQuantity {
        self.quantity
    }

    #[must_use]
    pub fn distances(&self) -> &[Length] {
        &self.distances
    }

    /// Sample values in W/m² or K, depending on [`quantity`](Self::quantity).
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Advisory findings from stitching.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = ProfileSample> + '_ {
        self.distances
            .iter()
            .zip(&self.values)
            .map(|(&distance, &value)| ProfileSample { distance, value })
    }

    /// Converts a heat-flux profile to the surface temperature reached after
    /// `burn_time`, keeping the grid and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotAHeatFluxProfile`] for a temperature profile,
    /// or a [`DomainError`] if `burn_time` is not strictly positive.
    pub fn to_surface_temperature(
        &self,
        deflector: &Deflector,
        burn_time: Time,
    ) -> Result<Self, DomainError> {
        if self.quantity != ProfileQuantity::HeatFlux {
            return Err(DomainError::NotAHeatFluxProfile);
        }

        let fluxes: Vec<_> = self
            .values
            .iter()
            .map(|&q| HeatFluxDensity::new::<watt_per_square_meter>(q))
            .collect();
        let temperatures = deflector.hotspot_profile(&fluxes, burn_time)?;

        Ok(Self {
            quantity: ProfileQuantity::SurfaceTemperature,
            distances: self.distances.clone(),
            values: temperatures
                .iter()
                .map(|t| t.get::<kelvin>())
                .collect(),
            diagnostics: self.diagnostics.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::meter, time::second};

    use crate::models::aerothermal::impingement::core::test_support::deflector;

    fn flux_profile() -> SurfaceProfile {
        SurfaceProfile::new(
            ProfileQuantity::HeatFlux,
            vec![Length::new::<meter>(0.0), Length::new::<meter>(0.1)],
            vec![1.0e6, 0.0],
            Vec::new(),
        )
    }

    #[test]
    fn unit_labels_round_trip() {
        for quantity in [ProfileQuantity::HeatFlux, ProfileQuantity::SurfaceTemperature] {
            assert_eq!(
                ProfileQuantity::from_unit_label(quantity.unit_label()),
                Some(quantity)
            );
        }
        assert_eq!(ProfileQuantity::from_unit_label("psi"), None);
    }

    #[test]
    fn samples_pair_distances_with_values() {
        let samples: Vec<_> = flux_profile().samples().collect();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].distance, Length::new::<meter>(0.1));
        assert_eq!(samples[1].value, 0.0);
    }

    #[test]
    fn converts_flux_to_surface_temperature() {
        let temperature = flux_profile()
            .to_surface_temperature(&deflector(), Time::new::<second>(1.0))
            .unwrap();

        assert_eq!(temperature.quantity(), ProfileQuantity::SurfaceTemperature);
        assert_eq!(temperature.distances(), flux_profile().distances());
        assert_relative_eq!(temperature.values()[0], 434.197_396, max_relative = 1e-9);
        assert_relative_eq!(temperature.values()[1], 293.15);
    }

    #[test]
    fn temperature_profiles_cannot_be_converted_again() {
        let deflector = deflector();
        let time = Time::new::<second>(1.0);
        let temperature = flux_profile()
            .to_surface_temperature(&deflector, time)
            .unwrap();
        assert_eq!(
            temperature.to_surface_temperature(&deflector, time),
            Err(DomainError::NotAHeatFluxProfile)
        );
    }
}
