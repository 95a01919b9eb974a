//! Assembly of one heat-flux profile from the three correlations.
//!
//! The deflector is sampled on a uniform [`Grid`]. Samples ahead of the
//! boundary-layer band carry the Eckert flux, samples inside it carry the
//! Evans flux. Two scans then reconcile the regimes:
//!
//! 1. Outward from the band start, every sample above Eckert is clamped to it.
//! 2. Inward from the far end, every sample below Bartz is raised to it.
//!
//! Disagreement between correlations is reported as a [`Diagnostic`], never
//! as an error.

use uom::si::{
    f64::{HeatFluxDensity, Length},
    heat_flux_density::watt_per_square_meter,
    length::meter,
};

use super::{DomainError, ProfileQuantity, SurfaceProfile};

/// Slack for floating-point division when locating the band start.
const INDEX_SLACK: f64 = 1e-9;

/// Uniform sampling of the deflector surface from the impingement point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    length: Length,
    start: Length,
    step: Length,
    samples: usize,
    band_start: usize,
}

impl Grid {
    /// Creates a grid over `[0, length]` whose boundary-layer band begins at
    /// the first sample at or beyond `start`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidGrid`] unless `step > 0`,
    /// `length ≥ step` and `0 < start ≤ length`, with at least one sample in
    /// the band.
    pub fn new(length: Length, start: Length, step: Length) -> Result<Self, DomainError> {
        let (l, s, h) = (
            length.get::<meter>(),
            start.get::<meter>(),
            step.get::<meter>(),
        );
        if h.is_nan() || h <= 0.0 {
            return Err(DomainError::InvalidGrid("step must be positive"));
        }
        if l.is_nan() || l < h {
            return Err(DomainError::InvalidGrid("length must be at least one step"));
        }
        if s.is_nan() || s <= 0.0 || s > l {
            return Err(DomainError::InvalidGrid("band start must lie in (0, length]"));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (samples, band_start) = (
            (l / h).round() as usize + 1,
            (s / h - INDEX_SLACK).ceil() as usize,
        );
        if band_start >= samples {
            return Err(DomainError::InvalidGrid("band start lies beyond the last sample"));
        }

        Ok(Self {
            length,
            start,
            step,
            samples,
            band_start,
        })
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn start(&self) -> Length {
        self.start
    }

    #[must_use]
    pub fn step(&self) -> Length {
        self.step
    }

    /// Number of samples, including the impingement point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples
    }

    /// Always false: a valid grid has at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Index of the first sample in the boundary-layer band.
    #[must_use]
    pub fn band_start(&self) -> usize {
        self.band_start
    }

    /// Every sample distance, `x_i = i·step`.
    #[must_use]
    pub fn distances(&self) -> Vec<Length> {
        self.distances_from(0)
    }

    /// Sample distances inside the boundary-layer band.
    #[must_use]
    pub fn band_distances(&self) -> Vec<Length> {
        self.distances_from(self.band_start)
    }

    #[allow(clippy::cast_precision_loss)]
    fn distances_from(&self, first: usize) -> Vec<Length> {
        (first..self.samples)
            .map(|i| self.step * i as f64)
            .collect()
    }
}

/// Settings for the regime stitcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StitchConfig {
    /// Relative deviation from Eckert above which the near-field Evans mean
    /// is flagged.
    pub disagreement_threshold: f64,

    /// Leading fraction of the band treated as the near field.
    pub near_field_fraction: f64,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            disagreement_threshold: 0.2,
            near_field_fraction: 0.25,
        }
    }
}

/// Advisory findings from stitching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// The last Evans sample is still above the Bartz floor, so the grid does
    /// not reach the far-field regime.
    RegimeMismatch {
        last_evans: HeatFluxDensity,
        bartz: HeatFluxDensity,
    },

    /// A correlation departs from the Eckert reference by more than the
    /// threshold.
    ModelDisagreement {
        eckert: HeatFluxDensity,
        candidate: HeatFluxDensity,
        deviation: f64,
    },
}

/// Raw correlation outputs for one engine and deflector.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationFluxes<'a> {
    /// Near-field flux over the whole deflector.
    pub eckert: HeatFluxDensity,
    /// Boundary-layer flux at each band sample.
    pub evans: &'a [HeatFluxDensity],
    /// Far-field floor.
    pub bartz: HeatFluxDensity,
}

/// Flags `candidate` if it deviates from `eckert` by more than `threshold`,
/// relative to `eckert`.
///
/// ```
/// use twine_plume::models::aerothermal::impingement::model_disagreement;
/// use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter};
///
/// let q = |v| HeatFluxDensity::new::<watt_per_square_meter>(v);
/// assert!(model_disagreement(q(100.0), q(115.0), 0.2).is_none());
/// assert!(model_disagreement(q(100.0), q(125.0), 0.2).is_some());
/// ```
#[must_use]
pub fn model_disagreement(
    eckert: HeatFluxDensity,
    candidate: HeatFluxDensity,
    threshold: f64,
) -> Option<Diagnostic> {
    let reference = eckert.get::<watt_per_square_meter>();
    let difference = (candidate.get::<watt_per_square_meter>() - reference).abs();
    let deviation = if reference == 0.0 {
        // Any nonzero candidate is a total disagreement with a zero reference.
        if difference == 0.0 { 0.0 } else { f64::INFINITY }
    } else {
        difference / reference.abs()
    };
    (deviation > threshold).then_some(Diagnostic::ModelDisagreement {
        eckert,
        candidate,
        deviation,
    })
}

/// Stitches the correlation outputs into a heat-flux profile over `grid`.
///
/// # Errors
///
/// Returns [`DomainError::BandLengthMismatch`] if `fluxes.evans` does not
/// hold exactly one value per band sample.
pub fn stitch(
    fluxes: &CorrelationFluxes<'_>,
    grid: &Grid,
    config: &StitchConfig,
) -> Result<SurfaceProfile, DomainError> {
    let band = grid.band_start();
    let expected = grid.len() - band;
    if fluxes.evans.len() != expected {
        return Err(DomainError::BandLengthMismatch {
            expected,
            actual: fluxes.evans.len(),
        });
    }

    let mut values = vec![fluxes.eckert; band];
    values.extend_from_slice(fluxes.evans);

    for value in &mut values[band..] {
        if *value > fluxes.eckert {
            *value = fluxes.eckert;
        }
    }

    for value in values.iter_mut().rev() {
        if *value < fluxes.bartz {
            *value = fluxes.bartz;
        }
    }

    let diagnostics = diagnose(fluxes, config);
    for diagnostic in &diagnostics {
        log::warn!("{diagnostic:?}");
    }

    Ok(SurfaceProfile::new(
        ProfileQuantity::HeatFlux,
        grid.distances(),
        values
            .iter()
            .map(|q| q.get::<watt_per_square_meter>())
            .collect(),
        diagnostics,
    ))
}

fn diagnose(fluxes: &CorrelationFluxes<'_>, config: &StitchConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if let Some(&last_evans) = fluxes.evans.last() {
        if last_evans > fluxes.bartz {
            diagnostics.push(Diagnostic::RegimeMismatch {
                last_evans,
                bartz: fluxes.bartz,
            });
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let near_field = ((fluxes.evans.len() as f64 * config.near_field_fraction).floor() as usize)
        .max(1)
        .min(fluxes.evans.len());
    let near = &fluxes.evans[..near_field];
    if !near.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let mean = near
            .iter()
            .map(|q| q.get::<watt_per_square_meter>())
            .sum::<f64>()
            / near.len() as f64;
        diagnostics.extend(model_disagreement(
            fluxes.eckert,
            HeatFluxDensity::new::<watt_per_square_meter>(mean),
            config.disagreement_threshold,
        ));
    }

    diagnostics
}
