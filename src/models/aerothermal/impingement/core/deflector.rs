use uom::si::{
    angle::degree,
    f64::{
        Angle, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::DomainError;

/// Ambient surface temperature used when none is configured.
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 293.15;

/// Operator-supplied deflector parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeflectorConfig {
    /// Angle between the plume axis and the deflector surface.
    pub impingement_angle: Angle,
    /// Distance from the nozzle exit to the deflector along the plume axis.
    pub standoff: Length,
    pub thermal_conductivity: ThermalConductivity,
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    /// Characteristic length of the deflector surface.
    pub diameter: Length,
    pub curvature_radius: Option<Length>,
    pub inlet_length: Option<Length>,
    pub outlet_length: Option<Length>,
    /// Surface temperature before the burn, 293.15 K when unset.
    pub initial_temperature: Option<ThermodynamicTemperature>,
}

/// A validated flame deflector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deflector {
    impingement_angle: Angle,
    standoff: Constrained<Length, NonNegative>,
    thermal_conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    density: Constrained<MassDensity, StrictlyPositive>,
    specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    diameter: Constrained<Length, StrictlyPositive>,
    curvature_radius: Option<Constrained<Length, StrictlyPositive>>,
    inlet_length: Option<Constrained<Length, StrictlyPositive>>,
    outlet_length: Option<Constrained<Length, StrictlyPositive>>,
    initial_temperature: ThermodynamicTemperature,
}

impl Deflector {
    /// Validates a deflector configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the impingement angle is outside
    /// `[0°, 90°)`, the standoff is negative, or any material or geometric
    /// parameter is not strictly positive.
    pub fn new(config: DeflectorConfig) -> Result<Self, DomainError> {
        let angle = config.impingement_angle.get::<degree>();
        if !(0.0..90.0).contains(&angle) {
            return Err(DomainError::ImpingementAngle(config.impingement_angle));
        }
        let standoff = DomainError::at_least_zero("standoff", config.standoff)?;
        let thermal_conductivity =
            DomainError::strictly_positive("deflector conductivity", config.thermal_conductivity)?;
        let density = DomainError::strictly_positive("deflector density", config.density)?;
        let specific_heat =
            DomainError::strictly_positive("deflector specific heat", config.specific_heat)?;
        let diameter = DomainError::strictly_positive("deflector diameter", config.diameter)?;
        let optional = |name: &'static str, length: Option<Length>| {
            length
                .map(|length| DomainError::strictly_positive(name, length))
                .transpose()
        };
        let curvature_radius = optional("curvature radius", config.curvature_radius)?;
        let inlet_length = optional("inlet length", config.inlet_length)?;
        let outlet_length = optional("outlet length", config.outlet_length)?;

        let initial_temperature = config.initial_temperature.unwrap_or_else(|| {
            ThermodynamicTemperature::new::<kelvin>(DEFAULT_INITIAL_TEMPERATURE)
        });
        DomainError::positive("initial temperature", initial_temperature.get::<kelvin>())?;

        Ok(Self {
            impingement_angle: config.impingement_angle,
            standoff,
            thermal_conductivity,
            density,
            specific_heat,
            diameter,
            curvature_radius,
            inlet_length,
            outlet_length,
            initial_temperature,
        })
    }

    #[must_use]
    pub fn impingement_angle(&self) -> Angle {
        self.impingement_angle
    }

    #[must_use]
    pub fn standoff(&self) -> Length {
        self.standoff.get()
    }

    #[must_use]
    pub fn thermal_conductivity(&self) -> ThermalConductivity {
        self.thermal_conductivity.get()
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density.get()
    }

    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat.get()
    }

    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter.get()
    }

    #[must_use]
    pub fn curvature_radius(&self) -> Option<Length> {
        self.curvature_radius.map(|length| length.get())
    }

    #[must_use]
    pub fn inlet_length(&self) -> Option<Length> {
        self.inlet_length.map(|length| length.get())
    }

    #[must_use]
    pub fn outlet_length(&self) -> Option<Length> {
        self.outlet_length.map(|length| length.get())
    }

    #[must_use]
    pub fn initial_temperature(&self) -> ThermodynamicTemperature {
        self.initial_temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::millimeter, mass_density::kilogram_per_cubic_meter};

    use crate::models::aerothermal::impingement::core::test_support::deflector_config;
    use crate::support::constraint::ConstraintError;

    #[test]
    fn defaults_initial_temperature_to_ambient() {
        let deflector = Deflector::new(deflector_config()).unwrap();
        assert_relative_eq!(deflector.initial_temperature().get::<kelvin>(), 293.15);
    }

    #[test]
    fn impingement_angle_must_be_below_ninety_degrees() {
        let mut config = deflector_config();
        config.impingement_angle = Angle::new::<degree>(90.0);
        assert!(matches!(
            Deflector::new(config),
            Err(DomainError::ImpingementAngle(_))
        ));

        config.impingement_angle = Angle::new::<degree>(-1.0);
        assert!(Deflector::new(config).is_err());

        config.impingement_angle = Angle::new::<degree>(0.0);
        assert!(Deflector::new(config).is_ok());
    }

    #[test]
    fn rejects_non_physical_material() {
        let mut config = deflector_config();
        config.density = MassDensity::new::<kilogram_per_cubic_meter>(-8000.0);
        assert_eq!(
            Deflector::new(config),
            Err(DomainError::InvalidParameter {
                name: "deflector density",
                source: ConstraintError::Negative,
            })
        );
    }

    #[test]
    fn optional_lengths_are_validated_when_present() {
        let mut config = deflector_config();
        config.inlet_length = Some(Length::new::<millimeter>(400.0));
        let deflector = Deflector::new(config).unwrap();
        assert_eq!(
            deflector.inlet_length(),
            Some(Length::new::<millimeter>(400.0))
        );
        assert_eq!(deflector.outlet_length(), None);

        config.outlet_length = Some(Length::new::<millimeter>(0.0));
        assert_eq!(
            Deflector::new(config),
            Err(DomainError::InvalidParameter {
                name: "outlet length",
                source: ConstraintError::Zero,
            })
        );

        let mut config = deflector_config();
        config.standoff = Length::new::<millimeter>(0.0);
        assert!(Deflector::new(config).is_ok());
        config.standoff = Length::new::<millimeter>(-1.0);
        assert!(Deflector::new(config).is_err());
    }
}
