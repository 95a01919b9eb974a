use uom::si::{
    f64::{
        DynamicViscosity, Length, MassRate, MolarMass, Pressure, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    molar_mass::kilogram_per_mole,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{AboveUnity, Constrained, StrictlyPositive},
    units::{SpecificGasConstant, specific_gas_constant},
};

use super::{ConfigurationError, DomainError, EngineError, GasRegion};

/// Gas description for one region of the engine.
///
/// At least one of the fields must be set. When both are set the gas
/// constant is used and the molecular weight is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GasSpec {
    pub molecular_weight: Option<MolarMass>,
    pub gas_constant: Option<SpecificGasConstant>,
}

impl GasSpec {
    /// Describes a gas by its molecular weight.
    #[must_use]
    pub fn from_molecular_weight(molecular_weight: MolarMass) -> Self {
        Self {
            molecular_weight: Some(molecular_weight),
            gas_constant: None,
        }
    }

    /// Describes a gas by its specific gas constant.
    #[must_use]
    pub fn from_gas_constant(gas_constant: SpecificGasConstant) -> Self {
        Self {
            molecular_weight: None,
            gas_constant: Some(gas_constant),
        }
    }

    fn resolve(&self, region: GasRegion) -> Result<SpecificGasConstant, EngineError> {
        let name = match region {
            GasRegion::Combustor => "combustor gas constant",
            GasRegion::Exhaust => "exhaust gas constant",
        };
        match (self.gas_constant, self.molecular_weight) {
            (Some(r), _) => {
                DomainError::positive(name, r.get::<joule_per_kilogram_kelvin>())?;
                Ok(r)
            }
            (None, Some(mw)) => {
                DomainError::positive(name, mw.get::<kilogram_per_mole>())?;
                Ok(specific_gas_constant(mw))
            }
            (None, None) => Err(ConfigurationError::MissingGasProperties { region }.into()),
        }
    }
}

/// Operator-supplied engine parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Chamber stagnation temperature.
    pub chamber_temperature: ThermodynamicTemperature,
    /// Chamber stagnation pressure.
    pub chamber_pressure: Pressure,
    /// Ratio of specific heats, γ.
    pub gamma: f64,
    pub thermal_conductivity: ThermalConductivity,
    pub viscosity: DynamicViscosity,
    pub specific_heat: SpecificHeatCapacity,
    pub mass_flow: MassRate,
    pub throat_diameter: Length,
    pub exit_diameter: Length,
    pub prandtl: f64,
    pub combustor_gas: GasSpec,
    pub exhaust_gas: GasSpec,
    /// Radius of curvature of the throat contour, for the Bartz correlation.
    pub throat_curvature_radius: Option<Length>,
}

/// A validated rocket engine.
///
/// An engine is immutable configuration. Exit and post-shock states live on
/// [`ExpandedEngine`](super::ExpandedEngine) and
/// [`DeflectedEngine`](super::DeflectedEngine), which can only be obtained by
/// running [`Engine::expand`] and then
/// [`ExpandedEngine::deflect`](super::ExpandedEngine::deflect).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    chamber_temperature: ThermodynamicTemperature,
    chamber_pressure: Constrained<Pressure, StrictlyPositive>,
    gamma: Constrained<f64, AboveUnity>,
    thermal_conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    viscosity: Constrained<DynamicViscosity, StrictlyPositive>,
    specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    mass_flow: Constrained<MassRate, StrictlyPositive>,
    throat_diameter: Constrained<Length, StrictlyPositive>,
    exit_diameter: Constrained<Length, StrictlyPositive>,
    prandtl: Constrained<f64, StrictlyPositive>,
    combustor_gas_constant: SpecificGasConstant,
    exhaust_gas_constant: SpecificGasConstant,
    throat_curvature_radius: Option<Constrained<Length, StrictlyPositive>>,
}

impl Engine {
    /// Validates an engine configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] if a gas region has neither a
    /// molecular weight nor a gas constant, and [`EngineError::Domain`] if any
    /// parameter is non-physical (non-positive, or `γ ≤ 1`).
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        DomainError::positive(
            "chamber temperature",
            config.chamber_temperature.get::<kelvin>(),
        )?;
        let chamber_pressure =
            DomainError::strictly_positive("chamber pressure", config.chamber_pressure)?;
        let gamma = AboveUnity::new(config.gamma).map_err(|source| {
            DomainError::InvalidParameter {
                name: "ratio of specific heats",
                source,
            }
        })?;
        let thermal_conductivity =
            DomainError::strictly_positive("thermal conductivity", config.thermal_conductivity)?;
        let viscosity = DomainError::strictly_positive("viscosity", config.viscosity)?;
        let specific_heat = DomainError::strictly_positive("specific heat", config.specific_heat)?;
        let mass_flow = DomainError::strictly_positive("mass flow", config.mass_flow)?;
        let throat_diameter =
            DomainError::strictly_positive("throat diameter", config.throat_diameter)?;
        let exit_diameter = DomainError::strictly_positive("exit diameter", config.exit_diameter)?;
        let prandtl = DomainError::strictly_positive("Prandtl number", config.prandtl)?;
        let throat_curvature_radius = config
            .throat_curvature_radius
            .map(|radius| DomainError::strictly_positive("throat curvature radius", radius))
            .transpose()?;

        let combustor_gas_constant = config.combustor_gas.resolve(GasRegion::Combustor)?;
        let exhaust_gas_constant = config.exhaust_gas.resolve(GasRegion::Exhaust)?;

        Ok(Self {
            chamber_temperature: config.chamber_temperature,
            chamber_pressure,
            gamma,
            thermal_conductivity,
            viscosity,
            specific_heat,
            mass_flow,
            throat_diameter,
            exit_diameter,
            prandtl,
            combustor_gas_constant,
            exhaust_gas_constant,
            throat_curvature_radius,
        })
    }

    #[must_use]
    pub fn chamber_temperature(&self) -> ThermodynamicTemperature {
        self.chamber_temperature
    }

    #[must_use]
    pub fn chamber_pressure(&self) -> Pressure {
        self.chamber_pressure.get()
    }

    /// Ratio of specific heats, always greater than one.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma.get()
    }

    #[must_use]
    pub fn thermal_conductivity(&self) -> ThermalConductivity {
        self.thermal_conductivity.get()
    }

    #[must_use]
    pub fn viscosity(&self) -> DynamicViscosity {
        self.viscosity.get()
    }

    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat.get()
    }

    #[must_use]
    pub fn mass_flow(&self) -> MassRate {
        self.mass_flow.get()
    }

    #[must_use]
    pub fn throat_diameter(&self) -> Length {
        self.throat_diameter.get()
    }

    #[must_use]
    pub fn exit_diameter(&self) -> Length {
        self.exit_diameter.get()
    }

    #[must_use]
    pub fn prandtl(&self) -> f64 {
        self.prandtl.get()
    }

    #[must_use]
    pub fn combustor_gas_constant(&self) -> SpecificGasConstant {
        self.combustor_gas_constant
    }

    #[must_use]
    pub fn exhaust_gas_constant(&self) -> SpecificGasConstant {
        self.exhaust_gas_constant
    }

    #[must_use]
    pub fn throat_curvature_radius(&self) -> Option<Length> {
        self.throat_curvature_radius.map(|radius| radius.get())
    }

    /// Exit-to-throat area ratio implied by the nozzle diameters.
    #[must_use]
    pub fn geometric_area_ratio(&self) -> f64 {
        (self.exit_diameter() / self.throat_diameter())
            .get::<ratio>()
            .powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second, length::millimeter, molar_mass::gram_per_mole,
        pressure::megapascal,
    };

    use crate::models::aerothermal::impingement::core::test_support::engine_config;
    use crate::support::constraint::ConstraintError;

    #[test]
    fn derives_gas_constants_from_molecular_weight() {
        let engine = Engine::new(engine_config()).unwrap();
        assert_relative_eq!(
            engine.exhaust_gas_constant().get::<joule_per_kilogram_kelvin>(),
            8.314_462_618 / 0.022,
            max_relative = 1e-12
        );
    }

    #[test]
    fn gas_constant_takes_precedence_over_molecular_weight() {
        let mut config = engine_config();
        config.combustor_gas = GasSpec {
            molecular_weight: Some(MolarMass::new::<gram_per_mole>(10.0)),
            gas_constant: Some(SpecificGasConstant::new::<joule_per_kilogram_kelvin>(350.0)),
        };

        let engine = Engine::new(config).unwrap();
        assert_relative_eq!(
            engine
                .combustor_gas_constant()
                .get::<joule_per_kilogram_kelvin>(),
            350.0
        );
    }

    #[test]
    fn missing_gas_properties_are_a_configuration_error() {
        let mut config = engine_config();
        config.exhaust_gas = GasSpec::default();

        assert_eq!(
            Engine::new(config),
            Err(EngineError::Configuration(
                ConfigurationError::MissingGasProperties {
                    region: GasRegion::Exhaust
                }
            ))
        );
    }

    #[test]
    fn rejects_non_physical_parameters() {
        let mut config = engine_config();
        config.viscosity = DynamicViscosity::new::<pascal_second>(0.0);
        assert_eq!(
            Engine::new(config),
            Err(EngineError::Domain(DomainError::InvalidParameter {
                name: "viscosity",
                source: ConstraintError::Zero,
            }))
        );

        let mut config = engine_config();
        config.gamma = 1.0;
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::Domain(DomainError::InvalidParameter {
                source: ConstraintError::BelowMinimum,
                ..
            }))
        ));

        let mut config = engine_config();
        config.chamber_temperature = ThermodynamicTemperature::new::<kelvin>(-5.0);
        assert!(Engine::new(config).is_err());
    }

    #[test]
    fn validated_inputs_are_returned_unchanged() {
        let mut config = engine_config();
        config.throat_curvature_radius = Some(Length::new::<millimeter>(30.0));
        let engine = Engine::new(config).unwrap();

        assert_eq!(engine.chamber_pressure(), Pressure::new::<megapascal>(2.0));
        assert_eq!(engine.viscosity(), config.viscosity);
        assert_eq!(engine.throat_diameter(), config.throat_diameter);
        assert_eq!(
            engine.throat_curvature_radius(),
            Some(Length::new::<millimeter>(30.0))
        );
        assert_relative_eq!(engine.prandtl(), 0.63);
    }

    #[test]
    fn rejects_negative_pressure_and_curvature() {
        let mut config = engine_config();
        config.chamber_pressure = Pressure::new::<megapascal>(-1.0);
        assert_eq!(
            Engine::new(config),
            Err(EngineError::Domain(DomainError::InvalidParameter {
                name: "chamber pressure",
                source: ConstraintError::Negative,
            }))
        );

        let mut config = engine_config();
        config.throat_curvature_radius = Some(Length::new::<millimeter>(-1.0));
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::Domain(DomainError::InvalidParameter {
                name: "throat curvature radius",
                ..
            }))
        ));
    }

    #[test]
    fn geometric_area_ratio_from_diameters() {
        let engine = Engine::new(engine_config()).unwrap();
        assert_relative_eq!(
            engine.geometric_area_ratio(),
            (48.77_f64 / 24.34).powi(2),
            max_relative = 1e-12
        );
    }
}
