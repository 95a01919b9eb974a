use uom::si::{
    angle::degree,
    dynamic_viscosity::pascal_second,
    f64::{
        Angle, DynamicViscosity, Length, MassDensity, MassRate, MolarMass, Pressure,
        SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature,
    },
    length::millimeter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    molar_mass::gram_per_mole,
    pressure::{atmosphere, megapascal},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{
    DeflectedEngine, Deflector, DeflectorConfig, Engine, EngineConfig, ExpandedEngine, Expansion,
    ExpansionConfig, GasSpec,
};

/// A small engine with a 24 mm throat and a 2:1 nozzle.
pub(crate) fn engine_config() -> EngineConfig {
    let gas = GasSpec::from_molecular_weight(MolarMass::new::<gram_per_mole>(22.0));
    EngineConfig {
        chamber_temperature: ThermodynamicTemperature::new::<kelvin>(1768.7),
        chamber_pressure: Pressure::new::<megapascal>(2.0),
        gamma: 1.279,
        thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.19),
        viscosity: DynamicViscosity::new::<pascal_second>(6.0e-5),
        specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2000.0),
        mass_flow: MassRate::new::<kilogram_per_second>(0.75),
        throat_diameter: Length::new::<millimeter>(24.34),
        exit_diameter: Length::new::<millimeter>(48.77),
        prandtl: 0.63,
        combustor_gas: gas,
        exhaust_gas: gas,
        throat_curvature_radius: None,
    }
}

pub(crate) fn engine() -> Engine {
    Engine::new(engine_config()).expect("fixture engine should be valid")
}

/// The fixture engine expanded to ambient pressure.
pub(crate) fn expanded_engine() -> ExpandedEngine {
    engine()
        .expand(
            Expansion::ExitPressure(Pressure::new::<atmosphere>(1.0)),
            &ExpansionConfig::default(),
        )
        .expect("ambient expansion should succeed")
}

/// A steel plate at 10° and 145 mm standoff.
pub(crate) fn deflector_config() -> DeflectorConfig {
    DeflectorConfig {
        impingement_angle: Angle::new::<degree>(10.0),
        standoff: Length::new::<millimeter>(145.0),
        thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(16.0),
        density: MassDensity::new::<kilogram_per_cubic_meter>(8000.0),
        specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(500.0),
        diameter: Length::new::<millimeter>(127.0),
        curvature_radius: None,
        inlet_length: None,
        outlet_length: None,
        initial_temperature: None,
    }
}

pub(crate) fn deflector() -> Deflector {
    Deflector::new(deflector_config()).expect("fixture deflector should be valid")
}

pub(crate) fn deflected_engine() -> DeflectedEngine {
    expanded_engine()
        .deflect(&deflector())
        .expect("fixture shock should be attached")
}

/// Wall temperature at ambient.
pub(crate) fn wall() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(293.15)
}
