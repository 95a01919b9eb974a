use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values (absolute temperatures)
/// yields a [`TemperatureInterval`] (temperature difference). [`uom`] does not
/// provide this directly; see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn gas_to_wall_difference() {
        let t_gas = ThermodynamicTemperature::new::<abs_kelvin>(1059.0);
        let t_wall = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        assert_relative_eq!(t_gas.minus(t_wall).get::<delta_kelvin>(), 765.85);
        assert_relative_eq!(
            t_wall.minus(t_gas).get::<delta_celsius>(),
            -765.85,
            epsilon = 1e-9
        );
    }
}
