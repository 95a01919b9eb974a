use uom::{
    si::{
        ISQ, Quantity, SI, f64::MolarMass, molar_mass::kilogram_per_mole,
        specific_heat_capacity::joule_per_kilogram_kelvin,
    },
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Universal gas constant, J/mol·K.
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314_462_618;

/// Returns the specific gas constant `R = R_u / MW` for a molecular weight.
#[must_use]
pub fn specific_gas_constant(molecular_weight: MolarMass) -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(
        UNIVERSAL_GAS_CONSTANT / molecular_weight.get::<kilogram_per_mole>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::molar_mass::gram_per_mole;

    #[test]
    fn air_gas_constant_from_molecular_weight() {
        let r = specific_gas_constant(MolarMass::new::<gram_per_mole>(28.965));
        assert_relative_eq!(
            r.get::<joule_per_kilogram_kelvin>(),
            287.05,
            max_relative = 1e-4
        );
    }
}
