use std::fmt;

use uom::si::f64::{Pressure, ThermodynamicTemperature, Velocity};

/// Where along the plume a [`FlowState`] was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Station {
    /// Nozzle exit plane.
    Exit,
    /// Plume centerline at the deflector standoff, ahead of the shock.
    Impingement,
    /// Downstream of the weak oblique shock at the deflector surface.
    PostShock,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exit => f.write_str("exit"),
            Self::Impingement => f.write_str("impingement"),
            Self::PostShock => f.write_str("post-shock"),
        }
    }
}

/// Static gas state at a [`Station`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub station: Station,
    pub velocity: Velocity,
    pub mach: f64,
    pub static_temperature: ThermodynamicTemperature,
    pub static_pressure: Pressure,
    pub speed_of_sound: Velocity,
}
