use serde::{Deserialize, Serialize};

use crate::quantity::KilometersPerLiter;

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    clap::ValueEnum,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
pub enum UnitType {
    /// Tractor with a semi-trailer.
    Trailer,

    /// Rigid three-axle truck.
    Torton,
}

impl UnitType {
    /// Fuel efficiency assumed when the user does not provide one.
    #[must_use]
    pub const fn default_fuel_efficiency(self) -> KilometersPerLiter {
        match self {
            Self::Trailer => KilometersPerLiter(2.5),
            Self::Torton => KilometersPerLiter(3.5),
        }
    }
}
