#[macro_use]
mod macros;

pub mod distance;
pub mod fuel;
pub mod money;
pub mod time;

pub use self::{
    distance::Kilometers,
    fuel::{KilometersPerLiter, Liters},
    money::{Pesos, PesosPerKilometer, PesosPerLiter},
    time::Days,
};
