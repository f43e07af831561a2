use crate::quantity::{Kilometers, Liters};

quantity!(
    /// Mexican pesos, the only currency quotes are made in.
    Pesos, via: f64, suffix: "MXN", precision: 2
);

quantity!(PesosPerLiter, via: f64, suffix: "MXN/L", precision: 2);

quantity!(PesosPerKilometer, via: f64, suffix: "MXN/km", precision: 2);

implement_mul!(Liters, PesosPerLiter, Pesos);
implement_mul!(PesosPerKilometer, Kilometers, Pesos);
implement_div!(Pesos, Kilometers, PesosPerKilometer);
