use crate::quantity::Kilometers;

quantity!(Liters, via: f64, suffix: "L", precision: 1);

quantity!(
    /// Fuel efficiency of a unit.
    KilometersPerLiter, via: f64, suffix: "km/L", precision: 2
);

implement_div!(Kilometers, KilometersPerLiter, Liters);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_liters_consumed() {
        let liters = Kilometers(500.0) / KilometersPerLiter(2.5);
        assert_abs_diff_eq!(liters.0, 200.0);
    }
}
