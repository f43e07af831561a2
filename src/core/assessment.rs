use comfy_table::Color;

use crate::{
    core::engine::CalculationResult,
    quantity::{Pesos, PesosPerKilometer},
};

/// Traffic-light rating of a quote by its profit per kilometer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Rating {
    /// Above 12 pesos per kilometer.
    Optimal,

    /// 10 to 12 pesos per kilometer.
    Regular,

    Low,
}

impl Rating {
    pub const fn color(self) -> Color {
        match self {
            Self::Optimal => Color::Green,
            Self::Regular => Color::DarkYellow,
            Self::Low => Color::Red,
        }
    }
}

impl From<PesosPerKilometer> for Rating {
    fn from(profit_per_km: PesosPerKilometer) -> Self {
        if profit_per_km > PesosPerKilometer(12.0) {
            Self::Optimal
        } else if profit_per_km >= PesosPerKilometer(10.0) {
            Self::Regular
        } else {
            Self::Low
        }
    }
}

/// Derived profitability figures, for display only.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Assessment {
    /// Freight price per effective kilometer.
    pub freight_rate: PesosPerKilometer,

    /// Profit as a fraction of the freight price.
    pub margin: f64,

    /// Percent above (positive) or below the general rate, when one was given.
    pub general_rate_difference: Option<f64>,

    pub rating: Rating,
}

impl From<&CalculationResult> for Assessment {
    fn from(result: &CalculationResult) -> Self {
        let inputs = &result.inputs;
        let freight_rate = if result.route.distance_km.0 > 0.0 {
            inputs.freight_price / result.route.distance_km
        } else {
            PesosPerKilometer::ZERO
        };
        let margin = if inputs.freight_price > Pesos::ZERO {
            result.costs.profit / inputs.freight_price
        } else {
            0.0
        };
        let general_rate_difference = inputs
            .has_general_rate()
            .then(|| (inputs.freight_price / inputs.general_rate - 1.0) * 100.0);
        Self { freight_rate, margin, general_rate_difference, rating: result.costs.profit_per_km.into() }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{
            engine::compute_quote,
            route::RouteInfo,
            trip::{Defaults, TripRequest},
        },
        quantity::Kilometers,
    };

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(Rating::from(PesosPerKilometer(12.01)), Rating::Optimal);
        assert_eq!(Rating::from(PesosPerKilometer(12.0)), Rating::Regular);
        assert_eq!(Rating::from(PesosPerKilometer(10.0)), Rating::Regular);
        assert_eq!(Rating::from(PesosPerKilometer(9.99)), Rating::Low);
        assert_eq!(Rating::from(PesosPerKilometer(-3.0)), Rating::Low);
    }

    #[test]
    fn test_assessment() {
        let input = TripRequest::builder()
            .origin("Monterrey")
            .destination("Saltillo")
            .freight_price(Pesos(20_000.0))
            .general_rate(Pesos(16_000.0))
            .tolls(Pesos(300.0))
            .build()
            .normalize(&Defaults::default())
            .unwrap();
        let result = compute_quote(&input, RouteInfo::manual(Kilometers(500.0))).unwrap();
        let assessment = Assessment::from(&result);
        assert_abs_diff_eq!(assessment.freight_rate.0, 40.0);
        assert_abs_diff_eq!(assessment.margin, result.costs.profit.0 / 20_000.0);
        assert_abs_diff_eq!(assessment.general_rate_difference.unwrap(), 25.0, epsilon = 1e-9);
        assert_eq!(assessment.rating, Rating::Optimal);
    }

    #[test]
    fn test_no_general_rate() {
        let input = TripRequest::builder()
            .origin("Monterrey")
            .destination("Saltillo")
            .freight_price(Pesos(1000.0))
            .build()
            .normalize(&Defaults::default())
            .unwrap();
        let result = compute_quote(&input, RouteInfo::manual(Kilometers(100.0))).unwrap();
        assert!(Assessment::from(&result).general_rate_difference.is_none());
    }
}
