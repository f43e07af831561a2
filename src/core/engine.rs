//! Trip cost engine.
//!
//! Pure and deterministic: the same trip and route always yield the same breakdown.

use serde::{Deserialize, Serialize};

use crate::{
    core::{error::QuoteError, route::RouteInfo, trip::TripInput},
    quantity::{Kilometers, Liters, Pesos, PesosPerKilometer},
};

/// Share of the freight price charged as administration overhead.
pub const ADMIN_PERCENTAGE: f64 = 0.12;

/// Share of the freight price left after diesel that goes to the operator.
pub const OPERATOR_SALARY_RATE: f64 = 0.20;

/// Operator bonus: 2000 pesos per 8333 kilometers driven.
pub const BONUS_FACTOR: PesosPerKilometer = PesosPerKilometer(2000.0 / 8333.0);

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub diesel_cost: Pesos,
    pub tolls_cost: Pesos,
    pub operator_salary: Pesos,
    pub operator_bonus: Pesos,
    pub admin_cost: Pesos,

    /// Exact sum of the five costs above, never rounded.
    pub total_expenses: Pesos,

    /// May be negative.
    pub profit: Pesos,

    pub profit_per_km: PesosPerKilometer,
    pub liters_consumed: Liters,
}

/// One computed quote.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Carries the effective, round-trip adjusted distance.
    pub route: RouteInfo,

    pub costs: CostBreakdown,
    pub inputs: TripInput,
}

/// Compute the cost breakdown of a trip over an already resolved route.
///
/// The route distance is one-way: it gets doubled for round trips, and the returned route
/// carries the doubled value.
pub fn compute_quote(
    input: &TripInput,
    mut route: RouteInfo,
) -> Result<CalculationResult, QuoteError> {
    if !input.freight_price.is_finite() || input.freight_price <= Pesos::ZERO {
        return Err(QuoteError::InvalidInput("the freight price must be positive"));
    }
    if !input.fuel_efficiency.is_finite() || input.fuel_efficiency.0 <= 0.0 {
        return Err(QuoteError::InvalidInput("the fuel efficiency must be positive"));
    }

    let effective_km =
        if input.is_round_trip { route.distance_km.doubled() } else { route.distance_km };
    if !effective_km.is_finite() || effective_km <= Kilometers::ZERO {
        return Err(QuoteError::InvalidDistance(effective_km));
    }
    let effective_tolls = if input.is_round_trip { input.tolls * 2.0 } else { input.tolls };

    let liters_consumed = effective_km / input.fuel_efficiency;
    let diesel_cost = liters_consumed * input.diesel_price;

    // Operator pay never goes negative, even when diesel eats the whole freight.
    let salary_base = (input.freight_price - diesel_cost).max(Pesos::ZERO);
    let operator_salary = salary_base * OPERATOR_SALARY_RATE;
    let operator_bonus = BONUS_FACTOR * effective_km;
    let admin_cost = input.freight_price * ADMIN_PERCENTAGE;
    let total_expenses =
        admin_cost + operator_bonus + operator_salary + effective_tolls + diesel_cost;

    let profit = input.freight_price - total_expenses;
    let profit_per_km =
        if effective_km > Kilometers::ZERO { profit / effective_km } else { PesosPerKilometer::ZERO };

    route.distance_km = effective_km;
    Ok(CalculationResult {
        route,
        costs: CostBreakdown {
            diesel_cost,
            tolls_cost: effective_tolls,
            operator_salary,
            operator_bonus,
            admin_cost,
            total_expenses,
            profit,
            profit_per_km,
            liters_consumed,
        },
        inputs: input.clone(),
    })
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::{
        core::{
            trip::{Defaults, TripRequest},
            unit_type::UnitType,
        },
        quantity::{KilometersPerLiter, PesosPerLiter},
    };

    fn input(is_round_trip: bool) -> TripInput {
        TripRequest::builder()
            .origin("Monterrey, Nuevo León")
            .destination("San Luis Potosí, San Luis Potosí")
            .freight_price(Pesos(20_000.0))
            .manual_distance(Kilometers(500.0))
            .is_round_trip(is_round_trip)
            .tolls(Pesos(300.0))
            .diesel_price(PesosPerLiter(29.0))
            .fuel_efficiency(KilometersPerLiter(2.5))
            .build()
            .normalize(&Defaults::default())
            .unwrap()
    }

    fn route(distance: f64) -> RouteInfo {
        RouteInfo::manual(Kilometers(distance))
    }

    #[test]
    fn test_bonus_factor() {
        assert_relative_eq!(BONUS_FACTOR.0 * 8333.0, 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_one_way_scenario() {
        let result = compute_quote(&input(false), route(500.0)).unwrap();
        let costs = result.costs;
        assert_abs_diff_eq!(result.route.distance_km.0, 500.0);
        assert_abs_diff_eq!(costs.liters_consumed.0, 200.0);
        assert_abs_diff_eq!(costs.diesel_cost.0, 5800.0, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.tolls_cost.0, 300.0);
        assert_abs_diff_eq!(costs.operator_salary.0, 2840.0, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.operator_bonus.0, 120.0048, epsilon = 1e-4);
        assert_abs_diff_eq!(costs.admin_cost.0, 2400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.total_expenses.0, 11_460.0048, epsilon = 1e-4);
        assert_abs_diff_eq!(costs.profit.0, 8539.9952, epsilon = 1e-4);
        assert_abs_diff_eq!(costs.profit_per_km.0, 17.08, epsilon = 1e-3);
    }

    #[test]
    fn test_round_trip_scenario() {
        let result = compute_quote(&input(true), route(500.0)).unwrap();
        let costs = result.costs;
        assert_abs_diff_eq!(result.route.distance_km.0, 1000.0);
        assert_abs_diff_eq!(costs.tolls_cost.0, 600.0);
        assert_abs_diff_eq!(costs.liters_consumed.0, 400.0);
        assert_abs_diff_eq!(costs.diesel_cost.0, 11_600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.operator_bonus.0, 240.0096, epsilon = 1e-4);
        assert_abs_diff_eq!(costs.operator_salary.0, 1680.0, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.admin_cost.0, 2400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.total_expenses.0, 16_520.0096, epsilon = 1e-4);
        assert_abs_diff_eq!(costs.profit.0, 3479.9904, epsilon = 1e-4);
    }

    #[test]
    fn test_round_trip_bonus_is_linear() {
        let one_way = compute_quote(&input(false), route(500.0)).unwrap();
        let round_trip = compute_quote(&input(true), route(500.0)).unwrap();
        assert_eq!(round_trip.costs.operator_bonus, one_way.costs.operator_bonus * 2.0);
        assert_eq!(round_trip.costs.tolls_cost, one_way.costs.tolls_cost * 2.0);
    }

    #[test]
    fn test_totals_are_exact() {
        for (distance, is_round_trip) in [(1.0, false), (137.5, true), (2450.0, false)] {
            let costs = compute_quote(&input(is_round_trip), route(distance)).unwrap().costs;
            assert_eq!(
                costs.total_expenses,
                costs.admin_cost
                    + costs.operator_bonus
                    + costs.operator_salary
                    + costs.tolls_cost
                    + costs.diesel_cost,
            );
            assert_eq!(costs.profit, Pesos(20_000.0) - costs.total_expenses);
        }
    }

    #[test]
    fn test_idempotent() {
        let lhs = compute_quote(&input(true), route(321.0)).unwrap();
        let rhs = compute_quote(&input(true), route(321.0)).unwrap();
        assert_eq!(lhs.costs.total_expenses.0.to_bits(), rhs.costs.total_expenses.0.to_bits());
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_salary_floor() {
        // 5000 km at 2.5 km/L and 29 MXN/L is 58 000 MXN of diesel.
        let result = compute_quote(&input(false), route(5000.0)).unwrap();
        assert!(result.costs.diesel_cost > result.inputs.freight_price);
        assert_eq!(result.costs.operator_salary, Pesos::ZERO);
        assert!(result.costs.profit < Pesos::ZERO);
        assert!(result.costs.profit_per_km < PesosPerKilometer::ZERO);
    }

    #[test]
    fn test_zero_distance() {
        let error = compute_quote(&input(false), route(0.0)).unwrap_err();
        assert!(matches!(error, QuoteError::InvalidDistance(distance) if distance == Kilometers::ZERO));
    }

    #[test]
    fn test_zero_distance_round_trip() {
        assert!(matches!(
            compute_quote(&input(true), route(0.0)),
            Err(QuoteError::InvalidDistance(_)),
        ));
    }

    #[test]
    fn test_refuses_invalid_input() {
        let mut input = input(false);
        input.freight_price = Pesos::ZERO;
        assert!(matches!(compute_quote(&input, route(10.0)), Err(QuoteError::InvalidInput(_))));

        input.freight_price = Pesos(1.0);
        input.fuel_efficiency = KilometersPerLiter(-2.5);
        assert!(matches!(compute_quote(&input, route(10.0)), Err(QuoteError::InvalidInput(_))));
    }

    #[test]
    fn test_keeps_route_metadata() {
        let mut resolved = route(250.0);
        resolved.summary = "Carretera 57".to_owned();
        resolved.map_url = Some("https://maps.google.com/?cid=1".to_owned());
        let result = compute_quote(&input(true), resolved).unwrap();
        assert_eq!(result.route.summary, "Carretera 57");
        assert_eq!(result.route.map_url.as_deref(), Some("https://maps.google.com/?cid=1"));
        assert_eq!(result.inputs.unit_type, UnitType::Trailer);
    }
}
