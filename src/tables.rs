use chrono::Local;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{assessment::Assessment, engine::CalculationResult, route::directions_url},
    quantity::Pesos,
    store::SavedCalculation,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_trip_table(result: &CalculationResult) -> Table {
    let CalculationResult { route, inputs, .. } = result;
    let assessment = Assessment::from(result);

    let mut table = new_table();
    table.add_row(vec![Cell::new("Route"), Cell::new(inputs.route_label())]);
    table.add_row(vec![
        Cell::new("Unit"),
        Cell::new(format!(
            "{} ({})",
            inputs.unit_type,
            if inputs.is_round_trip { "round trip" } else { "one way" },
        )),
    ]);
    table.add_row(vec![Cell::new("Distance"), Cell::new(route.distance_km)]);
    table.add_row(vec![
        Cell::new("Duration"),
        Cell::new(&route.duration).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![Cell::new("Trip days"), Cell::new(inputs.trip_days)]);
    table.add_row(vec![Cell::new("Diesel price"), Cell::new(inputs.diesel_price)]);
    table.add_row(vec![Cell::new("Fuel efficiency"), Cell::new(inputs.fuel_efficiency)]);
    table.add_row(vec![Cell::new("Freight"), Cell::new(inputs.freight_price)]);
    table.add_row(vec![Cell::new("Freight rate"), Cell::new(assessment.freight_rate)]);
    if let Some(difference) = assessment.general_rate_difference {
        table.add_row(vec![
            Cell::new("General rate"),
            Cell::new(format!("{} ({difference:+.1}%)", inputs.general_rate)).fg(
                if difference >= 0.0 { Color::Green } else { Color::Red },
            ),
        ]);
    }
    table.add_row(vec![
        Cell::new("Directions"),
        Cell::new(directions_url(inputs)).add_attribute(Attribute::Dim),
    ]);
    if let Some(map_url) = route.map_url.as_deref().filter(|url| !url.is_empty()) {
        table.add_row(vec![
            Cell::new(route.source_title.as_deref().unwrap_or("Map")),
            Cell::new(map_url).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_breakdown_table(result: &CalculationResult) -> Table {
    let CalculationResult { costs, inputs, .. } = result;
    let assessment = Assessment::from(result);
    let share = |amount: Pesos| {
        Cell::new(format!("{:.1}%", amount / inputs.freight_price * 100.0))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim)
    };
    let amount = |amount: Pesos| Cell::new(amount).set_alignment(CellAlignment::Right);

    let mut table = new_table();
    table.set_header(vec!["Item", "Amount", "Share"]);
    table.add_row(vec![
        Cell::new(format!("Diesel ({})", costs.liters_consumed)),
        amount(costs.diesel_cost),
        share(costs.diesel_cost),
    ]);
    table.add_row(vec![Cell::new("Tolls"), amount(costs.tolls_cost), share(costs.tolls_cost)]);
    table.add_row(vec![
        Cell::new("Operator salary"),
        amount(costs.operator_salary),
        share(costs.operator_salary),
    ]);
    table.add_row(vec![
        Cell::new("Operator bonus"),
        amount(costs.operator_bonus),
        share(costs.operator_bonus),
    ]);
    table.add_row(vec![
        Cell::new("Administration"),
        amount(costs.admin_cost),
        share(costs.admin_cost),
    ]);
    table.add_row(vec![
        Cell::new("Total expenses").add_attribute(Attribute::Bold),
        amount(costs.total_expenses).add_attribute(Attribute::Bold),
        share(costs.total_expenses),
    ]);
    table.add_row(vec![
        Cell::new("Profit").add_attribute(Attribute::Bold),
        amount(costs.profit).add_attribute(Attribute::Bold).fg(assessment.rating.color()),
        share(costs.profit),
    ]);
    table.add_row(vec![
        Cell::new("Profit per km"),
        Cell::new(costs.profit_per_km)
            .set_alignment(CellAlignment::Right)
            .fg(assessment.rating.color()),
        Cell::new(assessment.rating).fg(assessment.rating.color()),
    ]);
    table
}

pub fn build_history_table<'a>(items: impl IntoIterator<Item = &'a SavedCalculation>) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "ID", "Saved", "Name", "Unit", "Freight", "Profit", "Per km", "User", "Observations",
    ]);
    for item in items {
        let result = &item.result;
        let rating = Assessment::from(result).rating;
        table.add_row(vec![
            Cell::new(&item.id).add_attribute(Attribute::Dim),
            Cell::new(item.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M")),
            Cell::new(&item.name),
            Cell::new(result.inputs.unit_type),
            Cell::new(result.inputs.freight_price).set_alignment(CellAlignment::Right),
            Cell::new(result.costs.profit).set_alignment(CellAlignment::Right).fg(rating.color()),
            Cell::new(result.costs.profit_per_km)
                .set_alignment(CellAlignment::Right)
                .fg(rating.color()),
            Cell::new(item.user.as_deref().unwrap_or_default()),
            Cell::new(item.observations.as_deref().unwrap_or_default())
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}
