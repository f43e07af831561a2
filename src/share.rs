//! Plain-text quote summary for messaging apps.

use std::fmt::Write;

use reqwest::Url;

use crate::{
    core::{assessment::Assessment, engine::CalculationResult},
    prelude::*,
};

/// Chat-friendly summary of the quote, with `*bold*` markup.
pub fn share_text(result: &CalculationResult) -> Result<String> {
    let CalculationResult { route, costs, inputs } = result;
    let assessment = Assessment::from(result);
    let trip_kind = if inputs.is_round_trip { "round trip" } else { "one way" };

    let mut text = String::from("🚛 *Freight quote*\n\n");
    match inputs.waypoint() {
        Some(waypoint) => writeln!(
            text,
            "📍 *Route:* {} ➡️ {waypoint} ➡️ {}",
            inputs.origin, inputs.destination,
        )?,
        None => writeln!(text, "📍 *Route:* {} ➡️ {}", inputs.origin, inputs.destination)?,
    }
    writeln!(text, "🚛 *Unit:* {} ({trip_kind})\n", inputs.unit_type)?;
    writeln!(text, "💰 *Freight:* {}", inputs.freight_price)?;
    if let Some(difference) = assessment.general_rate_difference {
        let side = if difference > 0.0 { "above" } else { "below" };
        writeln!(text, "🏷️ *General rate:* {}", inputs.general_rate)?;
        writeln!(text, "📊 *Versus general rate:* {difference:+.1}% ({side} the market)")?;
    }
    writeln!(text, "✅ *Profit:* {} ({:.1}%)", costs.profit, assessment.margin * 100.0)?;
    writeln!(text, "📊 *Profit per km:* {} ({})\n", costs.profit_per_km, assessment.rating)?;
    writeln!(text, "⛽ *Total expenses:* {}", costs.total_expenses)?;
    writeln!(text, "📏 *Distance:* {}", route.distance_km)?;
    write!(text, "⛽ *Fuel efficiency:* {}", inputs.fuel_efficiency)?;
    Ok(text)
}

/// Link opening a chat with the text pre-filled.
pub fn share_url(text: &str) -> Result<Url> {
    Ok(Url::parse_with_params("https://wa.me/", [("text", text)])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            engine::compute_quote,
            route::RouteInfo,
            trip::{Defaults, TripRequest},
        },
        quantity::{Kilometers, Pesos},
    };

    fn result(request: TripRequest) -> CalculationResult {
        let input = request.normalize(&Defaults::default()).unwrap();
        compute_quote(&input, RouteInfo::manual(Kilometers(500.0))).unwrap()
    }

    #[test]
    fn test_share_text() -> Result {
        let text = share_text(&result(
            TripRequest::builder()
                .origin("Monterrey")
                .destination("Querétaro")
                .has_intermediate_point(true)
                .intermediate_point("San Luis Potosí")
                .freight_price(Pesos(20_000.0))
                .general_rate(Pesos(16_000.0))
                .tolls(Pesos(300.0))
                .is_round_trip(true)
                .build(),
        ))?;
        assert!(text.contains("*Route:* Monterrey ➡️ San Luis Potosí ➡️ Querétaro\n"));
        assert!(text.contains("*Unit:* Trailer (round trip)"));
        assert!(text.contains("*Freight:* 20000.00 MXN"));
        assert!(text.contains("*Versus general rate:* +25.0% (above the market)"));
        assert!(text.contains("*Distance:* 1000.0 km"));
        assert!(text.ends_with("*Fuel efficiency:* 2.50 km/L"));
        Ok(())
    }

    #[test]
    fn test_share_text_without_general_rate() -> Result {
        let text = share_text(&result(
            TripRequest::builder()
                .origin("Monterrey")
                .destination("Saltillo")
                .freight_price(Pesos(20_000.0))
                .build(),
        ))?;
        assert!(text.contains("*Route:* Monterrey ➡️ Saltillo\n"));
        assert!(text.contains("(one way)"));
        assert!(!text.contains("general rate"));
        Ok(())
    }

    #[test]
    fn test_share_url() -> Result {
        let url = share_url("🚛 *Freight quote*\nA & B")?;
        assert_eq!(url.host_str(), Some("wa.me"));
        let (key, value) = url.query_pairs().next().context("no query")?;
        assert_eq!(key, "text");
        assert_eq!(value, "🚛 *Freight quote*\nA & B");
        Ok(())
    }
}
