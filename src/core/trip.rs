use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    core::{
        error::{Field, QuoteError},
        unit_type::UnitType,
    },
    quantity::{Days, Kilometers, KilometersPerLiter, Pesos, PesosPerLiter},
};

/// Configured fallbacks for the fields a trip request may leave out.
#[derive(Copy, Clone, Debug)]
pub struct Defaults {
    pub diesel_price: PesosPerLiter,
}

impl Default for Defaults {
    fn default() -> Self {
        Self { diesel_price: PesosPerLiter(29.0) }
    }
}

/// Trip parameters as the user entered them.
#[derive(Clone, Debug, bon::Builder)]
pub struct TripRequest {
    #[builder(into)]
    pub origin: String,

    #[builder(into)]
    pub destination: String,

    #[builder(default)]
    pub has_intermediate_point: bool,

    #[builder(into)]
    pub intermediate_point: Option<String>,

    #[builder(default = UnitType::Trailer)]
    pub unit_type: UnitType,

    pub freight_price: Option<Pesos>,

    /// Overrides the resolved route when positive.
    pub manual_distance: Option<Kilometers>,

    #[builder(default)]
    pub is_round_trip: bool,

    /// One-way toll booths.
    pub tolls: Option<Pesos>,

    pub trip_days: Option<Days>,
    pub diesel_price: Option<PesosPerLiter>,
    pub fuel_efficiency: Option<KilometersPerLiter>,
    pub general_rate: Option<Pesos>,
}

impl TripRequest {
    /// Validate the request and fill in every default.
    ///
    /// Fields are checked in the order the user fills them in, and the first failure wins.
    pub fn normalize(self, defaults: &Defaults) -> Result<TripInput, QuoteError> {
        let origin = required_text(Field::Origin, &self.origin)?;
        let intermediate_point = if self.has_intermediate_point {
            Some(required_text(
                Field::IntermediatePoint,
                self.intermediate_point.as_deref().unwrap_or_default(),
            )?)
        } else {
            None
        };
        let destination = required_text(Field::Destination, &self.destination)?;

        let freight_price = self
            .freight_price
            .filter(|price| is_positive(*price))
            .ok_or(QuoteError::validation(Field::FreightPrice, "enter a valid freight price"))?;
        let fuel_efficiency =
            self.fuel_efficiency.unwrap_or_else(|| self.unit_type.default_fuel_efficiency());
        if !is_positive(fuel_efficiency) {
            return Err(QuoteError::validation(
                Field::FuelEfficiency,
                "enter a valid fuel efficiency",
            ));
        }

        let diesel_price = self.diesel_price.unwrap_or(defaults.diesel_price);
        if !is_positive(diesel_price) {
            return Err(QuoteError::validation(Field::DieselPrice, "must be positive"));
        }
        let trip_days = self.trip_days.unwrap_or(Days::ONE);
        if !is_positive(trip_days) {
            return Err(QuoteError::validation(Field::TripDays, "must be positive"));
        }

        Ok(TripInput {
            origin,
            destination,
            has_intermediate_point: self.has_intermediate_point,
            intermediate_point,
            unit_type: self.unit_type,
            freight_price,
            manual_distance: non_negative(Field::ManualDistance, self.manual_distance)?,
            is_round_trip: self.is_round_trip,
            tolls: non_negative(Field::Tolls, self.tolls)?,
            trip_days,
            diesel_price,
            fuel_efficiency,
            general_rate: non_negative(Field::GeneralRate, self.general_rate)?,
        })
    }
}

/// Fully populated trip parameters, the only input the cost engine accepts.
#[must_use]
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInput {
    pub origin: String,
    pub destination: String,

    #[serde(default)]
    pub has_intermediate_point: bool,

    #[serde(default)]
    pub intermediate_point: Option<String>,

    pub unit_type: UnitType,
    pub freight_price: Pesos,

    /// Zero means «use the resolved route».
    pub manual_distance: Kilometers,

    pub is_round_trip: bool,

    /// One-way toll booths.
    pub tolls: Pesos,

    pub trip_days: Days,
    pub diesel_price: PesosPerLiter,
    pub fuel_efficiency: KilometersPerLiter,

    /// Zero means «not provided».
    pub general_rate: Pesos,
}

impl TripInput {
    /// Intermediate stop, if the trip has one.
    #[must_use]
    pub fn waypoint(&self) -> Option<&str> {
        self.intermediate_point
            .as_deref()
            .filter(|point| self.has_intermediate_point && !point.is_empty())
    }

    /// Display label: `Origin (via Stop) - Destination`.
    #[must_use]
    pub fn route_label(&self) -> String {
        if self.has_intermediate_point {
            format!(
                "{} (via {}) - {}",
                self.origin,
                self.intermediate_point.as_deref().unwrap_or_default(),
                self.destination,
            )
        } else {
            format!("{} - {}", self.origin, self.destination)
        }
    }

    #[must_use]
    pub fn has_general_rate(&self) -> bool {
        self.general_rate > Pesos::ZERO
    }
}

fn required_text(field: Field, value: &str) -> Result<String, QuoteError> {
    let value = value.trim();
    if value.is_empty() {
        Err(QuoteError::validation(field, "must not be empty"))
    } else {
        Ok(value.to_owned())
    }
}

fn is_positive<Q: Into<f64>>(value: Q) -> bool {
    let value = value.into();
    value.is_finite() && value > 0.0
}

fn non_negative<Q>(field: Field, value: Option<Q>) -> Result<Q, QuoteError>
where
    Q: Copy + Default + Into<f64>,
{
    let value = value.unwrap_or_default();
    let raw: f64 = value.into();
    if raw.is_finite() && raw >= 0.0 {
        Ok(value)
    } else {
        Err(QuoteError::validation(field, "must not be negative"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest::builder()
            .origin("Monterrey, Nuevo León")
            .destination("Querétaro, Querétaro")
            .freight_price(Pesos(20_000.0))
            .build()
    }

    #[test]
    fn test_defaults() {
        let input = request().normalize(&Defaults::default()).unwrap();
        assert_eq!(input.unit_type, UnitType::Trailer);
        assert_eq!(input.fuel_efficiency, KilometersPerLiter(2.5));
        assert_eq!(input.diesel_price, PesosPerLiter(29.0));
        assert_eq!(input.trip_days, Days::ONE);
        assert_eq!(input.tolls, Pesos::ZERO);
        assert_eq!(input.manual_distance, Kilometers::ZERO);
        assert_eq!(input.general_rate, Pesos::ZERO);
        assert!(!input.has_general_rate());
        assert_eq!(input.intermediate_point, None);
    }

    #[test]
    fn test_torton_efficiency_default() {
        let input = TripRequest { unit_type: UnitType::Torton, ..request() }
            .normalize(&Defaults::default())
            .unwrap();
        assert_eq!(input.fuel_efficiency, KilometersPerLiter(3.5));
    }

    #[test]
    fn test_explicit_values_win() {
        let defaults = Defaults { diesel_price: PesosPerLiter(25.0) };
        let input = TripRequest {
            diesel_price: Some(PesosPerLiter(30.5)),
            fuel_efficiency: Some(KilometersPerLiter(3.0)),
            trip_days: Some(Days(2.0)),
            ..request()
        }
        .normalize(&defaults)
        .unwrap();
        assert_eq!(input.diesel_price, PesosPerLiter(30.5));
        assert_eq!(input.fuel_efficiency, KilometersPerLiter(3.0));
        assert_eq!(input.trip_days, Days(2.0));
    }

    #[test]
    fn test_configured_diesel_price() {
        let defaults = Defaults { diesel_price: PesosPerLiter(25.0) };
        let input = request().normalize(&defaults).unwrap();
        assert_eq!(input.diesel_price, PesosPerLiter(25.0));
    }

    #[test]
    fn test_blank_origin() {
        let error = TripRequest { origin: "   ".to_owned(), ..request() }
            .normalize(&Defaults::default())
            .unwrap_err();
        assert!(matches!(error, QuoteError::Validation { field: Field::Origin, .. }));
    }

    #[test]
    fn test_missing_intermediate_point() {
        let error = TripRequest {
            has_intermediate_point: true,
            intermediate_point: Some(" ".to_owned()),
            ..request()
        }
        .normalize(&Defaults::default())
        .unwrap_err();
        assert!(matches!(error, QuoteError::Validation { field: Field::IntermediatePoint, .. }));
    }

    #[test]
    fn test_disabled_intermediate_point_is_dropped() {
        let input =
            TripRequest { intermediate_point: Some("Saltillo, Coahuila".to_owned()), ..request() }
                .normalize(&Defaults::default())
                .unwrap();
        assert_eq!(input.intermediate_point, None);
        assert_eq!(input.waypoint(), None);
    }

    #[test]
    fn test_trims_places() {
        let input = TripRequest::builder()
            .origin("  Monterrey ")
            .destination("Puebla\t")
            .has_intermediate_point(true)
            .intermediate_point(" Saltillo ")
            .freight_price(Pesos(1.0))
            .build()
            .normalize(&Defaults::default())
            .unwrap();
        assert_eq!(input.origin, "Monterrey");
        assert_eq!(input.destination, "Puebla");
        assert_eq!(input.waypoint(), Some("Saltillo"));
    }

    #[test]
    fn test_non_positive_freight_price() {
        for freight_price in [None, Some(Pesos::ZERO), Some(Pesos(-1.0)), Some(Pesos(f64::NAN))] {
            let error = TripRequest { freight_price, ..request() }
                .normalize(&Defaults::default())
                .unwrap_err();
            assert!(matches!(error, QuoteError::Validation { field: Field::FreightPrice, .. }));
        }
    }

    #[test]
    fn test_non_positive_fuel_efficiency() {
        let error = TripRequest { fuel_efficiency: Some(KilometersPerLiter::ZERO), ..request() }
            .normalize(&Defaults::default())
            .unwrap_err();
        assert!(matches!(error, QuoteError::Validation { field: Field::FuelEfficiency, .. }));
    }

    #[test]
    fn test_negative_tolls() {
        let error = TripRequest { tolls: Some(Pesos(-10.0)), ..request() }
            .normalize(&Defaults::default())
            .unwrap_err();
        assert!(matches!(error, QuoteError::Validation { field: Field::Tolls, .. }));
    }

    #[test]
    fn test_route_label() {
        let mut input = request().normalize(&Defaults::default()).unwrap();
        assert_eq!(input.route_label(), "Monterrey, Nuevo León - Querétaro, Querétaro");

        input.has_intermediate_point = true;
        input.intermediate_point = Some("San Luis Potosí".to_owned());
        assert_eq!(
            input.route_label(),
            "Monterrey, Nuevo León (via San Luis Potosí) - Querétaro, Querétaro",
        );
    }

    #[test]
    fn test_serialization_omits_absent_intermediate_point() -> crate::prelude::Result {
        let input = request().normalize(&Defaults::default())?;
        let json = serde_json::to_value(&input)?;
        assert!(json.get("intermediatePoint").is_none());
        assert_eq!(json["freightPrice"], 20_000.0);
        assert_eq!(json["unitType"], "Trailer");
        assert_eq!(serde_json::from_value::<TripInput>(json)?, input);
        Ok(())
    }
}
