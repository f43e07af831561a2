use clap::Parser;

use crate::{
    cli::{print_result, resolver::ResolverArgs, save::NoteArgs},
    core::{
        quoter::Quoter,
        trip::{Defaults, TripRequest},
        unit_type::UnitType,
    },
    prelude::*,
    quantity::{Days, Kilometers, KilometersPerLiter, Pesos, PesosPerLiter},
    store::{QuoteStore, Storage},
};

#[derive(Parser)]
pub struct QuoteArgs {
    #[clap(flatten)]
    trip: TripArgs,

    /// Also save the quote into the history.
    #[clap(long)]
    save: bool,

    #[clap(flatten)]
    note: NoteArgs,

    #[clap(flatten)]
    defaults: DefaultsArgs,

    #[clap(flatten)]
    resolver: ResolverArgs,
}

impl QuoteArgs {
    #[instrument(skip_all)]
    pub async fn run<S: Storage>(self, store: QuoteStore<S>) -> Result {
        let mut quoter = Quoter::new(
            self.resolver.new_resolver()?,
            store,
            self.defaults.into(),
            self.resolver.timeout(),
        );
        let result = quoter.calculate(self.trip.into()).await?;
        print_result(&result);
        if self.save {
            let saved = quoter
                .confirm_save(self.note.observations.as_deref(), self.note.user.as_deref())?;
            let n_saved = quoter.store().history().len();
            println!("Saved `{}` as {} ({n_saved} saved quotes)", saved.name, saved.id);
        }
        Ok(())
    }
}

#[derive(Parser)]
pub struct TripArgs {
    /// Place of loading, like `Monterrey, Nuevo León`.
    #[clap(long)]
    origin: String,

    #[clap(long)]
    destination: String,

    /// Intermediate stop.
    #[clap(long)]
    via: Option<String>,

    #[clap(long = "unit", value_enum, default_value = "trailer")]
    unit_type: UnitType,

    /// Agreed price of the freight, in pesos.
    #[clap(long = "freight-price")]
    freight_price: Pesos,

    /// One-way distance in kilometers, skips the route resolver.
    #[clap(long = "distance-km")]
    manual_distance: Option<Kilometers>,

    /// Quote the way back too, doubling the distance and the tolls.
    #[clap(long = "round-trip")]
    is_round_trip: bool,

    /// One-way tolls, in pesos.
    #[clap(long)]
    tolls: Option<Pesos>,

    #[clap(long = "trip-days")]
    trip_days: Option<Days>,

    /// Diesel price per liter for this trip, overrides `--default-diesel-price`.
    #[clap(long = "diesel-price")]
    diesel_price: Option<PesosPerLiter>,

    /// Kilometers per liter, defaults to the unit type's typical efficiency.
    #[clap(long = "fuel-efficiency")]
    fuel_efficiency: Option<KilometersPerLiter>,

    /// Market rate for the same trip, to compare the freight price against.
    #[clap(long = "general-rate")]
    general_rate: Option<Pesos>,
}

impl From<TripArgs> for TripRequest {
    fn from(args: TripArgs) -> Self {
        Self {
            origin: args.origin,
            destination: args.destination,
            has_intermediate_point: args.via.is_some(),
            intermediate_point: args.via,
            unit_type: args.unit_type,
            freight_price: Some(args.freight_price),
            manual_distance: args.manual_distance,
            is_round_trip: args.is_round_trip,
            tolls: args.tolls,
            trip_days: args.trip_days,
            diesel_price: args.diesel_price,
            fuel_efficiency: args.fuel_efficiency,
            general_rate: args.general_rate,
        }
    }
}

#[derive(Copy, Clone, Parser)]
pub struct DefaultsArgs {
    /// Diesel price per liter when the trip does not set one.
    #[clap(long = "default-diesel-price", env = "DIESEL_PRICE", default_value = "29.00")]
    default_diesel_price: PesosPerLiter,
}

impl From<DefaultsArgs> for Defaults {
    fn from(args: DefaultsArgs) -> Self {
        Self { diesel_price: args.default_diesel_price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;

    #[test]
    fn test_parse_quote_args() -> Result {
        let args = QuoteArgs::try_parse_from([
            "quote",
            "--origin",
            "Monterrey, Nuevo León",
            "--destination",
            "Querétaro, Querétaro",
            "--via",
            "San Luis Potosí",
            "--unit",
            "torton",
            "--freight-price",
            "20000",
            "--round-trip",
            "--tolls",
            "300",
            "--diesel-price",
            "30.5",
            "--default-diesel-price",
            "25.5",
        ])?;
        assert!(args.resolver.new_resolver().is_ok());
        let defaults = Defaults::from(args.defaults);
        let request = TripRequest::from(args.trip);
        assert!(request.has_intermediate_point);
        assert_eq!(request.intermediate_point.as_deref(), Some("San Luis Potosí"));
        assert_eq!(request.unit_type, UnitType::Torton);
        assert_eq!(request.freight_price, Some(Pesos(20_000.0)));
        assert_eq!(request.tolls, Some(Pesos(300.0)));
        assert!(request.is_round_trip);
        assert_eq!(request.manual_distance, None);
        assert_eq!(request.diesel_price, Some(PesosPerLiter(30.5)));
        assert_eq!(defaults.diesel_price, PesosPerLiter(25.5));
        Ok(())
    }

    #[test]
    fn test_default_diesel_price() -> Result {
        let args = QuoteArgs::try_parse_from([
            "quote",
            "--origin",
            "Monterrey",
            "--destination",
            "Saltillo",
            "--freight-price",
            "9000",
            "--default-diesel-price",
            "27",
        ])?;
        assert_eq!(Defaults::from(args.defaults).diesel_price, PesosPerLiter(27.0));
        assert_eq!(TripRequest::from(args.trip).diesel_price, None);
        Ok(())
    }

    #[test]
    fn test_args_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
