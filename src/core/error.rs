use crate::{quantity::Kilometers, store::storage::Slot};

/// Trip input field, as named to the user.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Field {
    #[display("origin")]
    Origin,

    #[display("intermediate point")]
    IntermediatePoint,

    #[display("destination")]
    Destination,

    #[display("freight price")]
    FreightPrice,

    #[display("fuel efficiency")]
    FuelEfficiency,

    #[display("diesel price")]
    DieselPrice,

    #[display("tolls")]
    Tolls,

    #[display("manual distance")]
    ManualDistance,

    #[display("trip days")]
    TripDays,

    #[display("general rate")]
    GeneralRate,
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// The user input is missing or invalid, nothing was attempted.
    #[error("invalid {field}: {message}")]
    Validation { field: Field, message: &'static str },

    /// The engine was handed inputs it refuses to compute with.
    #[error("refusing to compute the quote: {0}")]
    InvalidInput(&'static str),

    #[error(
        "could not resolve the route automatically, please enter the distance manually (`--distance-km`)"
    )]
    RouteResolution(#[source] anyhow::Error),

    #[error(
        "the effective distance is {0}, please check the origin and destination or enter the distance manually"
    )]
    InvalidDistance(Kilometers),

    #[error("there is no active quote to save, calculate one first")]
    NoActiveQuote,

    /// The change was not committed, the in-memory state is unchanged.
    #[error("failed to persist the {slot}")]
    PersistenceWrite {
        slot: Slot,

        #[source]
        source: anyhow::Error,
    },
}

impl QuoteError {
    pub const fn validation(field: Field, message: &'static str) -> Self {
        Self::Validation { field, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let error = QuoteError::validation(Field::FreightPrice, "must be positive");
        assert_eq!(error.to_string(), "invalid freight price: must be positive");
    }

    #[test]
    fn test_invalid_distance_message() {
        let error = QuoteError::InvalidDistance(Kilometers::ZERO);
        assert!(error.to_string().starts_with("the effective distance is 0.0 km"));
    }
}
