//! Place name suggestions for the origin, intermediate point and destination.

mod locations;

use itertools::Either;

pub use self::locations::LOCATIONS;
use crate::text::simplify;

pub const MAX_SUGGESTIONS: usize = 100;

/// Shown before the user has typed anything.
pub const N_INITIAL_SUGGESTIONS: usize = 20;

/// Known locations containing the query, ignoring case, accents and punctuation.
///
/// A query like `Monterrey, NL` also matches on the part before the comma, as long as that part
/// is longer than two characters.
pub fn suggest(query: &str) -> impl Iterator<Item = &'static str> {
    if query.trim().is_empty() {
        return Either::Left(LOCATIONS.iter().copied().take(N_INITIAL_SUGGESTIONS));
    }
    let needle = simplify(query);
    let head = query
        .split_once(',')
        .map(|(head, _)| simplify(head))
        .filter(|head| head.chars().count() > 2);
    Either::Right(
        LOCATIONS
            .iter()
            .copied()
            .filter(move |location| {
                let location = simplify(location);
                location.contains(&needle) || head.as_ref().is_some_and(|head| location.contains(head))
            })
            .take(MAX_SUGGESTIONS),
    )
}
