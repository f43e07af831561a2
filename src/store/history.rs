use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{core::engine::CalculationResult, text::fold};

/// Persisted quote.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: String,

    /// Creation instant, stored as milliseconds since the epoch.
    #[serde_as(as = "serde_with::TimestampMilliSeconds<i64>")]
    pub timestamp: DateTime<Utc>,

    pub name: String,
    pub result: CalculationResult,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl SavedCalculation {
    /// Whether the folded query occurs in the origin, destination, observations or user.
    fn matches(&self, query: &str) -> bool {
        let inputs = &self.result.inputs;
        [
            Some(inputs.origin.as_str()),
            Some(inputs.destination.as_str()),
            self.observations.as_deref(),
            self.user.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|haystack| fold(haystack).contains(query))
    }
}

/// Saved quotes, newest first.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, derive_more::IntoIterator)]
#[serde(transparent)]
pub struct History(#[into_iterator(owned, ref)] Vec<SavedCalculation>);

impl History {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SavedCalculation> {
        self.0.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn newest(&self) -> Option<&SavedCalculation> {
        self.0.first()
    }

    /// New history with the item in front.
    pub fn prepended(&self, item: SavedCalculation) -> Self {
        Self(std::iter::once(item).chain(self.0.iter().cloned()).collect())
    }

    /// New history without the item, or `None` if there is no such item.
    pub fn without(&self, id: &str) -> Option<Self> {
        let position = self.0.iter().position(|item| item.id == id)?;
        let mut items = self.0.clone();
        items.remove(position);
        Some(Self(items))
    }

    /// Items matching the search query, in history order.
    ///
    /// The query is matched case- and accent-insensitively. A blank query matches everything.
    pub fn search<'a>(
        &'a self,
        query: Option<&str>,
    ) -> impl Iterator<Item = &'a SavedCalculation> + 'a {
        let query = query.map(str::trim).filter(|query| !query.is_empty()).map(fold);
        self.0.iter().filter(move |item| query.as_deref().is_none_or(|query| item.matches(query)))
    }
}

impl FromIterator<SavedCalculation> for History {
    fn from_iter<T: IntoIterator<Item = SavedCalculation>>(iterator: T) -> Self {
        Self(iterator.into_iter().collect())
    }
}
