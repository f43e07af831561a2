use chrono::{DateTime, SubsecRound, Utc};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    core::{engine::CalculationResult, error::QuoteError},
    prelude::*,
    store::{
        history::{History, SavedCalculation},
        storage::{Slot, Storage},
    },
};

/// Saved quote history and the current quote, backed by durable storage.
///
/// Both slots are read once on opening and rewritten wholesale on every change. A change is only
/// applied in memory after it has been persisted.
pub struct QuoteStore<S> {
    storage: S,
    history: History,
    current: Option<CalculationResult>,
}

impl<S: Storage> QuoteStore<S> {
    /// Load both slots, degrading unreadable or corrupt ones to empty.
    #[instrument(skip_all)]
    pub fn open(storage: S) -> Self {
        let history: History = read_slot(&storage, Slot::History).unwrap_or_default();
        let current = read_slot(&storage, Slot::CurrentQuote);
        info!(n_saved = history.len(), has_current = current.is_some(), "opened the store");
        Self { storage, history, current }
    }

    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The most recently computed or loaded quote.
    #[must_use]
    pub const fn current(&self) -> Option<&CalculationResult> {
        self.current.as_ref()
    }

    /// Saved quotes matching the filter, newest first.
    pub fn list<'a>(
        &'a self,
        filter: Option<&str>,
    ) -> impl Iterator<Item = &'a SavedCalculation> + 'a {
        self.history.search(filter)
    }

    /// Save the quote on top of the history.
    ///
    /// Blank observations and user are stored as absent.
    pub fn save(
        &mut self,
        result: CalculationResult,
        observations: Option<&str>,
        user: Option<&str>,
    ) -> Result<SavedCalculation, QuoteError> {
        // Stored with millisecond precision.
        self.save_at(Utc::now().trunc_subsecs(3), result, observations, user)
    }

    #[instrument(skip_all, fields(now = %now))]
    fn save_at(
        &mut self,
        now: DateTime<Utc>,
        result: CalculationResult,
        observations: Option<&str>,
        user: Option<&str>,
    ) -> Result<SavedCalculation, QuoteError> {
        let item = SavedCalculation {
            id: self.next_id(now),
            timestamp: now,
            name: result.inputs.route_label(),
            result,
            observations: non_blank(observations),
            user: non_blank(user),
        };
        let history = self.history.prepended(item.clone());
        write_slot(&self.storage, Slot::History, &history)?;
        self.history = history;
        info!(id = %item.id, name = %item.name, "saved");
        Ok(item)
    }

    /// Save the current quote on top of the history.
    pub fn save_current(
        &mut self,
        observations: Option<&str>,
        user: Option<&str>,
    ) -> Result<SavedCalculation, QuoteError> {
        let result = self.current.clone().ok_or(QuoteError::NoActiveQuote)?;
        self.save(result, observations, user)
    }

    /// Delete the saved quote, ignoring unknown ids.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Result<(), QuoteError> {
        let Some(history) = self.history.without(id) else {
            debug!("nothing to delete");
            return Ok(());
        };
        write_slot(&self.storage, Slot::History, &history)?;
        self.history = history;
        info!("deleted");
        Ok(())
    }

    /// Make a saved quote the current one.
    #[instrument(skip_all, fields(id = %item.id))]
    pub fn load_as_current(&mut self, item: SavedCalculation) -> Result<(), QuoteError> {
        self.set_current(item.result)
    }

    /// Replace the current quote.
    pub fn set_current(&mut self, result: CalculationResult) -> Result<(), QuoteError> {
        write_slot(&self.storage, Slot::CurrentQuote, &result)?;
        self.current = Some(result);
        Ok(())
    }

    /// Millisecond timestamp, bumped past the newest id so that ids stay unique and increasing.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let newest = self
            .history
            .newest()
            .and_then(|item| item.id.parse::<u64>().ok())
            .map_or(0, |id| id.saturating_add(1));
        millis.max(newest).to_string()
    }
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim).filter(|text| !text.is_empty()).map(ToOwned::to_owned)
}

fn read_slot<T: DeserializeOwned>(storage: &impl Storage, slot: Slot) -> Option<T> {
    let result = storage.read(slot).and_then(|contents| {
        contents
            .map(|contents| serde_json::from_str(&contents))
            .transpose()
            .with_context(|| format!("the {slot} is corrupt"))
    });
    result.unwrap_or_else(|error| {
        warn!(%slot, "treating the slot as empty: {error:#}");
        None
    })
}

fn write_slot<T: Serialize>(
    storage: &impl Storage,
    slot: Slot,
    value: &T,
) -> Result<(), QuoteError> {
    serde_json::to_string(value)
        .context("failed to serialize")
        .and_then(|contents| storage.write(slot, &contents))
        .map_err(|source| QuoteError::PersistenceWrite { slot, source })
}
