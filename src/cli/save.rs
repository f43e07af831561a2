use clap::Parser;

use crate::{
    prelude::*,
    store::{QuoteStore, Storage},
};

#[derive(Parser)]
pub struct NoteArgs {
    /// Free-form notes stored with the quote.
    #[clap(long)]
    pub observations: Option<String>,

    /// Who made the quote.
    #[clap(long, env = "FREIGHT_QUOTE_USER")]
    pub user: Option<String>,
}

impl NoteArgs {
    pub fn run<S: Storage>(self, mut store: QuoteStore<S>) -> Result {
        let saved = store.save_current(self.observations.as_deref(), self.user.as_deref())?;
        println!("Saved `{}` as {}", saved.name, saved.id);
        Ok(())
    }
}
