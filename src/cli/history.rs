use clap::{Parser, Subcommand};

use crate::{
    cli::print_result,
    prelude::*,
    store::{QuoteStore, Storage},
    tables::build_history_table,
};

#[derive(Parser)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommand,
}

impl HistoryArgs {
    pub fn run<S: Storage>(self, mut store: QuoteStore<S>) -> Result {
        match self.command {
            HistoryCommand::List { filter } => {
                if store.history().is_empty() {
                    println!("No saved quotes yet");
                } else {
                    println!("{}", build_history_table(store.list(filter.as_deref())));
                }
            }
            HistoryCommand::Load { id } => {
                let item = store
                    .history()
                    .get(&id)
                    .cloned()
                    .with_context(|| format!("there is no saved quote `{id}`"))?;
                store.load_as_current(item)?;
                if let Some(result) = store.current() {
                    print_result(result);
                }
            }
            HistoryCommand::Delete { id } => {
                store.delete(&id)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List saved quotes, newest first.
    List {
        /// Only show quotes whose origin, destination, observations or user contain this text.
        #[clap(long)]
        filter: Option<String>,
    },

    /// Make a saved quote the current one.
    Load { id: String },

    /// Delete a saved quote.
    Delete { id: String },
}
