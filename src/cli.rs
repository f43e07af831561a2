mod history;
mod quote;
mod resolver;
mod save;
mod store;

use clap::{Parser, Subcommand};

use crate::{
    cli::{history::HistoryArgs, quote::QuoteArgs, save::NoteArgs, store::StoreArgs},
    core::{engine::CalculationResult, error::QuoteError},
    gazetteer,
    prelude::*,
    share::{share_text, share_url},
    tables::{build_breakdown_table, build_trip_table},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub async fn run(self) -> Result {
        match self.command {
            Command::Quote(args) => args.run(self.store.open()?).await,
            Command::Current => {
                let store = self.store.open()?;
                print_result(store.current().ok_or(QuoteError::NoActiveQuote)?);
                Ok(())
            }
            Command::Save(args) => args.run(self.store.open()?),
            Command::History(args) => args.run(self.store.open()?),
            Command::Share(args) => {
                let store = self.store.open()?;
                let text = share_text(store.current().ok_or(QuoteError::NoActiveQuote)?)?;
                if args.link {
                    println!("{}", share_url(&text)?);
                } else {
                    println!("{text}");
                }
                Ok(())
            }
            Command::Suggest(args) => {
                for location in gazetteer::suggest(&args.query) {
                    println!("{location}");
                }
                Ok(())
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Quote a trip and make it the current quote.
    #[clap(name = "quote")]
    Quote(Box<QuoteArgs>),

    /// Show the current quote.
    #[clap(name = "current")]
    Current,

    /// Save the current quote into the history.
    #[clap(name = "save")]
    Save(NoteArgs),

    /// Browse, load and delete saved quotes.
    #[clap(name = "history")]
    History(HistoryArgs),

    /// Print a chat-friendly summary of the current quote.
    #[clap(name = "share")]
    Share(ShareArgs),

    /// Suggest known locations for origins and destinations.
    #[clap(name = "suggest")]
    Suggest(SuggestArgs),
}

#[derive(Parser)]
pub struct ShareArgs {
    /// Print a chat link with the summary pre-filled instead of the summary itself.
    #[clap(long)]
    link: bool,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Partial place name, like `queretaro` or `Monterrey, NL`.
    #[clap(default_value = "")]
    query: String,
}

fn print_result(result: &CalculationResult) {
    println!("{}", build_trip_table(result));
    println!("{}", build_breakdown_table(result));
}
