use std::path::PathBuf;

use clap::Parser;

use crate::{
    prelude::*,
    store::{JsonFiles, QuoteStore},
};

#[derive(Parser)]
pub struct StoreArgs {
    /// Directory with the saved quotes and the current quote.
    #[clap(long = "data-dir", env = "FREIGHT_QUOTE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,
}

impl StoreArgs {
    pub fn open(&self) -> Result<QuoteStore<JsonFiles>> {
        Ok(QuoteStore::open(JsonFiles::try_new(&self.data_dir)?))
    }
}
