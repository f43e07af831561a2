pub mod history;
pub mod quote_store;
pub mod storage;

pub use self::{
    history::{History, SavedCalculation},
    quote_store::QuoteStore,
    storage::{JsonFiles, Slot, Storage},
};
