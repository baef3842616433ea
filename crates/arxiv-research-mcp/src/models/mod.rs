//! Data models for catalog records and tool inputs.

mod inputs;
mod paper;

pub use inputs::{ExtractInfoInput, SearchPapersInput};
pub use paper::{IndexedPaper, PaperMap, PaperRecord};
