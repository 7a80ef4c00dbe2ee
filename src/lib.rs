pub mod catalog;
pub mod cli;
pub mod error;

pub use error::{PatternbookError, Result};
