pub mod config;
pub mod engine;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod sheets;

pub use error::{DataError, SelectionError, SelectionResult};
pub use pipeline::{RunOutcome, SelectionEngine};
