//! Executing a rename batch

mod executor;
mod outcome;

pub use executor::{execute, planned_path, run};
pub use outcome::{RenameDecision, RenameOutcome, RenameReport};
