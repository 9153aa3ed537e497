//! Command implementations

pub mod bee;
pub mod check;
pub mod connections;
pub mod survey;
pub mod wordle;

pub use bee::run_bee;
pub use check::{CheckResult, check_guess};
pub use connections::run_connections;
pub use survey::{PuzzleSummary, SurveyResult, run_survey};
pub use wordle::run_wordle;
