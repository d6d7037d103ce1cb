//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, pick_secrets, run_benchmark};
pub use interactive::run_interactive;
pub use solve::{SolveReport, SolveStep, random_secret, solve_word};
pub use suggest::{Suggestion, suggest};
