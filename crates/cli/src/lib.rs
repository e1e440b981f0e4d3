//! Fontshelf CLI library.

pub mod cli;
pub mod config;
pub mod native;
pub mod orchestrator;
pub mod report;

pub use native::ProcessManager;
pub use orchestrator::Orchestrator;
pub use report::{OperationOptions, OutputOptions, Reporter};
