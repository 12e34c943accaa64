//! Command Line Interface (CLI) layer for `pdf2txt`.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). Flags are merged over an optional
//! JSON preset and handed to the library as `ExtractParams`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
