//! `pdf2txt` CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, build the `pdftotext`
//! command, and write the extracted text to a file or stdout.
//! For programmatic use, prefer the library API (`pdftotext::Command`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
