//! pgprobe-codegen - render a template for a PostgreSQL table

use clap::Parser;
use pgprobe_cli::{logging, run, CodegenArgs};
use std::process::ExitCode;

/// Connection, probe, template or output failure.
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let args = CodegenArgs::parse();
    logging::init();

    match run::run_codegen(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pgprobe-codegen: error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
