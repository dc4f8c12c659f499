//! pgprobe-fields - describe the columns of a PostgreSQL table

use clap::Parser;
use pgprobe_cli::{logging, run, FieldsArgs};
use std::process::ExitCode;

/// Connection or probe failure.
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let args = FieldsArgs::parse();
    logging::init();

    match run::run_fields(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pgprobe-fields: error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
