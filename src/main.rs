use std::process::ExitCode;

use clap::Parser;
use i18n_merge::cli::{Arguments, ExitStatus, init_logging, print_error};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match i18n_merge::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::Failure.into()
        }
    }
}
