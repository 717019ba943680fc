//! Demonstration binary for the proctor test harness.

use std::process::ExitCode;

use clap::Parser;
use eyre::{Result, WrapErr};
use proctor::Manager;
use proctor::config::set_color_choice;
use tracing::info;

use proctor_demo::cli::Args;
use proctor_demo::logging::init_logging;
use proctor_demo::suite::{self, Sample};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.log_level);

    let verbosity = args
        .resolve_verbosity()
        .wrap_err("invalid PROCTOR_VERBOSITY")?;
    if let Some(choice) = args.color {
        set_color_choice(choice);
    }
    info!(version = env!("CARGO_PKG_VERSION"), %verbosity, "starting proctor-demo");

    let sample = Sample;
    let mut manager = Manager::new();
    manager.initialize("proctor-demo");
    suite::register(&mut manager, &sample);

    let failed = manager.test(verbosity);
    Ok(ExitCode::from(suite::exit_code(failed)))
}
