use std::process::ExitCode;

use chatcast::RunArgs;
use chatcast_core::ChatcastError;
use chatcast_prophet::ProphetForecaster;
use clap::Parser;

fn main() -> ExitCode {
    // Human-friendly logging with env-based filtering, e.g. RUST_LOG=info.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let args = RunArgs::parse();
    match try_run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: &RunArgs) -> Result<(), ChatcastError> {
    let mut forecaster = ProphetForecaster::new()?;
    chatcast::run(args, &mut forecaster)?;
    Ok(())
}
