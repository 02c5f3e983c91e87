use clap::Parser;
use env_logger::Env;
use importer::{run_with_config, Config};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    match run_with_config(&config) {
        Ok(summary) => {
            info!(
                "Import finished: {} created, {} modified, {} deleted, {} published",
                summary.created, summary.modified, summary.deleted, summary.verified
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Import failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
