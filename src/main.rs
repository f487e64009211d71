use std::process::ExitCode;

use cr_api_models::config::Config;
use cr_api_models::inspect::{inspect_file, response_files};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize Logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
        return ExitCode::FAILURE;
    }

    info!("Inspecting saved responses in {}", config.response_dir.display());

    let files = match response_files(&config.response_dir) {
        Ok(files) => files,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut failed = 0;
    for (path, kind) in &files {
        match inspect_file(path, *kind) {
            Ok(summary) => info!("{}: {summary}", path.display()),
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
    }

    info!("Inspected {} files, {failed} failed.", files.len());
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
