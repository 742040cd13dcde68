use std::process::ExitCode;
use tasktime::commands::Cli;
use tasktime::libs::logging;
use tasktime::{msg_debug, msg_error};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    msg_debug!(format!("tasktime {}", env!("CARGO_PKG_VERSION")));

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
