use super::open_tracker;
use crate::{
    libs::{formatter::format_time, messages::Message, session::StartOutcome},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Task name; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    task: Vec<String>,
}

/// Starts timing a task unless one is already running.
pub fn cmd(args: StartArgs) -> Result<()> {
    let mut tracker = open_tracker()?;
    let task = args.task.join(" ");

    match tracker.start(&task) {
        StartOutcome::Started(session) => msg_success!(Message::SessionStarted(session.task.clone())),
        StartOutcome::AlreadyRunning(session) => {
            msg_warning!(Message::SessionAlreadyRunning(session.task.clone(), format_time(&session.started_at)))
        }
        StartOutcome::EmptyTaskName => msg_warning!(Message::EmptyTaskName),
    }

    Ok(())
}
