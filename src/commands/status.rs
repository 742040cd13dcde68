use super::open_tracker;
use crate::{
    libs::{
        formatter::{format_duration, format_time},
        messages::Message,
    },
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let tracker = open_tracker()?;
    msg_print!(tracker.title());

    match (tracker.active(), tracker.elapsed()) {
        (Some(session), Some(elapsed)) => msg_info!(Message::StatusRunning {
            task: session.task.clone(),
            since: format_time(&session.started_at),
            elapsed: format_duration(&elapsed),
        }),
        _ => msg_info!(Message::StatusIdle),
    }

    Ok(())
}
