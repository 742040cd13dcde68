use super::open_tracker;
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

/// Prints the title and the numbered log with its total.
pub fn cmd() -> Result<()> {
    let tracker = open_tracker()?;
    msg_print!(tracker.title(), true);

    if tracker.entries().is_empty() {
        msg_info!(Message::LogEmpty);
        return Ok(());
    }

    View::log(tracker.entries(), &tracker.total_duration());
    Ok(())
}
