use super::open_tracker;
use crate::{
    libs::{celebration::Celebration, config::Config, messages::Message, view::View},
    msg_debug, msg_info, msg_success,
};
use anyhow::Result;

/// Stops the running task, prints its new log row and plays the celebration.
///
/// The entry is persisted before the animation starts; the command waits for
/// the animation so the process does not exit mid-frame.
pub async fn cmd() -> Result<()> {
    let mut tracker = open_tracker()?;

    let Some(entry) = tracker.stop() else {
        msg_info!(Message::NoActiveSession);
        return Ok(());
    };

    View::entry(tracker.entries().len(), &entry);
    msg_success!(Message::SessionStopped {
        task: entry.task,
        duration: entry.duration,
    });

    let config = match Config::read() {
        Ok(config) => config.celebration.unwrap_or_default(),
        Err(e) => {
            msg_debug!(format!("using default celebration settings: {}", e));
            Default::default()
        }
    };
    if config.enabled {
        Celebration::from(&config).spawn_in_terminal().await?;
    }

    Ok(())
}
