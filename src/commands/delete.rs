use super::{entry_index, open_tracker};
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Row number as shown by `tasktime log`
    number: usize,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tracker = open_tracker()?;
    let index = entry_index(args.number, tracker.entries().len())?;

    let removed = tracker.delete_entry(index)?;
    msg_success!(Message::EntryDeleted(args.number, removed.task));
    Ok(())
}
