use super::{entry_index, open_tracker};
use crate::{
    libs::{entry::EntryField, messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Row number as shown by `tasktime log`
    pub(crate) number: usize,
    /// Field to change
    #[arg(value_enum)]
    pub(crate) field: EntryField,
    /// New value, stored as given
    pub(crate) value: String,
}

/// Replaces one field of a logged entry.
///
/// Values are not validated and the duration is not recomputed when a start
/// or stop time changes.
pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tracker = open_tracker()?;
    let index = entry_index(args.number, tracker.entries().len())?;

    let entry = tracker.edit_entry(index, args.field, &args.value)?;
    View::entry(args.number, entry);

    msg_success!(Message::EntryUpdated(args.number));
    Ok(())
}
