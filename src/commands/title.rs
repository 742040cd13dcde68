use super::open_tracker;
use crate::{libs::messages::Message, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TitleArgs {
    /// New title; prints the current one when omitted
    text: Option<String>,
}

pub fn cmd(args: TitleArgs) -> Result<()> {
    let mut tracker = open_tracker()?;

    match args.text {
        Some(text) => {
            tracker.set_title(&text);
            msg_success!(Message::TitleUpdated(text));
        }
        None => msg_print!(Message::TitleCurrent(tracker.title().to_string())),
    }

    Ok(())
}
