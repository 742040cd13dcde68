//! Short celebratory animation played after a session stops.
//!
//! The animation is an independent tokio task: an interval timer calls a sink
//! once per tick and the task ends on its own when the countdown runs out.
//! It never reads tracker state, so aborting it or letting it finish makes no
//! difference to the log.

use crate::libs::config::CelebrationConfig;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

const CONFETTI: [&str; 4] = ["🎉  ✨  🎊", "  ✨  🎊  🎉", "🎊  🎉  ✨", "  🎉  ✨  🎊"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    ticks: u32,
    interval: Duration,
}

impl Celebration {
    pub fn new(ticks: u32, interval: Duration) -> Self {
        Celebration { ticks, interval }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Runs the countdown in the background, calling `sink` with tick numbers `1..=ticks`.
    pub fn spawn<F>(self, mut sink: F) -> JoinHandle<()>
    where
        F: FnMut(u32) + Send + 'static,
    {
        tokio::spawn(async move {
            // A zero period would make `interval` panic.
            let mut timer = interval(self.interval.max(Duration::from_millis(1)));
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of a tokio interval completes immediately.
            timer.tick().await;

            let mut remaining = self.ticks;
            while remaining > 0 {
                timer.tick().await;
                sink(self.ticks - remaining + 1);
                remaining -= 1;
            }
        })
    }

    /// Spawns the animation drawing confetti to the terminal.
    pub fn spawn_in_terminal(self) -> JoinHandle<()> {
        self.spawn(|tick| {
            let frame = CONFETTI[(tick as usize - 1) % CONFETTI.len()];
            println!("{}", frame);
        })
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Celebration::from(&CelebrationConfig::default())
    }
}

impl From<&CelebrationConfig> for Celebration {
    fn from(config: &CelebrationConfig) -> Self {
        Celebration::new(config.ticks, Duration::from_millis(config.interval_ms))
    }
}
