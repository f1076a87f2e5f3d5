use crate::share::{SharePlatform, ShareOutcome};
use crossterm::event::Event as CrosstermEvent;

/// Where a share attempt was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    Intent(SharePlatform),
    Native,
}

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Clipboard write finished
    CopyFinished { result: Result<(), String> },

    /// A share intent or native share finished
    ShareFinished {
        channel: ShareChannel,
        outcome: ShareOutcome,
    },

    /// Tick for animation frames
    Tick,
}
