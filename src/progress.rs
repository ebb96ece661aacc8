//! Spinner shown while the release feed is queried
//!
//! Drawn on stderr with indicatif so stdout stays clean for piped output.

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Wait indicator for network-bound commands
#[derive(Debug, Clone, Copy)]
pub struct FetchSpinner {
    /// Off in quiet and JSON modes
    visible: bool,
}

impl FetchSpinner {
    /// Spinner that draws only when `visible`
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    /// Spinner that never draws
    pub fn hidden() -> Self {
        Self::new(false)
    }

    /// Whether `run` draws anything
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Start a spinner labelled `message`, or `None` when hidden
    fn start(&self, message: &str) -> Option<ProgressBar> {
        if !self.visible {
            return None;
        }

        let bar = ProgressBar::new_spinner();
        // Static template; a parse failure just leaves the default style
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars(TICK_CHARS)
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);
        Some(bar)
    }

    /// Await `work` with the spinner running, clearing it before returning
    pub async fn run<T>(&self, message: &str, work: impl Future<Output = T>) -> T {
        let bar = self.start(message);
        let result = work.await;
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
        result
    }
}
