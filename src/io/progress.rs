//! Progress display for long sweeps

use crate::io::configuration::{MIN_PROGRESS_LENGTH, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a fixed number of steps
///
/// Hidden when the caller asked for quiet output or the sweep is too short
/// to be worth drawing.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar labelled `label` covering `total` steps
    pub fn new(label: &'static str, total: usize, quiet: bool) -> Self {
        let bar = if quiet || total < MIN_PROGRESS_LENGTH {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(SWEEP_STYLE.clone());
            bar.set_message(label);
            bar
        };
        Self { bar }
    }

    /// Move the bar to `done` completed steps
    pub fn update(&self, done: usize) {
        self.bar.set_position(done as u64);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Whether anything is drawn
    pub fn is_visible(&self) -> bool {
        !self.bar.is_hidden()
    }
}
