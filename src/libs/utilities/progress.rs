// Download progress reporting.
// The downloader calls a `ProgressReporter` after each chunk; only the terminal
// implementation touches the screen.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Width of the drawn bar in characters.
pub const BAR_WIDTH: usize = 50;

pub trait ProgressReporter {
    /// Called after each chunk with the running byte count.
    fn advance(&mut self, downloaded: u64);

    /// Called once when the body has been fully written.
    fn finish(&mut self);
}

/// Reporter used in quiet mode or when the size is unknown.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn advance(&mut self, _downloaded: u64) {}
    fn finish(&mut self) {}
}

/// In-place bar on stdout: `[=====     ] 4.00 MiB/10.00 MiB`.
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new(total: u64) -> Self {
        let template = format!("[{{bar:{BAR_WIDTH}}}] {{bytes}}/{{total_bytes}}");
        let style = ProgressStyle::with_template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("= ");
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());
        bar.set_style(style);
        Self { bar }
    }
}

impl ProgressReporter for TerminalProgress {
    fn advance(&mut self, downloaded: u64) {
        self.bar.set_position(downloaded);
    }

    fn finish(&mut self) {
        // Leave the final bar on screen, like a completed download line.
        self.bar.finish();
    }
}

/// Picks the reporter: a bar only when the size is known and output is not suppressed.
pub fn reporter_for(content_length: Option<u64>, quiet: bool) -> Box<dyn ProgressReporter> {
    match content_length {
        Some(total) if !quiet => Box::new(TerminalProgress::new(total)),
        _ => Box::new(SilentProgress),
    }
}
