//! Progress reporting over input bytes

use std::io::Read;

use indicatif::{ProgressBar, ProgressBarIter, ProgressStyle};

use crate::executor::RunResult;

/// Byte progress bar for a single input file.
///
/// When disabled the bar is hidden, so callers can wrap their reader the
/// same way either way.
pub struct ProgressReporter {
    progress_bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter for an input of `total_bytes` bytes.
    pub fn new(enabled: bool, total_bytes: u64) -> Self {
        if !enabled {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let pb = ProgressBar::new(total_bytes);
        match ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} ({eta}) {msg}",
        ) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::warn!("progress bar template rejected: {e}"),
        }

        Self { progress_bar: pb }
    }

    /// Wrap `read` so every byte read advances the bar.
    pub fn wrap_read<R: Read>(&self, read: R) -> ProgressBarIter<R> {
        self.progress_bar.wrap_read(read)
    }

    pub fn is_hidden(&self) -> bool {
        self.progress_bar.is_hidden()
    }

    /// Finish the bar with the final record counts.
    pub fn finish(&self, result: &RunResult) {
        self.progress_bar.finish_with_message(format!(
            "kept {}, removed {}",
            result.kept, result.removed
        ));
    }
}
