//! Loading indicators shown while feeds are fetched.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a steady-tick spinner with the given message. The caller clears it
/// with `finish_and_clear` once the screen is ready.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
