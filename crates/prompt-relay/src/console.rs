//! Small console helpers shared by the demo binaries.

use std::io::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{self, AsyncBufReadExt};

/// Prints an input prompt label and flushes it ahead of the read.
pub fn prompt(label: &str) {
    print!("{label}");
    std::io::stdout().flush().ok();
}

/// Reads one line from standard input.
///
/// Returns `None` at end of input.
pub async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {err}");
            None
        }
    }
}

/// Shows a spinner while a relay call is in flight.
///
/// The caller is expected to `finish_and_clear` it before printing the
/// result.
pub fn thinking_spinner() -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .expect("spinner template is well formed")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let bar = ProgressBar::new_spinner();
    bar.set_style(style);
    bar.set_message("🤔 Thinking...");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
