use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

fn print_status(label: &str, message: &str, style: Style) {
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        style.apply_to(label),
    );
}

/// Print a Cargo-style action line: `   Uploading https://repo/...`
///
/// The label is right-aligned to 12 characters, bold green, written to
/// stderr so it never mixes with captured process output on stdout.
pub fn status(label: &str, message: &str) {
    print_status(label, message, Style::new().green().bold());
}

/// Like [`status`] but bold cyan, for derived facts rather than actions
/// (the computed snapshot version, for example).
pub fn status_info(label: &str, message: &str) {
    print_status(label, message, Style::new().cyan().bold());
}

/// Like [`status`] but bold yellow, for conditions worth flagging that do
/// not stop the operation.
pub fn status_warn(label: &str, message: &str) {
    print_status(label, message, Style::new().yellow().bold());
}

/// An animated spinner shown while waiting on a repository round-trip.
///
/// Ticks on its own; callers clear it with
/// [`ProgressBar::finish_and_clear`] before printing anything else.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
