//! Progress bar construction
//!
//! The engine reports integer percentages, so the bar is driven in
//! percent positions rather than bytes.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a percent-driven progress bar for one hash computation
pub fn percent_bar(label: &str) -> ProgressBar {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}%")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(label.to_string());
    pb
}
