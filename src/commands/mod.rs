//! Command implementations

pub mod combine;
pub mod config;
pub mod premium;

pub use combine::{CombineResult, SourceReport, run_combine};
pub use config::CurateConfig;
pub use premium::{PremiumResult, SourceCount, run_premium};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar ticking once per loaded source, hidden when quiet
fn source_progress(len: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}
