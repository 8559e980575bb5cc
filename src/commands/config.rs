//! Run configuration shared by the curation commands

use crate::core::Source;
use crate::curation::DAILY_CAP;
use crate::wordlists::output_file_name;
use std::path::PathBuf;

/// Where to read sources, where to write lists, and how big the daily list is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurateConfig {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    pub daily_cap: usize,
    pub quiet: bool,
}

impl CurateConfig {
    /// Read and write in the same directory with the default daily cap
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            out_dir: dir.clone(),
            data_dir: dir,
            daily_cap: DAILY_CAP,
            quiet: false,
        }
    }

    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    #[must_use]
    pub const fn with_daily_cap(mut self, daily_cap: usize) -> Self {
        self.daily_cap = daily_cap;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub fn source_path(&self, source: Source) -> PathBuf {
        self.data_dir.join(source.file_name())
    }

    #[must_use]
    pub fn output_path(&self, list: &str) -> PathBuf {
        self.out_dir.join(output_file_name(list))
    }
}

impl Default for CurateConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
