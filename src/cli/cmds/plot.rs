use anyhow::Context;

use crate::base;
use crate::cli;

/// Plot daily income and expense within a date range
#[derive(clap::Parser)]
pub struct Plot {
    /// First date, dd-mm-yyyy (inclusive)
    start: base::Date,

    /// Last date, dd-mm-yyyy (inclusive)
    end: base::Date,
}

impl Plot {
    pub fn run(self, fs: &base::Fs, config: &base::Config) -> anyhow::Result<cli::Output> {
        let query = base::Query::run(fs, self.start, self.end)
            .with_context(|| format!("failed to read '{}'", fs.store_path().display()))?;
        Ok(cli::Output::Chart(cli::util::chart_config(query.rs, config)))
    }
}
