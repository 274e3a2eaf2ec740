use anyhow::Context;

use crate::base;
use crate::cli;

/// View transactions and summary within a date range
#[derive(clap::Parser)]
pub struct View {
    /// First date, dd-mm-yyyy (inclusive)
    pub start: base::Date,

    /// Last date, dd-mm-yyyy (inclusive)
    pub end: base::Date,

    /// Also plot daily income and expense
    #[arg(long)]
    pub plot: bool,
}

impl View {
    pub fn run(self, fs: &base::Fs, config: &base::Config) -> anyhow::Result<cli::Output> {
        let query = base::Query::run(fs, self.start, self.end)
            .with_context(|| format!("failed to read '{}'", fs.store_path().display()))?;
        let chart = (self.plot && !query.is_empty())
            .then(|| cli::util::chart_config(query.rs.clone(), config));
        Ok(cli::Output::Report {
            report: base::Report {
                currency_symbol: config.currency_symbol.clone(),
                query,
            },
            chart,
        })
    }
}
