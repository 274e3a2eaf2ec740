use anyhow::Context;

use crate::base;
use crate::cli;

const MENU: &str = "\n\
    1. Add a new transaction\n\
    2. View transactions and summary within a date range\n\
    3. Exit\n";

/// Interactive menu (the default when no command is given)
#[derive(clap::Parser, Default)]
pub struct Menu {}

impl Menu {
    /// Loops until the user chooses to exit. Everything except the farewell is
    /// written to the prompt output as it happens.
    pub fn run<R, W>(
        self,
        fs: &base::Fs,
        config: &base::Config,
        prompter: &mut base::Prompter<R, W>,
    ) -> anyhow::Result<cli::Output>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        loop {
            write!(prompter.output(), "{}", MENU)?;
            let choice = prompter.line("Enter your choice (1-3): ")?;
            match choice.trim() {
                "1" => {
                    let output = cli::cmds::add::Add::default().run(fs, prompter)?;
                    write!(prompter.output(), "{}", output)?;
                }
                "2" => view(fs, config, prompter)?,
                "3" => return Ok(cli::Output::str("Exiting...")),
                _ => writeln!(prompter.output(), "Invalid choice. Enter 1, 2 or 3.")?,
            }
        }
    }
}

fn view<R, W>(
    fs: &base::Fs,
    config: &base::Config,
    prompter: &mut base::Prompter<R, W>,
) -> anyhow::Result<()>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let start = prompter.date("Enter the start date (dd-mm-yyyy): ", false)?;
    let end = prompter.date("Enter the end date (dd-mm-yyyy): ", false)?;
    let query = base::Query::run(fs, start, end)
        .with_context(|| format!("failed to read '{}'", fs.store_path().display()))?;
    let rs = query.rs.clone();
    let report = base::Report {
        currency_symbol: config.currency_symbol.clone(),
        query,
    };
    write!(prompter.output(), "{}", report)?;
    if rs.is_empty() {
        return Ok(());
    }
    if prompter.confirm("Do you want to see a plot? (y/n) ")? {
        let output = cli::Output::Chart(cli::util::chart_config(rs, config));
        write!(prompter.output(), "{}", output)?;
    }
    Ok(())
}
