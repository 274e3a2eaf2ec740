use anyhow::Context;

use crate::base;
use crate::cli;

const DATE_PROMPT: &str =
    "Enter the date of the transaction (dd-mm-yyyy) or enter for today's date: ";

/// Add a transaction
///
/// Fields left out on the command line are asked for interactively.
#[derive(clap::Parser, Default)]
pub struct Add {
    /// Date as dd-mm-yyyy
    #[arg(short, long)]
    date: Option<base::Date>,

    /// Positive amount
    #[arg(short, long)]
    amount: Option<base::Amount>,

    /// 'I' for income or 'E' for expense
    #[arg(short, long, value_parser = base::Category::from_code)]
    category: Option<base::Category>,

    /// Free-form note
    #[arg(long)]
    description: Option<String>,
}

impl Add {
    fn into_record<R, W>(self, prompter: &mut base::Prompter<R, W>) -> std::io::Result<base::Record>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        let date = match self.date {
            Some(dt) => dt,
            None => prompter.date(DATE_PROMPT, true)?,
        };
        let amount = match self.amount {
            Some(a) => a,
            None => prompter.amount()?,
        };
        let category = match self.category {
            Some(c) => c,
            None => prompter.category()?,
        };
        let description = match self.description {
            Some(s) => s,
            None => prompter.description()?,
        };
        Ok(base::Record::new(date, amount, category, description))
    }

    pub fn run<R, W>(
        self,
        fs: &base::Fs,
        prompter: &mut base::Prompter<R, W>,
    ) -> anyhow::Result<cli::Output>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        let r = self.into_record(prompter)?;
        let path = fs.store_path();
        fs.initialize()
            .and_then(|_| fs.append(&r))
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(cli::Output::str("Entry added successfully"))
    }
}
