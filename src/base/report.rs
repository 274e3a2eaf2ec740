use crate::base;

/// Per-category totals of a set of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    totals: base::Aggregate<base::Category, base::Amount>,
}

impl Summary {
    pub fn of(rs: &base::Recordset) -> Self {
        Self {
            totals: rs.iter().map(|r| (r.category(), r.amount())).collect(),
        }
    }

    pub fn total(&self, category: base::Category) -> base::Amount {
        self.totals.get(category).unwrap_or_default()
    }

    pub fn total_income(&self) -> base::Amount {
        self.total(base::Category::Income)
    }

    pub fn total_expense(&self) -> base::Amount {
        self.total(base::Category::Expense)
    }

    pub fn net_savings(&self) -> base::Amount {
        self.total_income() - self.total_expense()
    }
}

/// Records dated within an inclusive interval, along with their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub interval: base::Interval,
    pub rs: base::Recordset,
    pub summary: Summary,
}

impl Query {
    /// Reads the whole store and keeps the records dated from `start` to `end`,
    /// both inclusive. If `start` is after `end`, nothing matches.
    pub fn run(fs: &base::Fs, start: base::Date, end: base::Date) -> Result<Self, base::fs::Error> {
        let rs = fs.load_all()?;
        Ok(Self::over(&rs, base::Interval::new(start, end)))
    }

    pub fn over(rs: &base::Recordset, interval: base::Interval) -> Self {
        let rs = rs.filter_interval(interval);
        let summary = Summary::of(&rs);
        Self {
            interval,
            rs,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rs.is_empty()
    }
}

/// Printable form of a [`Query`]: the matching rows followed by their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub currency_symbol: String,
    pub query: Query,
}

impl Report {
    const HEADERS: [&'static str; 4] = ["date", "amount", "category", "description"];

    fn money(&self, amount: base::Amount) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }

    fn write_table(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .query
            .rs
            .iter()
            .map(|r| {
                [
                    r.date().to_string(),
                    r.amount().to_string(),
                    r.category().to_string(),
                    r.description().to_string(),
                ]
            })
            .collect::<Vec<_>>();
        let mut widths = Self::HEADERS.map(str::len);
        for row in rows.iter() {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut write_row = |cells: [&str; 4]| -> std::fmt::Result {
            // Everything but the description is right-aligned.
            let line = format!(
                "{:>w0$}  {:>w1$}  {:>w2$}  {}",
                cells[0],
                cells[1],
                cells[2],
                cells[3],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            );
            writeln!(f, "{}", line.trim_end())
        };
        write_row(Self::HEADERS)?;
        for row in rows.iter() {
            write_row([row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()])?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Report {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.query.is_empty() {
            return writeln!(f, "No transactions found in the given date range.");
        }
        writeln!(
            f,
            "Transactions from {} to {}",
            self.query.interval.start, self.query.interval.end
        )?;
        self.write_table(f)?;
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        let summary = &self.query.summary;
        writeln!(f, "Total Income: {}", self.money(summary.total_income()))?;
        writeln!(f, "Total Expense: {}", self.money(summary.total_expense()))?;
        writeln!(f, "Net Savings: {}", self.money(summary.net_savings()))
    }
}
