use crate::base;

/// Charts are never drawn narrower than this, whatever the terminal reports.
pub const MIN_TERM_WIDTH: usize = 60;

/// `dd-mm-yyyy`
const LABEL_CHARLEN: usize = 10;

/// Space before the axis, and the space between a bar and its value.
const BOUNDING_SPACES_COUNT: usize = 2;

/// Daily income and expense totals drawn as pairs of horizontal bars.
pub struct Chart {
    charset: base::Charset,
    income: base::DailySeries,
    expense: base::DailySeries,
    max_val: base::Amount,
    max_barlen: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    pub rs: base::Recordset,
}

impl Config {
    pub fn to_chart(&self) -> Chart {
        let (income, expense) = base::series::build_daily_series(&self.rs);
        let max_val = income
            .amounts()
            .chain(expense.amounts())
            .fold(base::Amount::default(), |acc, v| if v > acc { v } else { acc });
        let max_val_charlen = income
            .amounts()
            .chain(expense.amounts())
            .map(base::Amount::charlen)
            .max()
            .unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(MIN_TERM_WIDTH)
            .saturating_sub(LABEL_CHARLEN + BOUNDING_SPACES_COUNT + 1 + max_val_charlen);

        Chart {
            charset: self.charset.clone(),
            income,
            expense,
            max_val,
            max_barlen,
        }
    }
}

impl Chart {
    fn barlen(&self, val: base::Amount) -> usize {
        if self.max_val.value() <= 0.0 {
            return 0;
        }
        let x = val.value() / self.max_val.value() * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw_bar(
        &self,
        w: &mut impl std::fmt::Write,
        val: base::Amount,
        category: base::Category,
    ) -> std::fmt::Result {
        w.write_char(self.charset.chart_axis)?;
        let barlen = self.barlen(val);
        if barlen > 0 {
            let ch = match category {
                base::Category::Income => self.charset.chart_bar_income,
                base::Category::Expense => self.charset.chart_bar_expense,
            };
            let bars = ch.to_string().repeat(barlen);
            if self.charset.color {
                let bars = match category {
                    base::Category::Income => colored::Colorize::green(bars.as_str()),
                    base::Category::Expense => colored::Colorize::red(bars.as_str()),
                };
                write!(w, "{}", bars)?;
            } else {
                w.write_str(&bars)?;
            }
            w.write_char(' ')?;
        }
        writeln!(w, "{}", val)
    }

    fn draw(
        &self,
        w: &mut impl std::fmt::Write,
        dt: base::Date,
        income: base::Amount,
        expense: base::Amount,
    ) -> std::fmt::Result {
        write!(w, "{} ", dt)?;
        self.draw_bar(w, income, base::Category::Income)?;
        for _ in 0..=LABEL_CHARLEN {
            w.write_char(' ')?;
        }
        self.draw_bar(w, expense, base::Category::Expense)
    }
}

impl std::fmt::Display for Chart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ((dt, income), (_, expense)) in self.income.iter().zip(self.expense.iter()) {
            self.draw(f, dt, income, expense)?;
        }
        Ok(())
    }
}
