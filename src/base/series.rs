use crate::base;

/// Per-day totals, one entry for every day of a contiguous date range, in
/// ascending date order. Days without records hold zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries(Vec<(base::Date, base::Amount)>);

impl DailySeries {
    /// Totals the amounts of the records in `rs` whose category is `category`,
    /// day by day across `span`.
    pub fn new(rs: &base::Recordset, category: base::Category, span: base::Interval) -> Self {
        let daily = rs
            .iter()
            .filter(|r| r.category() == category)
            .map(|r| (r.date(), r.amount()))
            .collect::<base::Aggregate<_, _>>();
        Self(
            span.days()
                .map(|dt| (dt, daily.get(dt).unwrap_or_default()))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (base::Date, base::Amount)> + '_ {
        self.0.iter().copied()
    }

    pub fn amounts(&self) -> impl Iterator<Item = base::Amount> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

/// Returns the income and expense series of `rs`, each spanning every day from
/// the earliest to the latest record date in `rs` (not any query bounds).
/// Empty input yields two empty series.
pub fn build_daily_series(rs: &base::Recordset) -> (DailySeries, DailySeries) {
    let span = rs.spanned_interval();
    (
        DailySeries::new(rs, base::Category::Income, span),
        DailySeries::new(rs, base::Category::Expense, span),
    )
}
