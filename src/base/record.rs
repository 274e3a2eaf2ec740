use crate::base;

/// A single transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    date: base::Date,
    amount: base::Amount,
    category: base::Category,
    description: String,
}

impl Record {
    pub fn new(
        date: base::Date,
        amount: base::Amount,
        category: base::Category,
        description: String,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description,
        }
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn amount(&self) -> base::Amount {
        self.amount
    }

    pub fn category(&self) -> base::Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Column names of the store, in order.
pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// A record as it appears in the store. Field order must match [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub date: String,
    pub amount: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl From<&Record> for Row {
    /// Amounts are written in their shortest round-trip form so that reading
    /// them back yields the same value.
    fn from(r: &Record) -> Self {
        Self {
            date: r.date.to_string(),
            amount: r.amount.value().to_string(),
            category: r.category.to_string(),
            description: r.description.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("invalid date {0:?}")]
    Date(String, #[source] base::date::ParseError),
    #[error("invalid amount {0:?}")]
    Amount(String, #[source] base::amount::ParseError),
    #[error("invalid category {0:?}")]
    Category(String, #[source] strum::ParseError),
}

impl TryFrom<Row> for Record {
    type Error = RowError;

    fn try_from(row: Row) -> Result<Self, Self::Error> {
        let date = row
            .date
            .parse()
            .map_err(|e| RowError::Date(row.date.clone(), e))?;
        let amount = row
            .amount
            .parse()
            .map_err(|e| RowError::Amount(row.amount.clone(), e))?;
        let category = row
            .category
            .parse()
            .map_err(|e| RowError::Category(row.category.clone(), e))?;
        Ok(Self {
            date,
            amount,
            category,
            description: row.description,
        })
    }
}
