/// A monetary quantity.
///
/// Transaction amounts are always strictly positive; parsing enforces that.
/// Negative values only arise from arithmetic on totals, such as net savings.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::Into,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::Sum,
)]
pub struct Amount(pub f64);

impl Amount {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `amount.to_string().len()` for chart alignment.
    pub fn charlen(self) -> usize {
        self.to_string().len()
    }
}

impl std::fmt::Display for Amount {
    /// Formats with exactly two decimal places.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid amount. Please enter a number.")]
    NotANumber(#[from] std::num::ParseFloatError),
    #[error("Amount must be a finite number.")]
    NotFinite,
    #[error("Amount must be a non-negative non-zero value.")]
    NotPositive,
}

impl std::str::FromStr for Amount {
    type Err = ParseError;

    /// Parses a transaction amount. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let x = s.trim().parse::<f64>()?;
        if !x.is_finite() {
            return Err(Self::Err::NotFinite);
        }
        if x <= 0.0 {
            return Err(Self::Err::NotPositive);
        }
        Ok(Self(x))
    }
}
