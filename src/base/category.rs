/// Transaction category. Stored and displayed by its full name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// Single-letter codes accepted from users.
    const CODES: [(&'static str, Self); 2] = [("I", Self::Income), ("E", Self::Expense)];

    /// Looks up a user-entered code. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn from_code(s: &str) -> Result<Self, ParseError> {
        let code = s.trim().to_uppercase();
        Self::CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, category)| category)
            .ok_or(ParseError::UnknownCode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid category. Please enter 'I' for Income or 'E' for Expense.")]
    UnknownCode,
}
