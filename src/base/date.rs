/// The only date format accepted from users and written to the store.
const FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[day]-[month]-[year]");

/// A calendar date without time or timezone information. Displayed and parsed
/// as `dd-mm-yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

impl Date {
    pub const MIN: Self = Self(time::Date::MIN);
    pub const MAX: Self = Self(time::Date::MAX);

    /// Returns the local date, falling back to UTC if the local offset cannot
    /// be determined.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self(time::macros::date!(2015 - 03 - 30))
    }

    pub fn next_day(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    /// Parses user input. If `allow_default` is set, blank input stands for
    /// today's date.
    pub fn parse_or_today(s: &str, allow_default: bool) -> Result<Self, ParseError> {
        if allow_default && s.trim().is_empty() {
            return Ok(Self::today());
        }
        s.parse()
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0.format(FORMAT).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("date is empty")]
    Empty,
    #[error("invalid date format, expected dd-mm-yyyy")]
    BadLayout,
    #[error("invalid date format, expected dd-mm-yyyy")]
    BadFormat(#[from] time::error::Parse),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a zero-padded `dd-mm-yyyy` date. Surrounding whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        let b = s.as_bytes();
        let is_layout = b.len() == 10
            && b.iter().enumerate().all(|(i, c)| match i {
                2 | 5 => *c == b'-',
                _ => c.is_ascii_digit(),
            });
        if !is_layout {
            return Err(Self::Err::BadLayout);
        }
        Ok(Self(time::Date::parse(s, FORMAT)?))
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
