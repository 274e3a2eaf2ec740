use crate::base;

/// Interval defined by the inclusive bound of two dates. If `start` is greater
/// than `end`, the interval is considered empty. All empty intervals are
/// equivalent.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl Interval {
    pub const EMPTY: Self = Self {
        start: base::Date::MAX,
        end: base::Date::MIN,
    };

    pub fn new(start: base::Date, end: base::Date) -> Self {
        Self { start, end }
    }

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn contains(self, dt: base::Date) -> bool {
        self.start <= dt && dt <= self.end
    }

    /// Returns an iterator over every day in the interval, in ascending order.
    pub fn days(self) -> impl Iterator<Item = base::Date> {
        let end = self.end;
        let first = if self.is_empty() {
            None
        } else {
            Some(self.start)
        };
        std::iter::successors(first, move |dt| dt.next_day().filter(|next| *next <= end))
    }
}
