#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub chart_axis: char,
    pub chart_bar_income: char,
    pub chart_bar_expense: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            chart_axis: '|',
            chart_bar_income: '+',
            chart_bar_expense: '-',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            chart_axis: '\u{2502}',
            chart_bar_income: '\u{2588}',
            chart_bar_expense: '\u{2588}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
