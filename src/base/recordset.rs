use crate::base;
use crate::base::record::Row;

/// Records in storage order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recordset(Vec<base::Record>);

impl Recordset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, r: base::Record) {
        self.0.push(r)
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.0.iter()
    }

    /// Returns the smallest interval containing every record's date, or
    /// [`base::Interval::EMPTY`] if there are no records.
    pub fn spanned_interval(&self) -> base::Interval {
        self.iter()
            .fold(base::Interval::EMPTY, |acc, r| base::Interval {
                start: acc.start.min(r.date()),
                end: acc.end.max(r.date()),
            })
    }

    /// Returns the records dated within `interval`, keeping their order.
    pub fn filter_interval(&self, interval: base::Interval) -> Self {
        self.iter().filter(|r| interval.contains(r.date())).collect()
    }
}

impl IntoIterator for Recordset {
    type Item = base::Record;
    type IntoIter = std::vec::IntoIter<base::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Record> for Recordset {
    fn from_iter<T: IntoIterator<Item = base::Record>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Record> for Recordset {
    fn from_iter<T: IntoIterator<Item = &'a base::Record>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    pub line: u64,
    #[source]
    pub source: RowIssue,
}

#[derive(Debug, thiserror::Error)]
pub enum RowIssue {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Row(#[from] base::record::RowError),
}

fn line_of(pos: Option<&csv::Position>) -> u64 {
    pos.map_or(0, csv::Position::line)
}

/// Reads CSV text whose first line is a header. Rows that cannot be turned
/// into records are passed to `on_skip` and left out of the result; only I/O
/// and header errors abort the read.
pub fn read_csv<R>(rdr: R, mut on_skip: impl FnMut(ParseError)) -> Result<Recordset, csv::Error>
where
    R: std::io::Read,
{
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers = rdr.headers()?.clone();
    let mut rs = Recordset::new();
    let mut raw = csv::StringRecord::new();
    loop {
        match rdr.read_record(&mut raw) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                on_skip(ParseError {
                    line: line_of(e.position()),
                    source: e.into(),
                });
                continue;
            }
        }
        let line = line_of(raw.position());
        let parsed = raw
            .deserialize::<Row>(Some(&headers))
            .map_err(RowIssue::from)
            .and_then(|row| base::Record::try_from(row).map_err(RowIssue::from));
        match parsed {
            Ok(r) => rs.push(r),
            Err(source) => on_skip(ParseError { line, source }),
        }
    }
    Ok(rs)
}

impl std::str::FromStr for Recordset {
    type Err = ParseError;

    /// Parses CSV text with a header row, failing on the first bad row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut first_err = None;
        let rs = read_csv(s.as_bytes(), |e| {
            first_err.get_or_insert(e);
        })
        .map_err(|e| ParseError {
            line: line_of(e.position()),
            source: e.into(),
        })?;
        match first_err {
            Some(e) => Err(e),
            None => Ok(rs),
        }
    }
}

impl TryFrom<&str> for Recordset {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
