use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    Report {
        report: base::Report,
        chart: Option<base::chart::Config>,
    },
    Chart(base::chart::Config),
}

impl Output {
    pub fn str(s: impl Into<String>) -> Self {
        Output::Str(s.into())
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Report { report, chart } => {
                write!(f, "{}", report)?;
                match chart {
                    Some(config) if !config.rs.is_empty() => {
                        writeln!(f)?;
                        write!(f, "{}", config.to_chart())
                    }
                    _ => Ok(()),
                }
            }
            Output::Chart(config) => {
                if config.rs.is_empty() {
                    writeln!(f, "No transactions.")
                } else {
                    write!(f, "{}", config.to_chart())
                }
            }
        }
    }
}
