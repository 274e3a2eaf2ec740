pub mod aggregate;
pub mod amount;
pub mod category;
pub mod charset;
pub mod chart;
pub mod config;
pub mod date;
pub mod fs;
pub mod interval;
pub mod prompt;
pub mod record;
pub mod recordset;
pub mod report;
pub mod series;

pub use aggregate::Aggregate;
pub use amount::Amount;
pub use category::Category;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use fs::Fs;
pub use interval::Interval;
pub use prompt::Prompter;
pub use record::Record;
pub use recordset::Recordset;
pub use report::Query;
pub use report::Report;
pub use series::DailySeries;
