use crate::base;

/// Application filesystem: the config file and the transaction store, both
/// anchored at one directory. Holds no state besides that directory, so every
/// read goes to disk.
pub struct Fs {
    dir: std::path::PathBuf,
}

impl Fs {
    pub const CONFIG_FILENAME: &'static str = ".cashbook.json";
    pub const STORE_FILENAME: &'static str = "finance_data.csv";

    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.config_path().is_file()
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.dir.join(Self::CONFIG_FILENAME)
    }

    pub fn store_path(&self) -> std::path::PathBuf {
        self.dir.join(Self::STORE_FILENAME)
    }

    /// Deserializes the config. If the file does not exist, returns
    /// `Config::default()`.
    pub fn read_config(&self) -> Result<base::Config, Error> {
        match std::fs::read_to_string(self.config_path()) {
            Ok(s) => Ok(s.parse()?),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(base::Config::default()),
                _ => Err(Error::Io(e)),
            },
        }
    }

    pub fn write_config(&self, config: &base::Config) -> std::io::Result<()> {
        std::fs::write(self.config_path(), config.to_string())
    }

    /// Creates the store with only a header row. An existing store is left
    /// untouched. Returns whether the store was created.
    pub fn initialize(&self) -> Result<bool, Error> {
        let path = self.store_path();
        let file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(Error::Io(e)),
        };
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(base::record::COLUMNS)?;
        wtr.flush()?;
        tracing::info!(path = %path.display(), "created transaction store");
        Ok(true)
    }

    /// Appends `r` as the last row of the store. Existing rows are never
    /// rewritten. A missing or empty store gets a header row first, and a
    /// last row lacking its line terminator gets one.
    pub fn append(&self, r: &base::Record) -> Result<(), Error> {
        use std::io::Read;
        use std::io::Seek;
        use std::io::Write;

        let path = self.store_path();
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;
        let len = file.metadata()?.len();
        if len > 0 {
            let mut last = [0u8; 1];
            file.seek(std::io::SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }
        let needs_header = len == 0;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        wtr.serialize(base::record::Row::from(r))?;
        wtr.flush()?;
        tracing::debug!(path = %path.display(), date = %r.date(), "appended record");
        Ok(())
    }

    /// Reads every record in the store. Rows that cannot be parsed are skipped
    /// with a warning. A missing store reads as empty.
    pub fn load_all(&self) -> Result<base::Recordset, Error> {
        let path = self.store_path();
        let file = match std::fs::File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(base::Recordset::new());
            }
            Err(e) => return Err(Error::Io(e)),
        };
        let rs = base::recordset::read_csv(std::io::BufReader::new(file), |e| {
            tracing::warn!(
                path = %path.display(),
                line = e.line,
                error = %e.source,
                "skipping malformed row"
            );
        })?;
        tracing::debug!(path = %path.display(), count = rs.len(), "loaded records");
        Ok(rs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
