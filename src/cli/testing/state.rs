use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual objects deserialized from a repo directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Default)]
pub struct State {
    config: Option<base::Config>,
    rs: Option<base::Recordset>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets repo's [`base::Recordset`].
    pub fn with_rs<T>(mut self, rs: T) -> Self
    where
        T: TryInto<base::Recordset> + std::fmt::Debug,
        <T as TryInto<base::Recordset>>::Error: std::fmt::Debug,
    {
        self.rs = Some(rs.try_into().unwrap());
        self
    }

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        Self {
            config: fs
                .config_path()
                .exists()
                .then(|| fs.read_config().unwrap()),
            rs: fs.store_path().exists().then(|| fs.load_all().unwrap()),
        }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    rs: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets repo's store file contents.
    pub fn with_rs(mut self, s: &'a str) -> Self {
        self.rs = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.config_path(), s).unwrap()
        }
        if let Some(s) = self.rs {
            let obj = s.parse::<base::Recordset>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.store_path(), s).unwrap()
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.rs {
            os = os.with_rs(s);
        }
        os
    }
}
