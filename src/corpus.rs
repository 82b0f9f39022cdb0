//! Common-password corpus.
//!
//! Holds the set of breached or easily guessed passwords. The analyzer only
//! borrows it; loading happens once at startup through the helpers below.

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the corpus file.
pub const CORPUS_PATH_ENV: &str = "PWD_COMMON_PASSWORDS_PATH";

const DEFAULT_CORPUS_PATH: &str = "./assets/common-passwords.txt";

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Immutable set of lowercase common passwords.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks membership, case-insensitively.
    pub fn contains(&self, password: &str) -> bool {
        !self.entries.is_empty() && self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the corpus file path.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_COMMON_PASSWORDS_PATH`
    /// 2. Default path `./assets/common-passwords.txt`
    pub fn default_path() -> PathBuf {
        std::env::var(CORPUS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CORPUS_PATH))
    }

    /// Loads the corpus from the path given by [`CommonPasswords::default_path`].
    pub fn from_env() -> Result<Self, CorpusError> {
        Self::from_path(Self::default_path())
    }

    /// Loads the corpus from a file with one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank line
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password loading FAILED: FileNotFound {:?}", path);
            return Err(CorpusError::FileNotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)?;
        let corpus = Self::from_reader(file)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Common passwords loaded: {} entries from {:?}", corpus.len(), path);

        Ok(corpus)
    }

    /// Loads the corpus from any reader. Invalid UTF-8 bytes are replaced
    /// rather than rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let mut reader = BufReader::new(reader);
        let mut entries = HashSet::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let entry = String::from_utf8_lossy(&line).trim().to_lowercase();
            if !entry.is_empty() {
                entries.insert(entry);
            }
        }

        if entries.is_empty() {
            return Err(CorpusError::EmptyFile);
        }
        Ok(Self { entries })
    }
}

impl<S: AsRef<str>> FromIterator<S> for CommonPasswords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { entries }
    }
}
