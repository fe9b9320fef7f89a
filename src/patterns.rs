//! Boilerplate prefix patterns.
//!
//! Matching is a plain byte-wise prefix test: no regex, no case folding, no
//! trimming of the tested text.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::DEFAULT_PATTERNS;
use crate::error::FilterError;

/// Ordered, immutable set of prefix patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Build a set from patterns taken as given, order preserved.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in boilerplate list.
    pub fn defaults() -> Self {
        Self::new(DEFAULT_PATTERNS.iter().copied())
    }

    /// Parse one pattern per line.
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut patterns = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                patterns.push(line.to_string());
            }
        }
        Ok(Self { patterns })
    }

    /// Load patterns from a file, see [`PatternSet::from_reader`].
    pub fn load(path: &Path) -> Result<Self, FilterError> {
        let to_error = |source| FilterError::PatternFile {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(to_error)?;
        let set = Self::from_reader(BufReader::new(file)).map_err(to_error)?;
        log::debug!("loaded {} patterns from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.patterns.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(String::as_str)
    }

    /// Index of the first pattern, in set order, that `text` starts with.
    pub fn first_match(&self, text: &[u8]) -> Option<usize> {
        self.patterns
            .iter()
            .position(|p| text.starts_with(p.as_bytes()))
    }

    /// True if `text` starts with any pattern.
    pub fn matches(&self, text: &[u8]) -> bool {
        self.first_match(text).is_some()
    }
}

/// True iff `text` starts with at least one entry of `patterns`.
pub fn matches_boilerplate(text: &[u8], patterns: &PatternSet) -> bool {
    patterns.matches(text)
}
