//! Built-in configuration values.

/// Buffer size for file input and output, in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Sentence-text prefixes removed when no pattern file is given.
///
/// The underscore entries match page separators by their exact run length
/// prefix; a shorter run than four underscores is not caught.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "frontiers-fpsyg-corpus.txt Journal Information",
    "Journal ID (publisher-id):",
    "Psychology Journal Abbreviation:",
    "Psychology ISSN:",
    "Publisher: Frontiers Research Foundation",
    "Article Information",
    "Copyright",
    "open-access:",
    "Received Day:",
    "Accepted Day:",
    "Electronic publication date:",
    "collection publication date:",
    "Volume:",
    "DOI:",
    "[doi:",
    // Journal citation lines
    "Front.",
    // Page separators
    "____",
    "______",
    "________________________________________________________________",
    "____________________________________________________________________________________",
];

/// Options for [`crate::filter_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Capacity of the input reader and output writer buffers.
    pub buffer_size: usize,
    /// Draw a byte progress bar on stderr.
    pub show_progress: bool,
}

impl FilterOptions {
    /// Buffer capacity actually used; never zero.
    pub fn capacity(&self) -> usize {
        self.buffer_size.max(1)
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            show_progress: false,
        }
    }
}
