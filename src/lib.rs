//! # conllu-filter
//!
//! Streaming removal of boilerplate sentences from CoNLL-U corpus files.
//!
//! Corpus files converted from journal articles carry sentences that are not
//! content at all: journal headers, copyright lines, DOIs, page separators.
//! This library drops every sentence whose `# text = ` line starts with one
//! of a set of prefixes and copies everything else through unchanged.
//!
//! ## Overview
//!
//! - **Records**: blank-line-separated groups of lines, kept byte-for-byte
//! - **Single pass**: one record in memory at a time, whatever the file size
//! - **Prefix patterns**: literal, case-sensitive, tested against the sentence text
//! - **Order preserved**: kept records come out in input order
//!
//! ## Example
//!
//! ```
//! use conllu_filter::{PatternSet, RunResult, run};
//!
//! let input = concat!(
//!     "# text = Participants read short words.\n",
//!     "1\tParticipants\tparticipant\tNOUN\t_\t_\t2\tnsubj\t_\t_\n",
//!     "\n",
//!     "# text = DOI: 10.3389/fpsyg.2015.00001\n",
//!     "1\tDOI\tDOI\tPROPN\t_\t_\t0\troot\t_\t_\n",
//! );
//!
//! let patterns = PatternSet::new(["DOI:"]);
//! let mut output = Vec::new();
//! let result = run(input.as_bytes(), &mut output, &patterns).unwrap();
//!
//! assert_eq!(result, RunResult { kept: 1, removed: 1 });
//! assert!(String::from_utf8(output).unwrap().starts_with("# text = Participants"));
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod filter;
pub mod paths;
pub mod patterns;
pub mod progress;
pub mod record;
pub mod segmenter;
pub mod stage;

pub use config::{DEFAULT_BUFFER_SIZE, DEFAULT_PATTERNS, FilterOptions};
pub use error::FilterError;
pub use executor::{RunResult, execute};
pub use filter::{filter_file, run};
pub use paths::check_paths;
pub use patterns::{PatternSet, matches_boilerplate};
pub use record::{Record, TEXT_MARKER};
pub use segmenter::Segmenter;
pub use stage::{BoilerplateStage, Decision, RecordStage};
