//! Subword-core - BPE merge algorithm, vocabulary mapping and UTF-8
//! segmentation.
//!
//! This crate holds the algorithmic core of the subword tokenizer:
//! a leniently-validated UTF-8 character segmenter, a bidirectional
//! token/id vocabulary, a merge priority table, and the greedy BPE
//! encoder that ties them together. All types are immutable after
//! construction, so shared instances can serve concurrent callers
//! without synchronization.
//!
//! # Example
//!
//! ```rust
//! use subword_core::{BpeEncoder, BpePriorityTable, Vocabulary};
//!
//! let table = BpePriorityTable::from_lines(["low_EOW 10", "er_EOW 8"]);
//! let encoder = BpeEncoder::new(table);
//! let subwords = encoder.tokenize(&["low"]);
//! assert_eq!(subwords, vec!["low_EOW"]);
//!
//! let vocab = Vocabulary::new(["<unk>", "low_EOW", "er_EOW"]);
//! assert_eq!(vocab.lookup_indices_1d(&subwords), vec![1]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod chars;
pub use chars::segment;

pub mod vocab;
pub use vocab::{SpecialIndices, Vocabulary};

pub mod table;
pub use table::BpePriorityTable;

pub mod encoder;
pub use encoder::{BpeEncoder, DEFAULT_EOW};
