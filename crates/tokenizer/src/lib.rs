//! Subword-tokenizer - High-level subword tokenizer API.
//!
//! This crate binds the core components (BPE encoder, vocabulary) into
//! a single `Tokenizer` facade and adds file I/O: plain-text loaders
//! for priority and token-list files, plus a JSON `tokenizer.json`
//! save/load format.
//!
//! # Example
//!
//! ```rust
//! use subword_core::BpePriorityTable;
//! use subword_tokenizer::Tokenizer;
//!
//! let table = BpePriorityTable::from_lines(["low_EOW 2", "er_EOW 1"]);
//! let tokenizer = Tokenizer::builder().build(table, ["<unk>", "low_EOW", "er_EOW"]);
//!
//! assert_eq!(tokenizer.encode(&["low"]), vec![1]);
//! ```

// Re-export core types
pub use subword_core::{
    BpeEncoder, BpePriorityTable, Result, SpecialIndices, TokenizerError, Vocabulary,
};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerBuilder};

// IO/Serialization
pub mod io;
pub use io::{SerializedTokenizer, TokenizerLoader, TokenizerSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
