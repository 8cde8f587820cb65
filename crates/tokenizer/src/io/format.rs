//! Format definitions for tokenizer serialization.
//!
//! A saved tokenizer is a single JSON document holding the ordered token
//! list, the special indices, the priority table and the end-of-word
//! marker.

use serde::{Deserialize, Serialize};
use subword_core::SpecialIndices;

/// Complete tokenizer data as written to `tokenizer.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedTokenizer {
    /// Ordered vocabulary; the position of a token is its id
    pub tokens: Vec<String>,
    /// Special slot indices
    pub special: SpecialIndices,
    /// Merge priority entries
    pub priorities: Vec<PriorityRecord>,
    /// End-of-word marker the priority entries were built with
    pub eow: String,
}

/// A single subword priority entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityRecord {
    /// Subword text, including any end-of-word suffix
    pub token: String,
    /// Merge priority, higher wins
    pub priority: i64,
}
