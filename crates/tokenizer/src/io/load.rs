//! Load functionality for trained tokenizers.
//!
//! Reads the plain-text priority and token-list files produced alongside
//! a trained vocabulary, and the combined `tokenizer.json` format.

use super::format::SerializedTokenizer;
use crate::tokenizer::Tokenizer;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use subword_core::{BpeEncoder, BpePriorityTable, Result, TokenizerError, Vocabulary};

/// Tokenizer loader - handles loading trained models.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a complete tokenizer from a directory in JSON format.
    ///
    /// Expects a `tokenizer.json` file in the given directory.
    pub fn load(path: &Path) -> Result<Tokenizer> {
        let file_path = path.join("tokenizer.json");
        let file = File::open(&file_path).map_err(|e| {
            TokenizerError::Load(format!(
                "Failed to open file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedTokenizer = serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize tokenizer: {}", e)))?;

        let table = BpePriorityTable::from_entries(
            serialized
                .priorities
                .into_iter()
                .map(|record| (record.token, record.priority)),
        );
        let encoder = BpeEncoder::with_eow(table, serialized.eow.as_str());
        let vocab = Vocabulary::with_special_indices(serialized.tokens, serialized.special);

        Ok(Tokenizer::new(encoder, vocab))
    }

    /// Load a merge priority table from a plain-text priority file.
    ///
    /// One entry per line, `<token> <ignored count>`; blank lines are
    /// skipped and line order encodes descending priority.
    pub fn load_priorities(path: &Path) -> Result<BpePriorityTable> {
        let content = std::fs::read_to_string(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        Ok(BpePriorityTable::from_lines(content.lines()))
    }

    /// Load an ordered token list, one token per line.
    ///
    /// Blank lines are skipped; the position of a token in the returned
    /// list is its vocabulary id.
    pub fn load_token_list(path: &Path) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
