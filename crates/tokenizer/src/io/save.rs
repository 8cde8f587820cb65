//! Save functionality for trained tokenizers.

use super::format::{PriorityRecord, SerializedTokenizer};
use crate::tokenizer::Tokenizer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use subword_core::{Result, TokenizerError};

/// Tokenizer saver - handles saving trained models.
pub struct TokenizerSaver<'a> {
    tokenizer: &'a Tokenizer,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Save the tokenizer to a directory as a single `tokenizer.json`.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            TokenizerError::Save(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;

        let file_path = path.join("tokenizer.json");
        let file = File::create(&file_path).map_err(|e| {
            TokenizerError::Save(format!(
                "Failed to create file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        let serialized = self.serialize();
        serde_json::to_writer_pretty(writer, &serialized)
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize tokenizer: {}", e)))?;

        Ok(())
    }

    /// Convert to the serialized structure.
    ///
    /// Priority entries are sorted by descending priority, then token,
    /// so repeated saves of the same tokenizer are byte-identical.
    fn serialize(&self) -> SerializedTokenizer {
        let encoder = self.tokenizer.encoder();
        let vocab = self.tokenizer.vocab();

        let mut priorities: Vec<PriorityRecord> = encoder
            .table()
            .iter()
            .map(|(token, priority)| PriorityRecord {
                token: token.to_string(),
                priority,
            })
            .collect();
        priorities.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.token.cmp(&b.token)));

        SerializedTokenizer {
            tokens: vocab.tokens().iter().map(|t| t.to_string()).collect(),
            special: vocab.special(),
            priorities,
            eow: encoder.eow().to_string(),
        }
    }
}
