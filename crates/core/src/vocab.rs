//! Vocabulary storage and token/id lookup.
//!
//! The vocabulary keeps the ordered token list exactly as supplied
//! (duplicates included, index = position) next to an `AHashMap` built
//! from it for fast token -> index lookup. Lookups never mutate, so a
//! constructed `Vocabulary` can be shared freely across threads.

use crate::error::{Result, TokenizerError};
use ahash::{AHashMap, AHashSet};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Special vocabulary indices.
///
/// `-1` marks a slot as unused; apart from the unk index, which must be
/// in range whenever an out-of-range id falls back to it, these are
/// opaque sentinels the vocabulary never validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialIndices {
    /// Index substituted for unknown tokens
    pub unk: i64,
    /// Padding token index
    pub pad: i64,
    /// Beginning-of-sequence token index
    pub bos: i64,
    /// End-of-sequence token index
    pub eos: i64,
}

impl Default for SpecialIndices {
    fn default() -> Self {
        Self {
            unk: 0,
            pad: -1,
            bos: -1,
            eos: -1,
        }
    }
}

/// Bidirectional token/id mapping, immutable after construction.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Ordered token list; the index of a token is its id
    tokens: Vec<CompactString>,
    /// Token -> index map; a repeated token maps to its last position
    index: AHashMap<CompactString, i64>,
    /// Special slot indices
    special: SpecialIndices,
}

impl Vocabulary {
    /// Create a vocabulary with default special indices (unk = 0,
    /// pad/bos/eos unset).
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self::with_special_indices(tokens, SpecialIndices::default())
    }

    /// Create a vocabulary with explicit special indices.
    ///
    /// The index map is built by iterating `tokens` in order, so a later
    /// duplicate overwrites an earlier one in the map while the ordered
    /// list keeps both entries.
    pub fn with_special_indices<I, S>(tokens: I, special: SpecialIndices) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        let tokens: Vec<CompactString> = tokens.into_iter().map(Into::into).collect();

        let mut index = AHashMap::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            index.insert(token.clone(), i as i64);
        }

        Self {
            tokens,
            index,
            special,
        }
    }

    /// The special slot indices this vocabulary was built with.
    #[inline]
    pub fn special(&self) -> SpecialIndices {
        self.special
    }

    /// The ordered token list.
    #[inline]
    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }

    /// Number of entries in the ordered token list.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Map each token to its index, substituting the unk index for
    /// tokens not in the vocabulary. Never fails.
    pub fn lookup_indices_1d<S: AsRef<str>>(&self, values: &[S]) -> Vec<i64> {
        values
            .iter()
            .map(|value| {
                self.index
                    .get(value.as_ref())
                    .copied()
                    .unwrap_or(self.special.unk)
            })
            .collect()
    }

    /// Apply [`lookup_indices_1d`](Self::lookup_indices_1d) to each inner
    /// sequence, preserving order.
    pub fn lookup_indices_2d<S: AsRef<str>>(&self, values: &[Vec<S>]) -> Vec<Vec<i64>> {
        values
            .iter()
            .map(|row| self.lookup_indices_1d(row))
            .collect()
    }

    /// Map ids back to token strings.
    ///
    /// Ids in `filter_ids` are skipped entirely, so the output may be
    /// shorter than the input. An id outside `0..len` resolves to
    /// `unk_replacement` when one is supplied, otherwise to the token at
    /// the unk index. The only failure mode is taking that last fallback
    /// with an unk index that is itself out of range.
    pub fn lookup_words_1d(
        &self,
        ids: &[i64],
        filter_ids: &AHashSet<i64>,
        unk_replacement: Option<&str>,
    ) -> Result<Vec<String>> {
        let mut result = Vec::with_capacity(ids.len());

        for &id in ids {
            if filter_ids.contains(&id) {
                continue;
            }
            if let Some(token) = usize::try_from(id).ok().and_then(|i| self.tokens.get(i)) {
                result.push(token.to_string());
            } else if let Some(replacement) = unk_replacement {
                result.push(replacement.to_string());
            } else {
                let unk = usize::try_from(self.special.unk)
                    .ok()
                    .and_then(|i| self.tokens.get(i))
                    .ok_or(TokenizerError::UnkIndexOutOfRange {
                        unk_idx: self.special.unk,
                        vocab_len: self.tokens.len(),
                    })?;
                result.push(unk.to_string());
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vocabulary {
        Vocabulary::new(["a", "b", "c"])
    }

    #[test]
    fn test_lookup_indices_1d() {
        let vocab = abc();
        assert_eq!(vocab.lookup_indices_1d(&["b", "z"]), vec![1, 0]);
    }

    #[test]
    fn test_lookup_indices_2d() {
        let vocab = abc();
        let rows = vec![vec!["a", "c"], vec!["z"], vec![]];
        assert_eq!(
            vocab.lookup_indices_2d(&rows),
            vec![vec![0, 2], vec![0], vec![]]
        );
    }

    #[test]
    fn test_lookup_words_unk_fallback() {
        let vocab = abc();
        let no_filter = AHashSet::new();

        let words = vocab.lookup_words_1d(&[0, 5], &no_filter, None).unwrap();
        assert_eq!(words, vec!["a", "a"]);

        let words = vocab
            .lookup_words_1d(&[0, 5], &no_filter, Some("<unk>"))
            .unwrap();
        assert_eq!(words, vec!["a", "<unk>"]);
    }

    #[test]
    fn test_lookup_words_filter_shrinks_output() {
        let vocab = abc();
        let filter: AHashSet<i64> = [1, 2].into_iter().collect();

        let words = vocab.lookup_words_1d(&[0, 1, 2, 0], &filter, None).unwrap();
        assert_eq!(words, vec!["a", "a"]);
    }

    #[test]
    fn test_negative_id_falls_back() {
        let vocab = abc();
        let words = vocab
            .lookup_words_1d(&[-3], &AHashSet::new(), Some("<unk>"))
            .unwrap();
        assert_eq!(words, vec!["<unk>"]);
    }

    #[test]
    fn test_duplicate_token_last_wins_in_map() {
        let vocab = Vocabulary::new(["a", "b", "a"]);
        // The map points at the later position, the list keeps both.
        assert_eq!(vocab.lookup_indices_1d(&["a"]), vec![2]);
        assert_eq!(vocab.len(), 3);
        let words = vocab
            .lookup_words_1d(&[0, 2], &AHashSet::new(), None)
            .unwrap();
        assert_eq!(words, vec!["a", "a"]);
    }

    #[test]
    fn test_empty_vocab_invalid_unk_is_an_error() {
        let vocab = Vocabulary::new(Vec::<&str>::new());
        let err = vocab
            .lookup_words_1d(&[0], &AHashSet::new(), None)
            .unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::UnkIndexOutOfRange {
                unk_idx: 0,
                vocab_len: 0
            }
        ));
    }

    #[test]
    fn test_round_trip() {
        let vocab = Vocabulary::new(["hello", "world", "!"]);
        let words = ["world", "hello", "!"];
        let ids = vocab.lookup_indices_1d(&words);
        let back = vocab
            .lookup_words_1d(&ids, &AHashSet::new(), None)
            .unwrap();
        assert_eq!(back, words);
    }

    #[test]
    fn test_custom_special_indices() {
        let special = SpecialIndices {
            unk: 1,
            pad: 0,
            bos: -1,
            eos: -1,
        };
        let vocab = Vocabulary::with_special_indices(["<pad>", "<unk>", "x"], special);
        assert_eq!(vocab.lookup_indices_1d(&["missing"]), vec![1]);
        let words = vocab
            .lookup_words_1d(&[99], &AHashSet::new(), None)
            .unwrap();
        assert_eq!(words, vec!["<unk>"]);
    }
}
