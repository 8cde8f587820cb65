//! Main tokenizer implementation.
//!
//! The `Tokenizer` binds a [`BpeEncoder`] and a [`Vocabulary`] into the
//! full pipeline: pre-tokenized words in, integer ids out, and ids back
//! to token strings for decoding. Both halves are immutable, so one
//! `Tokenizer` can serve any number of threads.

use ahash::AHashSet;
use subword_core::{BpeEncoder, BpePriorityTable, Result, SpecialIndices, Vocabulary, DEFAULT_EOW};

/// Subword tokenizer: BPE encoding plus vocabulary lookup.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    encoder: BpeEncoder,
    vocab: Vocabulary,
}

impl Tokenizer {
    /// Create a tokenizer from an already-constructed encoder and
    /// vocabulary.
    pub fn new(encoder: BpeEncoder, vocab: Vocabulary) -> Self {
        Self { encoder, vocab }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// The underlying BPE encoder.
    #[inline]
    pub fn encoder(&self) -> &BpeEncoder {
        &self.encoder
    }

    /// The underlying vocabulary.
    #[inline]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Tokenize pre-tokenized words into a flat subword stream.
    pub fn tokenize<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        self.encoder.tokenize(words)
    }

    /// Tokenize words and map the resulting subwords to ids.
    pub fn encode<S: AsRef<str>>(&self, words: &[S]) -> Vec<i64> {
        let subwords = self.encoder.tokenize(words);
        self.vocab.lookup_indices_1d(&subwords)
    }

    /// Encode a batch of word sequences, one id row per input row.
    pub fn encode_batch<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Vec<Vec<i64>> {
        rows.iter().map(|row| self.encode(row)).collect()
    }

    /// Map model-produced ids back to token strings.
    ///
    /// Ids in `filter_ids` (padding, special markers) are dropped from
    /// the output; out-of-range ids resolve to `unk_replacement` when
    /// supplied, else to the vocabulary's own unk token.
    pub fn decode(
        &self,
        ids: &[i64],
        filter_ids: &AHashSet<i64>,
        unk_replacement: Option<&str>,
    ) -> Result<Vec<String>> {
        self.vocab.lookup_words_1d(ids, filter_ids, unk_replacement)
    }
}

/// Builder for assembling a tokenizer from its raw parts.
#[derive(Debug, Clone)]
pub struct TokenizerBuilder {
    eow: String,
    special: SpecialIndices,
}

impl Default for TokenizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerBuilder {
    /// Create a builder with the default end-of-word marker and special
    /// indices.
    pub fn new() -> Self {
        Self {
            eow: DEFAULT_EOW.to_string(),
            special: SpecialIndices::default(),
        }
    }

    /// Set the end-of-word marker.
    pub fn eow(mut self, eow: impl Into<String>) -> Self {
        self.eow = eow.into();
        self
    }

    /// Set the special vocabulary indices.
    pub fn special_indices(mut self, special: SpecialIndices) -> Self {
        self.special = special;
        self
    }

    /// Build the tokenizer from a priority table and an ordered token
    /// list.
    pub fn build<S: Into<compact_str::CompactString>>(
        self,
        table: BpePriorityTable,
        tokens: impl IntoIterator<Item = S>,
    ) -> Tokenizer {
        let encoder = BpeEncoder::with_eow(table, self.eow.as_str());
        let vocab = Vocabulary::with_special_indices(tokens, self.special);
        Tokenizer::new(encoder, vocab)
    }
}
