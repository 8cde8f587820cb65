//! Greedy BPE merge encoder.
//!
//! Turns a pre-tokenized word into subword units by repeatedly merging
//! the adjacent fragment pair with the highest table priority, exactly
//! reproducing the merge order of the trained vocabulary: ties break
//! leftmost, and a pair absent from the table scores a fixed sentinel
//! that no negative table entry can beat.

use crate::chars::segment;
use crate::table::BpePriorityTable;
use compact_str::CompactString;

/// Default end-of-word marker appended to the final subword of a word.
pub const DEFAULT_EOW: &str = "_EOW";

/// Priority reported for an adjacent pair that is not a table key.
///
/// The merge loop compares with strict greater-than, so table entries
/// valued at or below this sentinel can never win a merge.
const NOT_IN_TABLE: i64 = -1;

/// BPE encoder over a fixed priority table and end-of-word marker.
#[derive(Debug, Clone)]
pub struct BpeEncoder {
    table: BpePriorityTable,
    eow: CompactString,
}

impl BpeEncoder {
    /// Create an encoder with the default `_EOW` marker.
    pub fn new(table: BpePriorityTable) -> Self {
        Self::with_eow(table, DEFAULT_EOW)
    }

    /// Create an encoder with an explicit end-of-word marker. The marker
    /// must match the one used when the priority file was produced.
    pub fn with_eow(table: BpePriorityTable, eow: impl Into<CompactString>) -> Self {
        Self {
            table,
            eow: eow.into(),
        }
    }

    /// The configured end-of-word marker.
    #[inline]
    pub fn eow(&self) -> &str {
        &self.eow
    }

    /// The priority table this encoder merges against.
    #[inline]
    pub fn table(&self) -> &BpePriorityTable {
        &self.table
    }

    /// Tokenize a single word into subword units.
    ///
    /// Returns an empty vector when no character of the word can anchor
    /// a valid end-of-word subword; returns `[word + eow]` directly when
    /// the whole suffixed word is already a table key.
    pub fn tokenize_token(&self, word: &str) -> Vec<String> {
        // Whole-word fast path.
        let full_token = format!("{}{}", word, self.eow);
        if self.table.contains(&full_token) {
            return vec![full_token];
        }

        let mut parts: Vec<String> = segment(word).iter().map(|c| c.to_string()).collect();

        // Trim trailing characters that can never anchor a final subword.
        while let Some(last) = parts.last() {
            if self.table.contains(&format!("{}{}", last, self.eow)) {
                break;
            }
            parts.pop();
        }
        if parts.is_empty() {
            return parts;
        }
        if let Some(last) = parts.last_mut() {
            last.push_str(&self.eow);
        }

        // Drop any remaining fragment not in the table on its own. The
        // last fragment always survives: its suffixed form was just
        // checked above.
        parts.retain(|part| self.table.contains(part));

        // Greedy merge: each round rescans all adjacent pairs and joins
        // the highest-priority one, leftmost on ties. Strict comparison
        // against the sentinel keeps negative-priority entries out.
        while parts.len() > 1 {
            let mut best_index = 0;
            let mut best_priority = NOT_IN_TABLE;
            for i in 0..parts.len() - 1 {
                let joined = format!("{}{}", parts[i], parts[i + 1]);
                let priority = self.table.get(&joined).unwrap_or(NOT_IN_TABLE);
                if priority > best_priority {
                    best_priority = priority;
                    best_index = i;
                }
            }

            if best_priority == NOT_IN_TABLE {
                break;
            }

            let right = parts.remove(best_index + 1);
            parts[best_index].push_str(&right);
        }

        parts
    }

    /// Tokenize a sequence of pre-tokenized words into one flat subword
    /// stream, concatenating per-word results in order.
    pub fn tokenize<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let mut subwords = Vec::with_capacity(words.len());
        for word in words {
            subwords.extend(self.tokenize_token(word.as_ref()));
        }
        subwords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The reference table used throughout the upstream documentation.
    fn doc_table() -> BpePriorityTable {
        BpePriorityTable::from_entries([
            ("hello_EOW", 20),
            ("world_EOW", 18),
            ("th", 17),
            ("is_EOW", 16),
            ("bpe_EOW", 15),
            ("!", 14),
            ("h", 13),
            ("t", 6),
            ("s_EOW", 2),
            ("i", -1),
            ("ii", -2),
        ])
    }

    #[test]
    fn test_documented_sentence() {
        let encoder = BpeEncoder::new(doc_table());
        assert_eq!(
            encoder.tokenize(&["hello", "world", "this", "is", "bpe"]),
            vec!["hello_EOW", "world_EOW", "th", "is_EOW", "is_EOW", "bpe_EOW"]
        );
    }

    #[test]
    fn test_fast_path_returns_single_subword() {
        let encoder = BpeEncoder::new(doc_table());
        assert_eq!(encoder.tokenize_token("hello"), vec!["hello_EOW"]);
        assert_eq!(encoder.tokenize_token("is"), vec!["is_EOW"]);
    }

    #[test]
    fn test_negative_priority_never_wins_a_merge() {
        // "i" (-1) and "ii" (-2) sit at or below the missing-pair
        // sentinel, so the only merge that can fire is "is_EOW"; the
        // leading "i" fragments stay unmerged.
        let encoder = BpeEncoder::new(doc_table());
        assert_eq!(
            encoder.tokenize(&["iiiis"]),
            vec!["i", "i", "i", "is_EOW"]
        );
    }

    #[test]
    fn test_word_with_no_eow_anchor_is_dropped() {
        let encoder = BpeEncoder::new(doc_table());
        assert_eq!(encoder.tokenize_token("xyz"), Vec::<String>::new());
    }

    #[test]
    fn test_unknown_characters_removed_before_merging() {
        // "zis": "z" is not a table key on its own and gets dropped,
        // leaving "i" + "s_EOW" to merge into "is_EOW".
        let encoder = BpeEncoder::new(doc_table());
        assert_eq!(encoder.tokenize_token("zis"), vec!["is_EOW"]);
    }

    #[test]
    fn test_trailing_trim_keeps_earlier_anchor() {
        // "isx": "x_EOW" is unknown so "x" is trimmed from the tail,
        // then "s_EOW" anchors and the pair merges.
        let encoder = BpeEncoder::new(doc_table());
        assert_eq!(encoder.tokenize_token("isx"), vec!["is_EOW"]);
    }

    #[test]
    fn test_equal_priority_tie_breaks_leftmost() {
        let table = BpePriorityTable::from_entries([("a", 1), ("a_EOW", 1), ("aa", 5)]);
        let encoder = BpeEncoder::new(table);
        // Both (0,1) and (1,2) join to "aa" with priority 5; the
        // leftmost pair must win the first merge.
        assert_eq!(encoder.tokenize_token("aaaa"), vec!["aa", "a", "a_EOW"]);
    }

    #[test]
    fn test_from_lines_table_matches_entry_table() {
        let lines = [
            "hello_EOW 20",
            "world_EOW 18",
            "th  17",
            "is_EOW 16",
            "bpe_EOW 15",
            "! 14",
            "h 13",
            "t 6",
            "s_EOW 2",
            "i -1",
            "ii -2",
        ];
        let encoder = BpeEncoder::new(BpePriorityTable::from_lines(lines));
        assert_eq!(
            encoder.tokenize(&["hello", "world", "this", "is", "bpe"]),
            vec!["hello_EOW", "world_EOW", "th", "is_EOW", "is_EOW", "bpe_EOW"]
        );
    }

    #[test]
    fn test_from_lines_ranks_let_low_entries_merge() {
        // Loaded from a file, every entry gets a positive line-order
        // rank, so "ii" (rank 1) can still win a merge; only literal
        // negative priorities (see the test above) are inert.
        let lines = [
            "hello_EOW 20",
            "world_EOW 18",
            "th  17",
            "is_EOW 16",
            "bpe_EOW 15",
            "! 14",
            "h 13",
            "t 6",
            "s_EOW 2",
            "i -1",
            "ii -2",
        ];
        let encoder = BpeEncoder::new(BpePriorityTable::from_lines(lines));
        assert_eq!(
            encoder.tokenize(&["iiiis"]),
            vec!["ii", "i", "is_EOW"]
        );
    }

    #[test]
    fn test_custom_eow_marker() {
        let table = BpePriorityTable::from_entries([("hi</w>", 3)]);
        let encoder = BpeEncoder::with_eow(table, "</w>");
        assert_eq!(encoder.tokenize_token("hi"), vec!["hi</w>"]);
    }

    #[test]
    fn test_multibyte_word() {
        let table = BpePriorityTable::from_entries([
            ("\u{e9}_EOW", 4),
            ("caf", 3),
            ("ca", 2),
            ("c", 1),
            ("a", 1),
            ("f", 1),
        ]);
        let encoder = BpeEncoder::new(table);
        assert_eq!(
            encoder.tokenize_token("caf\u{e9}"),
            vec!["caf", "\u{e9}_EOW"]
        );
    }

    #[test]
    fn test_empty_word_list() {
        let encoder = BpeEncoder::new(doc_table());
        assert_eq!(encoder.tokenize(&Vec::<String>::new()), Vec::<String>::new());
    }
}
