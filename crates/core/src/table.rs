//! Merge priority table for BPE encoding.
//!
//! Maps subword strings (including any end-of-word suffixed forms) to an
//! integer merge priority. Higher priority wins when adjacent pairs
//! compete for a merge; the table itself enforces no uniqueness or sign
//! constraint on priorities.

use ahash::AHashMap;
use compact_str::CompactString;

/// Subword -> merge priority mapping, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct BpePriorityTable {
    table: AHashMap<CompactString, i64>,
}

impl BpePriorityTable {
    /// Build a table from explicit (subword, priority) entries.
    ///
    /// A repeated subword keeps the last entry's priority. Negative
    /// priorities are accepted; the encoder treats them as functionally
    /// absent because they can never beat the missing-pair sentinel.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<CompactString>,
    {
        let table = entries
            .into_iter()
            .map(|(token, priority)| (token.into(), priority))
            .collect();
        Self { table }
    }

    /// Build a table from the lines of a priority file.
    ///
    /// Blank lines are skipped. Each remaining line contributes its first
    /// whitespace-delimited field as the subword; a trailing count field
    /// is ignored. Priorities are assigned by line order, `total - index`,
    /// so the first line gets the highest priority and priorities
    /// strictly decrease. A duplicate line overwrites the earlier entry
    /// with its own, smaller priority.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<CompactString> = lines
            .into_iter()
            .filter_map(|line| {
                line.as_ref()
                    .split_whitespace()
                    .next()
                    .map(CompactString::new)
            })
            .collect();

        let total = tokens.len() as i64;
        let table = tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| (token, total - i as i64))
            .collect();
        Self { table }
    }

    /// Look up the priority for a subword.
    #[inline]
    pub fn get(&self, token: &str) -> Option<i64> {
        self.table.get(token).copied()
    }

    /// Check whether a subword is present.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.table.contains_key(token)
    }

    /// Number of distinct subwords in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over (subword, priority) entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.table.iter().map(|(token, &p)| (token.as_str(), p))
    }
}
