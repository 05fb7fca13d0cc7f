//! Ordered pair storage.
//!
//! A [`Table`] keeps pairs in insertion order and grows its slot capacity by a
//! fixed step, mirroring how the file format is expected to be used: a few
//! dozen entries, appended rarely after load.

use crate::error::{ConfigError, ParseResult};
use std::fmt;

/// Slots allocated for a fresh table
pub const DEFAULT_CAPACITY: usize = 30;

/// Slots added whenever the table is full
pub const DEFAULT_GROW_SIZE: usize = 10;

/// One `key=value` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Bytes this pair occupies in serialized form: `key` `=` `value` `\n`
    pub fn serialized_len(&self) -> usize {
        self.key.len() + 1 + self.value.len() + 1
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Insertion-ordered pair store with step growth
#[derive(Debug, Clone)]
pub struct Table {
    pairs: Vec<Pair>,
    grow_size: usize,
    /// Running total of `Pair::serialized_len` over all pairs
    serialized_len: usize,
}

impl Table {
    /// Create an empty table with the default capacity and growth step
    pub fn new() -> ParseResult<Self> {
        Self::with_capacity(DEFAULT_CAPACITY, DEFAULT_GROW_SIZE)
    }

    /// Create an empty table. A `grow_size` of 0 is treated as 1.
    pub fn with_capacity(capacity: usize, grow_size: usize) -> ParseResult<Self> {
        let mut pairs = Vec::new();
        pairs
            .try_reserve_exact(capacity)
            .map_err(|_| ConfigError::allocation(capacity, "pair slots"))?;

        Ok(Self {
            pairs,
            grow_size: grow_size.max(1),
            serialized_len: 0,
        })
    }

    /// Create an empty table without allocating any slots
    pub fn unallocated(grow_size: usize) -> Self {
        Self {
            pairs: Vec::new(),
            grow_size: grow_size.max(1),
            serialized_len: 0,
        }
    }

    /// Number of pairs in use
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Allocated slots; never shrinks
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    pub fn grow_size(&self) -> usize {
        self.grow_size
    }

    /// Byte length of the serialized table, maintained incrementally
    pub fn serialized_len(&self) -> usize {
        self.serialized_len
    }

    /// Byte length of the serialized table, recomputed from the live pairs
    pub fn compute_serialized_len(&self) -> usize {
        self.pairs.iter().map(Pair::serialized_len).sum()
    }

    /// Make room for one more pair, growing by `grow_size` slots if full
    pub fn reserve_slot(&mut self) -> ParseResult<()> {
        if self.pairs.len() < self.pairs.capacity() {
            return Ok(());
        }

        let before = self.pairs.capacity();
        self.pairs
            .try_reserve_exact(self.grow_size)
            .map_err(|_| ConfigError::allocation(self.grow_size, "pair slots"))?;

        tracing::trace!(
            "Grew pair table from {} to {} slots",
            before,
            self.pairs.capacity()
        );
        Ok(())
    }

    /// Append a pair at the end, without checking for duplicates
    pub fn push(&mut self, pair: Pair) -> ParseResult<()> {
        self.reserve_slot()?;
        self.serialized_len += pair.serialized_len();
        self.pairs.push(pair);
        Ok(())
    }

    /// Append all pairs in order, or none of them if storage runs out part way
    pub fn append_all(&mut self, pairs: impl IntoIterator<Item = Pair>) -> ParseResult<()> {
        let mark = self.pairs.len();
        let mark_serialized = self.serialized_len;

        for pair in pairs {
            if let Err(e) = self.push(pair) {
                self.pairs.truncate(mark);
                self.serialized_len = mark_serialized;
                return Err(e);
            }
        }

        Ok(())
    }

    /// Index of the first pair whose key matches exactly
    pub fn position(&self, key: &str) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.key == key)
    }

    /// First pair whose key matches exactly
    pub fn find(&self, key: &str) -> Option<&Pair> {
        self.pairs.iter().find(|pair| pair.key == key)
    }

    pub fn get(&self, index: usize) -> Option<&Pair> {
        self.pairs.get(index)
    }

    /// Replace the value of the pair at `index`, keeping the size total in step.
    ///
    /// Returns the stored value, or `None` if `index` is out of range.
    pub fn replace_value(&mut self, index: usize, value: &str) -> ParseResult<Option<&str>> {
        let Some(pair) = self.pairs.get_mut(index) else {
            return Ok(None);
        };

        let old_len = pair.value.len();
        if value.len() > pair.value.capacity() {
            let extra = value.len() - pair.value.len();
            pair.value
                .try_reserve_exact(extra)
                .map_err(|_| ConfigError::allocation(extra, "bytes for value"))?;
        }

        pair.value.clear();
        pair.value.push_str(value);

        self.serialized_len = self.serialized_len - old_len + value.len();
        Ok(Some(pair.value.as_str()))
    }

    /// Iterate pairs in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.key.as_str())
    }

    /// Consume the table, yielding its pairs
    pub fn into_pairs(self) -> Vec<Pair> {
        self.pairs
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_has_default_capacity() {
        let table = Table::new().unwrap();
        assert!(table.is_empty());
        assert!(table.capacity() >= DEFAULT_CAPACITY);
        assert_eq!(table.serialized_len(), 0);
    }

    #[test]
    fn test_default_growth_steps() {
        let mut table = Table::new().unwrap();
        assert_eq!(table.capacity(), 30);

        for i in 0..30 {
            table.push(Pair::new(format!("k{i}"), "v")).unwrap();
        }
        assert_eq!(table.capacity(), 30);

        table.push(Pair::new("k30", "v")).unwrap();
        assert_eq!(table.capacity(), 40);

        for i in 31..41 {
            table.push(Pair::new(format!("k{i}"), "v")).unwrap();
        }
        assert_eq!(table.len(), 41);
        assert_eq!(table.capacity(), 50);
    }

    #[test]
    fn test_growth_preserves_entries() {
        let mut table = Table::with_capacity(2, 3).unwrap();
        for i in 0..10 {
            table.push(Pair::new(format!("k{i}"), format!("v{i}"))).unwrap();
            assert!(table.len() <= table.capacity());
        }

        assert_eq!(table.len(), 10);
        for (i, pair) in table.iter().enumerate() {
            assert_eq!(pair.key, format!("k{i}"));
            assert_eq!(pair.value, format!("v{i}"));
        }
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut table = Table::with_capacity(1, 1).unwrap();
        let mut last = table.capacity();
        for i in 0..20 {
            table.push(Pair::new(format!("k{i}"), "v")).unwrap();
            assert!(table.capacity() >= last);
            last = table.capacity();
        }
    }

    #[test]
    fn test_zero_grow_size_still_makes_progress() {
        let mut table = Table::with_capacity(0, 0).unwrap();
        assert_eq!(table.grow_size(), 1);
        table.push(Pair::new("a", "1")).unwrap();
        table.push(Pair::new("b", "2")).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_serialized_len_tracks_pushes_and_replacements() {
        let mut table = Table::new().unwrap();
        table.push(Pair::new("player_power", "100")).unwrap();
        table.push(Pair::new("name", "Hero")).unwrap();
        assert_eq!(table.serialized_len(), "player_power=100\nname=Hero\n".len());

        table.replace_value(0, "33000").unwrap();
        assert_eq!(table.serialized_len(), table.compute_serialized_len());

        table.replace_value(1, "X").unwrap();
        assert_eq!(table.serialized_len(), "player_power=33000\nname=X\n".len());
        assert_eq!(table.serialized_len(), table.compute_serialized_len());
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut table = Table::new().unwrap();
        table.push(Pair::new("dup", "first")).unwrap();
        table.push(Pair::new("dup", "second")).unwrap();

        assert_eq!(table.position("dup"), Some(0));
        assert_eq!(table.find("dup").unwrap().value, "first");
        assert!(table.find("Dup").is_none());
    }

    #[test]
    fn test_append_all_keeps_order() {
        let mut table = Table::with_capacity(1, 1).unwrap();
        table
            .append_all(vec![Pair::new("a", "1"), Pair::new("b", "2"), Pair::new("c", "3")])
            .unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(table.serialized_len(), "a=1\nb=2\nc=3\n".len());
    }

    #[test]
    fn test_replace_value_out_of_range() {
        let mut table = Table::new().unwrap();
        assert_eq!(table.replace_value(0, "x").unwrap(), None);
    }
}
