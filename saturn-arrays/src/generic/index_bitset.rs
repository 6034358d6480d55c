//! Growable bit set over array positions.
//!
//! This module provides [`IndexBitSet`], the "bitmask" calling convention for
//! batch removal: every set bit names one position to drop. Scanning is done
//! in runs via [`IndexBitSet::next_set_bit`] and [`IndexBitSet::next_clear_bit`].

const WORD_BITS: usize = u64::BITS as usize;

/// A growable set of array indices backed by 64-bit words.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::index_bitset::IndexBitSet;
///
/// let mut bits = IndexBitSet::new();
/// bits.insert(3);
/// bits.insert(4);
/// bits.insert(70);
///
/// assert_eq!(bits.count(), 3);
/// assert_eq!(bits.next_set_bit(0), Some(3));
/// assert_eq!(bits.next_clear_bit(3), 5);
/// assert_eq!(bits.span(), 71);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Words", into = "Words")
)]
pub struct IndexBitSet {
    words: Vec<u64>,
    count: usize,
}

impl IndexBitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for indices `0..bits` before it has to grow.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(bits.div_ceil(WORD_BITS)),
            count: 0,
        }
    }

    /// Returns the number of set bits.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns one past the highest set index, or `0` when nothing is set.
    pub fn span(&self) -> usize {
        self.words
            .iter()
            .rposition(|word| *word != 0)
            .map_or(0, |i| {
                i * WORD_BITS + WORD_BITS - self.words[i].leading_zeros() as usize
            })
    }

    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|word| word & (1u64 << (index % WORD_BITS)) != 0)
    }

    /// Sets the bit at `index`, growing the set if needed.
    ///
    /// Returns `true` if the bit was newly set.
    pub fn insert(&mut self, index: usize) -> bool {
        let word_index = index / WORD_BITS;
        if word_index >= self.words.len() {
            self.words.resize(word_index + 1, 0);
        }
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[word_index];
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.count += 1;
        true
    }

    /// Unsets the bit at `index`.
    ///
    /// Returns `true` if the bit was set before the call.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(word) = self.words.get_mut(index / WORD_BITS) else {
            return false;
        };
        let mask = 1u64 << (index % WORD_BITS);
        if *word & mask == 0 {
            return false;
        }
        *word &= !mask;
        self.count -= 1;
        true
    }

    /// Sets every index in `indices`; duplicates are ignored.
    pub fn extend_from_slice(&mut self, indices: &[usize]) {
        for &index in indices {
            self.insert(index);
        }
    }

    /// Returns the first set index at or after `from`.
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        let mut word_index = from / WORD_BITS;
        let mut word = *self.words.get(word_index)? & (u64::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                return Some(word_index * WORD_BITS + word.trailing_zeros() as usize);
            }
            word_index += 1;
            word = *self.words.get(word_index)?;
        }
    }

    /// Returns the first unset index at or after `from`.
    ///
    /// Every index past the last stored word is clear, so this always succeeds.
    pub fn next_clear_bit(&self, from: usize) -> usize {
        let mut word_index = from / WORD_BITS;
        let Some(first) = self.words.get(word_index) else {
            return from;
        };
        let mut word = !first & (u64::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                return word_index * WORD_BITS + word.trailing_zeros() as usize;
            }
            word_index += 1;
            match self.words.get(word_index) {
                Some(next) => word = !next,
                None => return word_index * WORD_BITS,
            }
        }
    }

    /// Returns an iterator over all set indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        core::iter::successors(self.next_set_bit(0), move |&index| {
            self.next_set_bit(index + 1)
        })
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.count = 0;
    }
}

// Trailing zero words left behind by `remove` must not affect equality.
impl PartialEq for IndexBitSet {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for IndexBitSet {}

/// Serialized form. Only the words are stored; the count is rebuilt from
/// them on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Words {
    words: Vec<u64>,
}

#[cfg(feature = "serde")]
impl From<Words> for IndexBitSet {
    fn from(Words { words }: Words) -> Self {
        let count = words.iter().map(|word| word.count_ones() as usize).sum();
        Self { words, count }
    }
}

#[cfg(feature = "serde")]
impl From<IndexBitSet> for Words {
    fn from(set: IndexBitSet) -> Self {
        Words { words: set.words }
    }
}

impl FromIterator<usize> for IndexBitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_default_are_empty() {
        let set = IndexBitSet::new();
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());
        assert_eq!(set.span(), 0);
        assert_eq!(IndexBitSet::default(), set);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set = IndexBitSet::new();
        assert!(!set.contains(3));
        assert!(set.insert(3));
        assert!(set.contains(3));
        assert_eq!(set.count(), 1);

        // Duplicate insert
        assert!(!set.insert(3));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_insert_grows_across_words() {
        let mut set = IndexBitSet::with_capacity(8);
        assert!(set.insert(200));
        assert!(set.contains(200));
        assert!(!set.contains(199));
        assert_eq!(set.span(), 201);
    }

    #[test]
    fn test_remove() {
        let mut set = IndexBitSet::new();
        set.insert(2);
        set.insert(5);
        assert!(set.remove(2));
        assert!(!set.contains(2));
        assert_eq!(set.count(), 1);

        assert!(!set.remove(2));
        assert!(!set.remove(1_000));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_next_set_bit() {
        let set: IndexBitSet = [1, 2, 64, 130].into_iter().collect();
        assert_eq!(set.next_set_bit(0), Some(1));
        assert_eq!(set.next_set_bit(2), Some(2));
        assert_eq!(set.next_set_bit(3), Some(64));
        assert_eq!(set.next_set_bit(65), Some(130));
        assert_eq!(set.next_set_bit(131), None);
        assert_eq!(set.next_set_bit(10_000), None);
    }

    #[test]
    fn test_next_clear_bit() {
        let set: IndexBitSet = (0..64).chain([64, 65]).collect();
        assert_eq!(set.next_clear_bit(0), 66);
        assert_eq!(set.next_clear_bit(66), 66);
        assert_eq!(set.next_clear_bit(500), 500);

        let full_word: IndexBitSet = (0..64).collect();
        assert_eq!(full_word.next_clear_bit(10), 64);
    }

    #[test]
    fn test_span_ignores_trailing_removed_words() {
        let mut set = IndexBitSet::new();
        set.insert(3);
        set.insert(150);
        set.remove(150);
        assert_eq!(set.span(), 4);

        let other: IndexBitSet = [3].into_iter().collect();
        assert_eq!(set, other);
    }

    #[test]
    fn test_iter_and_extend_from_slice() {
        let mut set = IndexBitSet::new();
        set.extend_from_slice(&[6, 2, 4, 2, 99]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![2, 4, 6, 99]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rebuilds_count_from_words() {
        let set: IndexBitSet = [0, 2, 64].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"words":[5,1]}"#);
        assert_eq!(serde_json::from_str::<IndexBitSet>(&json).unwrap(), set);

        // A stale count in the input is ignored.
        let forged: IndexBitSet = serde_json::from_str(r#"{"words":[5],"count":99}"#).unwrap();
        assert_eq!(forged.count(), 2);
        assert_eq!(forged.iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_clear() {
        let mut set: IndexBitSet = [0, 1, 77].into_iter().collect();
        assert_eq!(set.count(), 3);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.next_set_bit(0), None);
    }
}
