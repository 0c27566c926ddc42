use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Range, Sub, SubAssign,
};

use log::{debug, trace};

use crate::config::Config;
use crate::error::{BitSetError, Result};
use crate::iter::{Iter, IterOnes, IterZeros};

/// Number of bits stored in one backing word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Computes the number of words needed to store `bit_count` bits.
///
/// A bit set always owns at least one word, so `0` maps to `1`.
///
/// # Examples
/// ```
/// use grow_bitset::word_count;
///
/// assert_eq!(word_count(0), 1);
/// assert_eq!(word_count(64), 1);
/// assert_eq!(word_count(65), 2);
/// ```
pub const fn word_count(bit_count: usize) -> usize {
    if bit_count == 0 {
        1
    } else {
        bit_count.div_ceil(WORD_BITS)
    }
}

pub(crate) const fn ones_mask(start_bit: usize, width: usize) -> u64 {
    if width >= WORD_BITS {
        // shift would overflow on u64
        !0u64
    } else {
        ((1u64 << width) - 1) << start_bit
    }
}

/// A growable set of bits packed into 64-bit words.
///
/// Word `i` holds bits `i * 64 .. (i + 1) * 64`, least significant bit
/// first. The set always owns at least one word. Writing past the end grows
/// the backing storage by whole words; reading past the end reports a clear
/// bit. Storage never shrinks on its own.
///
/// Indices are `isize` so that negative input has a defined meaning: point
/// mutators ignore it, range forms clamp it to 0, [`get`] reports `false`, and
/// the scans reject it with a [`BitSetError`].
///
/// Mutators return `&mut Self` so calls can be chained. Set algebra mutates
/// the receiver in place.
///
/// [`get`]: BitSet::get
#[derive(Clone)]
pub struct BitSet {
    pub(crate) words: Vec<u64>,
}

impl BitSet {
    /// Creates a new empty bit set holding one word (64 bits).
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let bs = BitSet::new();
    /// assert_eq!(bs.size(), 64);
    /// assert!(bs.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { words: vec![0; 1] }
    }

    /// Creates a new empty bit set sized according to `config`.
    ///
    /// The requested capacity is rounded up to whole words.
    ///
    /// # Errors
    /// Returns [`BitSetError::NegativeCapacity`] if `config.initial_bits` is
    /// negative.
    pub fn with_config(config: Config) -> Result<Self> {
        let bits = config.validate().inspect_err(|err| debug!("rejecting config: {err}"))?;
        Ok(Self {
            words: vec![0; word_count(bits)],
        })
    }

    /// Creates a new empty bit set able to hold at least `bits` bits without
    /// growing.
    ///
    /// # Errors
    /// Returns [`BitSetError::NegativeCapacity`] if `bits` is negative.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::{BitSet, BitSetError};
    ///
    /// assert_eq!(BitSet::with_capacity(65).unwrap().size(), 128);
    /// assert_eq!(BitSet::with_capacity(0).unwrap().size(), 64);
    /// assert_eq!(BitSet::with_capacity(-1).unwrap_err(), BitSetError::NegativeCapacity(-1));
    /// ```
    pub fn with_capacity(bits: isize) -> Result<Self> {
        Self::with_config(Config::default().initial_bits(bits))
    }

    /// Creates a bit set whose words are a copy of `words`.
    ///
    /// An empty slice yields the same set as [`new`](BitSet::new).
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let bs = BitSet::value_of(&[9]);
    /// assert!(bs.get(0));
    /// assert!(bs.get(3));
    /// assert_eq!(bs.to_string(), "{0, 3}");
    /// ```
    pub fn value_of(words: &[u64]) -> Self {
        Self::from_words(words.to_vec())
    }

    /// Creates a bit set from little-endian encoded words.
    ///
    /// Every 8 bytes form one word. A trailing partial word is padded with
    /// zero bytes.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let bs = BitSet::from_bytes(&[0x09, 0, 0, 0, 0, 0, 0, 0, 0x01]);
    /// assert_eq!(bs.as_words(), &[9, 1]);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let words = bytes
            .chunks(WORD_BITS / 8)
            .map(|chunk| {
                let mut buf = [0u8; WORD_BITS / 8];
                buf[..chunk.len()].copy_from_slice(chunk);
                u64::from_le_bytes(buf)
            })
            .collect();
        Self::from_words(words)
    }

    fn from_words(words: Vec<u64>) -> Self {
        if words.is_empty() {
            Self::new()
        } else {
            Self { words }
        }
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / WORD_BITS, idx % WORD_BITS)
    }

    #[inline]
    fn checked_idx(idx: isize) -> Option<usize> {
        let checked = usize::try_from(idx).ok();
        if checked.is_none() {
            trace!("ignoring negative bit index {idx}");
        }
        checked
    }

    /// Makes sure word `word_idx` exists, appending zero words as needed.
    pub(crate) fn ensure_word(&mut self, word_idx: usize) {
        if word_idx >= self.words.len() {
            trace!(
                "growing bit set from {} to {} words",
                self.words.len(),
                word_idx + 1
            );
            self.words.resize(word_idx + 1, 0);
        }
    }

    /// Clamps a negative `from` to 0. `None` if the range is empty.
    fn clamp_range(from: isize, to: isize) -> Option<Range<usize>> {
        let start = from.max(0);
        if to <= start {
            return None;
        }
        Some(start as usize..to as usize)
    }

    fn set_bit(&mut self, idx: usize) {
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.ensure_word(word_idx);
        self.words[word_idx] |= 1 << bit_idx;
    }

    /// Sets the bit at the given index, growing the set if needed.
    ///
    /// Negative indices are ignored.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let mut bs = BitSet::new();
    /// bs.set(3).set(200);
    /// assert!(bs.get(3));
    /// assert!(bs.get(200));
    /// assert_eq!(bs.size(), 256);
    /// ```
    pub fn set(&mut self, idx: isize) -> &mut Self {
        if let Some(idx) = Self::checked_idx(idx) {
            self.set_bit(idx);
        }
        self
    }

    /// Clears the bit at the given index.
    ///
    /// Grows the set if the index lies past the end, so index arithmetic stays
    /// uniform. Negative indices are ignored.
    pub fn clear(&mut self, idx: isize) -> &mut Self {
        if let Some(idx) = Self::checked_idx(idx) {
            let (word_idx, bit_idx) = Self::idxs(idx);
            self.ensure_word(word_idx);
            self.words[word_idx] &= !(1 << bit_idx);
        }
        self
    }

    /// Toggles the bit at the given index, growing the set if needed.
    ///
    /// Negative indices are ignored.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let mut bs = BitSet::value_of(&[14]);
    /// bs.flip(72);
    /// assert_eq!(bs, BitSet::value_of(&[14, 256]));
    /// bs.flip(72);
    /// assert!(!bs.get(72));
    /// ```
    pub fn flip(&mut self, idx: isize) -> &mut Self {
        if let Some(idx) = Self::checked_idx(idx) {
            let (word_idx, bit_idx) = Self::idxs(idx);
            self.ensure_word(word_idx);
            self.words[word_idx] ^= 1 << bit_idx;
        }
        self
    }

    /// Sets the bit at the given index to `value`.
    pub fn set_value(&mut self, idx: isize, value: bool) -> &mut Self {
        if value { self.set(idx) } else { self.clear(idx) }
    }

    /// Applies `op` with a mask covering the bits of `range` in each word.
    fn update_range(&mut self, range: Range<usize>, op: impl Fn(&mut u64, u64)) {
        let (start_word, start_bit) = Self::idxs(range.start);
        let (end_word, end_bit) = Self::idxs(range.end - 1);
        self.ensure_word(end_word);

        // all within one word
        if start_word == end_word {
            let width = end_bit - start_bit + 1;
            op(&mut self.words[start_word], ones_mask(start_bit, width));
            return;
        }

        op(&mut self.words[start_word], !0u64 << start_bit);
        for word in &mut self.words[start_word + 1..end_word] {
            op(word, !0u64);
        }
        op(&mut self.words[end_word], ones_mask(0, end_bit + 1));
    }

    /// Sets every bit in `from..to`, growing the set if needed.
    ///
    /// A negative `from` is clamped to 0. Does nothing if `to <= from`.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let mut bs = BitSet::new();
    /// bs.set_range(62, 66);
    /// assert_eq!(bs.as_words(), &[0b11 << 62, 0b11]);
    /// ```
    pub fn set_range(&mut self, from: isize, to: isize) -> &mut Self {
        if let Some(range) = Self::clamp_range(from, to) {
            self.update_range(range, |word, mask| *word |= mask);
        }
        self
    }

    /// Clears every bit in `from..to`.
    ///
    /// A negative `from` is clamped to 0. Does nothing if `to <= from`.
    pub fn clear_range(&mut self, from: isize, to: isize) -> &mut Self {
        if let Some(range) = Self::clamp_range(from, to) {
            self.update_range(range, |word, mask| *word &= !mask);
        }
        self
    }

    /// Toggles every bit in `from..to`, growing the set if needed.
    ///
    /// A negative `from` is clamped to 0. Does nothing if `to <= from`.
    pub fn flip_range(&mut self, from: isize, to: isize) -> &mut Self {
        if let Some(range) = Self::clamp_range(from, to) {
            self.update_range(range, |word, mask| *word ^= mask);
        }
        self
    }

    /// Sets every bit in `from..to` to `value`.
    pub fn set_range_value(&mut self, from: isize, to: isize, value: bool) -> &mut Self {
        if value {
            self.set_range(from, to)
        } else {
            self.clear_range(from, to)
        }
    }

    /// Clears every bit. The capacity is kept.
    pub fn clear_all(&mut self) -> &mut Self {
        self.words.fill(0);
        self
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// Negative indices and indices past the end report `false`; the set is
    /// never grown by a read.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let bs = BitSet::value_of(&[1]);
    /// assert!(bs.get(0));
    /// assert!(!bs.get(-1));
    /// assert!(!bs.get(1_000));
    /// assert_eq!(bs.size(), 64);
    /// ```
    #[inline]
    pub fn get(&self, idx: isize) -> bool {
        let Ok(idx) = usize::try_from(idx) else {
            return false;
        };
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.words
            .get(word_idx)
            .is_some_and(|&word| word & 1 << bit_idx != 0)
    }

    /// Returns a new bit set holding the bits of `from..to`, shifted down so
    /// that bit `from` lands at index 0.
    ///
    /// A negative `from` is clamped to 0. The result starts as
    /// [`new`](BitSet::new) and only grows to fit the set bits it copies.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let bs = BitSet::value_of(&[0b1011_0000]);
    /// let part = bs.get_range(4, 100);
    /// assert_eq!(part.to_string(), "{0, 1, 3}");
    /// assert_eq!(part.size(), 64);
    /// ```
    pub fn get_range(&self, from: isize, to: isize) -> Self {
        let Some(range) = Self::clamp_range(from, to) else {
            return Self::new();
        };
        let mut result = Self::new();
        for idx in self
            .iter_ones()
            .skip_while(|&idx| idx < range.start)
            .take_while(|&idx| idx < range.end)
        {
            result.set_bit(idx - range.start);
        }
        result
    }

    /// Returns the number of allocated bits. Always a multiple of
    /// [`WORD_BITS`].
    #[inline]
    pub fn size(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns the logical length: the index of the highest set bit plus one,
    /// or 0 if no bit is set.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// assert_eq!(BitSet::value_of(&[9]).len(), 4);
    /// assert_eq!(BitSet::new().len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        self.last_set_at_or_below(self.size() - 1)
            .map_or(0, |idx| idx + 1)
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns the index of the first set bit or `None` if all bits are clear.
    pub fn first_set_bit(&self) -> Option<usize> {
        self.first_set_at_or_above(0)
    }

    fn first_set_at_or_above(&self, from: usize) -> Option<usize> {
        let (mut word_idx, bit_idx) = Self::idxs(from);
        let mut word = *self.words.get(word_idx)? & (!0u64 << bit_idx);
        loop {
            if word != 0 {
                return Some(word_idx * WORD_BITS + word.trailing_zeros() as usize);
            }
            word_idx += 1;
            word = *self.words.get(word_idx)?;
        }
    }

    fn first_clear_at_or_above(&self, from: usize) -> usize {
        let (mut word_idx, bit_idx) = Self::idxs(from);
        let Some(first) = self.words.get(word_idx) else {
            return from;
        };
        let mut word = !first & (!0u64 << bit_idx);
        loop {
            if word != 0 {
                return word_idx * WORD_BITS + word.trailing_zeros() as usize;
            }
            word_idx += 1;
            match self.words.get(word_idx) {
                Some(next) => word = !next,
                // the first bit past the end is clear by definition
                None => return self.size(),
            }
        }
    }

    // `from` must be below `size()`.
    fn last_set_at_or_below(&self, from: usize) -> Option<usize> {
        let (mut word_idx, bit_idx) = Self::idxs(from);
        let mut word = self.words[word_idx] & ones_mask(0, bit_idx + 1);
        loop {
            if word != 0 {
                let top = WORD_BITS - 1 - word.leading_zeros() as usize;
                return Some(word_idx * WORD_BITS + top);
            }
            if word_idx == 0 {
                return None;
            }
            word_idx -= 1;
            word = self.words[word_idx];
        }
    }

    // `from` must be below `size()`.
    fn last_clear_at_or_below(&self, from: usize) -> Option<usize> {
        let (mut word_idx, bit_idx) = Self::idxs(from);
        let mut word = !self.words[word_idx] & ones_mask(0, bit_idx + 1);
        loop {
            if word != 0 {
                let top = WORD_BITS - 1 - word.leading_zeros() as usize;
                return Some(word_idx * WORD_BITS + top);
            }
            if word_idx == 0 {
                return None;
            }
            word_idx -= 1;
            word = !self.words[word_idx];
        }
    }

    fn forward_start(from: isize) -> Result<usize> {
        usize::try_from(from).map_err(|_| {
            debug!("rejecting negative forward scan start {from}");
            BitSetError::NegativeFromIndex(from)
        })
    }

    fn backward_start(from: isize) -> Result<Option<usize>> {
        match from {
            -1 => Ok(None),
            from if from < -1 => {
                debug!("rejecting backward scan start {from}");
                Err(BitSetError::FromIndexBelowSentinel(from))
            }
            from => Ok(Some(from as usize)),
        }
    }

    /// Returns the index of the first set bit at or after `from`, or `None`
    /// if there is none.
    ///
    /// # Errors
    /// Returns [`BitSetError::NegativeFromIndex`] if `from` is negative.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let bs = BitSet::value_of(&[0b1001]);
    /// assert_eq!(bs.next_set_bit(1).unwrap(), Some(3));
    /// assert_eq!(bs.next_set_bit(4).unwrap(), None);
    /// assert_eq!(bs.next_set_bit(70).unwrap(), None);
    /// assert!(bs.next_set_bit(-1).is_err());
    /// ```
    pub fn next_set_bit(&self, from: isize) -> Result<Option<usize>> {
        let from = Self::forward_start(from)?;
        Ok(self.first_set_at_or_above(from))
    }

    /// Returns the index of the first clear bit at or after `from`.
    ///
    /// Bits past the end are clear, so this always finds one: `from` itself
    /// when it lies past the end, and [`size`](BitSet::size) when every
    /// allocated bit from `from` on is set.
    ///
    /// # Errors
    /// Returns [`BitSetError::NegativeFromIndex`] if `from` is negative.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// assert_eq!(BitSet::new().next_clear_bit(70).unwrap(), 70);
    /// assert_eq!(BitSet::value_of(&[u64::MAX]).next_clear_bit(5).unwrap(), 64);
    /// ```
    pub fn next_clear_bit(&self, from: isize) -> Result<usize> {
        let from = Self::forward_start(from)?;
        Ok(self.first_clear_at_or_above(from))
    }

    /// Returns the index of the last set bit at or before `from`, or `None`
    /// if there is none.
    ///
    /// `from == -1` always yields `None`. A `from` past the end is clamped to
    /// the last allocated bit.
    ///
    /// # Errors
    /// Returns [`BitSetError::FromIndexBelowSentinel`] if `from < -1`.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let bs = BitSet::value_of(&[0b1001]);
    /// assert_eq!(bs.previous_set_bit(2).unwrap(), Some(0));
    /// assert_eq!(bs.previous_set_bit(1_000).unwrap(), Some(3));
    /// assert_eq!(bs.previous_set_bit(-1).unwrap(), None);
    /// ```
    pub fn previous_set_bit(&self, from: isize) -> Result<Option<usize>> {
        let Some(from) = Self::backward_start(from)? else {
            return Ok(None);
        };
        Ok(self.last_set_at_or_below(from.min(self.size() - 1)))
    }

    /// Returns the index of the last clear bit at or before `from`, or `None`
    /// if there is none.
    ///
    /// `from == -1` always yields `None`. A `from` past the end is returned
    /// unchanged, since every bit past the end is clear.
    ///
    /// # Errors
    /// Returns [`BitSetError::FromIndexBelowSentinel`] if `from < -1`.
    pub fn previous_clear_bit(&self, from: isize) -> Result<Option<usize>> {
        let Some(from) = Self::backward_start(from)? else {
            return Ok(None);
        };
        if from >= self.size() {
            return Ok(Some(from));
        }
        Ok(self.last_clear_at_or_below(from))
    }

    /// Performs an in-place bitwise AND with `other`.
    ///
    /// Only the words both sets have are combined. Words of `self` past the
    /// end of `other` are left untouched and `self` never grows.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let mut a = BitSet::value_of(&[15, 32]);
    /// a.and(&BitSet::value_of(&[10]));
    /// assert_eq!(a, BitSet::value_of(&[10, 32]));
    /// ```
    pub fn and(&mut self, other: &Self) -> &mut Self {
        for (self_word, other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *self_word &= other_word
        }
        self
    }

    /// Performs an in-place bitwise OR with `other`.
    ///
    /// Only the words both sets have are combined; `self` never grows.
    pub fn or(&mut self, other: &Self) -> &mut Self {
        for (self_word, other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *self_word |= other_word
        }
        self
    }

    /// Performs an in-place bitwise XOR with `other`.
    ///
    /// Only the words both sets have are combined; `self` never grows.
    pub fn xor(&mut self, other: &Self) -> &mut Self {
        for (self_word, other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *self_word ^= other_word
        }
        self
    }

    /// Clears every bit of `self` that is also set in `other`.
    ///
    /// Words of `self` past the end of `other` are kept, as `other` has no
    /// bits set there.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let mut a = BitSet::value_of(&[7, 1]);
    /// a.and_not(&BitSet::value_of(&[13]));
    /// assert_eq!(a, BitSet::value_of(&[2, 1]));
    /// ```
    pub fn and_not(&mut self, other: &Self) -> &mut Self {
        for (self_word, other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *self_word &= !other_word
        }
        self
    }

    /// Returns `true` if `self` and `other` share at least one set bit.
    pub fn intersects(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Returns a read-only view of the backing words.
    ///
    /// The borrow ends before the next mutation, which may reallocate.
    #[inline]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Returns a copy of the backing words.
    pub fn to_words(&self) -> Vec<u64> {
        self.words.clone()
    }

    /// Encodes every word as 8 little-endian bytes, in word order.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let bs = BitSet::value_of(&[0x0102]);
    /// assert_eq!(bs.to_bytes(), [2, 1, 0, 0, 0, 0, 0, 0]);
    /// assert_eq!(BitSet::from_bytes(&bs.to_bytes()), bs);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    /// Returns an iterator over all allocated bits as `bool`, from least to
    /// most significant.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.words)
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use grow_bitset::BitSet;
    ///
    /// let bs = BitSet::value_of(&[8, 7]);
    /// assert!(bs.iter_ones().eq([3, 64, 65, 66]));
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes::new(&self.words)
    }

    /// Returns an iterator over the indices of all clear bits below
    /// [`size`](BitSet::size), in ascending order.
    #[inline]
    pub fn iter_zeros(&self) -> IterZeros<'_> {
        IterZeros::new(&self.words)
    }

    fn trimmed_words(&self) -> &[u64] {
        let end = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        &self.words[..end]
    }
}

impl Default for BitSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Two sets are equal when they hold the same set bits; trailing zero words
/// do not matter.
impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed_words() == other.trimmed_words()
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trimmed_words().hash(state);
    }
}

impl<'bitset> IntoIterator for &'bitset BitSet {
    type Item = bool;
    type IntoIter = Iter<'bitset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&[u64]> for BitSet {
    fn from(words: &[u64]) -> Self {
        Self::value_of(words)
    }
}

impl From<Vec<u64>> for BitSet {
    fn from(words: Vec<u64>) -> Self {
        Self::from_words(words)
    }
}

/// Collects bit indices into a set, growing it as needed.
impl FromIterator<usize> for BitSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut bs = Self::new();
        bs.extend(iter);
        bs
    }
}

impl Extend<usize> for BitSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for idx in iter {
            self.set_bit(idx);
        }
    }
}

impl Display for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, idx) in self.iter_ones().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{idx}")?;
        }
        write!(f, "}}")
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LSB -> ")?;
        let size = self.size();
        for (i, bit) in self.iter().enumerate() {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
            if i % 8 == 7 && i < size - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")
    }
}

impl BitAndAssign<&BitSet> for BitSet {
    fn bitand_assign(&mut self, rhs: &BitSet) {
        self.and(rhs);
    }
}

impl BitOrAssign<&BitSet> for BitSet {
    fn bitor_assign(&mut self, rhs: &BitSet) {
        self.or(rhs);
    }
}

impl BitXorAssign<&BitSet> for BitSet {
    fn bitxor_assign(&mut self, rhs: &BitSet) {
        self.xor(rhs);
    }
}

impl SubAssign<&BitSet> for BitSet {
    fn sub_assign(&mut self, rhs: &BitSet) {
        self.and_not(rhs);
    }
}

impl BitAnd for &BitSet {
    type Output = BitSet;

    fn bitand(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.and(rhs);
        result
    }
}

impl BitOr for &BitSet {
    type Output = BitSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.or(rhs);
        result
    }
}

impl BitXor for &BitSet {
    type Output = BitSet;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.xor(rhs);
        result
    }
}

impl Sub for &BitSet {
    type Output = BitSet;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.and_not(rhs);
        result
    }
}
