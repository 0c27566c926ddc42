use core::iter::FusedIterator;

use crate::bitset::WORD_BITS;

/// Iterator over every allocated bit as a `bool`.
///
/// Yields `true` for set bits and `false` for clear bits, starting from index
/// 0 and ending at [`BitSet::size()`](crate::BitSet::size).
///
/// Returned by [`BitSet::iter()`](crate::BitSet::iter).
#[derive(Clone, Debug)]
pub struct Iter<'bitset> {
    words: &'bitset [u64],
    bit_idx: usize,
}

impl<'bitset> Iter<'bitset> {
    pub(crate) fn new(words: &'bitset [u64]) -> Self {
        Self { words, bit_idx: 0 }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let word = *self.words.get(self.bit_idx / WORD_BITS)?;
        let bit = word >> (self.bit_idx % WORD_BITS) & 1;
        self.bit_idx += 1;
        Some(bit != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.words.len() * WORD_BITS - self.bit_idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over the indices of set bits, in ascending order.
///
/// Returned by [`BitSet::iter_ones()`](crate::BitSet::iter_ones).
#[derive(Clone, Debug)]
pub struct IterOnes<'bitset> {
    words: &'bitset [u64],
    word_idx: usize,
    current: u64,
    base_bit_idx: usize,
}

impl<'bitset> IterOnes<'bitset> {
    pub(crate) fn new(words: &'bitset [u64]) -> Self {
        Self {
            words,
            word_idx: 0,
            current: words.first().copied().unwrap_or(0),
            base_bit_idx: 0,
        }
    }
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.words.len() {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1; // unset LSB
                return Some(self.base_bit_idx + tz);
            }

            self.word_idx += 1;
            self.base_bit_idx += WORD_BITS;
            self.current = self.words.get(self.word_idx).copied().unwrap_or(0);
        }
        None
    }
}

impl FusedIterator for IterOnes<'_> {}

/// Iterator over the indices of clear bits within the allocated capacity, in
/// ascending order.
///
/// Returned by [`BitSet::iter_zeros()`](crate::BitSet::iter_zeros).
#[derive(Clone, Debug)]
pub struct IterZeros<'bitset> {
    words: &'bitset [u64],
    word_idx: usize,
    current: u64,
    base_bit_idx: usize,
}

impl<'bitset> IterZeros<'bitset> {
    pub(crate) fn new(words: &'bitset [u64]) -> Self {
        Self {
            words,
            word_idx: 0,
            current: words.first().map_or(0, |w| !w),
            base_bit_idx: 0,
        }
    }
}

impl Iterator for IterZeros<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.words.len() {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.base_bit_idx + tz);
            }

            self.word_idx += 1;
            self.base_bit_idx += WORD_BITS;
            self.current = self.words.get(self.word_idx).map_or(0, |w| !w);
        }
        None
    }
}

impl FusedIterator for IterZeros<'_> {}
