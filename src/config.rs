use crate::bitset::WORD_BITS;
use crate::error::{BitSetError, Result};

/// Construction options for [`BitSet`](crate::BitSet).
///
/// # Examples
/// ```
/// use grow_bitset::{BitSet, Config};
///
/// let bs = BitSet::with_config(Config::default().initial_bits(130)).unwrap();
/// assert_eq!(bs.size(), 192);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of bits to allocate up front. Rounded up to whole words;
    /// `0` falls back to a single word. Must not be negative.
    pub initial_bits: isize,
}

impl Config {
    /// Sets the initial bit capacity.
    pub fn initial_bits(mut self, bits: isize) -> Self {
        self.initial_bits = bits;
        self
    }

    /// Checks the options and returns the number of bits to allocate.
    pub fn validate(&self) -> Result<usize> {
        match self.initial_bits {
            n if n < 0 => Err(BitSetError::NegativeCapacity(n)),
            0 => Ok(WORD_BITS),
            n => Ok(n as usize),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_bits: WORD_BITS as isize,
        }
    }
}
