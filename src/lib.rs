//! A growable bit set written in pure Rust.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! [`BitSet`] is the main struct in this library. It packs bits into 64-bit
//! words and grows by whole words whenever a write lands past the end. Its
//! [features](#features) are listed below.
//!
//! # Examples
//! ```
//! use grow_bitset::BitSet;
//!
//! let mut bs = BitSet::new();
//! assert_eq!(bs.size(), 64);
//! assert!(!bs.get(3));
//! bs.set(3).set(100);
//! assert!(bs.get(3));
//! assert_eq!(bs.size(), 128);
//! assert_eq!(bs.cardinality(), 2);
//! assert_eq!(bs.to_string(), "{3, 100}");
//! ```
//!
//! # Boundary rules
//!
//! - Writes past the end grow the set; reads past the end report `false`.
//! - Negative indices are ignored by point mutators and read as `false`.
//! - Range operations clamp a negative start to 0.
//! - Forward scans reject a negative start, backward scans reject anything
//!   below `-1`, both with a [`BitSetError`].
//!
//! # Features
//!
//! - `#![no_std]` compatible (needs `alloc`)
//! - Point and range mutation: `set`, `clear`, `flip`, `set_range`, ...
//! - Bit scanning: `next_set_bit`, `next_clear_bit`, `previous_set_bit`,
//!   `previous_clear_bit`
//! - Set algebra: `and`, `or`, `xor`, `and_not`, `intersects`
//!   - and the operators `&`, `|`, `^`, `-`, `&=`, `|=`, `^=`, `-=`
//! - Iteration over all, set or clear bits:
//!   - `iter()` (all bits as bools)
//!   - `iter_ones()` (indices of set bits)
//!   - `iter_zeros()` (indices of clear bits)
//! - Serialization to and from words and little-endian bytes
//! - Diagnostics through the [`log`](https://docs.rs/log) facade

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod bitset;
mod config;
mod error;
mod iter;

pub use bitset::{BitSet, WORD_BITS, word_count};
pub use config::Config;
pub use error::{BitSetError, Result};
pub use iter::{Iter, IterOnes, IterZeros};
