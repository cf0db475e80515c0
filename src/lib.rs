//! A fixed-width bitset over a single unsigned word.
//! `no_std`, no `unsafe`, heap-free except for the explicit string form.
//!
//! [`BitSet<T>`] wraps one native unsigned integer (`u8` through `u128`) as a
//! set of boolean flags. [`BitIndex`] is a bounded position into such a word
//! with two sentinels, one before the first bit and one past the last, so
//! that scanning for the next or previous set bit never needs an `Option`:
//! running off either end lands on a sentinel. All scans use the hardware
//! trailing/leading-zero instructions, never a bit-by-bit loop.
//!
//! # Examples
//! ```
//! use word_bitset::{BitIndex, BitSet};
//!
//! let set = BitSet::<u8>::from_bits(0b0100_0110);
//! assert_eq!(set.count(), 3);
//!
//! // Scan forward over the set bits.
//! let mut i = BitIndex::PRE_BEGIN;
//! i.next_bit_in(set.bits());
//! assert_eq!(i.get(), 1);
//! i.next_bit_in(set.bits());
//! assert_eq!(i.get(), 2);
//! i.next_bit_in(set.bits());
//! assert_eq!(i.get(), 6);
//! i.next_bit_in(set.bits());
//! assert_eq!(i, BitIndex::end::<u8>());
//! ```
//!
//! # Use Cases
//!
//! - Flag words and small dense sets keyed by position
//! - Schedulers and allocators that scan for the next free/used slot
//! - Algorithms that enumerate bit patterns (see the `subsets` example)
//! - Not a replacement for growable bit vectors; the width is fixed by `T`
//!
//! # Features
//!
//! - `#![no_std]` compatible (`alloc` only for [`BitSet::to_string_with`])
//! - One word of storage, `Copy` value semantics, total order
//! - Sentinel-based next/previous set-bit scanning via [`BitIndex`]
//! - Extremal-bit queries: `lssb`, `mssb`, `lssbi`, `mssbi`
//! - Set algebra: `|`, `&`, `^`, `!` and their assign forms
//! - Shifts `<<`, `>>` with native semantics
//! - Integer escape hatch: `+`, `-`, `increment`, `decrement` on the raw word
//! - Lazy iteration over set bits as single-bit sets
//! - String form, most significant bit first, with configurable characters

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitset;
mod index;
mod word;


pub use bitset::{BitSet, SetBits};
pub use index::BitIndex;
pub use word::Word;
