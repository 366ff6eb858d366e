//! # maskscan
//!
//! SWAR primitives for decoding a SIMD byte-equality mask into the position
//! of its first matching byte.
//!
//! A byte-equality compare over a wide vector yields a mask in which every
//! byte is either `0x00` (no match) or non-zero (match). This crate reads
//! that mask as little-endian 64-bit words, finds the first non-zero word,
//! and locates its first non-zero byte with a 3-round binary narrowing over
//! byte boundaries.
//!
//! ## Quick Start
//!
//! ```
//! use maskscan::first_matching_byte_index;
//!
//! let mut mask = [0u8; 16];
//! mask[10] = 0x03;
//! assert_eq!(first_matching_byte_index(&mask), 10);
//! ```
//!
//! ## Locator variants
//!
//! The in-word step ships in three semantically identical forms so their
//! lowering can be compared under `benches/locate_strategies.rs`:
//!
//! - [`locate_old`] - fixed nested-conditional decision tree
//! - [`locate_ternary`] - narrowing with expression-level selection
//! - [`locate_ifs`] - narrowing with explicit branch statements
//!
//! ```
//! use maskscan::{locate_ifs, locate_old, locate_ternary};
//!
//! let word = 0x0000_0000_0001_0000u64; // byte 2 matched
//! assert_eq!(locate_old(word), 2);
//! assert_eq!(locate_ternary(word), 2);
//! assert_eq!(locate_ifs(word), 2);
//! ```
//!
//! All-zero input violates the contract and panics; the mask is expected to
//! come from a search loop that has already established a match exists, so
//! there is deliberately no "not found" result distinct from that panic.

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod locate;
mod scan;

pub use locate::{locate_ifs, locate_old, locate_ternary, Ifs, Old, Ternary};
pub use scan::{
    first_matching_byte_index, first_matching_byte_index_in_words,
    first_matching_byte_index_with, WORD_BYTES,
};

/// Trait for locating the first non-zero byte of a match word.
///
/// The three implementations ([`Old`], [`Ternary`], [`Ifs`]) share one
/// contract and differ only in control-flow shape, so a scan can be driven
/// by any of them through [`first_matching_byte_index_with`].
pub trait ByteLocator {
    /// Index (0-7) of the least-significant non-zero byte of `word`.
    ///
    /// Byte 0 is the low 8 bits, consistent with reading the mask as
    /// little-endian words.
    ///
    /// # Panics
    ///
    /// Panics if `word` is zero.
    fn locate(word: u64) -> u32;
}
