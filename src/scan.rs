//! Scanning a multi-word mask for its first matching byte.
//!
//! The scan walks the mask's 64-bit words in index order and stops at the
//! first non-zero one; later words are never inspected. The in-word step is
//! delegated to a [`ByteLocator`], and the word index and intra-word offset
//! compose into the final byte position.

use crate::locate::Ifs;
use crate::ByteLocator;

/// Bytes per scanned word.
pub const WORD_BYTES: usize = 8;

/// First non-zero word of `words`, with its index.
#[inline]
fn first_nonzero_word(words: &[u64]) -> Option<(usize, u64)> {
    words.iter().copied().enumerate().find(|&(_, word)| word != 0)
}

/// Byte position of the first match in a mask given as little-endian words,
/// using locator `L` for the in-word step.
///
/// # Panics
///
/// Panics if every word is zero.
#[inline]
pub fn first_matching_byte_index_with<L: ByteLocator>(words: &[u64]) -> usize {
    match first_nonzero_word(words) {
        Some((word_idx, word)) => word_idx * WORD_BYTES + L::locate(word) as usize,
        None => panic!("mask contains no matching byte"),
    }
}

/// Byte position of the first match in a mask given as little-endian words.
///
/// # Panics
///
/// Panics if every word is zero.
#[inline]
pub fn first_matching_byte_index_in_words(words: &[u64]) -> usize {
    first_matching_byte_index_with::<Ifs>(words)
}

/// Byte position of the first match in a raw byte mask.
///
/// Each byte of `mask` is `0x00` for "no match" or any non-zero value for
/// "match"; the mask length must be a multiple of [`WORD_BYTES`]. Words are
/// read little-endian, so byte 0 of the mask is byte 0 of the first word.
///
/// # Panics
///
/// Panics if `mask` is all zero, or if its length is not a multiple of
/// [`WORD_BYTES`].
#[inline]
pub fn first_matching_byte_index(mask: &[u8]) -> usize {
    assert!(
        mask.len() % WORD_BYTES == 0,
        "mask length must be a multiple of the word width"
    );

    for (word_idx, chunk) in mask.chunks_exact(WORD_BYTES).enumerate() {
        let mut bytes = [0u8; WORD_BYTES];
        bytes.copy_from_slice(chunk);
        let word = u64::from_le_bytes(bytes);
        if word != 0 {
            return word_idx * WORD_BYTES + Ifs::locate(word) as usize;
        }
    }

    panic!("mask contains no matching byte");
}
