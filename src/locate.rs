//! Byte-locator variants: index of the first non-zero byte in a match word.
//!
//! All three functions compute the same answer for every non-zero word and
//! exist only so a compiler's lowering of conditional expressions versus
//! branch statements can be measured against each other. The narrowing
//! variants run a 3-round binary search over byte boundaries: halve at 32
//! bits, then at 16-bit stride, then at 8-bit stride, summing the per-round
//! contributions (+4, +2, +1) into the final byte index.

use crate::ByteLocator;

/// Mask covering bytes 0-3 (the low 32-bit half).
const M32: u64 = 0x0000_0000_ffff_ffff;

/// Mask covering the low 16 bits of each 32-bit half.
const M16: u64 = 0x0000_ffff_0000_ffff;

/// Mask covering the low byte of each 16-bit field.
const M8: u64 = 0x00ff_00ff_00ff_00ff;

/// Locate the first non-zero byte with a fixed decision tree.
///
/// Up to three binary tests against the original word's literal masks, one
/// nested conditional expression per level. No narrowing state is carried
/// between levels; each of the eight outcomes is reached by its own path.
///
/// # Panics
///
/// Panics if `word` is zero.
#[inline]
pub fn locate_old(word: u64) -> u32 {
    assert!(word != 0, "locate_old: word has no matching byte");

    if word & M32 != 0 {
        if word & 0x0000_0000_0000_ffff != 0 {
            if word & 0x0000_0000_0000_00ff != 0 {
                0
            } else {
                1
            }
        } else if word & 0x0000_0000_00ff_0000 != 0 {
            2
        } else {
            3
        }
    } else if word & 0x0000_ffff_0000_0000 != 0 {
        if word & 0x0000_00ff_0000_0000 != 0 {
            4
        } else {
            5
        }
    } else if word & 0x00ff_0000_0000_0000 != 0 {
        6
    } else {
        7
    }
}

/// Locate the first non-zero byte by 3-round narrowing, with each round's
/// contribution and working-value update written as conditional expressions.
///
/// Each round masks off the lower half of the remaining candidates. A zero
/// masked value means the match lies in the upper half: the round adds its
/// weight and keeps the unmasked value, so the word is never discarded when
/// the match sits in the other half.
///
/// # Panics
///
/// Panics if `word` is zero.
#[inline]
pub fn locate_ternary(word: u64) -> u32 {
    assert!(word != 0, "locate_ternary: word has no matching byte");

    let mut value = word;
    let mut index = 0;

    let low = value & M32;
    index += if low == 0 { 4 } else { 0 };
    value = if low == 0 { value } else { low };

    let low = value & M16;
    index += if low == 0 { 2 } else { 0 };
    value = if low == 0 { value } else { low };

    let low = value & M8;
    index + if low == 0 { 1 } else { 0 }
}

/// Locate the first non-zero byte by 3-round narrowing, with each round
/// written as an explicit two-branch statement.
///
/// Same arithmetic as [`locate_ternary`], branch-statement form.
///
/// # Panics
///
/// Panics if `word` is zero.
#[inline]
pub fn locate_ifs(word: u64) -> u32 {
    assert!(word != 0, "locate_ifs: word has no matching byte");

    let mut value = word;
    let mut index = 0;

    let low = value & M32;
    if low == 0 {
        index += 4;
    } else {
        value = low;
    }

    let low = value & M16;
    if low == 0 {
        index += 2;
    } else {
        value = low;
    }

    if value & M8 == 0 {
        index += 1;
    }

    index
}

/// Decision-tree locator ([`locate_old`]).
#[derive(Clone, Copy, Debug)]
pub struct Old;

/// Expression-narrowing locator ([`locate_ternary`]).
#[derive(Clone, Copy, Debug)]
pub struct Ternary;

/// Branch-narrowing locator ([`locate_ifs`]).
#[derive(Clone, Copy, Debug)]
pub struct Ifs;

impl ByteLocator for Old {
    #[inline]
    fn locate(word: u64) -> u32 {
        locate_old(word)
    }
}

impl ByteLocator for Ternary {
    #[inline]
    fn locate(word: u64) -> u32 {
        locate_ternary(word)
    }
}

impl ByteLocator for Ifs {
    #[inline]
    fn locate(word: u64) -> u32 {
        locate_ifs(word)
    }
}
