//! Square membership sets.
//!
//! A [`BitSet64`] is a 64-bit integer where each bit represents a square on
//! the chess board.

use fenboard_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A 64-bit set of board squares.
///
/// Bit `(file << 3) | rank` holds the square at that file and rank, so
/// bit 0 = a1, bit 7 = a8, bit 8 = b1, ..., bit 63 = h8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitSet64(pub u64);

impl BitSet64 {
    /// Empty set (no squares).
    pub const EMPTY: BitSet64 = BitSet64(0);

    /// Full set (all squares).
    pub const FULL: BitSet64 = BitSet64(!0);

    /// Creates a set from a raw u64.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        BitSet64(bits)
    }

    /// Creates a set holding a single square.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        BitSet64(sq.bit())
    }

    /// Returns true if no square is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set squares.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set.
    #[inline]
    pub const fn is_set(self, sq: Square) -> bool {
        (self.0 & sq.bit()) != 0
    }

    /// Sets the given square.
    ///
    /// The square must not already be set; doing so means two pieces were
    /// placed on one square, which is a bug in the caller.
    #[inline]
    pub fn set(&mut self, sq: Square) {
        debug_assert!(!self.is_set(sq), "square {sq} is already set");
        self.0 |= sq.bit();
    }

    /// Pops and returns the lowest set square.
    #[inline]
    pub fn pop_lowest(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }
}

impl BitAnd for BitSet64 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        BitSet64(self.0 & rhs.0)
    }
}

impl BitAndAssign for BitSet64 {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for BitSet64 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        BitSet64(self.0 | rhs.0)
    }
}

impl BitOrAssign for BitSet64 {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for BitSet64 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        BitSet64(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for BitSet64 {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for BitSet64 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        BitSet64(!self.0)
    }
}

impl fmt::Debug for BitSet64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitSet64({:#018x})", self.0)?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let bit = (file << 3) | rank;
                if (self.0 >> bit) & 1 == 1 {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Iterator over set squares, lowest index first.
pub struct BitSet64Iter(BitSet64);

impl Iterator for BitSet64Iter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lowest()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for BitSet64 {
    type Item = Square;
    type IntoIter = BitSet64Iter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BitSet64Iter(self)
    }
}
