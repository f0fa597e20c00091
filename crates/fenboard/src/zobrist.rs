//! Zobrist hashing for position identification.
//!
//! Zobrist hashing creates a fingerprint for each chess position by XORing
//! random numbers associated with:
//! - Each piece on each square (6 kinds × 2 colors × 64 squares = 768 values)
//! - Black to move
//! - Castling rights (4 values)
//! - En passant file (8 values)
//!
//! All keys come from one xorshift64 stream with a fixed seed, drawn in the
//! order listed above, so a table built from the same seed is bit-for-bit
//! identical across runs and builds.

use fenboard_core::{CastlingRight, Color, File, Piece, Square};

use crate::Position;

/// Zobrist hash keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    /// Keys for pieces: [piece][color][square]
    pieces: [[[u64; Square::COUNT]; 2]; 6],
    /// Key for black to move (XOR when black to move).
    black_to_move: u64,
    /// Keys for castling rights, indexed by [`CastlingRight::index`].
    castling: [u64; 4],
    /// Keys for en passant file.
    en_passant: [u64; 8],
}

impl ZobristKeys {
    /// Seed of the process-wide [`ZOBRIST`] table (the 64-bit golden ratio).
    pub const SEED: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Builds the table from [`Self::SEED`].
    pub const fn new() -> Self {
        Self::with_seed(Self::SEED)
    }

    /// Builds a table from an arbitrary nonzero seed.
    ///
    /// Hashes from tables with different seeds are not comparable.
    pub const fn with_seed(seed: u64) -> Self {
        assert!(seed != 0, "xorshift64 seed must be nonzero");

        const fn next_random(state: u64) -> u64 {
            let mut x = state;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x
        }

        let mut state = seed;
        let mut pieces = [[[0u64; Square::COUNT]; 2]; 6];
        let mut castling = [0u64; 4];
        let mut en_passant = [0u64; 8];

        let mut piece = 0;
        while piece < 6 {
            let mut color = 0;
            while color < 2 {
                let mut square = 0;
                while square < Square::COUNT {
                    state = next_random(state);
                    pieces[piece][color][square] = state;
                    square += 1;
                }
                color += 1;
            }
            piece += 1;
        }

        state = next_random(state);
        let black_to_move = state;

        let mut i = 0;
        while i < 4 {
            state = next_random(state);
            castling[i] = state;
            i += 1;
        }

        let mut i = 0;
        while i < 8 {
            state = next_random(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    /// Returns the key for a piece on a square.
    #[inline]
    pub const fn piece_key(&self, piece: Piece, color: Color, square: Square) -> u64 {
        self.pieces[piece.index()][color.index()][square.index() as usize]
    }

    /// Returns the key XORed in when Black is to move.
    #[inline]
    pub const fn black_to_move_key(&self) -> u64 {
        self.black_to_move
    }

    /// Returns the key for a castling right.
    #[inline]
    pub const fn castling_key(&self, right: CastlingRight) -> u64 {
        self.castling[right.index()]
    }

    /// Returns the key for an en passant file.
    #[inline]
    pub const fn en_passant_key(&self, file: File) -> u64 {
        self.en_passant[file.index() as usize]
    }

    /// Computes the hash of a position from scratch.
    ///
    /// For a parsed position this equals the hash built up during parsing.
    pub fn hash_of(&self, position: &Position) -> u64 {
        let mut hash = 0;

        for piece in Piece::ALL {
            for color in Color::ALL {
                for sq in position.pieces_of(piece, color) {
                    hash ^= self.piece_key(piece, color, sq);
                }
            }
        }

        if position.side_to_move() == Color::Black {
            hash ^= self.black_to_move;
        }

        for right in position.castling().iter() {
            hash ^= self.castling_key(right);
        }

        if let Some(file) = position.en_passant_file() {
            hash ^= self.en_passant_key(file);
        }

        hash
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide Zobrist keys, built at compile time and immutable.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();
