//! Chess position representation.

use std::fmt;
use std::str::FromStr;

use fenboard_core::{CastlingRights, Color, File, FenError, Piece, Square, STARTPOS};

use crate::fen::FenCodec;
use crate::render::BoardDisplay;
use crate::zobrist::ZobristKeys;
use crate::BitSet64;

/// Complete static chess position.
///
/// Positions are only built whole, by [`FenCodec::parse`] or the
/// constructors below, so the running hash always matches the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Sets for each piece kind, indexed by [`Piece::index`].
    pub(crate) pieces: [BitSet64; 6],

    /// Occupancy sets for each color, indexed by [`Color::index`].
    pub(crate) colors: [BitSet64; 2],

    pub(crate) side_to_move: Color,

    pub(crate) castling: CastlingRights,

    /// File of the en passant target; the rank follows from the side to move.
    pub(crate) en_passant: Option<File>,

    /// Halfmove clock for the 50-move rule (0-50).
    pub(crate) halfmove_clock: u8,

    /// Fullmove counter (0-99).
    pub(crate) fullmove_counter: u8,

    /// Running Zobrist hash.
    pub(crate) hash: u64,
}

impl Position {
    /// Creates an empty board: White to move, no rights, clocks at 0 and 1.
    pub fn empty() -> Self {
        Position {
            pieces: [BitSet64::EMPTY; 6],
            colors: [BitSet64::EMPTY; 2],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_counter: 1,
            hash: 0,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(STARTPOS).expect("STARTPOS is valid")
    }

    /// Parses a position from FEN using the process-wide Zobrist keys.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        FenCodec::new().parse(fen)
    }

    /// Converts the position to a canonical FEN string.
    pub fn to_fen(&self) -> String {
        FenCodec::new().to_fen(self)
    }

    /// Places a piece and folds its key into the hash.
    ///
    /// The square must be empty in both the kind and the color set.
    pub(crate) fn put_piece(&mut self, piece: Piece, color: Color, sq: Square, keys: &ZobristKeys) {
        self.pieces[piece.index()].set(sq);
        self.colors[color.index()].set(sq);
        self.hash ^= keys.piece_key(piece, color, sq);
    }

    /// Returns the piece and color at the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        let color = if self.colors[Color::White.index()].is_set(sq) {
            Color::White
        } else if self.colors[Color::Black.index()].is_set(sq) {
            Color::Black
        } else {
            return None;
        };

        Piece::ALL
            .into_iter()
            .find(|piece| self.pieces[piece.index()].is_set(sq))
            .map(|piece| (piece, color))
    }

    /// Returns the set of squares holding the given piece kind (either color).
    #[inline]
    pub fn pieces(&self, piece: Piece) -> BitSet64 {
        self.pieces[piece.index()]
    }

    /// Returns the set of squares occupied by the given color.
    #[inline]
    pub fn color_set(&self, color: Color) -> BitSet64 {
        self.colors[color.index()]
    }

    /// Returns the set of pieces of the given kind and color.
    #[inline]
    pub fn pieces_of(&self, piece: Piece, color: Color) -> BitSet64 {
        self.pieces[piece.index()] & self.colors[color.index()]
    }

    /// Returns the set of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> BitSet64 {
        self.colors[0] | self.colors[1]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant_file(&self) -> Option<File> {
        self.en_passant
    }

    /// Returns the en passant target square, with its rank derived from the
    /// side to move.
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
            .map(|file| Square::new(file, self.side_to_move.en_passant_rank()))
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u8 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_counter(&self) -> u8 {
        self.fullmove_counter
    }

    /// Returns the Zobrist hash of this position.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Checks the occupancy invariants: piece kinds are pairwise disjoint,
    /// the colors are disjoint, and both partitions cover the same squares.
    pub fn is_consistent(&self) -> bool {
        let mut union = BitSet64::EMPTY;
        for set in self.pieces {
            if !(union & set).is_empty() {
                return false;
            }
            union |= set;
        }

        let [white, black] = self.colors;
        (white & black).is_empty() && union == (white | black)
    }

    /// Returns a displayable ASCII board diagram.
    pub fn display(&self) -> BoardDisplay<'_> {
        BoardDisplay::new(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Position {
    /// Formats the position as canonical FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FenCodec::new().write(self, f)
    }
}
