//! Bitboard chess positions with a lossless FEN codec.
//!
//! This crate provides:
//! - [`BitSet64`] - 64-bit square sets
//! - [`ZobristKeys`] - the fixed, reproducible Zobrist key table
//! - [`Position`] - piece placement, side to move, castling rights,
//!   en passant file, move counters and a running Zobrist hash
//! - [`FenCodec`] - FEN parsing (with incremental hashing) and serialization
//! - [`BoardDisplay`] - a human-readable board diagram
//!
//! # Example
//!
//! ```
//! use fenboard::{FenCodec, Position, ZOBRIST};
//!
//! let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
//! let position = FenCodec::new().parse(fen).unwrap();
//!
//! assert_eq!(position.to_fen(), fen);
//! assert_eq!(position.hash(), ZOBRIST.hash_of(&position));
//! println!("{}", position.display());
//! ```

mod bitset;
pub mod fen;
mod position;
mod render;
mod zobrist;

pub use bitset::{BitSet64, BitSet64Iter};
pub use fen::FenCodec;
pub use position::Position;
pub use render::BoardDisplay;
pub use zobrist::{ZobristKeys, ZOBRIST};

pub use fenboard_core::{
    CastlingRight, CastlingRights, Color, FenError, File, Piece, Rank, Square, STARTPOS,
};
