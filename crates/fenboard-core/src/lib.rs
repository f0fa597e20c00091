//! Core board vocabulary for FEN positions.
//!
//! This crate provides the types shared by the position codec and its
//! consumers:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`CastlingRights`] for the four independent castling flags
//! - FEN field splitting and per-field grammar, with [`FenError`]

mod castling;
mod color;
pub mod fen;
mod piece;
mod square;

pub use castling::{CastlingRight, CastlingRights};
pub use color::Color;
pub use fen::{FenError, FenFields, STARTPOS};
pub use piece::Piece;
pub use square::{File, Rank, Square};
