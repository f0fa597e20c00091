//! FEN (Forsyth-Edwards Notation) field grammar.
//!
//! This module splits a FEN record into its six fields and parses every field
//! that does not need board state. Piece placement is left to the position
//! codec, which hashes each piece as it is placed.

use thiserror::Error;

use crate::{CastlingRight, CastlingRights, Color, File, Rank, Square};

/// The standard starting position FEN.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Largest accepted halfmove clock (the fifty-move rule ceiling).
pub const HALFMOVE_CLOCK_MAX: u8 = 50;

/// Largest accepted fullmove counter.
pub const FULLMOVE_COUNTER_MAX: u8 = 99;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 space-separated parts, got {0}")]
    TooFewParts(usize),

    #[error("invalid FEN: expected 6 space-separated parts, got {0}")]
    TooManyParts(usize),

    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    TooFewRanks(usize),

    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    TooManyRanks(usize),

    #[error("invalid piece placement: unexpected character '{0}'")]
    InvalidPieceChar(char),

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling ability: '{0}'")]
    InvalidCastlingAbility(String),

    #[error("invalid en passant target square: '{0}'")]
    InvalidEnPassentTargetSquare(String),

    #[error("invalid halfmove clock: '{0}' (expected 0-50)")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove counter: '{0}' (expected 0-99)")]
    InvalidFullmoveCounter(String),
}

/// The six raw fields of a FEN record, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenFields<'a> {
    pub piece_placement: &'a str,
    pub side_to_move: &'a str,
    pub castling: &'a str,
    pub en_passant: &'a str,
    pub halfmove_clock: &'a str,
    pub fullmove_counter: &'a str,
}

impl<'a> FenFields<'a> {
    /// Splits a FEN record on single spaces.
    ///
    /// No trimming is done: leading, trailing or doubled spaces produce empty
    /// fields, which then fail the count check or their own field's grammar.
    pub fn split(fen: &'a str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split(' ').collect();

        match parts[..] {
            [piece_placement, side_to_move, castling, en_passant, halfmove_clock, fullmove_counter] => {
                Ok(FenFields {
                    piece_placement,
                    side_to_move,
                    castling,
                    en_passant,
                    halfmove_clock,
                    fullmove_counter,
                })
            }
            _ if parts.len() < 6 => Err(FenError::TooFewParts(parts.len())),
            _ => Err(FenError::TooManyParts(parts.len())),
        }
    }
}

/// Splits the piece placement field into its 8 rank groups, rank 8 first.
pub fn split_ranks(placement: &str) -> Result<[&str; 8], FenError> {
    let groups: Vec<&str> = placement.split('/').collect();
    let count = groups.len();
    groups.try_into().map_err(|_| {
        if count < 8 {
            FenError::TooFewRanks(count)
        } else {
            FenError::TooManyRanks(count)
        }
    })
}

/// Parses the side-to-move field: exactly `w` or `b`.
pub fn parse_side_to_move(field: &str) -> Result<Color, FenError> {
    let mut chars = field.chars();
    let color = match (chars.next(), chars.next()) {
        (Some(c), None) => Color::from_fen_char(c),
        _ => None,
    };
    color.ok_or_else(|| FenError::InvalidSideToMove(field.to_string()))
}

/// Parses the castling ability field.
///
/// `-` means no rights. Otherwise 1 to 4 letters from `KQkq` in any order;
/// a repeated letter is rejected.
pub fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::InvalidCastlingAbility(field.to_string());

    if field == "-" {
        return Ok(CastlingRights::NONE);
    }
    if field.is_empty() || field.len() > 4 {
        return Err(invalid());
    }

    let mut rights = CastlingRights::NONE;
    for c in field.chars() {
        let right = CastlingRight::from_fen_char(c).ok_or_else(invalid)?;
        if !rights.grant(right) {
            return Err(invalid());
        }
    }
    Ok(rights)
}

/// Parses the en passant field, keeping only the file.
///
/// The rank must be `3` or `6`; which one is not checked against the side to
/// move, since it is reconstructed from the side to move on output.
pub fn parse_en_passant(field: &str) -> Result<Option<File>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    Square::from_algebraic(field)
        .filter(|sq| matches!(sq.rank(), Rank::R3 | Rank::R6))
        .map(|sq| Some(sq.file()))
        .ok_or_else(|| FenError::InvalidEnPassentTargetSquare(field.to_string()))
}

/// Parses the halfmove clock (0-50).
pub fn parse_halfmove_clock(field: &str) -> Result<u8, FenError> {
    parse_bounded(field, HALFMOVE_CLOCK_MAX)
        .ok_or_else(|| FenError::InvalidHalfmoveClock(field.to_string()))
}

/// Parses the fullmove counter (0-99).
pub fn parse_fullmove_counter(field: &str) -> Result<u8, FenError> {
    parse_bounded(field, FULLMOVE_COUNTER_MAX)
        .ok_or_else(|| FenError::InvalidFullmoveCounter(field.to_string()))
}

/// Plain decimal digits only: no sign, no whitespace.
fn parse_bounded(field: &str, max: u8) -> Option<u8> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u8>().ok().filter(|&v| v <= max)
}
