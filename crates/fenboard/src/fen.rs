//! FEN parsing and serialization for [`Position`].
//!
//! Parsing runs the six fields strictly in order and stops at the first bad
//! field. Every piece, the side to move, each castling right and the en
//! passant file are folded into the Zobrist hash as soon as they are read.

use std::fmt::{self, Write};

use fenboard_core::fen::{self as grammar, FenFields};
use fenboard_core::{Color, FenError, File, Piece, Rank, Square};
use tracing::{debug, trace};

use crate::zobrist::{ZobristKeys, ZOBRIST};
use crate::Position;

/// Converts between FEN text and [`Position`] values.
///
/// The codec borrows the Zobrist table it hashes with; [`FenCodec::new`] uses
/// the process-wide [`ZOBRIST`] table.
#[derive(Debug, Clone, Copy)]
pub struct FenCodec<'k> {
    keys: &'k ZobristKeys,
}

impl FenCodec<'static> {
    /// Creates a codec hashing with the process-wide keys.
    pub fn new() -> Self {
        FenCodec { keys: &ZOBRIST }
    }
}

impl Default for FenCodec<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'k> FenCodec<'k> {
    /// Creates a codec hashing with the given keys.
    pub fn with_keys(keys: &'k ZobristKeys) -> Self {
        FenCodec { keys }
    }

    /// Parses a FEN string into a position.
    ///
    /// The input must already be a single trimmed line; fields are separated
    /// by exactly one space.
    pub fn parse(&self, fen: &str) -> Result<Position, FenError> {
        let result = self.parse_fields(fen);
        match &result {
            Ok(position) => trace!(fen, hash = position.hash, "parsed FEN"),
            Err(err) => debug!(fen, %err, "rejected FEN"),
        }
        result
    }

    fn parse_fields(&self, fen: &str) -> Result<Position, FenError> {
        let fields = FenFields::split(fen)?;
        let mut position = Position::empty();

        self.parse_placement(fields.piece_placement, &mut position)?;

        position.side_to_move = grammar::parse_side_to_move(fields.side_to_move)?;
        if position.side_to_move == Color::Black {
            position.hash ^= self.keys.black_to_move_key();
        }

        position.castling = grammar::parse_castling(fields.castling)?;
        for right in position.castling.iter() {
            position.hash ^= self.keys.castling_key(right);
        }

        position.en_passant = grammar::parse_en_passant(fields.en_passant)?;
        if let Some(file) = position.en_passant {
            position.hash ^= self.keys.en_passant_key(file);
        }

        position.halfmove_clock = grammar::parse_halfmove_clock(fields.halfmove_clock)?;
        position.fullmove_counter = grammar::parse_fullmove_counter(fields.fullmove_counter)?;

        Ok(position)
    }

    /// Places the pieces of the placement field, rank 8 first.
    ///
    /// A rank group stops as soon as it has covered all eight files: a digit
    /// that runs past the h-file is cut short, and anything after it in the
    /// same group is ignored. Groups covering fewer files leave the rest empty.
    fn parse_placement(&self, placement: &str, position: &mut Position) -> Result<(), FenError> {
        let groups = grammar::split_ranks(placement)?;

        for (group, rank) in groups.into_iter().zip(Rank::ALL.into_iter().rev()) {
            let mut file = 0u8;
            for c in group.chars() {
                match c {
                    '1'..='8' => file += c as u8 - b'0',
                    _ => {
                        let (piece, color) =
                            Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar(c))?;
                        let Some(f) = File::from_index(file) else {
                            break;
                        };
                        position.put_piece(piece, color, Square::new(f, rank), self.keys);
                        file += 1;
                    }
                }
                if file >= 8 {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Writes the canonical FEN of a position into `out`.
    ///
    /// Empty runs are a single digit, castling letters come in `KQkq` order,
    /// and the en passant rank is rebuilt from the side to move.
    pub fn write<W: Write>(&self, position: &Position, out: &mut W) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                out.write_char('/')?;
            }
            let mut empty = 0;
            for file in File::ALL {
                match position.piece_at(Square::new(file, rank)) {
                    Some((piece, color)) => {
                        if empty > 0 {
                            write!(out, "{}", empty)?;
                            empty = 0;
                        }
                        out.write_char(piece.to_fen_char(color))?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(out, "{}", empty)?;
            }
        }

        write!(
            out,
            " {} {} ",
            position.side_to_move.to_fen_char(),
            position.castling
        )?;

        match position.en_passant_square() {
            Some(sq) => write!(out, "{}", sq)?,
            None => out.write_char('-')?,
        }

        write!(
            out,
            " {} {}",
            position.halfmove_clock, position.fullmove_counter
        )
    }

    /// Converts a position to a canonical FEN string.
    pub fn to_fen(&self, position: &Position) -> String {
        let mut fen = String::new();
        self.write(position, &mut fen)
            .expect("writing to a String cannot fail");
        fen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenboard_core::{CastlingRight, STARTPOS};

    fn parse(fen: &str) -> Result<Position, FenError> {
        FenCodec::new().parse(fen)
    }

    #[test]
    fn parse_startpos() {
        let pos = parse(STARTPOS).unwrap();
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.castling(), fenboard_core::CastlingRights::ALL);
        assert_eq!(pos.en_passant_file(), None);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_counter(), 1);

        for file in File::ALL {
            assert_eq!(
                pos.piece_at(Square::new(file, Rank::R2)),
                Some((Piece::Pawn, Color::White))
            );
            assert_eq!(
                pos.piece_at(Square::new(file, Rank::R7)),
                Some((Piece::Pawn, Color::Black))
            );
        }
        let back = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in File::ALL.into_iter().zip(back) {
            assert_eq!(
                pos.piece_at(Square::new(file, Rank::R1)),
                Some((piece, Color::White))
            );
            assert_eq!(
                pos.piece_at(Square::new(file, Rank::R8)),
                Some((piece, Color::Black))
            );
        }
    }

    #[test]
    fn first_group_is_rank_eight() {
        let pos = parse("k7/8/8/8/8/8/8/7K w - - 0 1").unwrap();
        assert_eq!(pos.piece_at(Square::A8), Some((Piece::King, Color::Black)));
        assert_eq!(pos.piece_at(Square::H1), Some((Piece::King, Color::White)));
        assert_eq!(pos.occupied().count(), 2);
    }

    #[test]
    fn part_count_errors() {
        assert_eq!(parse("invalid"), Err(FenError::TooFewParts(1)));
        assert_eq!(
            parse("8/8/8/8/8/8/8/8 w - - 0 1 1"),
            Err(FenError::TooManyParts(7))
        );
    }

    #[test]
    fn rank_count_errors() {
        assert_eq!(
            parse("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::TooFewRanks(7))
        );
        assert_eq!(
            parse("8/8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::TooManyRanks(9))
        );
    }

    #[test]
    fn invalid_piece_chars() {
        assert_eq!(
            parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPieceChar('X'))
        );
        assert_eq!(
            parse("8/8/8/0/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPieceChar('0'))
        );
        assert_eq!(
            parse("8/8/8/9/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPieceChar('9'))
        );
    }

    #[test]
    fn overflowing_rank_is_truncated() {
        let pos = parse("7p2/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(pos.occupied().count(), 1);
        assert_eq!(
            pos.piece_at(Square::new(File::H, Rank::R8)),
            Some((Piece::Pawn, Color::Black))
        );

        let pos = parse("6Q3k/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(pos.occupied().count(), 1);
        assert_eq!(
            pos.piece_at(Square::new(File::G, Rank::R8)),
            Some((Piece::Queen, Color::White))
        );

        let pos = parse("8k/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert!(pos.occupied().is_empty());
    }

    #[test]
    fn short_rank_leaves_squares_empty() {
        let pos = parse("k/8/8/8/8/8/8/K w - - 0 1").unwrap();
        assert_eq!(pos.occupied().count(), 2);
        assert_eq!(pos.to_fen(), "k7/8/8/8/8/8/8/K7 w - - 0 1");
    }

    #[test]
    fn field_errors_in_order() {
        assert_eq!(
            parse("8/8/8/8/8/8/8/8 x KQkq - 0 1"),
            Err(FenError::InvalidSideToMove("x".to_string()))
        );
        assert_eq!(
            parse("8/8/8/8/8/8/8/8 w XYZ - 0 1"),
            Err(FenError::InvalidCastlingAbility("XYZ".to_string()))
        );
        assert_eq!(
            parse("8/8/8/8/8/8/8/8 w - e4 0 1"),
            Err(FenError::InvalidEnPassentTargetSquare("e4".to_string()))
        );
        assert_eq!(
            parse("8/8/8/8/8/8/8/8 w - - 51 1"),
            Err(FenError::InvalidHalfmoveClock("51".to_string()))
        );
        assert_eq!(
            parse("8/8/8/8/8/8/8/8 w - - 0 100"),
            Err(FenError::InvalidFullmoveCounter("100".to_string()))
        );
        // The earliest bad field wins.
        assert_eq!(
            parse("8/8/8/8/8/8/8/8 x XYZ e4 51 100"),
            Err(FenError::InvalidSideToMove("x".to_string()))
        );
        assert_eq!(
            parse("8/8/8/8/8/8/8/Z x XYZ e4 51 100"),
            Err(FenError::InvalidPieceChar('Z'))
        );
    }

    #[test]
    fn castling_field_sets_flags() {
        let pos = parse("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        assert!(pos.castling().has(CastlingRight::WhiteKingside));
        assert!(!pos.castling().has(CastlingRight::WhiteQueenside));
        assert!(!pos.castling().has(CastlingRight::BlackKingside));
        assert!(pos.castling().has(CastlingRight::BlackQueenside));
    }

    #[test]
    fn hash_tracks_each_field() {
        let keys = &ZOBRIST;
        let base = parse("8/8/8/8/8/8/8/8 w - - 0 1").unwrap().hash();
        assert_eq!(base, 0);

        let black = parse("8/8/8/8/8/8/8/8 b - - 0 1").unwrap().hash();
        assert_eq!(black, keys.black_to_move_key());

        let castle = parse("8/8/8/8/8/8/8/8 w Kq - 0 1").unwrap().hash();
        assert_eq!(
            castle,
            keys.castling_key(CastlingRight::WhiteKingside)
                ^ keys.castling_key(CastlingRight::BlackQueenside)
        );

        let ep = parse("8/8/8/8/8/8/8/8 w - c6 0 1").unwrap().hash();
        assert_eq!(ep, keys.en_passant_key(File::C));

        let clocks = parse("8/8/8/8/8/8/8/8 w - - 50 99").unwrap().hash();
        assert_eq!(clocks, 0);

        let piece = parse("8/8/8/8/8/8/8/3N4 w - - 0 1").unwrap().hash();
        assert_eq!(
            piece,
            keys.piece_key(Piece::Knight, Color::White, Square::new(File::D, Rank::R1))
        );
    }

    #[test]
    fn incremental_hash_matches_full_recompute() {
        for fen in [
            STARTPOS,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            "8/2k5/8/8/8/8/5K2/8 b - - 50 99",
        ] {
            let pos = parse(fen).unwrap();
            assert_eq!(pos.hash(), ZOBRIST.hash_of(&pos), "{fen}");
        }
    }

    #[test]
    fn custom_keys_change_hash() {
        let keys = ZobristKeys::with_seed(42);
        let codec = FenCodec::with_keys(&keys);
        let pos = codec.parse(STARTPOS).unwrap();
        assert_eq!(pos.hash(), keys.hash_of(&pos));
        assert_ne!(pos.hash(), parse(STARTPOS).unwrap().hash());
        assert_eq!(codec.to_fen(&pos), STARTPOS);
    }

    #[test]
    fn write_reconstructs_en_passant_rank() {
        let pos = parse("8/8/8/8/8/8/8/8 w - e3 0 1").unwrap();
        assert_eq!(pos.to_fen(), "8/8/8/8/8/8/8/8 w - e6 0 1");
        let pos = parse("8/8/8/8/8/8/8/8 b - e6 0 1").unwrap();
        assert_eq!(pos.to_fen(), "8/8/8/8/8/8/8/8 b - e3 0 1");
    }

    #[test]
    fn write_normalizes_noncanonical_input() {
        let pos = parse("8/8/8/8/8/8/8/8 w qkQK - 07 010").unwrap();
        assert_eq!(pos.to_fen(), "8/8/8/8/8/8/8/8 w KQkq - 7 10");

        let pos = parse("11111111/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(pos.to_fen(), "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn write_to_sink() {
        let pos = parse(STARTPOS).unwrap();
        let mut out = String::from("fen: ");
        FenCodec::new().write(&pos, &mut out).unwrap();
        assert_eq!(out, format!("fen: {}", STARTPOS));
    }
}
