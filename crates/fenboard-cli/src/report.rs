//! Text and JSON reports for parsed positions.

use fenboard::{Color, Position};
use serde::Serialize;

use crate::config::Config;

/// JSON representation of a parsed position.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PositionReport {
    /// Canonical FEN.
    pub fen: String,
    /// Zobrist hash as 16 hex digits.
    pub hash: String,
    /// "white" or "black".
    pub side_to_move: &'static str,
    /// Castling field as written in FEN ("-" when none).
    pub castling: String,
    /// En passant target square, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en_passant: Option<String>,
    pub halfmove_clock: u8,
    pub fullmove_counter: u8,
}

impl PositionReport {
    pub fn new(position: &Position) -> Self {
        PositionReport {
            fen: position.to_fen(),
            hash: format_hash(position.hash()),
            side_to_move: match position.side_to_move() {
                Color::White => "white",
                Color::Black => "black",
            },
            castling: position.castling().to_string(),
            en_passant: position.en_passant_square().map(|sq| sq.to_string()),
            halfmove_clock: position.halfmove_clock(),
            fullmove_counter: position.fullmove_counter(),
        }
    }
}

pub fn format_hash(hash: u64) -> String {
    format!("{:016x}", hash)
}

/// Renders a position according to the output settings.
pub fn render(position: &Position, config: &Config) -> Result<String, serde_json::Error> {
    if config.json {
        return serde_json::to_string(&PositionReport::new(position));
    }

    let mut out = String::new();
    if config.show_board {
        out.push_str(&position.display().to_string());
        out.push('\n');
    }
    out.push_str(&format!("fen:  {}", position));
    if config.show_hash {
        out.push_str(&format!("\nhash: {}", format_hash(position.hash())));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenboard::STARTPOS;

    #[test]
    fn report_fields() {
        let pos =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b Kq e3 3 7")
                .unwrap();
        let report = PositionReport::new(&pos);
        assert_eq!(report.side_to_move, "black");
        assert_eq!(report.castling, "Kq");
        assert_eq!(report.en_passant.as_deref(), Some("e3"));
        assert_eq!(report.halfmove_clock, 3);
        assert_eq!(report.fullmove_counter, 7);
        assert_eq!(report.hash.len(), 16);
    }

    #[test]
    fn json_output() {
        let config = Config {
            json: true,
            ..Config::default()
        };
        let out = render(&Position::startpos(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["fen"], STARTPOS);
        assert_eq!(value["side_to_move"], "white");
        assert_eq!(value["castling"], "KQkq");
        assert!(value.get("en_passant").is_none());
    }

    #[test]
    fn text_output_respects_flags() {
        let config = Config {
            show_board: false,
            show_hash: false,
            ..Config::default()
        };
        let out = render(&Position::startpos(), &config).unwrap();
        assert_eq!(out, format!("fen:  {}", STARTPOS));

        let out = render(&Position::startpos(), &Config::default()).unwrap();
        assert!(out.contains("a b c d e f g h"));
        assert!(out.contains("hash: "));
    }

    #[test]
    fn hash_is_zero_padded() {
        assert_eq!(format_hash(0xab), "00000000000000ab");
    }
}
