//! ASCII board diagrams.

use std::fmt;

use fenboard_core::{File, Rank, Square};

use crate::Position;

/// A read-only board diagram of a [`Position`].
///
/// Rank 8 is printed at the top and rank 1 at the bottom, with file letters
/// underneath. White pieces are uppercase, Black lowercase, empty squares
/// blank.
///
/// ```
/// use fenboard::Position;
///
/// let diagram = Position::startpos().display().to_string();
/// assert!(diagram.starts_with("  +-----------------+\n8 | r n b q k b n r |"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardDisplay<'a> {
    position: &'a Position,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(position: &'a Position) -> Self {
        BoardDisplay { position }
    }
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BORDER: &str = "  +-----------------+";

        writeln!(f, "{BORDER}")?;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{} |", rank)?;
            for file in File::ALL {
                let c = match self.position.piece_at(Square::new(file, rank)) {
                    Some((piece, color)) => piece.to_fen_char(color),
                    None => ' ',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "{BORDER}")?;
        write!(f, "    a b c d e f g h")
    }
}
