//! Castling rights.

/// One of the four independent castling rights.
///
/// The discriminant is the canonical FEN order `K`, `Q`, `k`, `q` and doubles
/// as the index of the right's Zobrist key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastlingRight {
    WhiteKingside = 0,
    WhiteQueenside = 1,
    BlackKingside = 2,
    BlackQueenside = 3,
}

impl CastlingRight {
    /// All rights in canonical FEN order.
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingside,
        CastlingRight::WhiteQueenside,
        CastlingRight::BlackKingside,
        CastlingRight::BlackQueenside,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the FEN letter for this right.
    pub const fn to_fen_char(self) -> char {
        match self {
            CastlingRight::WhiteKingside => 'K',
            CastlingRight::WhiteQueenside => 'Q',
            CastlingRight::BlackKingside => 'k',
            CastlingRight::BlackQueenside => 'q',
        }
    }

    /// Parses a FEN castling letter.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(CastlingRight::WhiteKingside),
            'Q' => Some(CastlingRight::WhiteQueenside),
            'k' => Some(CastlingRight::BlackKingside),
            'q' => Some(CastlingRight::BlackQueenside),
            _ => None,
        }
    }
}

/// Castling rights for both sides, held as four independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    /// Returns true if the given right is held.
    #[inline]
    pub const fn has(self, right: CastlingRight) -> bool {
        match right {
            CastlingRight::WhiteKingside => self.white_kingside,
            CastlingRight::WhiteQueenside => self.white_queenside,
            CastlingRight::BlackKingside => self.black_kingside,
            CastlingRight::BlackQueenside => self.black_queenside,
        }
    }

    /// Grants a right. Returns false if it was already held.
    #[inline]
    pub fn grant(&mut self, right: CastlingRight) -> bool {
        let flag = match right {
            CastlingRight::WhiteKingside => &mut self.white_kingside,
            CastlingRight::WhiteQueenside => &mut self.white_queenside,
            CastlingRight::BlackKingside => &mut self.black_kingside,
            CastlingRight::BlackQueenside => &mut self.black_queenside,
        };
        !std::mem::replace(flag, true)
    }

    /// Returns true if no right is held.
    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.white_kingside || self.white_queenside || self.black_kingside || self.black_queenside)
    }

    /// Iterates over the held rights in canonical FEN order.
    pub fn iter(self) -> impl Iterator<Item = CastlingRight> {
        CastlingRight::ALL
            .into_iter()
            .filter(move |&right| self.has(right))
    }
}

impl std::fmt::Display for CastlingRights {
    /// Formats the rights as the FEN castling field (`-` when empty).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for right in self.iter() {
            write!(f, "{}", right.to_fen_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castling_rights_none() {
        let rights = CastlingRights::NONE;
        assert!(rights.is_empty());
        for right in CastlingRight::ALL {
            assert!(!rights.has(right));
        }
        assert_eq!(rights.to_string(), "-");
    }

    #[test]
    fn castling_rights_all() {
        let rights = CastlingRights::ALL;
        assert!(!rights.is_empty());
        assert_eq!(rights.iter().count(), 4);
        assert_eq!(rights.to_string(), "KQkq");
    }

    #[test]
    fn grant_reports_duplicates() {
        let mut rights = CastlingRights::NONE;
        assert!(rights.grant(CastlingRight::BlackQueenside));
        assert!(!rights.grant(CastlingRight::BlackQueenside));
        assert!(rights.black_queenside);
        assert!(!rights.white_kingside);
    }

    #[test]
    fn display_uses_canonical_order() {
        let mut rights = CastlingRights::NONE;
        rights.grant(CastlingRight::BlackQueenside);
        rights.grant(CastlingRight::WhiteKingside);
        assert_eq!(rights.to_string(), "Kq");
    }

    #[test]
    fn fen_char_roundtrip() {
        for right in CastlingRight::ALL {
            assert_eq!(CastlingRight::from_fen_char(right.to_fen_char()), Some(right));
        }
        assert_eq!(CastlingRight::from_fen_char('-'), None);
        assert_eq!(CastlingRight::from_fen_char('x'), None);
    }
}
