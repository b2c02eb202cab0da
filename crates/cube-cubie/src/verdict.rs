use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Outcome of checking whether a surface encoding describes a solvable cube.
///
/// Each variant maps onto a fixed integer code; see [`Verdict::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The cube is solvable (0).
    Solvable,
    /// Not exactly nine facelets of each colour, or an unknown symbol (-1).
    BadFaceletCount,
    /// Not all 12 edges exist exactly once (-2).
    MissingEdge,
    /// One edge has to be flipped (-3).
    FlipError,
    /// Not all 8 corners exist exactly once (-4).
    MissingCorner,
    /// One corner has to be twisted (-5).
    TwistError,
    /// Two corners or two edges have to be exchanged (-6).
    ParityError,
}

impl Verdict {
    /// Every verdict, ordered by descending code.
    pub const ALL: [Verdict; 7] = [
        Verdict::Solvable,
        Verdict::BadFaceletCount,
        Verdict::MissingEdge,
        Verdict::FlipError,
        Verdict::MissingCorner,
        Verdict::TwistError,
        Verdict::ParityError,
    ];

    /// Integer code of the verdict.
    pub fn code(self) -> i32 {
        match self {
            Verdict::Solvable => 0,
            Verdict::BadFaceletCount => -1,
            Verdict::MissingEdge => -2,
            Verdict::FlipError => -3,
            Verdict::MissingCorner => -4,
            Verdict::TwistError => -5,
            Verdict::ParityError => -6,
        }
    }

    /// Maps an integer code back onto its verdict.
    pub fn from_code(code: i32) -> Option<Verdict> {
        Verdict::ALL.into_iter().find(|verdict| verdict.code() == code)
    }

    /// Returns true when the cube is solvable.
    pub fn is_solvable(self) -> bool {
        self == Verdict::Solvable
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Solvable => "cube is solvable",
            Verdict::BadFaceletCount => "there is not exactly one facelet of each colour",
            Verdict::MissingEdge => "not all 12 edges exist exactly once",
            Verdict::FlipError => "flip error: one edge has to be flipped",
            Verdict::MissingCorner => "not all 8 corners exist exactly once",
            Verdict::TwistError => "twist error: one corner has to be twisted",
            Verdict::ParityError => "parity error: two corners or two edges have to be exchanged",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for verdict in Verdict::ALL {
            assert_eq!(Verdict::from_code(verdict.code()), Some(verdict));
        }
        assert_eq!(Verdict::from_code(1), None);
        assert_eq!(Verdict::from_code(-7), None);
    }

    #[test]
    fn only_solvable_is_solvable() {
        let solvable: Vec<_> = Verdict::ALL.into_iter().filter(|v| v.is_solvable()).collect();
        assert_eq!(solvable, vec![Verdict::Solvable]);
    }
}
