//! Facelet level representation of the cube.
//!
//! Facelets are numbered face by face in the order U, R, F, D, L, B. Within a
//! face the nine stickers run row by row, so `U1` is index 0, `U9` is index 8,
//! `R1` is index 9 and `B9` is index 53.

use std::fmt::{self, Display};
use std::str::FromStr;

use cube_core::errors::{CubeError, ErrorInfo};

use crate::color::Color;
use crate::cubie::{Corner, CubieCube, Edge};

/// Number of facelets on the cube surface.
pub const FACELET_COUNT: usize = 54;

/// Surface encoding of the solved cube.
pub const SOLVED_FACELETS: &str =
    "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Facelet positions of each corner slot, starting with the U or D sticker and
/// continuing clockwise.
pub(crate) const CORNER_FACELET: [[usize; 3]; 8] = [
    [8, 9, 20],   // U9 R1 F3
    [6, 18, 38],  // U7 F1 L3
    [0, 36, 47],  // U1 L1 B3
    [2, 45, 11],  // U3 B1 R3
    [29, 26, 15], // D3 F9 R7
    [27, 44, 24], // D1 L9 F7
    [33, 53, 42], // D7 B9 L7
    [35, 17, 51], // D9 R9 B7
];

/// Facelet positions of each edge slot.
pub(crate) const EDGE_FACELET: [[usize; 2]; 12] = [
    [5, 10],  // U6 R2
    [7, 19],  // U8 F2
    [3, 37],  // U4 L2
    [1, 46],  // U2 B2
    [32, 16], // D6 R8
    [28, 25], // D2 F8
    [30, 43], // D4 L8
    [34, 52], // D8 B8
    [23, 12], // F6 R4
    [21, 41], // F4 L6
    [50, 39], // B6 L4
    [48, 14], // B4 R6
];

/// Colours of each corner cubie in the same order as [`CORNER_FACELET`].
pub(crate) const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// Colours of each edge cubie in the same order as [`EDGE_FACELET`].
pub(crate) const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

/// Cube described by the colour of each of its 54 facelets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceCube {
    facelets: [Color; FACELET_COUNT],
}

impl FaceCube {
    /// Returns the solved cube.
    pub fn solved() -> Self {
        let mut facelets = [Color::U; FACELET_COUNT];
        for (idx, facelet) in facelets.iter_mut().enumerate() {
            *facelet = Color::ALL[idx / 9];
        }
        Self { facelets }
    }

    /// Builds a cube from explicit facelet colours.
    pub fn from_colors(facelets: [Color; FACELET_COUNT]) -> Self {
        Self { facelets }
    }

    /// Parses a surface encoding, reporting the first offending position.
    pub fn parse(encoding: &str) -> Result<Self, CubeError> {
        let length = encoding.chars().count();
        if length != FACELET_COUNT {
            return Err(CubeError::Facelet(
                ErrorInfo::new(
                    "facelet-length",
                    format!("expected {FACELET_COUNT} facelets, found {length}"),
                )
                .with_context("length", length.to_string()),
            ));
        }
        let mut facelets = [Color::U; FACELET_COUNT];
        for (position, symbol) in encoding.chars().enumerate() {
            facelets[position] = Color::from_symbol(symbol).ok_or_else(|| {
                CubeError::Facelet(
                    ErrorInfo::new("facelet-symbol", format!("unknown facelet symbol {symbol:?}"))
                        .with_context("position", position.to_string())
                        .with_context("symbol", symbol.to_string())
                        .with_hint("use one of U, R, F, D, L, B"),
                )
            })?;
        }
        Ok(Self { facelets })
    }

    /// Colours of all facelets.
    pub fn colors(&self) -> &[Color; FACELET_COUNT] {
        &self.facelets
    }

    /// Number of facelets carrying each colour, in face order.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for color in self.facelets {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Converts the facelet view into cubie level permutations and orientations.
    ///
    /// Slots whose stickers do not match any cubie keep the default `URF`/`UR`
    /// cubie, so an inconsistent surface shows up as a duplicated cubie when
    /// the result is checked with [`CubieCube::verify`].
    pub fn to_cubie_cube(&self) -> CubieCube {
        let mut cube = CubieCube {
            cp: [Corner::Urf; 8],
            co: [0; 8],
            ep: [Edge::Ur; 12],
            eo: [0; 12],
        };

        for (slot, positions) in CORNER_FACELET.iter().enumerate() {
            // Orientation is the index of the U or D sticker.
            let ori = (0..3)
                .find(|&n| matches!(self.facelets[positions[n]], Color::U | Color::D))
                .unwrap_or(3);
            let col1 = self.facelets[positions[(ori + 1) % 3]];
            let col2 = self.facelets[positions[(ori + 2) % 3]];
            if let Some(corner) = CORNER_COLOR
                .iter()
                .position(|colors| colors[1] == col1 && colors[2] == col2)
            {
                cube.cp[slot] = Corner::ALL[corner];
                cube.co[slot] = (ori % 3) as u8;
            }
        }

        for (slot, positions) in EDGE_FACELET.iter().enumerate() {
            let first = self.facelets[positions[0]];
            let second = self.facelets[positions[1]];
            for (edge, colors) in EDGE_COLOR.iter().enumerate() {
                if first == colors[0] && second == colors[1] {
                    cube.ep[slot] = Edge::ALL[edge];
                    cube.eo[slot] = 0;
                    break;
                }
                if first == colors[1] && second == colors[0] {
                    cube.ep[slot] = Edge::ALL[edge];
                    cube.eo[slot] = 1;
                    break;
                }
            }
        }

        cube
    }
}

impl Default for FaceCube {
    fn default() -> Self {
        Self::solved()
    }
}

impl FromStr for FaceCube {
    type Err = CubeError;

    fn from_str(encoding: &str) -> Result<Self, Self::Err> {
        Self::parse(encoding)
    }
}

impl Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.facelets {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}
