use serde::{Deserialize, Serialize};

/// Face colours, named after the face whose centre carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Up face.
    U,
    /// Right face.
    R,
    /// Front face.
    F,
    /// Down face.
    D,
    /// Left face.
    L,
    /// Back face.
    B,
}

const SYMBOLS: [(char, Color); 6] = [
    ('U', Color::U),
    ('R', Color::R),
    ('F', Color::F),
    ('D', Color::D),
    ('L', Color::L),
    ('B', Color::B),
];

impl Color {
    /// All colours in face order.
    pub const ALL: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];

    /// Looks up the colour for a surface encoding symbol.
    pub fn from_symbol(symbol: char) -> Option<Color> {
        SYMBOLS
            .iter()
            .find(|(candidate, _)| *candidate == symbol)
            .map(|(_, color)| *color)
    }

    /// Symbol used for this colour in surface encodings.
    pub fn symbol(self) -> char {
        SYMBOLS[self.index()].0
    }

    /// Position of the colour in face order.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_symbol(color.symbol()), Some(color));
        }
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        for symbol in ['u', 'X', ' ', '0', 'É'] {
            assert_eq!(Color::from_symbol(symbol), None);
        }
    }
}
