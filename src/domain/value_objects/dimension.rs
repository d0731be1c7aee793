//! Personality dimensions - The four binary axes a quiz measures
//!
//! Every scene is tagged with exactly one dimension, and each of its two
//! options carries one of the dimension's two letters. Axis order is fixed
//! so the final 4-letter code always assembles the same way.

/// One of the eight personality letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    pub fn as_char(&self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A binary personality axis with a left and a right letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// E / I - where attention and energy flow
    Energy,
    /// S / N - what counts as trustworthy input
    Information,
    /// T / F - how calls get weighed
    Decision,
    /// J / P - how plans and pace are held
    Rhythm,
}

/// Fixed axis order used to assemble the 4-letter type string
pub const AXIS_ORDER: [Dimension; 4] = [
    Dimension::Energy,
    Dimension::Information,
    Dimension::Decision,
    Dimension::Rhythm,
];

impl Dimension {
    pub fn left(&self) -> Letter {
        match self {
            Self::Energy => Letter::E,
            Self::Information => Letter::S,
            Self::Decision => Letter::T,
            Self::Rhythm => Letter::J,
        }
    }

    pub fn right(&self) -> Letter {
        match self {
            Self::Energy => Letter::I,
            Self::Information => Letter::N,
            Self::Decision => Letter::F,
            Self::Rhythm => Letter::P,
        }
    }

    /// The axis's letter pair as (left, right)
    pub fn letters(&self) -> (Letter, Letter) {
        (self.left(), self.right())
    }

    /// Whether the letter belongs to this axis
    pub fn contains(&self, letter: Letter) -> bool {
        letter == self.left() || letter == self.right()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Information => "Information",
            Self::Decision => "Decision",
            Self::Rhythm => "Rhythm",
        }
    }

    /// Short label for tally rows, e.g. `E / I`
    pub fn axis_label(&self) -> String {
        format!("{} / {}", self.left(), self.right())
    }
}
