//! Scene entity - A single decision point within a scenario
//!
//! A scene presents a short piece of narrative and exactly two options.
//! Each option carries one letter of the scene's dimension, so answering
//! a scene always scores one side of one axis.

use crate::domain::value_objects::{Dimension, Letter};

/// A scene - one binary decision inside a scenario's story
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// 1-based position within the scenario, for display
    pub ordinal: u32,
    pub title: String,
    /// Narrative framing shown above the prompt
    pub narrative: String,
    /// The question the two options answer
    pub prompt: String,
    /// The axis this scene scores
    pub dimension: Dimension,
    /// Exactly two options, keyed A and B
    pub options: [SceneOption; 2],
}

impl Scene {
    pub fn new(
        ordinal: u32,
        title: impl Into<String>,
        dimension: Dimension,
        first: SceneOption,
        second: SceneOption,
    ) -> Self {
        Self {
            ordinal,
            title: title.into(),
            narrative: String::new(),
            prompt: String::new(),
            dimension,
            options: [first, second],
        }
    }

    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = narrative.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Get the option carrying the given key
    pub fn option(&self, key: OptionKey) -> &SceneOption {
        match key {
            OptionKey::A => &self.options[0],
            OptionKey::B => &self.options[1],
        }
    }

    /// Whether the two options carry exactly the two letters of this
    /// scene's dimension (one each)
    pub fn options_cover_dimension(&self) -> bool {
        let (a, b) = (self.options[0].letter, self.options[1].letter);
        a != b && self.dimension.contains(a) && self.dimension.contains(b)
    }
}

/// One of a scene's two answer options
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOption {
    pub key: OptionKey,
    pub title: String,
    /// Short flavor line shown under the title
    pub hint: String,
    /// The personality letter this option scores
    pub letter: Letter,
}

impl SceneOption {
    pub fn new(key: OptionKey, title: impl Into<String>, letter: Letter) -> Self {
        Self {
            key,
            title: title.into(),
            hint: String::new(),
            letter,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// Stable key identifying one of a scene's two options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    A,
    B,
}

impl OptionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
