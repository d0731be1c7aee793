//! Type profile entity - Descriptive text for a 4-letter personality code

/// Display texts attached to one personality type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeProfile {
    /// Evocative name, e.g. "Grid Strategist"
    pub name: String,
    /// Long-form portrait of the type
    pub description: String,
    /// Advice for working alongside this type
    pub cooperation: String,
}

impl TypeProfile {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cooperation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cooperation: cooperation.into(),
        }
    }
}
