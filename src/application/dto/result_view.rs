//! Result view DTOs - The final profile card

use serde::{Deserialize, Serialize};

use crate::application::dto::{ScenarioSummary, TallyView};
use crate::domain::entities::TypeProfile;

/// Descriptive texts for the decided type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileView {
    pub name: String,
    pub description: String,
    pub cooperation: String,
}

impl ProfileView {
    pub fn from_profile(profile: &TypeProfile) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            cooperation: profile.cooperation.clone(),
        }
    }
}

/// Everything the result screen needs
///
/// Built only once every slot is filled and the reveal transition has been
/// applied; recomputing from the same run yields an identical view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultView {
    /// 4-letter code in fixed axis order
    pub type_code: String,
    pub letters: Vec<char>,
    pub profile: ProfileView,
    pub scenario: ScenarioSummary,
    /// Final per-axis tallies in fixed axis order
    pub tallies: Vec<TallyView>,
    /// Answered scenes behind the tallies; equals the story's scene count
    pub answered: usize,
}
