//! Session view DTOs - Read-only projection of the session for rendering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{SceneSlot, SessionPhase};
use crate::domain::entities::Scenario;
use crate::domain::services::AxisTally;

/// One scenario as listed on the selection screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub id: String,
    pub title: String,
    pub tagline: String,
    /// Longer framing paragraph, shown once when the story starts
    pub description: String,
    pub scene_count: usize,
}

impl ScenarioSummary {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id.to_string(),
            title: scenario.title.clone(),
            tagline: scenario.tagline.clone(),
            description: scenario.description.clone(),
            scene_count: scenario.scene_count(),
        }
    }
}

/// One of the current scene's two options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionView {
    pub key: String,
    pub title: String,
    pub hint: String,
    pub letter: char,
}

/// The scene currently on screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneView {
    /// 1-based position within the story
    pub ordinal: u32,
    pub title: String,
    pub narrative: String,
    pub prompt: String,
    /// Axis label, e.g. `E / I`
    pub axis: String,
    pub options: Vec<OptionView>,
    /// Key of the currently picked option, if the slot is filled
    pub picked: Option<String>,
}

impl SceneView {
    pub fn from_slot(slot: &SceneSlot) -> Self {
        let scene = &slot.scene;
        Self {
            ordinal: scene.ordinal,
            title: scene.title.clone(),
            narrative: scene.narrative.clone(),
            prompt: scene.prompt.clone(),
            axis: scene.dimension.axis_label(),
            options: scene
                .options
                .iter()
                .map(|option| OptionView {
                    key: option.key.to_string(),
                    title: option.title.clone(),
                    hint: option.hint.clone(),
                    letter: option.letter.as_char(),
                })
                .collect(),
            picked: slot.picked.map(|key| key.to_string()),
        }
    }
}

/// Running stats for one axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyView {
    /// Axis label, e.g. `E / I`
    pub axis: String,
    pub dimension: String,
    pub left_letter: char,
    pub right_letter: char,
    pub left_count: u32,
    pub right_count: u32,
    /// Share of this axis's answers that went to the left letter
    pub percent: f64,
    pub dominant: Option<char>,
}

impl TallyView {
    pub fn from_tally(tally: &AxisTally) -> Self {
        let (left, right) = tally.dimension.letters();
        Self {
            axis: tally.dimension.axis_label(),
            dimension: tally.dimension.display_name().to_string(),
            left_letter: left.as_char(),
            right_letter: right.as_char(),
            left_count: tally.left_count,
            right_count: tally.right_count,
            percent: tally.percent,
            dominant: tally.dominant.map(|letter| letter.as_char()),
        }
    }
}

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseView {
    SelectingScenario,
    Playing,
    ShowingResult,
}

impl From<SessionPhase> for PhaseView {
    fn from(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::SelectingScenario => Self::SelectingScenario,
            SessionPhase::Playing { .. } => Self::Playing,
            SessionPhase::ShowingResult => Self::ShowingResult,
        }
    }
}

/// Snapshot of the whole session, rebuilt after every action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: String,
    pub phase: PhaseView,
    /// Active story, absent while selecting
    pub scenario: Option<ScenarioSummary>,
    /// Scene on screen, present only while playing
    pub scene: Option<SceneView>,
    /// Answered slots so far
    pub answered: usize,
    /// Total scenes in the active story, 0 while selecting
    pub total_scenes: usize,
    pub started_at: Option<DateTime<Utc>>,
    /// Per-axis tallies in fixed axis order, empty while selecting
    pub tallies: Vec<TallyView>,
}
