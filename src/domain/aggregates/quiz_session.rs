//! Quiz Session Aggregate - The root aggregate for one interactive sitting
//!
//! A session owns at most one active story run at a time. All state changes
//! (starting a story, picking options, navigating, restarting) go through
//! this aggregate so the transition guards stay in one place.
//!
//! Guarded transitions never fail loudly: an attempt that violates its guard
//! is refused and reported as `false`, leaving the session untouched.

use chrono::{DateTime, Utc};

use crate::domain::entities::{OptionKey, Scenario, Scene};
use crate::domain::value_objects::{ScenarioId, SessionId};

/// One scene paired with the option picked for it, if any
///
/// The slot sequence replaces parallel scene/choice arrays: a pick is stored
/// next to its scene, so the two can never drift out of alignment, and a
/// pick can only name one of its own scene's options.
#[derive(Debug, Clone)]
pub struct SceneSlot {
    pub scene: Scene,
    pub picked: Option<OptionKey>,
}

impl SceneSlot {
    pub fn empty(scene: Scene) -> Self {
        Self { scene, picked: None }
    }

    pub fn is_answered(&self) -> bool {
        self.picked.is_some()
    }
}

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No story active; the player is looking at the scenario list
    SelectingScenario,
    /// Walking the scenes of the active story
    Playing { scene_index: usize },
    /// All scenes answered and the final profile revealed
    ShowingResult,
}

/// The Quiz Session Aggregate Root
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: SessionId,
    run: Option<StoryRun>,
}

/// The state of one play-through of a scenario
#[derive(Debug, Clone)]
pub struct StoryRun {
    scenario_id: ScenarioId,
    scenario_title: String,
    slots: Vec<SceneSlot>,
    /// Index of the scene currently on screen
    cursor: usize,
    /// Set once the player advances past the last answered scene
    revealed: bool,
    started_at: DateTime<Utc>,
}

impl StoryRun {
    fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            scenario_id: scenario.id.clone(),
            scenario_title: scenario.title.clone(),
            slots: scenario.scenes.iter().cloned().map(SceneSlot::empty).collect(),
            cursor: 0,
            revealed: false,
            started_at: Utc::now(),
        }
    }

    pub fn scenario_id(&self) -> &ScenarioId {
        &self.scenario_id
    }

    pub fn scenario_title(&self) -> &str {
        &self.scenario_title
    }

    pub fn slots(&self) -> &[SceneSlot] {
        &self.slots
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_slot(&self) -> &SceneSlot {
        &self.slots[self.cursor]
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl QuizSession {
    /// Create a fresh session with no active story
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            run: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the session ID
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Get the active run, if a story has been started
    pub fn run(&self) -> Option<&StoryRun> {
        self.run.as_ref()
    }

    /// Derive the current phase from the run state
    pub fn phase(&self) -> SessionPhase {
        match &self.run {
            None => SessionPhase::SelectingScenario,
            Some(run) if run.revealed => SessionPhase::ShowingResult,
            Some(run) => SessionPhase::Playing {
                scene_index: run.cursor(),
            },
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Start a story run for the given scenario
    ///
    /// Guard: only from `SelectingScenario`. Allocates an all-empty slot
    /// sequence sized to the scenario.
    pub fn begin(&mut self, scenario: &Scenario) -> bool {
        if self.run.is_some() {
            return false;
        }
        self.run = Some(StoryRun::from_scenario(scenario));
        true
    }

    /// Record a pick for the scene currently on screen
    ///
    /// Guard: only while `Playing`. Re-picking overwrites the slot; the
    /// last write wins.
    pub fn choose(&mut self, key: OptionKey) -> bool {
        match &mut self.run {
            Some(run) if !run.revealed => {
                run.slots[run.cursor].picked = Some(key);
                true
            }
            _ => false,
        }
    }

    /// Move forward one scene, or reveal the result from the last scene
    ///
    /// Guard: only while `Playing`, and only once the current slot holds a
    /// pick.
    pub fn advance(&mut self) -> bool {
        match &mut self.run {
            Some(run) if !run.revealed => {
                if !run.slots[run.cursor].is_answered() {
                    return false;
                }
                if run.cursor + 1 == run.slots.len() {
                    run.revealed = true;
                } else {
                    run.cursor += 1;
                }
                true
            }
            _ => false,
        }
    }

    /// Move back one scene, clearing the slot being returned to
    ///
    /// Guard: only while `Playing` with the cursor past the first scene.
    /// The cleared slot forces a fresh pick before advancing again.
    pub fn step_back(&mut self) -> bool {
        match &mut self.run {
            Some(run) if !run.revealed && run.cursor > 0 => {
                run.slots[run.cursor - 1].picked = None;
                run.cursor -= 1;
                true
            }
            _ => false,
        }
    }

    /// Discard the active run and return to scenario selection
    ///
    /// Guard: refused when no story is active. The session id survives; the
    /// run does not.
    pub fn restart(&mut self) -> bool {
        if self.run.is_none() {
            return false;
        }
        self.run = None;
        true
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SceneOption;
    use crate::domain::value_objects::AXIS_ORDER;

    fn four_scene_scenario() -> Scenario {
        let scenes = AXIS_ORDER
            .iter()
            .enumerate()
            .map(|(index, dimension)| {
                Scene::new(
                    index as u32 + 1,
                    format!("Scene {}", index + 1),
                    *dimension,
                    SceneOption::new(OptionKey::A, "left", dimension.left()),
                    SceneOption::new(OptionKey::B, "right", dimension.right()),
                )
            })
            .collect();
        Scenario::new(ScenarioId::new("mini-story"), "Mini Story", scenes)
    }

    fn playing_session() -> QuizSession {
        let mut session = QuizSession::new();
        assert!(session.begin(&four_scene_scenario()));
        session
    }

    #[test]
    fn test_begin_allocates_empty_slots() {
        let session = playing_session();
        let run = session.run().unwrap();
        assert_eq!(session.phase(), SessionPhase::Playing { scene_index: 0 });
        assert_eq!(run.slots().len(), 4);
        assert!(run.slots().iter().all(|slot| !slot.is_answered()));
        assert_eq!(run.scenario_id().as_str(), "mini-story");
    }

    #[test]
    fn test_begin_refused_while_run_active() {
        let mut session = playing_session();
        assert!(!session.begin(&four_scene_scenario()));
    }

    #[test]
    fn test_choose_requires_active_run() {
        let mut session = QuizSession::new();
        assert!(!session.choose(OptionKey::A));
        assert_eq!(session.phase(), SessionPhase::SelectingScenario);
    }

    #[test]
    fn test_repick_overwrites_slot() {
        let mut session = playing_session();
        assert!(session.choose(OptionKey::A));
        assert!(session.choose(OptionKey::B));
        assert_eq!(session.run().unwrap().current_slot().picked, Some(OptionKey::B));
    }

    #[test]
    fn test_advance_blocked_until_slot_filled() {
        let mut session = playing_session();
        assert!(!session.advance());
        assert!(session.choose(OptionKey::A));
        assert!(session.advance());
        assert_eq!(session.phase(), SessionPhase::Playing { scene_index: 1 });
    }

    #[test]
    fn test_advancing_past_last_scene_reveals_result() {
        let mut session = playing_session();
        for _ in 0..4 {
            assert!(session.choose(OptionKey::A));
            assert!(session.advance());
        }
        assert_eq!(session.phase(), SessionPhase::ShowingResult);
        // The revealed run is frozen
        assert!(!session.choose(OptionKey::B));
        assert!(!session.advance());
        assert!(!session.step_back());
    }

    #[test]
    fn test_step_back_clears_previous_slot() {
        let mut session = playing_session();
        session.choose(OptionKey::A);
        session.advance();
        session.choose(OptionKey::B);

        assert!(session.step_back());
        {
            let run = session.run().unwrap();
            assert_eq!(run.cursor(), 0);
            assert!(!run.slots()[0].is_answered());
            // The slot that was left keeps its pick
            assert_eq!(run.slots()[1].picked, Some(OptionKey::B));
        }
        // Forward motion stays blocked until the cleared slot is re-picked
        assert!(!session.advance());
    }

    #[test]
    fn test_step_back_refused_on_first_scene() {
        let mut session = playing_session();
        assert!(!session.step_back());
    }

    #[test]
    fn test_restart_discards_run_but_keeps_identity() {
        let mut session = playing_session();
        let id = *session.id();
        session.choose(OptionKey::A);

        assert!(session.restart());
        assert_eq!(session.phase(), SessionPhase::SelectingScenario);
        assert!(session.run().is_none());
        assert_eq!(*session.id(), id);
    }

    #[test]
    fn test_restart_refused_with_no_run() {
        let mut session = QuizSession::new();
        assert!(!session.restart());
    }
}
