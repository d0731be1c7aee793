//! Quiz Service - Application service driving one interactive sitting
//!
//! The service owns the session aggregate and the event journal, applies
//! the five user actions, and projects read-only views for whatever front
//! end is attached. Actions report whether they were applied; a refused
//! action changes nothing and is logged at debug level only.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::dto::{
    ProfileView, ResultView, ScenarioSummary, SceneView, SessionView, TallyView,
};
use crate::application::ports::outbound::ContentCatalogPort;
use crate::domain::aggregates::{QuizSession, SessionPhase, StoryRun};
use crate::domain::entities::OptionKey;
use crate::domain::events::{EventMetadata, SessionEvent};
use crate::domain::services::{personality_outcome, tally_dimensions};
use crate::domain::value_objects::ScenarioId;

/// Quiz service trait defining the application use cases
pub trait QuizService {
    /// Start a story run for the given scenario id
    fn select_scenario(&mut self, id: &ScenarioId) -> bool;

    /// Pick (or re-pick) an option for the scene on screen
    fn pick_option(&mut self, key: OptionKey) -> bool;

    /// Move forward one scene, revealing the result from the last one
    fn advance(&mut self) -> bool;

    /// Move back one scene, clearing the slot being returned to
    fn step_back(&mut self) -> bool;

    /// Discard the active run and return to scenario selection
    fn restart(&mut self) -> bool;

    /// Project the current session state for rendering
    fn snapshot(&self) -> SessionView;

    /// Build the result card, available only once the result is revealed
    fn result(&self) -> Option<ResultView>;

    /// List the scenarios offered on the selection screen
    fn scenario_choices(&self) -> Vec<ScenarioSummary>;

    /// The journal of applied transitions for this sitting
    fn events(&self) -> &[SessionEvent];
}

/// Default implementation of QuizService over a content catalog
pub struct QuizServiceImpl {
    catalog: Arc<dyn ContentCatalogPort>,
    session: QuizSession,
    journal: Vec<SessionEvent>,
}

impl QuizServiceImpl {
    /// Create a service with a fresh session over the given catalog
    pub fn new(catalog: Arc<dyn ContentCatalogPort>) -> Self {
        Self {
            catalog,
            session: QuizSession::new(),
            journal: Vec::new(),
        }
    }

    fn metadata(&self) -> EventMetadata {
        EventMetadata::for_session(*self.session.id())
    }

    fn record(&mut self, event: SessionEvent) {
        debug!(event = event.event_type(), "Session event recorded");
        self.journal.push(event);
    }

    /// Summary of the active story, preferring full catalog metadata
    fn active_summary(&self, run: &StoryRun) -> ScenarioSummary {
        self.catalog
            .scenario(run.scenario_id())
            .map(ScenarioSummary::from_scenario)
            .unwrap_or_else(|| ScenarioSummary {
                id: run.scenario_id().to_string(),
                title: run.scenario_title().to_string(),
                tagline: String::new(),
                description: String::new(),
                scene_count: run.slots().len(),
            })
    }
}

impl QuizService for QuizServiceImpl {
    #[instrument(skip(self), fields(scenario_id = %id))]
    fn select_scenario(&mut self, id: &ScenarioId) -> bool {
        let Some(scenario) = self.catalog.scenario(id) else {
            debug!("Scenario not in catalog, selection ignored");
            return false;
        };
        let scenario = scenario.clone();

        if !self.session.begin(&scenario) {
            debug!("A story is already active, selection ignored");
            return false;
        }

        info!(title = %scenario.title, "Story run started");
        self.record(SessionEvent::ScenarioSelected {
            metadata: self.metadata(),
            scenario_id: scenario.id.clone(),
            title: scenario.title.clone(),
        });
        true
    }

    #[instrument(skip(self), fields(key = %key))]
    fn pick_option(&mut self, key: OptionKey) -> bool {
        if !self.session.choose(key) {
            debug!("No scene on screen, pick ignored");
            return false;
        }

        // The aggregate applied the pick, so a run must be active
        let picked = self.session.run().map(|run| {
            let slot = run.current_slot();
            (slot.scene.ordinal, slot.scene.option(key).letter)
        });
        if let Some((scene_ordinal, letter)) = picked {
            self.record(SessionEvent::OptionPicked {
                metadata: self.metadata(),
                scene_ordinal,
                key,
                letter,
            });
        }
        true
    }

    #[instrument(skip(self))]
    fn advance(&mut self) -> bool {
        if !self.session.advance() {
            debug!("Advance refused, current scene has no pick");
            return false;
        }

        match self.session.phase() {
            SessionPhase::ShowingResult => {
                let type_code = self
                    .session
                    .run()
                    .and_then(|run| personality_outcome(run.slots()))
                    .map(|outcome| outcome.code)
                    .unwrap_or_default();
                info!(%type_code, "Result revealed");
                self.record(SessionEvent::ResultRevealed {
                    metadata: self.metadata(),
                    type_code,
                });
            }
            SessionPhase::Playing { scene_index } => {
                self.record(SessionEvent::SceneAdvanced {
                    metadata: self.metadata(),
                    to_ordinal: scene_index as u32 + 1,
                });
            }
            SessionPhase::SelectingScenario => {}
        }
        true
    }

    #[instrument(skip(self))]
    fn step_back(&mut self) -> bool {
        if !self.session.step_back() {
            debug!("Step back refused at the first scene");
            return false;
        }

        if let SessionPhase::Playing { scene_index } = self.session.phase() {
            self.record(SessionEvent::SteppedBack {
                metadata: self.metadata(),
                to_ordinal: scene_index as u32 + 1,
            });
        }
        true
    }

    #[instrument(skip(self))]
    fn restart(&mut self) -> bool {
        if !self.session.restart() {
            debug!("No story active, restart ignored");
            return false;
        }

        info!("Session restarted");
        self.record(SessionEvent::SessionRestarted {
            metadata: self.metadata(),
        });
        true
    }

    fn snapshot(&self) -> SessionView {
        let session_id = self.session.id().to_string();
        match self.session.run() {
            None => SessionView {
                session_id,
                phase: self.session.phase().into(),
                scenario: None,
                scene: None,
                answered: 0,
                total_scenes: 0,
                started_at: None,
                tallies: Vec::new(),
            },
            Some(run) => {
                let report = tally_dimensions(run.slots());
                let scene = match self.session.phase() {
                    SessionPhase::Playing { .. } => Some(SceneView::from_slot(run.current_slot())),
                    _ => None,
                };
                SessionView {
                    session_id,
                    phase: self.session.phase().into(),
                    scenario: Some(self.active_summary(run)),
                    scene,
                    answered: report.answered,
                    total_scenes: run.slots().len(),
                    started_at: Some(run.started_at()),
                    tallies: report.axes.iter().map(TallyView::from_tally).collect(),
                }
            }
        }
    }

    fn result(&self) -> Option<ResultView> {
        if self.session.phase() != SessionPhase::ShowingResult {
            return None;
        }
        let run = self.session.run()?;
        let outcome = personality_outcome(run.slots())?;
        let profile = self
            .catalog
            .profile(&outcome.code)
            .unwrap_or_else(|| self.catalog.default_profile());
        let report = tally_dimensions(run.slots());

        Some(ResultView {
            type_code: outcome.code.clone(),
            letters: outcome.letters.iter().map(|letter| letter.as_char()).collect(),
            profile: ProfileView::from_profile(profile),
            scenario: self.active_summary(run),
            tallies: report.axes.iter().map(TallyView::from_tally).collect(),
            answered: report.answered,
        })
    }

    fn scenario_choices(&self) -> Vec<ScenarioSummary> {
        self.catalog
            .scenarios()
            .iter()
            .map(ScenarioSummary::from_scenario)
            .collect()
    }

    fn events(&self) -> &[SessionEvent] {
        &self.journal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::application::dto::PhaseView;
    use crate::domain::entities::{Scenario, Scene, SceneOption, TypeProfile};
    use crate::domain::value_objects::AXIS_ORDER;

    struct FakeCatalog {
        scenarios: Vec<Scenario>,
        profiles: HashMap<String, TypeProfile>,
        fallback: TypeProfile,
    }

    impl ContentCatalogPort for FakeCatalog {
        fn scenarios(&self) -> &[Scenario] {
            &self.scenarios
        }

        fn scenario(&self, id: &ScenarioId) -> Option<&Scenario> {
            self.scenarios.iter().find(|scenario| &scenario.id == id)
        }

        fn profile(&self, code: &str) -> Option<&TypeProfile> {
            self.profiles.get(code)
        }

        fn default_profile(&self) -> &TypeProfile {
            &self.fallback
        }
    }

    fn four_scene_scenario(slug: &str) -> Scenario {
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
        Scenario::new(ScenarioId::new(slug), "Mini Story", scenes).with_tagline("four quick calls")
    }

    fn service_with_profiles(profiles: HashMap<String, TypeProfile>) -> QuizServiceImpl {
        let catalog = FakeCatalog {
            scenarios: vec![four_scene_scenario("mini-story")],
            profiles,
            fallback: TypeProfile::new("Wanderer", "walks every road", "give them room"),
        };
        QuizServiceImpl::new(Arc::new(catalog))
    }

    fn service() -> QuizServiceImpl {
        let mut profiles = HashMap::new();
        profiles.insert(
            "ESTJ".to_string(),
            TypeProfile::new("Dispatch Chief", "keeps the board green", "bring them facts"),
        );
        service_with_profiles(profiles)
    }

    fn play_through(service: &mut QuizServiceImpl) {
        for _ in 0..4 {
            assert!(service.pick_option(OptionKey::A));
            assert!(service.advance());
        }
    }

    #[test]
    fn test_unknown_scenario_is_ignored() {
        let mut service = service();
        assert!(!service.select_scenario(&ScenarioId::new("no-such-story")));
        assert_eq!(service.snapshot().phase, PhaseView::SelectingScenario);
        assert!(service.events().is_empty());
    }

    #[test]
    fn test_selection_starts_run_and_records_event() {
        let mut service = service();
        assert!(service.select_scenario(&ScenarioId::new("mini-story")));

        let view = service.snapshot();
        assert_eq!(view.phase, PhaseView::Playing);
        assert_eq!(view.total_scenes, 4);
        assert_eq!(view.answered, 0);
        assert_eq!(view.scenario.unwrap().tagline, "four quick calls");
        assert_eq!(view.scene.unwrap().ordinal, 1);
        assert!(view.started_at.is_some());

        assert_eq!(service.events().len(), 1);
        assert!(matches!(
            &service.events()[0],
            SessionEvent::ScenarioSelected { title, .. } if title == "Mini Story"
        ));
    }

    #[test]
    fn test_refused_actions_leave_no_events() {
        let mut service = service();
        assert!(!service.pick_option(OptionKey::A));
        assert!(!service.advance());
        assert!(!service.step_back());
        assert!(!service.restart());
        assert!(service.events().is_empty());
    }

    #[test]
    fn test_advance_requires_pick() {
        let mut service = service();
        service.select_scenario(&ScenarioId::new("mini-story"));

        assert!(!service.advance());
        assert!(service.pick_option(OptionKey::B));
        assert!(service.advance());
        assert_eq!(service.snapshot().scene.unwrap().ordinal, 2);
    }

    #[test]
    fn test_full_run_reveals_result() {
        let mut service = service();
        service.select_scenario(&ScenarioId::new("mini-story"));
        play_through(&mut service);

        let view = service.snapshot();
        assert_eq!(view.phase, PhaseView::ShowingResult);
        assert_eq!(view.answered, 4);
        assert!(view.scene.is_none());

        let result = service.result().unwrap();
        assert_eq!(result.type_code, "ESTJ");
        assert_eq!(result.letters, vec!['E', 'S', 'T', 'J']);
        assert_eq!(result.profile.name, "Dispatch Chief");
        assert_eq!(result.tallies.len(), 4);
        assert_eq!(result.answered, 4);
        assert!(result.tallies.iter().all(|tally| tally.percent == 100.0));

        // One event per applied action: select, four picks, four advances.
        let types: Vec<&str> = service.events().iter().map(|e| e.event_type()).collect();
        assert_eq!(types.len(), 9);
        assert_eq!(types.first(), Some(&"ScenarioSelected"));
        assert_eq!(types.last(), Some(&"ResultRevealed"));
    }

    #[test]
    fn test_result_gated_until_reveal() {
        let mut service = service();
        assert!(service.result().is_none());

        service.select_scenario(&ScenarioId::new("mini-story"));
        service.pick_option(OptionKey::A);
        assert!(service.result().is_none());

        // Even with every slot filled, the card stays hidden until the
        // final advance applies the reveal
        service.advance();
        service.pick_option(OptionKey::A);
        service.advance();
        service.pick_option(OptionKey::A);
        service.advance();
        service.pick_option(OptionKey::A);
        assert!(service.result().is_none());
        service.advance();
        assert!(service.result().is_some());
    }

    #[test]
    fn test_result_is_idempotent() {
        let mut service = service();
        service.select_scenario(&ScenarioId::new("mini-story"));
        play_through(&mut service);

        let first = service.result().unwrap();
        let second = service.result().unwrap();
        assert_eq!(first.type_code, second.type_code);
        assert_eq!(first.profile.name, second.profile.name);
        assert_eq!(first.tallies.len(), second.tallies.len());
    }

    #[test]
    fn test_unmatched_code_falls_back_to_default_profile() {
        // Empty profile table: every code misses and lands on the fallback
        let mut service = service_with_profiles(HashMap::new());
        service.select_scenario(&ScenarioId::new("mini-story"));
        play_through(&mut service);

        let result = service.result().unwrap();
        assert_eq!(result.type_code, "ESTJ");
        assert_eq!(result.profile.name, "Wanderer");
    }

    #[test]
    fn test_step_back_clears_and_blocks() {
        let mut service = service();
        service.select_scenario(&ScenarioId::new("mini-story"));
        service.pick_option(OptionKey::A);
        service.advance();

        assert!(service.step_back());
        let view = service.snapshot();
        let scene = view.scene.unwrap();
        assert_eq!(scene.ordinal, 1);
        assert_eq!(scene.picked, None);
        assert_eq!(view.answered, 0);
        assert!(!service.advance());
    }

    #[test]
    fn test_restart_resets_but_keeps_sitting_id() {
        let mut service = service();
        let sitting = service.snapshot().session_id;
        service.select_scenario(&ScenarioId::new("mini-story"));
        play_through(&mut service);

        assert!(service.restart());
        let view = service.snapshot();
        assert_eq!(view.phase, PhaseView::SelectingScenario);
        assert_eq!(view.session_id, sitting);
        assert_eq!(view.total_scenes, 0);
        assert!(view.tallies.is_empty());
        assert!(service.result().is_none());
        assert_eq!(service.events().last().map(|e| e.event_type()), Some("SessionRestarted"));
    }

    #[test]
    fn test_events_correlate_to_one_sitting() {
        let mut service = service();
        service.select_scenario(&ScenarioId::new("mini-story"));
        service.pick_option(OptionKey::B);

        let sitting = service.snapshot().session_id;
        assert!(service
            .events()
            .iter()
            .all(|event| event.metadata().session_id.to_string() == sitting));
    }

    #[test]
    fn test_scenario_choices_list_catalog_order() {
        let service = service();
        let choices = service.scenario_choices();
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].id, "mini-story");
        assert_eq!(choices[0].scene_count, 4);
    }
}
