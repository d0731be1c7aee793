//! Session events - Notifications of applied state transitions
//!
//! Every applied transition produces one event; refused transitions produce
//! nothing. The application service keeps the events in an in-memory journal
//! as an audit trail of the sitting.

use chrono::{DateTime, Utc};

use crate::domain::entities::OptionKey;
use crate::domain::value_objects::{Letter, ScenarioId, SessionId};

/// Base data for all events
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct EventMetadata {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The sitting this event belongs to
    pub session_id: SessionId,
}

impl EventMetadata {
    pub fn for_session(session_id: SessionId) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
        }
    }
}

/// All session events in the system
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A scenario was chosen and a story run started
    ScenarioSelected {
        metadata: EventMetadata,
        scenario_id: ScenarioId,
        title: String,
    },

    /// An option was picked (or re-picked) for the scene on screen
    OptionPicked {
        metadata: EventMetadata,
        scene_ordinal: u32,
        key: OptionKey,
        letter: Letter,
    },

    /// The cursor moved forward to another scene
    SceneAdvanced {
        metadata: EventMetadata,
        to_ordinal: u32,
    },

    /// The cursor moved back, clearing the slot it returned to
    SteppedBack {
        metadata: EventMetadata,
        to_ordinal: u32,
    },

    /// The final scene was confirmed and the profile revealed
    ResultRevealed {
        metadata: EventMetadata,
        type_code: String,
    },

    /// The run was discarded and the session returned to selection
    SessionRestarted { metadata: EventMetadata },
}

impl SessionEvent {
    /// Get the metadata for this event
    pub fn metadata(&self) -> &EventMetadata {
        match self {
            SessionEvent::ScenarioSelected { metadata, .. } => metadata,
            SessionEvent::OptionPicked { metadata, .. } => metadata,
            SessionEvent::SceneAdvanced { metadata, .. } => metadata,
            SessionEvent::SteppedBack { metadata, .. } => metadata,
            SessionEvent::ResultRevealed { metadata, .. } => metadata,
            SessionEvent::SessionRestarted { metadata } => metadata,
        }
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::ScenarioSelected { .. } => "ScenarioSelected",
            SessionEvent::OptionPicked { .. } => "OptionPicked",
            SessionEvent::SceneAdvanced { .. } => "SceneAdvanced",
            SessionEvent::SteppedBack { .. } => "SteppedBack",
            SessionEvent::ResultRevealed { .. } => "ResultRevealed",
            SessionEvent::SessionRestarted { .. } => "SessionRestarted",
        }
    }
}
