//! "Starport Fleet: The Silent Signal" scenario script

use crate::domain::entities::{Scenario, Scene};
use crate::domain::value_objects::{Dimension, ScenarioId};

use super::scene;

pub(super) fn scenario() -> Scenario {
    Scenario::new(
        ScenarioId::new("starport-fleet"),
        "Starport Fleet: The Silent Signal",
        scenes(),
    )
    .with_tagline("A deep-space echo, nine civilian ships, and you on the ops chair")
    .with_description(
        "Fourteen months out from the colony, the fleet's long-range array catches \
         a signal that repeats every ninety-one seconds and matches nothing in the \
         registry. Nine ships, two thousand people, and every decision routed \
         through your console. The void is patient; the questions are not.",
    )
}

fn scenes() -> Vec<Scene> {
    vec![
        scene(
            1,
            Dimension::Energy,
            "Ninety-One Seconds",
            "The signal rolls in during your watch, soft as static and absolutely \
             regular. For the moment, only you and the array know.",
            "What do you do with the first hour?",
            (
                "Open the channel fleet-wide",
                "Wake the duty officers, get every ear on it at once",
            ),
            (
                "Sit with it alone first",
                "Headphones on, lights down - understand it before the noise starts",
            ),
        ),
        scene(
            2,
            Dimension::Information,
            "First Analysis",
            "The science bay wants direction. The waveform sits on the main display, \
             patient and strange.",
            "Where does the analysis start?",
            (
                "Calibrated measurement",
                "Frequency, interval, drift - pin down what is actually there",
            ),
            (
                "The resemblance",
                "It rhymes with an old distress format; chase that likeness",
            ),
        ),
        scene(
            3,
            Dimension::Decision,
            "The Detour Question",
            "The survey ship Calla wants to divert toward the source; the tanker \
             captain calls the burn reckless. Both look to you.",
            "What tips your ruling?",
            (
                "The delta-v ledger",
                "Fuel margins and transit windows decide; sentiment doesn't burn",
            ),
            (
                "The fleet's nerves",
                "What the crews can carry matters more than the cleanest line",
            ),
        ),
        scene(
            4,
            Dimension::Rhythm,
            "Approach Geometry",
            "The council approves a cautious closing course with the source still \
             eleven days out.",
            "How do you shape the approach?",
            (
                "Waypoints and aborts",
                "Plotted legs, go/no-go gates, criteria written in advance",
            ),
            (
                "Drift and see",
                "Close loosely, read the dark as it comes, decide in the moment",
            ),
        ),
        scene(
            5,
            Dimension::Energy,
            "Telling the Fleet",
            "Rumors travel faster than light ever will. Two thousand people deserve \
             to hear it properly before the mess decks invent a version.",
            "How does the fleet find out?",
            (
                "Hangar-deck assembly",
                "Stand on the crates, take every question the crowd has",
            ),
            (
                "A written bulletin",
                "Plain words on every terminal; let people absorb it quietly",
            ),
        ),
        scene(
            6,
            Dimension::Information,
            "Decode Shift",
            "Three days of analysis produce a stack of partial patterns. The team is \
             tired and split on method.",
            "Which method gets the night shift?",
            (
                "Catalog every interval",
                "Exhaustive and dull; nothing real escapes a full survey",
            ),
            (
                "Test the prime hunch",
                "One elegant hypothesis about the spacing; try to break it",
            ),
        ),
        scene(
            7,
            Dimension::Decision,
            "Drydock Priority",
            "Two ships request the single repair dock: the Merrow with hairline hull \
             fractures, the Siding Star with a frightened, exhausted crew and lesser \
             damage.",
            "Who docks first?",
            (
                "Worst numbers first",
                "Hull integrity readings rank the queue; read them out",
            ),
            (
                "The crew at the edge",
                "A breaking crew is a hazard too; give them the berth",
            ),
        ),
        scene(
            8,
            Dimension::Rhythm,
            "The Repair Window",
            "Eleven days of closing course is also eleven days of maintenance \
             backlog across nine ships.",
            "How is the window spent?",
            (
                "A fixed drydock queue",
                "Published schedule, hard slots, penalties for overruns",
            ),
            (
                "Slots traded live",
                "Captains swap berths as faults surface; the board stays fluid",
            ),
        ),
        scene(
            9,
            Dimension::Energy,
            "Mid-Watch Hollow",
            "Day six. The signal hasn't changed and neither has the void. You can \
             feel your own edges wearing thin.",
            "How do you refill?",
            (
                "The night mess crowd",
                "Cards, gossip, engine-room coffee - people put you back together",
            ),
            (
                "The observation blister",
                "An hour with the starfield and nobody's voice at all",
            ),
        ),
        scene(
            10,
            Dimension::Information,
            "The Extra Star",
            "Navigation flags a point of light a half-degree from where the charts \
             want it. Instruments disagree with memory, or memory with instruments.",
            "Which do you believe?",
            (
                "The current readings",
                "Recalibrate, re-measure, accept what the sensors return",
            ),
            (
                "The implication",
                "If the chart is right, something moved; follow that thought",
            ),
        ),
        scene(
            11,
            Dimension::Decision,
            "The Stowaway",
            "Cargo bay three turns out to contain Jun Park, nineteen, who boarded at \
             the last port to reach a brother on the colony. The fleet compact is \
             unambiguous about stowaways.",
            "What happens to Jun?",
            (
                "The compact applies",
                "Confinement and arrears, as written; the rule protects everyone",
            ),
            (
                "The story first",
                "Hear him out, find him a bunk and a duty roster; rules can bend",
            ),
        ),
        scene(
            12,
            Dimension::Rhythm,
            "The Contingency Book",
            "The captains' council wants doctrine for contact day: what the fleet \
             does if the source is a beacon, a wreck, a lie, or something else.",
            "What do you write?",
            (
                "Branching checklists",
                "A page per possibility, steps numbered, owners named",
            ),
            (
                "Five principles",
                "Short rules that travel; the moment will pick the steps",
            ),
        ),
        scene(
            13,
            Dimension::Energy,
            "The Council Seat",
            "Contact policy gets decided at the captains' table tomorrow. Ops is \
             entitled to a voice, and the debate will be loud.",
            "How is ops represented?",
            (
                "Take the seat yourself",
                "Argue it live; conviction carries a room better than paper",
            ),
            (
                "Brief your captain",
                "Arm the one who speaks; influence reads fine from the wings",
            ),
        ),
        scene(
            14,
            Dimension::Information,
            "The Reactor Stutter",
            "The Merrow's reactor hiccups every few hours, never twice the same \
             interval. Engineering is out of easy ideas.",
            "Where do you point them?",
            (
                "The telemetry, line by line",
                "Somewhere in the logs is a number that moved; find it",
            ),
            (
                "The sister-ship pattern",
                "Two other hulls stuttered last year; assume one cause, hunt it",
            ),
        ),
        scene(
            15,
            Dimension::Decision,
            "Watch Rotation",
            "Approach watches are grinding people down. A new rotation is needed, \
             and whoever writes it owns its resentments.",
            "What does fairness look like?",
            (
                "Logged hours, balanced",
                "Equal time in the chair by the record; the sheet is the defense",
            ),
            (
                "The fraying faces",
                "Give rest where the strain shows; equality isn't sameness",
            ),
        ),
        scene(
            16,
            Dimension::Rhythm,
            "Manifest Day",
            "Before any rendezvous, the fleet's cargo registry should match reality. \
             It hasn't been audited since the last port.",
            "How thorough is the audit?",
            (
                "Seal and count it all",
                "Every hold, every crate, reconciled before closing further",
            ),
            (
                "Spot-check and sail",
                "Sample the risky holds; perfection can ride in the wake",
            ),
        ),
        scene(
            17,
            Dimension::Energy,
            "The Answer",
            "On day ten the signal changes: your own hail, folded inside the \
             ninety-one-second frame, played back to you.",
            "What do you do in the first minute?",
            (
                "Put it on every speaker",
                "Two thousand people hear it together, and the cheer is real",
            ),
            (
                "A private minute",
                "Hand on the console, let it land in you before it belongs to all",
            ),
        ),
        scene(
            18,
            Dimension::Information,
            "What It Means",
            "Linguistics has a transcript: your hail, returned with three altered \
             intervals. The room wants a conclusion.",
            "What conclusion do you sign?",
            (
                "Only the transcript",
                "Report the alterations as measured; meaning waits for data",
            ),
            (
                "The intent behind it",
                "An echo with edits is a reply; say what that implies",
            ),
        ),
        scene(
            19,
            Dimension::Decision,
            "The Colony Report",
            "Your recommendation sails ahead of the fleet by tight-beam. The board \
             will fund or freeze contact work based on a paragraph.",
            "Which paragraph do you write?",
            (
                "The defensible case",
                "Costs, risks, probabilities - a recommendation that survives audit",
            ),
            (
                "The honest hope",
                "What this did to two thousand people belongs in the ledger too",
            ),
        ),
        scene(
            20,
            Dimension::Rhythm,
            "The Next Leg",
            "Contact protocols are drafted, the source still distant, the colony \
             months ahead. The fleet waits on a heading.",
            "What course do you file?",
            (
                "Lock the rendezvous",
                "A committed course with dates the colony can plan around",
            ),
            (
                "Keep the helm loose",
                "File intentions, preserve the option to turn toward wonder",
            ),
        ),
    ]
}
