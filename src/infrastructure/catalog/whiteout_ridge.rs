//! "Whiteout Ridge: Storm Rescue" scenario script

use crate::domain::entities::{Scenario, Scene};
use crate::domain::value_objects::{Dimension, ScenarioId};

use super::scene;

pub(super) fn scenario() -> Scenario {
    Scenario::new(
        ScenarioId::new("whiteout-ridge"),
        "Whiteout Ridge: Storm Rescue",
        scenes(),
    )
    .with_tagline("Two lost parties, one closing storm, and your boots at the trailhead")
    .with_description(
        "The storm shut the mountain at noon and two climbing parties never came \
         down. You volunteer with the valley rescue team, and tonight the team \
         is short-handed and the ridge is disappearing into white. Everything \
         above the treeline will be decided by people like you.",
    )
}

fn scenes() -> Vec<Scene> {
    vec![
        scene(
            1,
            Dimension::Energy,
            "The Call-Out",
            "The siren app fires at 17:40. By the time you reach the rescue hut it \
             is full of half-dressed volunteers, shouted weather reports, and maps.",
            "What do you do in the scrum?",
            (
                "Work the room",
                "Pull people into a circle, collect what everyone knows out loud",
            ),
            (
                "Take a corner first",
                "Five quiet minutes with the map and the forecast before joining the noise",
            ),
        ),
        scene(
            2,
            Dimension::Information,
            "Last Known Points",
            "One party texted from the col at 13:10; the other was seen near the \
             east couloir at noon. Four hours of storm have passed since.",
            "How do you place them now?",
            (
                "Hold to the fixes",
                "Search from the reported points outward; facts beat guesses",
            ),
            (
                "Drift the positions",
                "Tired people descend with the wind at their backs; project where that leads",
            ),
        ),
        scene(
            3,
            Dimension::Decision,
            "Two Parties, One Team",
            "There is one team tonight and two search areas. The col party is \
             better equipped; the couloir party includes a seventeen-year-old. A \
             father is in the hut, begging.",
            "Which area gets the team?",
            (
                "Best survival math",
                "Exposure, equipment, terrain - rank the odds and go where rescue changes them most",
            ),
            (
                "The boy in the couloir",
                "A kid in a storm outweighs the spreadsheet; the father's eyes are data too",
            ),
        ),
        scene(
            4,
            Dimension::Rhythm,
            "The Route Up",
            "The leader asks you to sketch the approach while the team packs.",
            "What do you hand her?",
            (
                "Bearings and turnarounds",
                "Fixed legs, compass lines, hard turnaround times written on the map",
            ),
            (
                "A flexible line",
                "A corridor and options; the snow will tell us which branch to take",
            ),
        ),
        scene(
            5,
            Dimension::Energy,
            "The Climb",
            "Three hours of climbing in the dark. The rope team settles into its \
             rhythm, headlamps in a swaying line.",
            "What kind of teammate are you on the rope?",
            (
                "The talker",
                "Constant checks, jokes, count-offs - voices keep a team warm",
            ),
            (
                "The metronome",
                "Steady steps and signals only; save every breath for the hill",
            ),
        ),
        scene(
            6,
            Dimension::Information,
            "The Loaded Slope",
            "The direct line crosses a slope that has been loading with wind-blown \
             snow all day. Crossing saves forty minutes.",
            "How do you judge it?",
            (
                "Dig and test",
                "A pit, a column test, the layers under your own fingers",
            ),
            (
                "The slope's story",
                "North-facing, leeward, post-storm - this profile slides; treat it as read",
            ),
        ),
        scene(
            7,
            Dimension::Decision,
            "The Twisted Ankle",
            "Marek goes down hard on the traverse. He can walk, barely, and swears \
             he can continue. Protocol says an injured rescuer descends with an \
             escort, which costs the team two of six.",
            "What do you argue?",
            (
                "Protocol holds",
                "A limping rescuer is tomorrow's casualty; the arithmetic is cruel and correct",
            ),
            (
                "Trust his word",
                "He knows his own ankle, and making him a burden breaks something too",
            ),
        ),
        scene(
            8,
            Dimension::Rhythm,
            "The Search Pattern",
            "Above the col the visibility drops to meters. Somewhere in a few \
             square kilometers of white are four people.",
            "How does the team search?",
            (
                "Gridded sectors",
                "Divide, assign, sweep, report - boring lines that miss nothing",
            ),
            (
                "Follow the finds",
                "Start loose, chase each clue as it surfaces; let the mountain steer the search",
            ),
        ),
        scene(
            9,
            Dimension::Energy,
            "The Snow Cave",
            "Midnight. The storm peaks and the team digs in to wait it out, six \
             people in a cave the size of a van.",
            "How do you hold the cave together?",
            (
                "Keep the cave loud",
                "Stories, rounds of questions, anything but silence and the wind",
            ),
            (
                "Keep the cave calm",
                "Low voices, checked buddies, banked energy; quiet is not despair",
            ),
        ),
        scene(
            10,
            Dimension::Information,
            "The Glove",
            "Dawn sweep. A red glove, half buried, forty meters off your sector \
             line. Nothing else around it.",
            "What does the glove get?",
            (
                "A logged fact",
                "Flag, photograph, coordinates to base; it means what the search proves it means",
            ),
            (
                "A story",
                "Bare hand, off the line, downhill side - someone was crawling; work that theory now",
            ),
        ),
        scene(
            11,
            Dimension::Decision,
            "The Radio Check",
            "Base asks for a status report, and you know the families are standing \
             by the speaker in the hut.",
            "How do you report?",
            (
                "Cold and exact",
                "Base allocates helicopters on facts; precision is what mercy looks like here",
            ),
            (
                "Exact but gentle",
                "Choose words a mother can survive hearing; the facts can wear warm clothes",
            ),
        ),
        scene(
            12,
            Dimension::Rhythm,
            "The Turnaround Clock",
            "The plan says the team turns for home at 14:00 regardless. At 13:30 \
             the weather opens and a probe line is finding debris.",
            "What do you push for?",
            (
                "Honor the clock",
                "The turnaround exists because judgment dies up here; extend nothing",
            ),
            (
                "Ride the window",
                "The plan served its purpose; conditions say dig while digging works",
            ),
        ),
        scene(
            13,
            Dimension::Energy,
            "First Contact",
            "A shout: three of the col party, huddled under a fallen slab, cold and \
             scared but alive.",
            "What do the first seconds look like?",
            (
                "Arrive big",
                "Names, grins, loud reassurance - fill the hole their fear has dug",
            ),
            (
                "Arrive level",
                "One quiet voice each, slow words; panic feeds on volume",
            ),
        ),
        scene(
            14,
            Dimension::Information,
            "The Assessment",
            "You kneel beside the worst-off climber. Training gives you a card of \
             checks; experience gives you an impression.",
            "What leads the assessment?",
            (
                "The card",
                "Airway, breathing, pulse, temperature - the list in order, every time",
            ),
            (
                "The whole picture",
                "The card confirms what the gray lips and wrong answers already said",
            ),
        ),
        scene(
            15,
            Dimension::Decision,
            "The Last Bottle",
            "One full oxygen bottle, two hypothermic climbers. The clinical scores \
             are nearly level. One of them is the guide who led the party up into \
             the forecast.",
            "Who gets the bottle?",
            (
                "The slightly worse score",
                "Triage doesn't ask whose fault the mountain was; the numbers pick",
            ),
            (
                "The one who was led",
                "All else equal, the client answers for the guide's call; that weighs",
            ),
        ),
        scene(
            16,
            Dimension::Rhythm,
            "The Descent",
            "Three casualties on sleds, a tired team, and two thousand meters of \
             down.",
            "How is the descent run?",
            (
                "Fixed stations",
                "Anchors at named points, rotations on schedule, every leg briefed",
            ),
            (
                "Continuous flow",
                "Keep the sleds moving, solve each pitch as it arrives, rest when terrain gives it",
            ),
        ),
        scene(
            17,
            Dimension::Energy,
            "The Car Park",
            "The trailhead is floodlit chaos: families, neighbors, a regional news \
             crew, and hot soup.",
            "Where do you land?",
            (
                "Into the crowd",
                "Hugs, handshakes, the retelling - let the valley have its ending",
            ),
            (
                "Into the gear room",
                "Coil ropes in the quiet until your hands stop shaking; people can wait",
            ),
        ),
        scene(
            18,
            Dimension::Information,
            "The Debrief",
            "Two days later the team rebuilds the rescue hour by hour on a \
             whiteboard.",
            "What do you bring to the board?",
            (
                "The timeline",
                "Times, positions, calls as logged; conclusions only where records reach",
            ),
            (
                "The near-misses",
                "What the glove, the slope, and the clock almost cost - and what that teaches",
            ),
        ),
        scene(
            19,
            Dimension::Decision,
            "The Incident Report",
            "Your section covers the climbers' decisions: the late start, the \
             ignored forecast. The report becomes public record.",
            "How do you write the faults?",
            (
                "Plainly",
                "Named errors save the next party; clarity is the kindness that scales",
            ),
            (
                "With their winter in mind",
                "True but humane wording; they have to live in this valley afterward",
            ),
        ),
        scene(
            20,
            Dimension::Rhythm,
            "Next Season",
            "The team offers you a paid patrol post: fixed rota, fixed training \
             calendar, your winters planned to the week.",
            "What do you tell them?",
            (
                "Take the rota",
                "Structure makes rescuers; sign and build the years on it",
            ),
            (
                "Stay on-call",
                "Keep the wild edges of the calendar; you answer pages, not schedules",
            ),
        ),
    ]
}
