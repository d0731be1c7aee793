//! "Neon City: Blackout Night" scenario script

use crate::domain::entities::{Scenario, Scene};
use crate::domain::value_objects::{Dimension, ScenarioId};

use super::scene;

pub(super) fn scenario() -> Scenario {
    Scenario::new(ScenarioId::new("neon-city"), "Neon City: Blackout Night", scenes())
        .with_tagline("A midnight grid failure, one street crew, twenty calls to make")
        .with_description(
            "At 11:47 pm the city's grid folds district by district until your block \
             is the last island of light, and then it isn't. You know the alleys, the \
             people, and where the spare cable is kept. The night will ask twenty \
             questions; the way you answer them is the way you are.",
        )
}

fn scenes() -> Vec<Scene> {
    vec![
        scene(
            1,
            Dimension::Energy,
            "Lights Out",
            "The hum of the block dies mid-note. Doors creak open up and down the \
             street, and a dozen voices start asking the dark the same question.",
            "What is your first move?",
            (
                "Get everyone into the street",
                "Gather the neighbors, pool what's known, divide the block",
            ),
            (
                "Walk the block alone first",
                "Scope the damage quietly before anyone starts asking you things",
            ),
        ),
        scene(
            2,
            Dimension::Information,
            "Reading the Dark",
            "From the rooftop the city is a map of absences. Somebody hands you a \
             battered radio that catches fragments of the utility band.",
            "What do you try to learn first?",
            (
                "Check the breaker panels",
                "Meters, fuses, scorch marks - things you can touch and verify",
            ),
            (
                "Track the failure pattern",
                "The districts died in a sequence; the sequence means something",
            ),
        ),
        scene(
            3,
            Dimension::Decision,
            "One Generator",
            "The workshop's only generator coughs to life. The transit hub needs it \
             to move stranded commuters; the retirement tower on 9th is dark and \
             frightened.",
            "Where does the generator go?",
            (
                "To the transit hub",
                "Most people served per litre of fuel - the math is clear",
            ),
            (
                "To the retirement tower",
                "Frightened people in the dark come before throughput",
            ),
        ),
        scene(
            4,
            Dimension::Rhythm,
            "The Long Night",
            "Midnight settles in. Flashlight beams wobble along the storefronts, and \
             it's plain the outage will outlast everyone's patience.",
            "How do you shape the hours ahead?",
            (
                "Draw a sector rota",
                "Sweep assignments, shift changes, a checklist per corner",
            ),
            (
                "Float between hotspots",
                "Go where the night flares up; plans would just get stale",
            ),
        ),
        scene(
            5,
            Dimension::Energy,
            "The Relay Meet",
            "A stranger's voice on the radio calls every street crew to a meet at the \
             old tram depot to coordinate the districts.",
            "Who speaks for your block?",
            (
                "Go and take the floor",
                "Talking to forty strangers is how the block gets heard",
            ),
            (
                "Send notes, keep working",
                "Write the block's status on paper; your hands are better used here",
            ),
        ),
        scene(
            6,
            Dimension::Information,
            "The Dead Substation",
            "The substation behind the laundromat is silent, but one transformer \
             gives off a faint, wrong-sounding hum nobody else notices.",
            "How do you diagnose it?",
            (
                "Run the manual's checklist",
                "Step by step, terminal by terminal, the way the book says",
            ),
            (
                "Follow the wrong hum",
                "Your gut says the fault hides where the sound is; start there",
            ),
        ),
        scene(
            7,
            Dimension::Decision,
            "Bread in the Dark",
            "A figure slips out of the grocer's broken window. It's Marta from 4B, \
             arms full of bread, two kids at home. The block agreed: looters get \
             turned in.",
            "What do you do with the rule?",
            (
                "Apply it as agreed",
                "The rule holds or it doesn't; exceptions unravel everything",
            ),
            (
                "Let her walk",
                "Hungry kids outweigh a window; settle it with the grocer later",
            ),
        ),
        scene(
            8,
            Dimension::Rhythm,
            "Water Lines",
            "The pumps are on backup and pressure is sagging. A queue with buckets \
             is already forming at the courtyard tap.",
            "How does the water get shared?",
            (
                "Post a ration timetable",
                "Fixed litres, fixed hours, no arguments at the tap",
            ),
            (
                "Pour as the line forms",
                "Hand it out as people come; adjust when you see the flow",
            ),
        ),
        scene(
            9,
            Dimension::Energy,
            "Three A.M.",
            "The adrenaline is gone and the cold is in everyone's coats. Around the \
             fire barrel, the crew has gone quiet in the bad way.",
            "How do you restore yourself?",
            (
                "Stir up the barrel circle",
                "Jokes, a round of status, loud tea - energy is made together",
            ),
            (
                "Take the fire escape",
                "Ten minutes alone above the street puts you back together",
            ),
        ),
        scene(
            10,
            Dimension::Information,
            "The Dawn Rumor",
            "A runner swears the grid will fail again at dawn when the east loop \
             re-energizes. Nobody can say where the claim started.",
            "How do you treat the rumor?",
            (
                "Verify it at the source",
                "Find the utility contact; deal only in what's confirmed",
            ),
            (
                "Play out the what-if",
                "True or not, imagine dawn failing and prepare for that world",
            ),
        ),
        scene(
            11,
            Dimension::Decision,
            "The Cable Spool",
            "Two repair crews claim the last spool of heavy cable at once. Both jobs \
             are real; only one can happen tonight.",
            "How do you split the claim?",
            (
                "Rank by documented need",
                "Load served, homes restored - lay out the figures and decide",
            ),
            (
                "Read the people first",
                "One crew is holding a street on the edge of panic; that weighs",
            ),
        ),
        scene(
            12,
            Dimension::Rhythm,
            "City Hall Calls",
            "A courier from the emergency office asks every district for a recovery \
             plan by morning, in writing.",
            "What kind of plan do you send?",
            (
                "Milestones with dates",
                "Commit to hours and deliverables; let them hold you to it",
            ),
            (
                "Principles, then improvise",
                "Send intentions and priorities; the street will set the pace",
            ),
        ),
        scene(
            13,
            Dimension::Energy,
            "The News Van",
            "A satellite news van noses down your street, and a reporter wants one \
             face to stand for the block on the morning feed.",
            "Who faces the camera?",
            (
                "Step into the light",
                "Take the mic; the block's story lands better told out loud",
            ),
            (
                "Point at the notice board",
                "Everything worth saying is written there; you have work on",
            ),
        ),
        scene(
            14,
            Dimension::Information,
            "The Medicine Run",
            "An insulin run can't wait for sunrise. The lit arterials are mapped and \
             patrolled; the old tram tunnel would halve the distance, if memory \
             serves.",
            "Which route do you take?",
            (
                "The mapped arterials",
                "Longer, but every block of it is known and lit",
            ),
            (
                "The tram tunnel hunch",
                "You can almost see the route; trust the shape of it",
            ),
        ),
        scene(
            15,
            Dimension::Decision,
            "The Botched Splices",
            "Teo keeps failing the same cable splice and the line behind him is \
             growing. It's his street, and everyone can see him struggling.",
            "What happens with Teo?",
            (
                "Reassign by skill",
                "Put a steadier hand on the splice; Teo carries lamps instead",
            ),
            (
                "Keep him on the wire",
                "It's his street and his pride; coach him through it",
            ),
        ),
        scene(
            16,
            Dimension::Rhythm,
            "The Parts Drop",
            "A flatbed arrives unannounced with a jumble of donated parts: fuses, \
             cable, lamps, and things nobody can name.",
            "What happens to the pile?",
            (
                "Inventory before anything",
                "Count it, label it, shelve it - then fix with a clear picture",
            ),
            (
                "Fix with what's on top",
                "Grab what the nearest job needs; sorting can happen later",
            ),
        ),
        scene(
            17,
            Dimension::Energy,
            "First Light Back",
            "Just before five, the tower on Calder Street blinks alive floor by \
             floor. Somebody starts a ragged cheer that spreads down the block.",
            "Where are you when the lights return?",
            (
                "In the street party",
                "Shake every hand; this is what the night was for",
            ),
            (
                "On the roof, watching",
                "Let the cheer rise past you; the glow is enough",
            ),
        ),
        scene(
            18,
            Dimension::Information,
            "The Burned Relay",
            "In the gray morning you hold the failed relay: scorched, ordinary, \
             explainable. And yet it's the third such failure this month.",
            "What story do you trust?",
            (
                "The part in your hand",
                "A worn relay failed; the evidence is sufficient",
            ),
            (
                "The pattern of three",
                "Three failures in a month is a message about the system",
            ),
        ),
        scene(
            19,
            Dimension::Decision,
            "The Incident Report",
            "Your report will be read at city hall. The maintenance contractor \
             skipped two inspections; naming them ends their license and their \
             thirty jobs.",
            "What does the report say?",
            (
                "Name the cause plainly",
                "Accountability is the point of a report; write what happened",
            ),
            (
                "Fault without the name",
                "Describe the failure, spare the ruin; thirty families eat",
            ),
        ),
        scene(
            20,
            Dimension::Rhythm,
            "After the Night",
            "The block is bright again and strangely proud of itself. At the barrel, \
             someone asks what happens next time.",
            "What do you leave behind?",
            (
                "A standing drill",
                "A laminated plan, assigned roles, a drill every quarter",
            ),
            (
                "A story and a promise",
                "The block that handled one night will handle the next",
            ),
        ),
    ]
}
