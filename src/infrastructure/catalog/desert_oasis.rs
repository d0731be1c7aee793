//! "Desert Oasis: The Long Caravan" scenario script

use crate::domain::entities::{Scenario, Scene};
use crate::domain::value_objects::{Dimension, ScenarioId};

use super::scene;

pub(super) fn scenario() -> Scenario {
    Scenario::new(
        ScenarioId::new("desert-oasis"),
        "Desert Oasis: The Long Caravan",
        scenes(),
    )
    .with_tagline("Forty days of sand between two markets, and you holding the ledger")
    .with_description(
        "The summer caravan runs from the river city to the far oasis markets: \
         sixty animals, thirty hands, and cargo worth more than the town that \
         raised you. You signed on as quartermaster. The desert doesn't \
         negotiate, but everyone else does.",
    )
}

fn scenes() -> Vec<Scene> {
    vec![
        scene(
            1,
            Dimension::Energy,
            "The Staging Camp",
            "Two nights before departure, the staging ground is a city of \
             strangers: drivers, guards, traders, cooks. You know almost no one.",
            "How do you spend those nights?",
            (
                "Walk the fire circles",
                "Share tea at every fire; learn faces before you learn the road",
            ),
            (
                "Study in your tent",
                "Route maps, well registers, manifests - meet the road on paper first",
            ),
        ),
        scene(
            2,
            Dimension::Information,
            "The First Well",
            "Day four, a well not on your register. The water looks clear, but the \
             ground around it is oddly bare of tracks.",
            "How do you judge the water?",
            (
                "Test it properly",
                "Taste cup, salt stick, an hour's wait on one goat - measure, then drink",
            ),
            (
                "Read the absence",
                "No tracks means the animals know something; trust the pattern and pass",
            ),
        ),
        scene(
            3,
            Dimension::Decision,
            "Weight to Drop",
            "A lame camel forces the caravan to shed ninety pounds of cargo. Three \
             traders each insist their goods must stay.",
            "How do you choose what drops?",
            (
                "By the manifest",
                "Value per pound, contract priority - the ledger decides, not the shouting",
            ),
            (
                "By what it means",
                "The widow's dowry chest isn't the same as bolt cloth; weigh the lives in it",
            ),
        ),
        scene(
            4,
            Dimension::Rhythm,
            "Setting the March",
            "The road master asks how you want the days structured between here and \
             the dune sea.",
            "What rhythm do you set?",
            (
                "Fixed stages",
                "Named halts, set distances, a schedule the whole line can recite",
            ),
            (
                "Move with the sky",
                "March while the weather serves, halt when it turns; the plan is the road",
            ),
        ),
        scene(
            5,
            Dimension::Energy,
            "The Big Fire",
            "Every night halt grows a main fire with songs and arguments, and a \
             quiet rim of tents beyond the light.",
            "Where does your evening go?",
            (
                "Into the circle",
                "Stories and laughter stitch a caravan together; add your voice",
            ),
            (
                "To the quiet rim",
                "The day's noise needs unwinding; the stars are company enough",
            ),
        ),
        scene(
            6,
            Dimension::Information,
            "The Dune Sea",
            "Five days of dunes with no landmarks that hold their shape. The guides \
             disagree on method.",
            "Which method carries the crossing?",
            (
                "Count and compass",
                "Dead reckoning: paces logged, bearings checked at every rest",
            ),
            (
                "The dune song",
                "The old route-song describes how the crests lean; navigate by its sense",
            ),
        ),
        scene(
            7,
            Dimension::Decision,
            "The Thirsty Guide",
            "A guide is caught trading caravan water to another outfit for coin. His \
             contract names the penalty: dismissal at the next town. He has a \
             debt-bonded family.",
            "What do you enforce?",
            (
                "The written penalty",
                "Water theft in the desert is the one line no story excuses",
            ),
            (
                "A measured mercy",
                "Dock his share, keep him on; a family's ruin is too big a fine",
            ),
        ),
        scene(
            8,
            Dimension::Rhythm,
            "The Oasis Layover",
            "The mid-route oasis offers shade, repairs, and the temptation to stay \
             too long.",
            "How long does the caravan rest?",
            (
                "Three days, scheduled",
                "Repairs booked by day, departure posted the hour you arrive",
            ),
            (
                "Until it's time",
                "Let the animals, the craftsmen, and the weather say when; they will",
            ),
        ),
        scene(
            9,
            Dimension::Energy,
            "Market Morning",
            "The oasis market opens at dawn: a roaring trade floor where fortunes \
             move by voice and handshake.",
            "How do you work the market?",
            (
                "In the thick of it",
                "Haggle stall to stall; the crowd's energy is half the price",
            ),
            (
                "Through the ledger tent",
                "Send a sharp partner to shout; you read prices and set limits behind canvas",
            ),
        ),
        scene(
            10,
            Dimension::Information,
            "The Stranger's Map",
            "A trader offers to sell a map of a shortcut through the salt hills, \
             eight days saved. No one you trust has walked it.",
            "What do you weigh?",
            (
                "The wells it claims",
                "Check every marked well against registers and witnesses before a single coin",
            ),
            (
                "The road it opens",
                "If it's real, it redraws the season; the possibility is worth the risk of coin",
            ),
        ),
        scene(
            11,
            Dimension::Decision,
            "The Lost Bales",
            "A flash flood takes twelve bales, nearly all of them one small trader's \
             stock. The partnership contract splits losses by share.",
            "How do the losses fall?",
            (
                "By the contract",
                "Shares were signed in the river city; the flood doesn't amend them",
            ),
            (
                "By the wound",
                "Spread his ruin across the strong shoulders; the contract can catch up later",
            ),
        ),
        scene(
            12,
            Dimension::Rhythm,
            "Packing for the Flats",
            "Beyond the oasis lie the salt flats: the hardest leg, where a bad load \
             kills animals.",
            "How do you pack the line?",
            (
                "One strict load plan",
                "Every animal's burden written, weighed, and sealed before departure",
            ),
            (
                "Adjust at every halt",
                "Rough loads now, rebalance nightly as the animals tell you their limits",
            ),
        ),
        scene(
            13,
            Dimension::Energy,
            "The Rival Outfit",
            "A rival caravan proposes merging trains for the bandit country ahead. \
             Their master invites you to argue terms at his fires tonight.",
            "How do you negotiate?",
            (
                "Go sit at their fires",
                "Terms land better face to face; read the men while you trade words",
            ),
            (
                "Send terms by messenger",
                "Write the offer cold and exact; distance keeps the thinking clean",
            ),
        ),
        scene(
            14,
            Dimension::Information,
            "Storm Signs",
            "The horizon has a brown smudge and the air tastes of metal. Halting \
             costs a day; marching into a sandstorm costs far more.",
            "What do you read?",
            (
                "Glass and horizon",
                "The barometer's fall and the smudge's drift, measured against the hour",
            ),
            (
                "The animals' unease",
                "Camels kneeling unasked is the oldest forecast there is; believe it",
            ),
        ),
        scene(
            15,
            Dimension::Decision,
            "Rationing the Crossing",
            "Mid-flats, a cracked cistern leaves the water short. Thirty people \
             watch you lift the measuring cup.",
            "How is the water shared?",
            (
                "Equal measures",
                "One cup is one cup for every throat; equality is the only defensible line",
            ),
            (
                "Need first",
                "The sick, the young, the ones carrying double - the strong can stand thirst",
            ),
        ),
        scene(
            16,
            Dimension::Rhythm,
            "The Night Marches",
            "The flats are crossed by night to spare the animals. The route master \
             asks how rigid to make the timetable.",
            "How do the nights run?",
            (
                "To the timetable",
                "March at dusk bell, halt at the named hours, arrive on the promised day",
            ),
            (
                "To the conditions",
                "Each dusk you set that night's target by moon, wind, and the line's strength",
            ),
        ),
        scene(
            17,
            Dimension::Energy,
            "The Gates",
            "The far city's gates open to drums and crowds. The caravan has made \
             it, and the entry parade is half the season's advertising.",
            "Where are you during the parade?",
            (
                "At the head of the line",
                "Wave from the lead camel; let the city put your face to the outfit",
            ),
            (
                "Already at the counting house",
                "Let the drivers have the drums; the quiet hours settle the accounts",
            ),
        ),
        scene(
            18,
            Dimension::Information,
            "Next Season's Route",
            "The masters gather to plan next year while this year's dust is still \
             on the bags.",
            "What grounds your proposal?",
            (
                "This season's record",
                "Days, losses, margins per stage - plan from what the ledger proves",
            ),
            (
                "Where trade is turning",
                "The river ports are fading and the coast is rising; plan for the shift",
            ),
        ),
        scene(
            19,
            Dimension::Decision,
            "The Southern Stop",
            "A partner moves to cut the southern village from the route: thin \
             margins, slow trade. The village has watered caravans for a century.",
            "Where do you stand?",
            (
                "Cut it",
                "The numbers are the numbers; sentiment doesn't feed the outfit",
            ),
            (
                "Keep it",
                "A water town kept alive by caravans is owed better than a margin line",
            ),
        ),
        scene(
            20,
            Dimension::Rhythm,
            "Your Name on Paper",
            "The outfit offers you a three-year quartermaster contract: fixed \
             seasons, fixed shares, your route known years ahead.",
            "What do you sign?",
            (
                "The three years",
                "A settled road is a strong road; commit and build on the certainty",
            ),
            (
                "One season at a time",
                "Stay free to follow the best train each spring; the open road is the point",
            ),
        ),
    ]
}
