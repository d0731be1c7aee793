//! Profile texts for the sixteen personality codes

use std::collections::HashMap;

use crate::domain::entities::TypeProfile;

pub(super) fn by_code() -> HashMap<&'static str, TypeProfile> {
    HashMap::from([
        (
            "ISTJ",
            TypeProfile::new(
                "Ledger Warden",
                "You are the one who actually reads the manifest. Crises bend \
                 around you because you arrive already knowing where the spare \
                 parts are, what the contract says, and which promise was made to \
                 whom. You distrust improvisation not out of fear but out of \
                 memory: you have seen what happens when nobody wrote it down. \
                 When everything burns, your records are what the rebuilding \
                 stands on.",
                "Give them the full picture in writing and time to check it. \
                 Change plans early, not at the door, and never ask them to \
                 pretend a corner wasn't cut.",
            ),
        ),
        (
            "ISFJ",
            TypeProfile::new(
                "Lantern Keeper",
                "You notice who is cold before they say so. Your loyalty is \
                 specific and practical: a refilled flask, a remembered birthday \
                 mid-crisis, a watch quietly taken so someone else can sleep. You \
                 keep traditions because they keep people. The group often only \
                 discovers how much you carried on the day you are absent.",
                "Thank them for the concrete things, by name. Don't spring \
                 surprises on them in front of a crowd, and make sure their \
                 quiet work shows up in the record.",
            ),
        ),
        (
            "INFJ",
            TypeProfile::new(
                "Quiet Forecaster",
                "You read the weather inside people. Long before the argument \
                 breaks out, you felt it coming, and your plans are really \
                 plans for souls: who needs meaning, who needs rest, where the \
                 group's story has to go next. You say little, but what you say \
                 tends to be what everyone remembers the group deciding.",
                "Seek out their one-on-one read before the big meeting. Give \
                 their hunches a hearing even without numbers attached, and \
                 give them solitude to recharge without calling it withdrawal.",
            ),
        ),
        (
            "INTJ",
            TypeProfile::new(
                "Grid Strategist",
                "You see the system behind the incident. While others fight \
                 tonight's fire, you are redesigning the grid so it cannot burn \
                 the same way twice. Your confidence comes from having already \
                 run the argument in your head, both sides, twice. You are \
                 wrong less often than is polite, and you know it.",
                "Bring them problems, not procedures. Challenge their plan on \
                 the merits and they'll respect you; challenge it by seniority \
                 and they'll stop bringing you plans.",
            ),
        ),
        (
            "ISTP",
            TypeProfile::new(
                "Field Mechanic",
                "Your hands think. Gadgets, knots, engines, splices - you learn \
                 by taking things apart and you stay calm because panic has never \
                 once turned a bolt. You speak in results, drift away from \
                 meetings, and appear exactly where something is broken, usually \
                 with the right tool already in hand.",
                "Skip the speeches and hand them the problem. Accept that \
                 silence means working, not sulking, and give them room to do \
                 it their way once the goal is clear.",
            ),
        ),
        (
            "ISFP",
            TypeProfile::new(
                "Backstreet Painter",
                "You keep the beauty alive in hard places. In a blackout you \
                 notice the candle-light; on a march you notice the dunes. Your \
                 kindness is undemonstrative and your rebellions are quiet but \
                 total: you will simply not do the thing that feels wrong, \
                 whatever the manual says.",
                "Don't force them onto a stage or into an argument. Make space \
                 for their way of contributing, and read their actions - that's \
                 where they put what they mean.",
            ),
        ),
        (
            "INFP",
            TypeProfile::new(
                "Signal Keeper",
                "You hold the why. Others track supplies and schedules; you \
                 track whether the group is still the kind of group you joined. \
                 Your care runs deep and specific, often for the person everyone \
                 else overlooked, and when one of your principles is crossed, \
                 the gentlest voice in the room becomes the immovable one.",
                "Take their ideals seriously even when inconvenient. Criticize \
                 the work, never the person, and give them time alone to find \
                 the words they mean.",
            ),
        ),
        (
            "INTP",
            TypeProfile::new(
                "Pattern Archivist",
                "You want to know how it actually works. Under the deadline you \
                 are the one still asking the question nobody else thought to \
                 ask, and a week later everyone is glad you did. Order on your \
                 desk is optional; order in your model of the world is not.",
                "Engage the idea, not the schedule, first. Expect answers to \
                 arrive whole after a silence, and don't mistake their critique \
                 of a plan for a critique of you.",
            ),
        ),
        (
            "ESTP",
            TypeProfile::new(
                "Live-Wire Runner",
                "You move first. While the meeting is still framing the problem \
                 you are already on the roof with a flashlight, and somehow it \
                 usually works. Risk reads to you as information, pressure as \
                 weather. Groups keep you slightly in check and are secretly \
                 relieved you exist.",
                "Give them the urgent, physical, right-now jobs. Keep briefings \
                 short, let them negotiate the tricky humans, and don't take \
                 their bluntness as malice - it's speed.",
            ),
        ),
        (
            "ESFP",
            TypeProfile::new(
                "Street Spark",
                "You are the morale supply line. Fear loosens its grip when you \
                 start the song, share the chocolate, name the absurdity of the \
                 night. None of it is frivolous: you have noticed, correctly, \
                 that people who laugh keep walking. You feel the room like \
                 others read a gauge.",
                "Let them work with people, not paperwork. Join the fun \
                 sometimes - it's how they bond - and deliver hard feedback \
                 privately and gently.",
            ),
        ),
        (
            "ENFP",
            TypeProfile::new(
                "Spark Courier",
                "You carry possibility from fire to fire. Every stranger is a \
                 potential ally, every setback a plot twist, and your enthusiasm \
                 is genuinely contagious rather than performed. You start more \
                 than you finish, but what you start, others would never have \
                 dared.",
                "Catch their ideas before dismissing them; one in three is \
                 gold. Pair them with a finisher, and never answer their \
                 excitement with a shrug.",
            ),
        ),
        (
            "ENTP",
            TypeProfile::new(
                "Angle Hunter",
                "You find the third option. Told there are two ways through the \
                 pass, you ask about the river. Debate is your workshop, rules \
                 are drafts, and sacred cows strike you as under-argued. Groups \
                 that tolerate your needling end up with better plans than the \
                 ones that don't.",
                "Spar with them - it's collaboration, not conflict. Ask for \
                 their devil's-advocate pass before committing, and pin down \
                 who executes, because they'll assume someone else will.",
            ),
        ),
        (
            "ESTJ",
            TypeProfile::new(
                "Dispatch Chief",
                "You make the trains run in the storm. Roles, rosters, and \
                 deadlines appear wherever you stand, and vagueness dies in \
                 your presence. People argue with your manner and then notice \
                 they are warm, fed, and on schedule. Responsibility is not a \
                 burden to you; it's the natural state of adults.",
                "Come prepared and on time. Challenge them with facts, not \
                 feelings, accept the role you're given or renegotiate it \
                 explicitly, and say so when their system works.",
            ),
        ),
        (
            "ESFJ",
            TypeProfile::new(
                "Supply Line Host",
                "You feed the crisis. Blankets appear, introductions are made, \
                 the new volunteer stops hovering at the door because you waved \
                 them in. You track the group's relationships the way an \
                 engineer tracks load, and you mend small frictions before they \
                 crack anything that matters.",
                "Show up to what they organize; attendance is how they read \
                 care. Flag conflicts early so they can mediate, and thank them \
                 specifically, not generally.",
            ),
        ),
        (
            "ENFJ",
            TypeProfile::new(
                "Fire Barrel Speaker",
                "You turn a crowd into a crew. It's not volume, it's aim: you \
                 say the thing this group needs named, and shoulders straighten. \
                 You grow people half against their will, handing them the job \
                 that is one size too big right as they become able to wear it.",
                "Accept the stretch assignments; they see something real. Tell \
                 them plainly when they're overextending on others' behalf, and \
                 return the encouragement - speakers rarely get spoken for.",
            ),
        ),
        (
            "ENTJ",
            TypeProfile::new(
                "Crisis Marshal",
                "You take command of the vacuum. Where others see chaos you see \
                 an unassigned org chart, and filling it feels less like ambition \
                 than like tidying up. Your plans are big, staged, and resourced, \
                 and your impatience is reserved for drift, never for honest \
                 error.",
                "Bring conclusions first, reasoning on request. Push back with \
                 a better plan, not a slower one, and claim your lane clearly - \
                 they respect borders they can see.",
            ),
        ),
    ])
}

pub(super) fn default_profile() -> TypeProfile {
    TypeProfile::new(
        "The Crossroads Wanderer",
        "Your answers pull in more than one direction, and that is a finding, \
         not a failure. You borrow the loud voice when the room needs rallying \
         and the quiet corner when it needs thought; you check the gauges and \
         still hear the hunch. People like you are the hinge a team turns on, \
         hard to caricature and hard to replace.",
        "Don't box them into one role; rotate them through the work and watch \
         where they light up. Ask what they see - they've usually stood on \
         both sides of the argument already.",
    )
}
