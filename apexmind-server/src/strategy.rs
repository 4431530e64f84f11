use apexmind_core::race::{RaceState, TyreCompound, Weather};
use apexmind_core::strategy::{PredictedLap, StrategyReport};

/* The advisor is a fixed decision table over wear, laps remaining and the
 * track conditions. Rows are evaluated top to bottom and the last matching
 * row wins, which is what makes the bottom two rows overrides: wrong tyres
 * in the rain beats any wear-based call, and a safety car beats even that. */
pub fn recommend(state: &RaceState, predictions: Vec<PredictedLap>) -> StrategyReport {
    let wear = state.tyre_wear;
    let laps_remaining = state.laps_remaining();

    let rows: [(bool, &str, u8, &str); 8] = [
        (
            wear < 30.0,
            "STAY OUT",
            95,
            "Tyres in excellent condition. No performance loss detected.",
        ),
        (
            (30.0..55.0).contains(&wear) && laps_remaining > 15,
            "STAY OUT 3-5 LAPS",
            78,
            "Tyres degrading but still competitive. Monitor closely.",
        ),
        (
            (30.0..55.0).contains(&wear) && laps_remaining <= 15,
            "STAY OUT",
            85,
            "Too few laps remaining. Push current tyres to the end.",
        ),
        (
            (55.0..75.0).contains(&wear) && laps_remaining > 10,
            "PIT WITHIN 2 LAPS",
            88,
            "Significant tyre wear detected. Fresh tyres will gain 1-1.5s/lap.",
        ),
        (
            (55.0..75.0).contains(&wear) && laps_remaining <= 10,
            "PIT NOW (OPTIONAL)",
            65,
            "High wear but few laps left. Marginal call.",
        ),
        (
            wear >= 75.0,
            "PIT NOW!",
            98,
            "Critical tyre wear! Losing 2+ seconds per lap. Immediate pit required.",
        ),
        (
            state.weather == Weather::Wet && state.tyre_compound != TyreCompound::Wet,
            "PIT NOW - WRONG TYRES!",
            99,
            "Wet conditions require wet tyres immediately for safety.",
        ),
        (
            state.safety_car,
            "PIT NOW (SAFETY CAR)",
            95,
            "Safety car deployed! Free pit stop opportunity.",
        ),
    ];

    let (_, recommendation, confidence, reasoning) = rows
        .into_iter()
        .filter(|(matched, ..)| *matched)
        .last()
        .expect("the wear rows alone cover every state");

    StrategyReport {
        recommendation: recommendation.to_string(),
        confidence,
        reasoning: reasoning.to_string(),
        predictions,
    }
}
