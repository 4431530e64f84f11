use apexmind_core::noise::Noise;
use apexmind_core::race::{DegradationRecord, RaceState, TyreCompound, Weather};
use apexmind_core::GLOBAL_CONFIG;

pub mod constants;
#[cfg(test)]
mod tests;

use constants::*;

/* Given the current race state, compute and return what the next lap's
 * telemetry will be. Past the final lap there is nothing left to simulate,
 * so the caller gets None and keeps the state it has. */
pub fn run_lap(state: &RaceState, noise: &mut dyn Noise) -> Option<RaceState> {
    if state.is_finished() {
        return None;
    }

    let mut next = state.clone();
    next.lap += 1;
    next.tyre_age += 1;

    // wear grows superlinearly with tyre age; running wet rubber up to temp
    // on a soaked track costs a little extra on top
    let growth = 1.0 + (next.tyre_age as f64 / WEAR_GROWTH_LAPS).powf(WEAR_GROWTH_EXPONENT);
    let mut wear = state.tyre_wear + GLOBAL_CONFIG.base_degradation * growth;
    if state.weather == Weather::Wet {
        wear += WET_EXTRA_WEAR;
    }
    next.tyre_wear = wear.min(100.0);

    next.speed = match state.weather {
        // while it rains the car only ever slows, down to a floor
        Weather::Wet => (state.speed - WET_SPEED_DROP).max(WET_SPEED_FLOOR),
        Weather::Dry => {
            DRY_BASE_SPEED - SPEED_WEAR_COEFFICIENT * next.tyre_wear + noise.uniform(-5.0, 5.0)
        }
    };

    let temp = BASE_TYRE_TEMP + TEMP_AGE_COEFFICIENT * next.tyre_age as f64
        - TEMP_WEAR_COEFFICIENT * next.tyre_wear
        + noise.uniform(-3.0, 3.0);
    next.tyre_temp = temp.clamp(TYRE_TEMP_MIN, TYRE_TEMP_MAX);

    next.battery = (state.battery - noise.uniform(1.5, 2.5)).max(0.0);
    next.fuel = (state.fuel - noise.uniform(1.6, 2.0)).max(0.0);

    let wear_penalty = (next.tyre_wear / 100.0) * WEAR_TIME_PENALTY;
    let weather_penalty = if state.weather == Weather::Wet {
        WET_TIME_PENALTY
    } else {
        0.0
    };
    let lap_time =
        GLOBAL_CONFIG.base_lap_time + wear_penalty + weather_penalty + noise.uniform(-0.5, 0.5);

    next.lap_times.push(lap_time);
    next.historical_degradation.push(DegradationRecord {
        lap: next.lap,
        tyre_age: next.tyre_age,
        wear: next.tyre_wear,
        lap_time,
        compound: next.tyre_compound,
    });

    Some(next)
}

/* Service the car: fresh rubber of the requested compound, and the places
 * conceded while stationary baked into the running order. Returns the new
 * state along with the time spent in the pit lane. */
pub fn pit_stop(state: &RaceState, new_compound: TyreCompound) -> (RaceState, f64) {
    let mut next = state.clone();
    next.tyre_wear = 0.0;
    next.tyre_age = 0;
    next.tyre_compound = new_compound;
    next.pit_stops += 1;
    next.position = (state.position + PIT_POSITIONS_LOST).min(LAST_PLACE);

    (next, GLOBAL_CONFIG.pit_time_loss)
}
