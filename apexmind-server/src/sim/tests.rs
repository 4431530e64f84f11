use apexmind_core::noise::{FixedNoise, ThreadRngNoise};
use apexmind_core::race::{RaceState, TyreCompound, Weather};
use apexmind_core::GLOBAL_CONFIG;

use crate::sim::constants::*;
use crate::sim::{pit_stop, run_lap};

fn get_grid_state() -> RaceState {
    RaceState::new()
}

#[test]
fn test_first_lap_from_the_grid() {
    let state = get_grid_state();
    let next = run_lap(&state, &mut FixedNoise).expect("lap 1 of 50 should simulate");

    assert_eq!(next.lap, 1);
    assert_eq!(next.tyre_age, 1);

    // the first-lap wear term carries no noise, so it is exact
    let expected_wear =
        GLOBAL_CONFIG.base_degradation * (1.0 + (1.0f64 / WEAR_GROWTH_LAPS).powf(WEAR_GROWTH_EXPONENT));
    assert!((next.tyre_wear - expected_wear).abs() < 1e-9);

    assert_eq!(next.lap_times.len(), 1);
    let lap_time = next.lap_times[0];
    let wear_penalty = (next.tyre_wear / 100.0) * WEAR_TIME_PENALTY;
    assert!(lap_time >= GLOBAL_CONFIG.base_lap_time - 0.5);
    assert!(lap_time <= GLOBAL_CONFIG.base_lap_time + 0.5 + wear_penalty);

    // with midpoint noise the remaining fields are exact too
    assert_eq!(next.battery, 98.0);
    assert!((next.fuel - 98.2).abs() < 1e-9);
}

#[test]
fn test_telemetry_stays_in_range_over_a_full_stint() {
    let mut state = get_grid_state();
    state.total_laps = 100;
    let mut noise = ThreadRngNoise;

    for _ in 0..100 {
        state = run_lap(&state, &mut noise).expect("laps remain");
        assert!(state.tyre_wear >= 0.0 && state.tyre_wear <= 100.0);
        assert!(state.tyre_temp >= TYRE_TEMP_MIN && state.tyre_temp <= TYRE_TEMP_MAX);
        assert!(state.battery >= 0.0 && state.battery <= 100.0);
        assert!(state.fuel >= 0.0 && state.fuel <= 100.0);
        assert_eq!(state.lap_times.len() as u32, state.lap);
        assert_eq!(state.historical_degradation.len() as u32, state.lap);
    }

    // an old set on a long stint ends up fully worn, clamped exactly
    assert_eq!(state.tyre_wear, 100.0);
}

#[test]
fn test_wear_grows_and_reserves_shrink() {
    let mut state = get_grid_state();
    let mut noise = ThreadRngNoise;

    for _ in 0..10 {
        let next = run_lap(&state, &mut noise).expect("laps remain");
        assert!(next.tyre_wear >= state.tyre_wear);
        assert!(next.battery <= state.battery);
        assert!(next.fuel <= state.fuel);
        state = next;
    }
}

#[test]
fn test_advance_past_the_final_lap_is_a_no_op() {
    let mut state = get_grid_state();
    state.total_laps = 5;

    for _ in 0..5 {
        state = run_lap(&state, &mut FixedNoise).expect("laps remain");
    }
    assert_eq!(state.lap, 5);

    // the sixth call has nothing to do
    assert!(run_lap(&state, &mut FixedNoise).is_none());
    assert_eq!(state.lap, 5);
    assert_eq!(state.lap_times.len(), 5);
    assert_eq!(state.historical_degradation.len(), 5);
}

#[test]
fn test_wet_running() {
    let mut state = get_grid_state();
    state.weather = Weather::Wet;

    let next = run_lap(&state, &mut FixedNoise).expect("laps remain");

    // speed ratchets down while wet
    assert_eq!(next.speed, 280.0 - WET_SPEED_DROP);

    // flat extra wear on top of the degradation curve
    let dry_wear = GLOBAL_CONFIG.base_degradation
        * (1.0 + (1.0f64 / WEAR_GROWTH_LAPS).powf(WEAR_GROWTH_EXPONENT));
    assert!((next.tyre_wear - (dry_wear + WET_EXTRA_WEAR)).abs() < 1e-9);

    // and the lap time carries the wet penalty
    let expected_time =
        GLOBAL_CONFIG.base_lap_time + (next.tyre_wear / 100.0) * WEAR_TIME_PENALTY + WET_TIME_PENALTY;
    assert!((next.lap_times[0] - expected_time).abs() < 1e-9);
}

#[test]
fn test_wet_speed_never_drops_below_the_floor() {
    let mut state = get_grid_state();
    state.weather = Weather::Wet;
    state.speed = 205.0;

    let next = run_lap(&state, &mut FixedNoise).expect("laps remain");
    assert_eq!(next.speed, WET_SPEED_FLOOR);
}

#[test]
fn test_pit_stop_resets_the_tyres() {
    let mut state = get_grid_state();
    state.tyre_wear = 63.0;
    state.tyre_age = 18;
    state.position = 5;
    let old_pit_stops = state.pit_stops;

    let (next, time_lost) = pit_stop(&state, TyreCompound::Hard);

    assert_eq!(next.tyre_wear, 0.0);
    assert_eq!(next.tyre_age, 0);
    assert_eq!(next.tyre_compound, TyreCompound::Hard);
    assert_eq!(next.pit_stops, old_pit_stops + 1);
    assert_eq!(next.position, 7);
    assert_eq!(time_lost, GLOBAL_CONFIG.pit_time_loss);
}

#[test]
fn test_pit_stop_cannot_drop_below_last_place() {
    let mut state = get_grid_state();
    state.position = 19;

    let (next, _) = pit_stop(&state, TyreCompound::Soft);
    assert_eq!(next.position, LAST_PLACE);
}

#[test]
fn test_tyre_age_resets_exactly_with_wear() {
    let mut state = get_grid_state();
    let mut noise = ThreadRngNoise;
    for _ in 0..8 {
        state = run_lap(&state, &mut noise).expect("laps remain");
    }
    assert!(state.tyre_wear > 0.0);
    assert!(state.tyre_age > 0);

    let (after_stop, _) = pit_stop(&state, TyreCompound::Medium);
    assert_eq!(after_stop.tyre_wear, 0.0);
    assert_eq!(after_stop.tyre_age, 0);
    // history is untouched by the stop itself
    assert_eq!(after_stop.lap_times.len(), state.lap_times.len());
    assert_eq!(
        after_stop.historical_degradation.len(),
        state.historical_degradation.len()
    );
}
