use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GLOBAL_CONFIG;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TyreCompound {
    Soft,
    Medium,
    Hard,
    Intermediate,
    Wet,
}

impl fmt::Display for TyreCompound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TyreCompound::Soft => "Soft",
            TyreCompound::Medium => "Medium",
            TyreCompound::Hard => "Hard",
            TyreCompound::Intermediate => "Intermediate",
            TyreCompound::Wet => "Wet",
        };
        write!(f, "{}", name)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weather {
    Dry,
    Wet,
}

/// One append-only log entry per completed lap; the degradation predictor
/// reads nothing else.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DegradationRecord {
    pub lap: u32,
    pub tyre_age: u32,
    pub wear: f64,
    pub lap_time: f64,
    pub compound: TyreCompound,
}

/// The whole telemetry picture for the single simulated car. Only the lap
/// model, the pit stop and a session reset mutate this (weather and safety
/// car are externally set flags); everything else reads snapshots.
///
/// Deserialization is strict: a payload with fields we don't know about is
/// rejected rather than silently absorbed.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct RaceState {
    pub lap: u32,
    pub total_laps: u32,
    pub speed: f64,
    pub battery: f64,
    pub tyre_wear: f64,
    pub tyre_temp: f64,
    pub fuel: f64,
    pub position: u8,
    pub tyre_compound: TyreCompound,
    pub weather: Weather,
    pub safety_car: bool,
    pub lap_times: Vec<f64>,
    pub tyre_age: u32,
    pub pit_stops: u32,
    pub historical_degradation: Vec<DegradationRecord>,
}

impl RaceState {
    pub fn new() -> RaceState {
        RaceState {
            lap: 0,
            total_laps: GLOBAL_CONFIG.total_laps,
            speed: 280.0,
            battery: 100.0,
            tyre_wear: 0.0,
            tyre_temp: 85.0,
            fuel: 100.0,
            position: GLOBAL_CONFIG.starting_position,
            tyre_compound: TyreCompound::Medium,
            weather: Weather::Dry,
            safety_car: false,
            lap_times: Vec::new(),
            tyre_age: 0,
            pit_stops: 0,
            historical_degradation: Vec::new(),
        }
    }

    pub fn laps_remaining(&self) -> u32 {
        self.total_laps.saturating_sub(self.lap)
    }

    pub fn is_finished(&self) -> bool {
        self.lap >= self.total_laps
    }

    /// Mean of the last `window` lap times, or None before any lap completes.
    pub fn average_recent_pace(&self, window: usize) -> Option<f64> {
        if self.lap_times.is_empty() {
            return None;
        }
        let start = self.lap_times.len().saturating_sub(window);
        let tail = &self.lap_times[start..];
        Some(tail.iter().sum::<f64>() / tail.len() as f64)
    }
}

impl Default for RaceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_starts_on_the_grid() {
        let state = RaceState::new();
        assert_eq!(state.lap, 0);
        assert_eq!(state.total_laps, 50);
        assert_eq!(state.position, 3);
        assert_eq!(state.tyre_compound, TyreCompound::Medium);
        assert_eq!(state.weather, Weather::Dry);
        assert!(!state.safety_car);
        assert!(state.lap_times.is_empty());
        assert!(state.historical_degradation.is_empty());
        assert_eq!(state.laps_remaining(), 50);
        assert!(!state.is_finished());
    }

    #[test]
    fn state_survives_a_json_round_trip() {
        let mut state = RaceState::new();
        state.lap = 7;
        state.tyre_wear = 12.25;
        state.lap_times = vec![83.1, 82.9];
        state.historical_degradation.push(DegradationRecord {
            lap: 7,
            tyre_age: 7,
            wear: 12.25,
            lap_time: 82.9,
            compound: TyreCompound::Medium,
        });

        let json = serde_json::to_string(&state).unwrap();
        let back: RaceState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lap, 7);
        assert_eq!(back.tyre_wear, 12.25);
        assert_eq!(back.lap_times, vec![83.1, 82.9]);
        assert_eq!(back.historical_degradation.len(), 1);
        assert_eq!(back.historical_degradation[0].compound, TyreCompound::Medium);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut value = serde_json::to_value(RaceState::new()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("downforce".to_string(), serde_json::json!(9000));

        let result: Result<RaceState, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn average_recent_pace_uses_the_tail() {
        let mut state = RaceState::new();
        assert_eq!(state.average_recent_pace(3), None);

        state.lap_times = vec![90.0, 84.0, 85.0, 86.0];
        assert_eq!(state.average_recent_pace(3), Some(85.0));
        // shorter history than the window just averages what exists
        state.lap_times = vec![84.0];
        assert_eq!(state.average_recent_pace(3), Some(84.0));
    }
}
