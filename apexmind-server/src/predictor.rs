use apexmind_core::noise::Noise;
use apexmind_core::race::RaceState;
use apexmind_core::strategy::PredictedLap;
use apexmind_core::GLOBAL_CONFIG;

use crate::sim::constants::WEAR_TIME_PENALTY;

/* Extrapolate wear and lap time `laps_ahead` laps forward from the trailing
 * window of the degradation log. Fewer than three completed laps is not
 * enough signal to fit a trend; that case yields an empty forecast rather
 * than an error. */
pub fn predict_future_performance(
    state: &RaceState,
    laps_ahead: usize,
    noise: &mut dyn Noise,
) -> Vec<PredictedLap> {
    let history = &state.historical_degradation;
    if history.len() < 3 {
        return Vec::new();
    }

    let window_start = history.len().saturating_sub(GLOBAL_CONFIG.prediction_window);
    let recent = &history[window_start..];

    let wear_deltas: Vec<f64> = recent
        .windows(2)
        .map(|pair| pair[1].wear - pair[0].wear)
        .collect();
    let avg_wear_rate = if wear_deltas.is_empty() {
        GLOBAL_CONFIG.base_degradation
    } else {
        wear_deltas.iter().sum::<f64>() / wear_deltas.len() as f64
    };

    (1..=laps_ahead)
        .map(|i| {
            let predicted_wear = (state.tyre_wear + avg_wear_rate * i as f64).min(100.0);
            let predicted_time = GLOBAL_CONFIG.base_lap_time
                + (predicted_wear / 100.0) * WEAR_TIME_PENALTY
                + noise.uniform(-0.3, 0.3);

            PredictedLap {
                lap: state.lap + i as u32,
                predicted_wear,
                predicted_time,
                tyre_age: state.tyre_age + i as u32,
            }
        })
        .collect()
}
