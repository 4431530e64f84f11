use serde::{Deserialize, Serialize};

/// A single extrapolated lap from the degradation predictor.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct PredictedLap {
    pub lap: u32,
    pub predicted_wear: f64,
    pub predicted_time: f64,
    pub tyre_age: u32,
}

/// What the strategy advisor tells the pit wall: a discrete call, how sure it
/// is, why, and the predictions the call was made against.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StrategyReport {
    pub recommendation: String,
    pub confidence: u8,
    pub reasoning: String,
    pub predictions: Vec<PredictedLap>,
}
