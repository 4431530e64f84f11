use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub ws_server_addr: String,
    pub session_tick_ms: u64,
    pub auto_run_interval_ms: u64,
    pub total_laps: u32,
    pub starting_position: u8,
    pub base_degradation: f64,
    pub base_lap_time: f64,
    pub pit_time_loss: f64,
    pub prediction_window: usize,
    pub prediction_horizon: usize,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("ws_server_addr", "127.0.0.1:24247")?
            .set_default("session_tick_ms", 30)?
            .set_default("auto_run_interval_ms", 1500)?
            .set_default("total_laps", 50)?
            .set_default("starting_position", 3)?
            .set_default("base_degradation", 1.2)?
            .set_default("base_lap_time", 82.5)?
            .set_default("pit_time_loss", 22.5)?
            .set_default("prediction_window", 5)?
            .set_default("prediction_horizon", 10)?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}
