pub mod networking;
pub mod noise;
pub mod race;
pub mod strategy;
mod settings;

pub use settings::GLOBAL_CONFIG;
