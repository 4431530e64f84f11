mod packets;
pub mod ws;

pub use packets::*;

pub type PitWallConnection = ws::WSConnection;
