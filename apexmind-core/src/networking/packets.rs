use serde::{Deserialize, Serialize};

pub use uuid::Uuid;

use crate::race::{RaceState, TyreCompound, Weather};
use crate::strategy::StrategyReport;

/// Events a pit wall client can send into the simulation. Each one is handled
/// to completion before the next is looked at.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum WSServerBoundMessage {
    NextLap,
    PitStop(TyreCompound),
    Reset,
    SetWeather(Weather),
    SetSafetyCar(bool),
    ToggleAutoRun,
    ChatQuery(Uuid, String), // client UUID, free-text question for the engineer
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum WSPitWallBoundMessage {
    Assignment(Uuid), // a uuid the server will use to identify the client

    StateUpdate(RaceState), // full telemetry snapshot after any change

    StrategyUpdate(StrategyReport),

    AutoRun(bool), // whether the lap timer is currently running

    ChatReply(String),
}
