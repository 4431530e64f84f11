use apexmind_core::networking::{Uuid, WSPitWallBoundMessage};
use apexmind_core::GLOBAL_CONFIG;

use super::RaceSession;

/// Which canned engineer answer a free-text question routes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatIntent {
    PitStrategy,
    TyreStatus,
    Pace,
    StrategySummary,
    Position,
    Fallback,
}

// fixed keyword lookup checked in order; there is no language understanding
// here and there isn't meant to be
pub fn classify(message: &str) -> ChatIntent {
    let message = message.to_lowercase();

    if message.contains("pit") || message.contains("stop") {
        ChatIntent::PitStrategy
    } else if message.contains("tyre") || message.contains("tire") {
        ChatIntent::TyreStatus
    } else if message.contains("lap time") || message.contains("pace") {
        ChatIntent::Pace
    } else if message.contains("strategy") {
        ChatIntent::StrategySummary
    } else if message.contains("position") {
        ChatIntent::Position
    } else {
        ChatIntent::Fallback
    }
}

impl RaceSession {
    // every reply is templated from numbers the engine has already computed;
    // it goes back only to the client that asked
    pub fn answer_chat_query(&mut self, id: Uuid, message: String) {
        let response = match classify(&message) {
            ChatIntent::PitStrategy => {
                let report = self.current_strategy();
                format!("{} - {}", report.recommendation, report.reasoning)
            }
            ChatIntent::TyreStatus => format!(
                "Current tyre wear is {:.1}%. {} compound with {} laps of age.",
                self.state.tyre_wear, self.state.tyre_compound, self.state.tyre_age
            ),
            ChatIntent::Pace => match self.state.average_recent_pace(3) {
                Some(avg) => format!(
                    "Current pace is {:.2}s. Optimal is {:.1}s. Degradation: {:.2}s.",
                    avg,
                    GLOBAL_CONFIG.base_lap_time,
                    avg - GLOBAL_CONFIG.base_lap_time
                ),
                None => "No lap data yet. Complete some laps first!".to_string(),
            },
            ChatIntent::StrategySummary => format!(
                "We're on a {}-stop strategy. {} laps remaining.",
                self.state.pit_stops + 1,
                self.state.laps_remaining()
            ),
            ChatIntent::Position => format!(
                "Currently P{}. Push to gain positions or manage tyres strategically.",
                self.state.position
            ),
            ChatIntent::Fallback => {
                "I can help with pit strategy, tyre analysis, lap times, and race positions. \
                 What would you like to know?"
                    .to_string()
            }
        };

        if let Some(conn) = self.ws_connections.get_mut(&id) {
            conn.push_outgoing_message(WSPitWallBoundMessage::ChatReply(response));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_route_to_their_intent() {
        assert_eq!(classify("When should we pit?"), ChatIntent::PitStrategy);
        assert_eq!(classify("one more STOP?"), ChatIntent::PitStrategy);
        assert_eq!(classify("how are the tyres holding up"), ChatIntent::TyreStatus);
        assert_eq!(classify("tire temps?"), ChatIntent::TyreStatus);
        assert_eq!(classify("what's our lap time"), ChatIntent::Pace);
        assert_eq!(classify("talk to me about pace"), ChatIntent::Pace);
        assert_eq!(classify("what's the strategy"), ChatIntent::StrategySummary);
        assert_eq!(classify("track position please"), ChatIntent::Position);
        assert_eq!(classify("hello there"), ChatIntent::Fallback);
    }

    #[test]
    fn earlier_keywords_win_when_several_match() {
        // "pit" outranks "strategy", same order the keywords are checked in
        assert_eq!(classify("pit strategy?"), ChatIntent::PitStrategy);
    }
}
