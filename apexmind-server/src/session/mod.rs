use std::collections::HashMap;
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

use apexmind_core::networking::{
    PitWallConnection, Uuid, WSPitWallBoundMessage, WSServerBoundMessage,
};
use apexmind_core::noise::{Noise, ThreadRngNoise};
use apexmind_core::race::{RaceState, TyreCompound};
use apexmind_core::strategy::StrategyReport;
use apexmind_core::GLOBAL_CONFIG;

use crate::predictor::predict_future_performance;
use crate::sim;
use crate::strategy::recommend;

mod chat;

/// Owns the one RaceState of the session and everything that may touch it.
/// Events are handled one at a time inside the loop, so no two mutations can
/// ever overlap.
pub struct RaceSession {
    ws_server: TcpListener,
    ws_connections: HashMap<Uuid, PitWallConnection>,
    state: RaceState,
    auto_run: bool,
    last_auto_advance: Instant,
    noise: Box<dyn Noise>,
    dirty: bool,
}

impl RaceSession {
    pub fn new(ws_addr: String) -> RaceSession {
        let ws_server =
            TcpListener::bind(&ws_addr).expect("could not bind to configured websocket address");
        println!("race session now listening on {}", ws_addr);

        RaceSession {
            ws_server,
            ws_connections: HashMap::new(),
            state: RaceState::new(),
            auto_run: false,
            last_auto_advance: Instant::now(),
            noise: Box::new(ThreadRngNoise),
            dirty: false,
        }
    }

    // WARNING: this function never returns
    pub fn start_loop(&mut self) {
        let tick_duration = Duration::from_millis(GLOBAL_CONFIG.session_tick_ms);
        let auto_run_interval = Duration::from_millis(GLOBAL_CONFIG.auto_run_interval_ms);

        loop {
            let start_time = Instant::now();

            self.acquire_any_pit_wall_connections();

            // poll for pit wall events and queue them up
            // TODO: drop connections whose socket has closed instead of
            // keeping them in the map forever
            self.ws_connections
                .iter_mut()
                .for_each(|(_, con)| con.fetch_incoming_packets());

            self.process_ws_packets();

            // while enabled, the auto-run timer injects an advance at a fixed
            // cadence; once the chequered flag is out it switches itself off
            if self.auto_run && self.last_auto_advance.elapsed() >= auto_run_interval {
                self.advance_lap();
                self.last_auto_advance = Instant::now();
                if self.state.is_finished() {
                    self.auto_run = false;
                    self.broadcast_ws(WSPitWallBoundMessage::AutoRun(false));
                }
            }

            self.sync_state();

            // empty outgoing packet queue and send to clients
            self.ws_connections
                .iter_mut()
                .for_each(|(_, con)| con.sync_outgoing());

            // wait out the rest of the tick
            let remaining_tick_duration = tick_duration
                .checked_sub(start_time.elapsed())
                .unwrap_or_default();
            thread::sleep(remaining_tick_duration);
        }
    }

    // creates a websocket for any new pit wall connections and brings them up
    // to date with the session
    fn acquire_any_pit_wall_connections(&mut self) {
        self.ws_server
            .set_nonblocking(true)
            .expect("non blocking should be ok");

        let mut new_uuids: Vec<Uuid> = Vec::new();

        if let Some(stream_result) = self.ws_server.incoming().next() {
            if let Ok(stream) = stream_result {
                let id = Uuid::new_v4();
                let connection = PitWallConnection::new(stream);
                self.ws_connections.insert(id, connection);
                new_uuids.push(id);
                println!("pit wall client {} connected", id);
            }
        }

        self.ws_server
            .set_nonblocking(false)
            .expect("non blocking should be ok");

        for id in new_uuids {
            let snapshot = self.state.clone();
            let report = self.current_strategy();
            let auto_run = self.auto_run;

            let conn = self.ws_connections.get_mut(&id).unwrap();
            conn.push_outgoing_message(WSPitWallBoundMessage::Assignment(id));
            conn.push_outgoing_message(WSPitWallBoundMessage::StateUpdate(snapshot));
            conn.push_outgoing_message(WSPitWallBoundMessage::StrategyUpdate(report));
            conn.push_outgoing_message(WSPitWallBoundMessage::AutoRun(auto_run));
        }
    }

    // handle every event in received order, each one fully before the next
    fn process_ws_packets(&mut self) {
        let mut events: Vec<WSServerBoundMessage> = Vec::new();
        for (_id, connection) in self.ws_connections.iter_mut() {
            while let Some(packet) = connection.pop_incoming() {
                events.push(packet);
            }
        }

        for event in events {
            match event {
                WSServerBoundMessage::NextLap => self.advance_lap(),
                WSServerBoundMessage::PitStop(compound) => self.pit_stop(compound),
                WSServerBoundMessage::Reset => self.reset(),
                WSServerBoundMessage::SetWeather(weather) => {
                    if self.state.weather != weather {
                        println!("weather set to {:?}", weather);
                        self.state.weather = weather;
                        self.dirty = true;
                    }
                }
                WSServerBoundMessage::SetSafetyCar(deployed) => {
                    if self.state.safety_car != deployed {
                        println!("safety car {}", if deployed { "deployed" } else { "in" });
                        self.state.safety_car = deployed;
                        self.dirty = true;
                    }
                }
                WSServerBoundMessage::ToggleAutoRun => {
                    self.auto_run = !self.auto_run;
                    self.last_auto_advance = Instant::now();
                    self.broadcast_ws(WSPitWallBoundMessage::AutoRun(self.auto_run));
                }
                WSServerBoundMessage::ChatQuery(id, message) => {
                    self.answer_chat_query(id, message)
                }
            }
        }
    }

    // advance the simulation by one lap; at or past the final lap the state
    // is left exactly as it is
    fn advance_lap(&mut self) {
        if let Some(next) = sim::run_lap(&self.state, self.noise.as_mut()) {
            if let Some(lap_time) = next.lap_times.last() {
                println!(
                    "lap {}/{}: {:.3}s, wear {:.1}%",
                    next.lap, next.total_laps, lap_time, next.tyre_wear
                );
            }
            self.state = next;
            self.dirty = true;
        } else {
            println!("race already complete; ignoring advance");
        }
    }

    fn pit_stop(&mut self, compound: TyreCompound) {
        let (next, time_lost) = sim::pit_stop(&self.state, compound);
        println!(
            "pit stop for {}s: {:.1}s in the lane, out in P{}",
            compound, time_lost, next.position
        );
        self.state = next;
        self.dirty = true;
    }

    fn reset(&mut self) {
        println!("session reset");
        self.state = RaceState::new();
        self.auto_run = false;
        self.broadcast_ws(WSPitWallBoundMessage::AutoRun(false));
        self.dirty = true;
    }

    fn current_strategy(&mut self) -> StrategyReport {
        let predictions = predict_future_performance(
            &self.state,
            GLOBAL_CONFIG.prediction_horizon,
            self.noise.as_mut(),
        );
        recommend(&self.state, predictions)
    }

    // queue up sending updated telemetry and a fresh strategy call, but only
    // when something actually changed this tick
    fn sync_state(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        let snapshot = self.state.clone();
        let report = self.current_strategy();
        self.broadcast_ws(WSPitWallBoundMessage::StateUpdate(snapshot));
        self.broadcast_ws(WSPitWallBoundMessage::StrategyUpdate(report));
    }

    // sends a message to all connected pit wall clients
    fn broadcast_ws(&mut self, message: WSPitWallBoundMessage) {
        self.ws_connections.iter_mut().for_each(|(_, con)| {
            con.push_outgoing_message(message.clone());
        });
    }
}
