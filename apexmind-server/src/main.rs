use apexmind_core::GLOBAL_CONFIG;

mod predictor;
mod session;
mod sim;
mod strategy;

fn main() {
    // kick off the session loop
    let ws_addr = GLOBAL_CONFIG.ws_server_addr.clone();
    session::RaceSession::new(ws_addr).start_loop();
}
