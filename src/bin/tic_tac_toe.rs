//! Two players take turns clicking cells; X moves first.
use tictactoe::session::Mode;

fn main() {
    tictactoe::window::log();
    if let Err(e) = tictactoe::window::run(Mode::HumanVsHuman) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
