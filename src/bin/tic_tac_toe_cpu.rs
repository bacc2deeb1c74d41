//! Play X against the minimax CPU playing O.
use tictactoe::session::Mode;

fn main() {
    tictactoe::window::log();
    if let Err(e) = tictactoe::window::run(Mode::HumanVsCpu) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
