//! Watch two minimax CPUs play each other, breaking ties at random.
use tictactoe::session::Mode;

fn main() {
    tictactoe::window::log();
    if let Err(e) = tictactoe::window::run(Mode::CpuVsCpu) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
