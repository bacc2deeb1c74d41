//! Tic-Tac-Toe in three flavours: human vs human, human vs CPU, and CPU vs CPU.
//!
//! The CPU plays an exhaustive [minimax](https://en.wikipedia.org/wiki/Minimax)
//! search ([`minimax::MinimaxBot`]) behind a short chain of opening, win and
//! block rules ([`strategy::Cpu`]). Any game implementing
//! [`game::GameState`] can be searched the same way.
//!
//! The window frontend lives behind the `window` feature; everything else,
//! including rendering into a pixel buffer, runs headless.

use std::time::Duration;

pub mod board;
pub mod error;
pub mod game;
pub mod minimax;
pub mod render;
pub mod rules;
pub mod session;
pub mod strategy;
pub mod tictactoe;
#[cfg(feature = "window")]
pub mod window;

pub use error::{Error, Result};

// ============================================================================
// CANVAS
// ============================================================================
/// Canvas width in pixels.
pub const WIDTH: usize = 300;
/// Canvas height in pixels.
pub const HEIGHT: usize = 300;
/// Side of one square cell.
pub const CELL_SIZE: usize = WIDTH / board::SIZE;
/// Stroke width of grid lines and marks.
pub const LINE_WIDTH: usize = 5;
pub const BLACK: u32 = 0x00_00_00;
pub const WHITE: u32 = 0xFF_FF_FF;
pub const TITLE: &str = "Tic Tac Toe";
pub const FPS: usize = 60;

// ============================================================================
// GAME LOOP
// ============================================================================
/// How long a finished CPU-vs-CPU board stays on screen.
pub const GAME_OVER_PAUSE: Duration = Duration::from_secs(1);
