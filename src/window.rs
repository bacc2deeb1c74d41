//! The desktop frontend: a `minifb` window around a [`Session`].

use std::time::Instant;

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::{Error, Result};
use crate::render::{cell_at, draw_board, Canvas};
use crate::session::{Event, Mode, Session};
use crate::{FPS, HEIGHT, TITLE, WIDTH};

/// Initialize terminal logging at INFO.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    // Fails only if a logger is already installed, which then keeps working.
    let _ = simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
}

/// Opens the window and plays `mode` until the window is closed or Escape
/// is pressed.
pub fn run(mode: Mode) -> Result<()> {
    let mut window = Window::new(TITLE, WIDTH, HEIGHT, WindowOptions::default())
        .map_err(|e| Error::Window(e.to_string()))?;
    window.set_target_fps(FPS);

    let mut session = Session::new(mode);
    let mut canvas = Canvas::default();
    let mut was_down = false;
    log::info!("{:<32}{:?}", "starting", mode);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        // minifb reports button state, so a click is a press edge.
        let down = window.get_mouse_down(MouseButton::Left);
        if down && !was_down {
            let cell = window
                .get_mouse_pos(MouseMode::Discard)
                .and_then(|(x, y)| cell_at(x, y));
            if let Some(Event::Placed { cell, mark, .. }) = cell.and_then(|c| session.click(c)) {
                log::debug!("{:<32}{}", format!("{} plays {}", mark, cell), "by click");
            }
        }
        was_down = down;

        draw_board(&mut canvas, session.board());
        session.step(Instant::now())?;

        window
            .update_with_buffer(canvas.pixels(), canvas.width(), canvas.height())
            .map_err(|e| Error::Window(e.to_string()))?;
    }

    log::info!("{:<32}{:?}", "closing", mode);
    Ok(())
}
