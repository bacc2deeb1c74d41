//! The turn loop shared by the three game modes, independent of any window.
//!
//! The frontend feeds clicks through [`Session::click`] and calls
//! [`Session::step`] once per frame. A step finishes and resets games and
//! lets a CPU mover play one mark.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, Cell, Mark};
use crate::error::Result;
use crate::rules::{self, Outcome};
use crate::strategy::{Cpu, Rule};

/// Who controls each mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    HumanVsHuman,
    /// The human plays X, the CPU answers with O.
    HumanVsCpu,
    CpuVsCpu,
}

impl Mode {
    pub const fn is_cpu(&self, mark: Mark) -> bool {
        match self {
            Self::HumanVsHuman => false,
            Self::HumanVsCpu => matches!(mark, Mark::O),
            Self::CpuVsCpu => true,
        }
    }

    /// How long a finished board stays up before the next game.
    pub const fn game_over_pause(&self) -> Duration {
        match self {
            Self::CpuVsCpu => crate::GAME_OVER_PAUSE,
            Self::HumanVsHuman | Self::HumanVsCpu => Duration::ZERO,
        }
    }
}

/// Something that happened during a click or a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A mark was placed. `rule` is set for CPU moves.
    Placed {
        cell: Cell,
        mark: Mark,
        rule: Option<Rule>,
    },
    Finished(Outcome),
    Reset,
}

#[derive(Debug)]
pub struct Session<R = SmallRng> {
    mode: Mode,
    board: Board,
    current: Mark,
    cpu: Option<Cpu<R>>,
    finished: Option<(Outcome, Instant)>,
}

impl Session<SmallRng> {
    /// A fresh session with the stock CPU for `mode`.
    pub fn new(mode: Mode) -> Self {
        let cpu = match mode {
            Mode::HumanVsHuman => None,
            Mode::HumanVsCpu => Some(Cpu::opponent()),
            Mode::CpuVsCpu => Some(Cpu::self_play_from_entropy()),
        };
        Self::with_cpu(mode, cpu)
    }
}

impl<R: Rng> Session<R> {
    /// A fresh session driving CPU marks with `cpu`. Without a CPU, CPU
    /// marks never move.
    pub fn with_cpu(mode: Mode, cpu: Option<Cpu<R>>) -> Self {
        Self {
            mode,
            board: Board::new(),
            current: Mark::X,
            cpu,
            finished: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark to move next.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// The outcome being shown while a finished board is held.
    pub fn finished(&self) -> Option<Outcome> {
        self.finished.map(|(outcome, _)| outcome)
    }

    /// A human click on `cell`.
    ///
    /// Ignored when a CPU is to move, the game is over, or the cell is
    /// taken.
    pub fn click(&mut self, cell: Cell) -> Option<Event> {
        if self.mode.is_cpu(self.current) || rules::outcome(&self.board).is_some() {
            return None;
        }
        self.board.place(cell, self.current).ok()?;

        let event = Event::Placed {
            cell,
            mark: self.current,
            rule: None,
        };
        self.current = self.current.opponent();
        Some(event)
    }

    /// Advances the loop by one frame.
    ///
    /// Errors only if the CPU is asked to move on a board with no moves,
    /// which the terminal check before it rules out.
    pub fn step(&mut self, now: Instant) -> Result<Vec<Event>> {
        let mut events = Vec::new();

        if let Some((_, at)) = self.finished {
            if now.duration_since(at) < self.mode.game_over_pause() {
                return Ok(events);
            }
            self.reset();
            events.push(Event::Reset);
        } else if let Some(outcome) = rules::outcome(&self.board) {
            log::info!("{}", outcome);
            events.push(Event::Finished(outcome));
            if !self.mode.game_over_pause().is_zero() {
                self.finished = Some((outcome, now));
                return Ok(events);
            }
            self.reset();
            events.push(Event::Reset);
        }

        if !self.mode.is_cpu(self.current) {
            return Ok(events);
        }
        let Some(cpu) = self.cpu.as_mut() else {
            return Ok(events);
        };

        let decision = cpu.select(&self.board, self.current)?;
        self.board.place(decision.cell, self.current)?;
        events.push(Event::Placed {
            cell: decision.cell,
            mark: self.current,
            rule: Some(decision.rule),
        });
        self.current = self.current.opponent();

        Ok(events)
    }

    /// Clears the board and hands the move back to X.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Mark::X;
        self.finished = None;
    }
}
