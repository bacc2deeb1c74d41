//! The 3x3 grid and the marks that fill it.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::game::Player;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// The mark a player puts on the board. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// X maximizes, O minimizes.
    pub const fn player(self) -> Player {
        match self {
            Self::X => Player::Maximizing,
            Self::O => Player::Minimizing,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square of the board, addressed by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const CENTER: Cell = Cell::new(1, 1);

    /// The four edge cells, in the order the opening book tries them.
    pub const EDGES: [Cell; 4] = [
        Cell::new(0, 1),
        Cell::new(1, 0),
        Cell::new(1, 2),
        Cell::new(2, 1),
    ];

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELLS).map(Self::from_index)
    }

    pub const fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    pub const fn index(&self) -> usize {
        self.row * SIZE + self.col
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of optional marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Mark>; SIZE]; SIZE],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells[cell.row][cell.col]
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Puts `mark` on an empty cell.
    pub fn place(&mut self, cell: Cell, mark: Mark) -> Result<()> {
        if !self.is_empty(cell) {
            return Err(Error::Occupied { cell });
        }
        self.cells[cell.row][cell.col] = Some(mark);
        Ok(())
    }

    /// Like [`Board::place`], but returns a modified copy and overwrites
    /// whatever was there. Used to try moves out.
    pub fn with(&self, cell: Cell, mark: Mark) -> Self {
        let mut board = *self;
        board.cells[cell.row][cell.col] = Some(mark);
        board
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|&cell| self.is_empty(cell))
    }

    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        Cell::all().filter(|&cell| self.get(cell) == Some(mark)).count()
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let symbol = |row: usize, col: usize| {
            self.cells[row][col].map_or(' ', Mark::symbol)
        };
        for row in 0..SIZE {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            writeln!(f, "{} | {} | {}", symbol(row, 0), symbol(row, 1), symbol(row, 2))?;
        }
        Ok(())
    }
}

/// Parses nine cells in row-major order: `X`, `O`, and `.` or `_` for
/// empty. Whitespace, `/` and `|` are ignored, so `"XO./.X./..O"` and a
/// three-line layout both work.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut board = Board::new();
        let mut count = 0;

        for (position, character) in s.char_indices() {
            let mark = match character {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' => None,
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                        context: s.to_string(),
                    })
                }
            };
            if count < CELLS {
                let cell = Cell::from_index(count);
                board.cells[cell.row][cell.col] = mark;
            }
            count += 1;
        }

        if count != CELLS {
            return Err(Error::InvalidBoardLength {
                expected: CELLS,
                got: count,
                context: s.to_string(),
            });
        }

        Ok(board)
    }
}
