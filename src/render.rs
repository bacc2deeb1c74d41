//! Software rendering of the board into a `0RGB` pixel buffer.
//!
//! The window only presents [`Canvas::pixels`]; all drawing happens here so
//! it can be checked without a display.

use crate::board::{Board, Cell, Mark, SIZE};
use crate::{BLACK, CELL_SIZE, HEIGHT, LINE_WIDTH, WHITE, WIDTH};

/// A pixel in canvas coordinates. May lie off the canvas.
pub type Point = (i64, i64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![WHITE; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixels, one `0RGB` word each.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    fn set(&mut self, x: i64, y: i64, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// A straight segment `width` pixels thick.
    pub fn line(&mut self, from: Point, to: Point, width: usize, color: u32) {
        let half = width as f64 / 2.0;
        let pad = width as i64;
        let (dx, dy) = ((to.0 - from.0) as f64, (to.1 - from.1) as f64);
        let length2 = dx * dx + dy * dy;

        for y in from.1.min(to.1) - pad..=from.1.max(to.1) + pad {
            for x in from.0.min(to.0) - pad..=from.0.max(to.0) + pad {
                let (px, py) = ((x - from.0) as f64, (y - from.1) as f64);
                let t = if length2 == 0.0 {
                    0.0
                } else {
                    ((px * dx + py * dy) / length2).clamp(0.0, 1.0)
                };
                let (ex, ey) = (px - t * dx, py - t * dy);
                if (ex * ex + ey * ey).sqrt() <= half {
                    self.set(x, y, color);
                }
            }
        }
    }

    /// A circle outline whose stroke grows inward from `radius`.
    pub fn ring(&mut self, center: Point, radius: usize, width: usize, color: u32) {
        let outer = radius as f64;
        let inner = outer - width as f64;
        let r = radius as i64;

        for y in center.1 - r..=center.1 + r {
            for x in center.0 - r..=center.0 + r {
                let (dx, dy) = ((x - center.0) as f64, (y - center.1) as f64);
                let distance = (dx * dx + dy * dy).sqrt();
                if distance > inner && distance <= outer {
                    self.set(x, y, color);
                }
            }
        }
    }
}

/// Pixel center of `cell`.
pub fn cell_center(cell: Cell) -> Point {
    let half = (CELL_SIZE / 2) as i64;
    (
        (cell.col * CELL_SIZE) as i64 + half,
        (cell.row * CELL_SIZE) as i64 + half,
    )
}

/// The cell under a pointer position, or `None` off the board.
pub fn cell_at(x: f32, y: f32) -> Option<Cell> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (row, col) = (y as usize / CELL_SIZE, x as usize / CELL_SIZE);
    (row < SIZE && col < SIZE).then_some(Cell::new(row, col))
}

/// Clears the canvas and draws the grid and every mark.
pub fn draw_board(canvas: &mut Canvas, board: &Board) {
    canvas.fill(WHITE);

    let (w, h) = (canvas.width() as i64, canvas.height() as i64);
    for i in 1..SIZE as i64 {
        let at = i * CELL_SIZE as i64;
        canvas.line((at, 0), (at, h), LINE_WIDTH, BLACK);
        canvas.line((0, at), (w, at), LINE_WIDTH, BLACK);
    }

    for cell in Cell::all() {
        match board.get(cell) {
            Some(Mark::X) => draw_x(canvas, cell),
            Some(Mark::O) => draw_o(canvas, cell),
            None => {}
        }
    }
}

fn draw_x(canvas: &mut Canvas, cell: Cell) {
    let (x, y) = cell_center(cell);
    let offset = (CELL_SIZE / 4) as i64;
    canvas.line((x - offset, y - offset), (x + offset, y + offset), LINE_WIDTH, BLACK);
    canvas.line((x + offset, y - offset), (x - offset, y + offset), LINE_WIDTH, BLACK);
}

fn draw_o(canvas: &mut Canvas, cell: Cell) {
    canvas.ring(cell_center(cell), CELL_SIZE / 4, LINE_WIDTH, BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_by_integer_division() {
        assert_eq!(cell_at(0.0, 0.0), Some(Cell::new(0, 0)));
        assert_eq!(cell_at(99.9, 99.9), Some(Cell::new(0, 0)));
        assert_eq!(cell_at(100.0, 0.0), Some(Cell::new(0, 1)));
        assert_eq!(cell_at(250.0, 120.0), Some(Cell::new(1, 2)));
        assert_eq!(cell_at(299.0, 299.0), Some(Cell::new(2, 2)));
        assert_eq!(cell_at(300.0, 10.0), None);
        assert_eq!(cell_at(-1.0, 10.0), None);
    }

    #[test]
    fn empty_board_has_only_grid_lines() {
        let mut canvas = Canvas::default();
        draw_board(&mut canvas, &Board::new());

        assert_eq!(canvas.get(100, 50), Some(BLACK));
        assert_eq!(canvas.get(200, 250), Some(BLACK));
        assert_eq!(canvas.get(50, 100), Some(BLACK));
        assert_eq!(canvas.get(150, 200), Some(BLACK));
        for cell in Cell::all() {
            let (x, y) = cell_center(cell);
            assert_eq!(canvas.get(x as usize, y as usize), Some(WHITE));
        }
        assert_eq!(canvas.get(WIDTH, 0), None);
    }

    #[test]
    fn line_is_as_thick_as_requested() {
        let mut canvas = Canvas::new(20, 20);
        canvas.line((10, 0), (10, 20), 5, BLACK);
        let row: Vec<u32> = (0..20).map(|x| canvas.get(x, 5).unwrap()).collect();
        assert_eq!(row.iter().filter(|&&c| c == BLACK).count(), 5);
        assert_eq!(canvas.get(8, 5), Some(BLACK));
        assert_eq!(canvas.get(12, 5), Some(BLACK));
        assert_eq!(canvas.get(7, 5), Some(WHITE));
    }

    #[test]
    fn marks_land_in_their_cells() {
        let board: Board = "X../.O./...".parse().unwrap();
        let mut canvas = Canvas::default();
        draw_board(&mut canvas, &board);

        // X: both diagonals through the center of (0, 0).
        assert_eq!(canvas.get(50, 50), Some(BLACK));
        assert_eq!(canvas.get(25, 25), Some(BLACK));
        assert_eq!(canvas.get(75, 25), Some(BLACK));
        assert_eq!(canvas.get(50, 25), Some(WHITE));

        // O: a hollow ring around the center of (1, 1).
        assert_eq!(canvas.get(150, 150), Some(WHITE));
        assert_eq!(canvas.get(175, 150), Some(BLACK));
        assert_eq!(canvas.get(150, 128), Some(BLACK));
        assert_eq!(canvas.get(150, 180), Some(WHITE));

        // Nothing in the empty corner.
        assert_eq!(canvas.get(250, 250), Some(WHITE));
    }
}
