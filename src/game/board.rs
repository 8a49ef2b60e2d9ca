use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Largest board side. Larger requested dimensions are clamped to it.
pub const MAX_DIMENSION: usize = 32;

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// (dx, dy) steps probed from every cell: horizontal, vertical,
/// diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Four aligned cells held by the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningRun {
    pub player: Player,
    pub cells: [Position; WIN_LENGTH],
}

impl WinningRun {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&Position { row, col })
    }
}

/// Row-major grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Each side is clamped to [`MAX_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.min(MAX_DIMENSION);
        let height = height.min(MAX_DIMENSION);
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is outside the board; use [`Board::cell`] for
    /// a checked lookup.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "position ({row}, {col}) outside {}x{} board",
            self.width,
            self.height
        );
        self.cells[row * self.width + col]
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Landing row for a piece dropped in `col`, scanning from the bottom row
    /// upward. `None` when the column is full or does not exist.
    pub fn find_spot_for_col(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height).rev().find(|&row| self.get(row, col).is_empty())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_spot_for_col(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        // GameEngine range-checks first; this covers callers driving a Board
        // directly. Columns beyond isize::MAX are reported as isize::MAX.
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: isize::try_from(col).unwrap_or(isize::MAX),
                width: self.width,
            });
        }

        let row = self
            .find_spot_for_col(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row * self.width + col] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Find a run of four belonging to `player`.
    ///
    /// Every cell is tried as the origin of a run in each of the four
    /// directions, which covers the mirrored directions as well. Returns the
    /// first run in row-major scan order.
    pub fn check_for_win(&self, player: Player) -> Option<WinningRun> {
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dx, dy) in &DIRECTIONS {
                    if let Some(cells) = self.run_from(row, col, dx, dy, player) {
                        return Some(WinningRun { player, cells });
                    }
                }
            }
        }
        None
    }

    fn run_from(
        &self,
        row: usize,
        col: usize,
        dx: isize,
        dy: isize,
        player: Player,
    ) -> Option<[Position; WIN_LENGTH]> {
        let mut cells = [Position { row, col }; WIN_LENGTH];
        for (step, slot) in cells.iter_mut().enumerate() {
            let r = row as isize + dy * step as isize;
            let c = col as isize + dx * step as isize;
            if r < 0 || c < 0 {
                return None;
            }
            let (r, c) = (r as usize, c as usize);
            if self.cell(r, c)? != Cell::Occupied(player) {
                return None;
            }
            *slot = Position { row: r, col: c };
        }
        Some(cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl fmt::Display for Board {
    /// One line per row: `.` for empty, the player id otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(player) => player.id().to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
