use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark};

/// Nine cells in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(&self.cells)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

pub fn get_available_moves(cells: &[Mark]) -> Vec<usize> {
    let mut moves = Vec::new();
    for (index, &cell) in cells.iter().enumerate() {
        if cell == Mark::Empty {
            moves.push(index);
        }
    }
    moves
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.is_empty_at(index)
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cell characters (`X`, `O`, or `.`/`-`/`_`/space for empty).
    /// Newlines and `|` separators are skipped so rendered rows can be pasted back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for c in s.chars().filter(|c| *c != '\n' && *c != '\r' && *c != '|') {
            let mark = Mark::from_char(c).ok_or_else(|| format!("Unexpected cell character '{}'", c))?;
            if count >= CELL_COUNT {
                return Err(format!("Board must have exactly {} cells", CELL_COUNT));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT, count
            ));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
