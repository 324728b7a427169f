use crate::config::Board;
use crate::input::Direction;

/// Board position in pixel coordinates, aligned to the cell grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the cell at the center of the board.
    #[must_use]
    pub fn board_center(board: Board) -> Self {
        Self {
            x: board.columns() / 2 * board.cell_size,
            y: board.rows() / 2 * board.cell_size,
        }
    }

    /// Returns the position at grid column `column` and row `row`.
    #[must_use]
    pub fn from_cell(board: Board, column: i32, row: i32) -> Self {
        Self {
            x: column * board.cell_size,
            y: row * board.cell_size,
        }
    }

    /// Returns true when the position lies inside the board.
    #[must_use]
    pub fn is_within_bounds(self, board: Board) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < board.width && self.y < board.height
    }

    /// Returns this position wrapped into the board on both axes.
    #[must_use]
    pub fn wrapped(self, board: Board) -> Self {
        Self {
            x: wrap_axis(self.x, board.width),
            y: wrap_axis(self.y, board.height),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Moves `position` one cell in `direction`, re-entering at the opposite
/// edge when it leaves the board.
#[must_use]
pub fn step(position: Position, direction: Direction, board: Board) -> Position {
    let (dx, dy) = direction.vector();
    Position {
        x: position.x + dx * board.cell_size,
        y: position.y + dy * board.cell_size,
    }
    .wrapped(board)
}

/// Returns true if `point` is one of `positions`.
#[must_use]
pub fn contains<'a, I>(positions: I, point: Position) -> bool
where
    I: IntoIterator<Item = &'a Position>,
{
    positions.into_iter().any(|position| *position == point)
}
