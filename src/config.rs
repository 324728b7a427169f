use ratatui::style::Color;

/// Board width in pixels.
pub const BOARD_WIDTH: i32 = 640;

/// Board height in pixels.
pub const BOARD_HEIGHT: i32 = 480;

/// Side of one grid cell in pixels.
pub const CELL_SIZE: i32 = 20;

/// Fixed game speed in ticks per second.
pub const TICKS_PER_SECOND: u32 = 5;

/// Title shown by the display collaborator.
pub const WINDOW_TITLE: &str = "Snake";

pub const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
pub const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SNAKE_BODY_COLOR: Color = Color::Rgb(0, 255, 0);
pub const SNAKE_HEAD_COLOR: Color = Color::Rgb(0, 200, 50);
pub const SNAKE_EYES_COLOR: Color = Color::Rgb(0, 0, 250);

/// Pixel dimensions of the board and the size of one cell.
///
/// Positions on the board are pixel coordinates that are always a multiple
/// of `cell_size`, so the grid has `width / cell_size` columns and
/// `height / cell_size` rows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

/// The fixed 640×480 board with 20 px cells.
pub const DEFAULT_BOARD: Board = Board {
    width: BOARD_WIDTH,
    height: BOARD_HEIGHT,
    cell_size: CELL_SIZE,
};

impl Board {
    /// Number of grid columns.
    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::try_from(self.columns() * self.rows()).unwrap_or(0)
    }
}
