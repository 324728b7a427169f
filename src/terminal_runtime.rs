use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::canvas::{Canvas, Display, Framebuffer, PixelRect};
use crate::config::{BACKGROUND_COLOR, Board};

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Upper half-block glyph: foreground paints the top half, background the
/// bottom half of a terminal cell.
const GLYPH_HALF_UPPER: &str = "▀";

/// Owns terminal lifecycle (raw mode + alternate screen) for one game session
/// and the pixel surface shown in it.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    surface: Framebuffer,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, sets the title and
    /// creates a ratatui terminal showing a `board`-sized surface.
    pub fn enter(title: &str, board: Board) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide, SetTitle(title)) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                surface: Framebuffer::new(board.width, board.height, BACKGROUND_COLOR),
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(error)
            }
        }
    }
}

impl Canvas for TerminalSession {
    fn clear(&mut self, color: Color) {
        self.surface.clear(color);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.surface.fill_rect(rect, color);
    }

    fn outline_rect(&mut self, rect: PixelRect, color: Color) {
        self.surface.outline_rect(rect, color);
    }

    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        self.surface.fill_circle(center, radius, color);
    }

    fn outline_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        self.surface.outline_circle(center, radius, color);
    }
}

impl Display for TerminalSession {
    fn present(&mut self) -> io::Result<()> {
        let view = SurfaceView::new(&self.surface);
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(view, area);
        })?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Restores the terminal; safe to call more than once.
pub fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Widget that scales a framebuffer into a terminal area using half blocks.
///
/// Each terminal cell shows two vertically stacked samples, taken at the
/// centers of a sampling grid that keeps the surface aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceView<'a> {
    surface: &'a Framebuffer,
}

impl<'a> SurfaceView<'a> {
    #[must_use]
    pub fn new(surface: &'a Framebuffer) -> Self {
        Self { surface }
    }
}

/// Sampling grid of a surface view: where it sits and how many half-block
/// rows it has.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct ViewGrid {
    area: Rect,
    sample_rows: u16,
}

fn fit_view(area: Rect, surface_width: i32, surface_height: i32) -> Option<ViewGrid> {
    if surface_width <= 0 || surface_height <= 0 || area.is_empty() {
        return None;
    }

    let max_columns = u32::from(area.width);
    let max_sample_rows = u32::from(area.height) * 2;
    let width = surface_width.unsigned_abs();
    let height = surface_height.unsigned_abs();

    let columns = max_columns.min(max_sample_rows * width / height).max(1);
    let sample_rows = (columns * height / width).clamp(1, max_sample_rows);
    let rows = sample_rows.div_ceil(2);

    let columns = u16::try_from(columns).ok()?;
    let rows = u16::try_from(rows).ok()?;
    let sample_rows = u16::try_from(sample_rows).ok()?;

    Some(ViewGrid {
        area: Rect {
            x: area.x + (area.width - columns) / 2,
            y: area.y + (area.height - rows) / 2,
            width: columns,
            height: rows,
        },
        sample_rows,
    })
}

fn sample_coordinate(index: u16, samples: u16, extent: i32) -> i32 {
    let index = i64::from(index);
    let samples = i64::from(samples);
    let position = (2 * index + 1) * i64::from(extent) / (2 * samples);
    i32::try_from(position).unwrap_or(extent - 1)
}

impl Widget for SurfaceView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(grid) = fit_view(area, self.surface.width(), self.surface.height()) else {
            return;
        };

        let sample = |column: u16, sample_row: u16| -> Color {
            if sample_row >= grid.sample_rows {
                return BACKGROUND_COLOR;
            }
            let x = sample_coordinate(column, grid.area.width, self.surface.width());
            let y = sample_coordinate(sample_row, grid.sample_rows, self.surface.height());
            self.surface.pixel(x, y).unwrap_or(BACKGROUND_COLOR)
        };

        for row in 0..grid.area.height {
            for column in 0..grid.area.width {
                let top = sample(column, row * 2);
                let bottom = sample(column, row * 2 + 1);
                buf.set_string(
                    grid.area.x + column,
                    grid.area.y + row,
                    GLYPH_HALF_UPPER,
                    Style::new().fg(top).bg(bottom),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::widgets::Widget;

    use crate::canvas::{Canvas, Framebuffer, PixelRect};

    use super::{fit_view, SurfaceView, ViewGrid};

    #[test]
    fn view_keeps_the_board_aspect_ratio() {
        let grid = fit_view(Rect::new(0, 0, 80, 24), 640, 480).expect("area is not empty");

        assert_eq!(
            grid,
            ViewGrid {
                area: Rect::new(8, 0, 64, 24),
                sample_rows: 48,
            }
        );
    }

    #[test]
    fn empty_area_has_no_view() {
        assert_eq!(fit_view(Rect::new(0, 0, 0, 10), 640, 480), None);
    }

    #[test]
    fn half_blocks_carry_two_samples() {
        let mut surface = Framebuffer::new(640, 480, Color::Black);
        surface.fill_rect(PixelRect::new(0, 0, 20, 10), Color::Red);
        let area = Rect::new(0, 0, 64, 24);
        let mut buf = Buffer::empty(area);

        SurfaceView::new(&surface).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Red);
        assert_eq!(cell.bg, Color::Black);

        let untouched = &buf[(2, 0)];
        assert_eq!(untouched.fg, Color::Black);
    }
}
