use std::io;

use ratatui::style::Color;

/// Axis-aligned rectangle in board pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    fn on_border(self, x: i32, y: i32) -> bool {
        self.contains(x, y)
            && (x == self.x
                || y == self.y
                || x == self.x + self.width - 1
                || y == self.y + self.height - 1)
    }
}

/// Drawing primitives offered by the display.
pub trait Canvas {
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: PixelRect, color: Color);

    /// Draws a one pixel wide rectangle border.
    fn outline_rect(&mut self, rect: PixelRect, color: Color);

    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Color);

    /// Draws a one pixel wide circle border.
    fn outline_circle(&mut self, center: (i32, i32), radius: i32, color: Color);
}

/// A canvas that can show what has been drawn.
pub trait Display: Canvas {
    /// Makes the current drawing visible; called once per tick.
    fn present(&mut self) -> io::Result<()>;
}

/// Software pixel surface that keeps its content between frames.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    #[must_use]
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = usize::try_from(width * height).unwrap_or(0);

        Self {
            width,
            height,
            pixels: vec![background; len],
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        usize::try_from(y * self.width + x).ok()
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }

    fn plot_where<F>(&mut self, bounds: PixelRect, color: Color, inside: F)
    where
        F: Fn(i32, i32) -> bool,
    {
        let x_start = bounds.x.max(0);
        let y_start = bounds.y.max(0);
        let x_end = (bounds.x + bounds.width).min(self.width);
        let y_end = (bounds.y + bounds.height).min(self.height);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if inside(x, y) {
                    self.put(x, y, color);
                }
            }
        }
    }
}

fn circle_bounds((cx, cy): (i32, i32), radius: i32) -> PixelRect {
    PixelRect::new(cx - radius, cy - radius, 2 * radius + 1, 2 * radius + 1)
}

impl Canvas for Framebuffer {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.plot_where(rect, color, |x, y| rect.contains(x, y));
    }

    fn outline_rect(&mut self, rect: PixelRect, color: Color) {
        self.plot_where(rect, color, |x, y| rect.on_border(x, y));
    }

    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        let (cx, cy) = center;
        let limit = radius * radius;
        self.plot_where(circle_bounds(center, radius), color, |x, y| {
            (x - cx).pow(2) + (y - cy).pow(2) <= limit
        });
    }

    fn outline_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        let (cx, cy) = center;
        let outer = radius * radius;
        let inner = (radius - 1).max(0).pow(2);
        self.plot_where(circle_bounds(center, radius), color, |x, y| {
            let distance = (x - cx).pow(2) + (y - cy).pow(2);
            distance <= outer && distance > inner
        });
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::{Canvas, Framebuffer, PixelRect};

    #[test]
    fn fill_rect_covers_exactly_the_rect() {
        let mut surface = Framebuffer::new(40, 40, Color::Black);

        surface.fill_rect(PixelRect::new(20, 0, 20, 20), Color::Green);

        assert_eq!(surface.pixel(20, 0), Some(Color::Green));
        assert_eq!(surface.pixel(39, 19), Some(Color::Green));
        assert_eq!(surface.pixel(19, 0), Some(Color::Black));
        assert_eq!(surface.pixel(20, 20), Some(Color::Black));
    }

    #[test]
    fn outline_rect_leaves_interior_untouched() {
        let mut surface = Framebuffer::new(20, 20, Color::Black);

        surface.outline_rect(PixelRect::new(0, 0, 20, 20), Color::Cyan);

        assert_eq!(surface.pixel(0, 0), Some(Color::Cyan));
        assert_eq!(surface.pixel(19, 10), Some(Color::Cyan));
        assert_eq!(surface.pixel(10, 19), Some(Color::Cyan));
        assert_eq!(surface.pixel(10, 10), Some(Color::Black));
    }

    #[test]
    fn circles_are_clipped_to_the_surface() {
        let mut surface = Framebuffer::new(20, 20, Color::Black);

        surface.fill_circle((0, 0), 5, Color::Red);

        assert_eq!(surface.pixel(0, 0), Some(Color::Red));
        assert_eq!(surface.pixel(3, 3), Some(Color::Red));
        assert_eq!(surface.pixel(4, 4), Some(Color::Black));
        assert_eq!(surface.pixel(-1, 0), None);
    }

    #[test]
    fn outline_circle_is_a_ring() {
        let mut surface = Framebuffer::new(30, 30, Color::Black);

        surface.outline_circle((10, 10), 10, Color::Cyan);

        assert_eq!(surface.pixel(20, 10), Some(Color::Cyan));
        assert_eq!(surface.pixel(10, 0), Some(Color::Cyan));
        assert_eq!(surface.pixel(10, 10), Some(Color::Black));
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut surface = Framebuffer::new(10, 10, Color::Black);
        surface.fill_rect(PixelRect::new(0, 0, 10, 10), Color::Red);

        surface.clear(Color::Black);

        assert_eq!(surface.pixel(5, 5), Some(Color::Black));
    }
}
