use ratatui::style::Color;

use crate::canvas::{Canvas, PixelRect};
use crate::config::{
    BACKGROUND_COLOR, BORDER_COLOR, FOOD_COLOR, SNAKE_BODY_COLOR, SNAKE_EYES_COLOR,
    SNAKE_HEAD_COLOR,
};
use crate::food::Food;
use crate::game::Game;
use crate::geometry::Position;
use crate::snake::{Outcome, Snake};

/// Something that knows how to draw itself onto board cells.
pub trait Renderable {
    /// Primary cell of the object.
    fn position(&self) -> Position;

    fn draw(&self, canvas: &mut dyn Canvas, cell_size: i32);
}

impl Renderable for Food {
    fn position(&self) -> Position {
        self.position
    }

    fn draw(&self, canvas: &mut dyn Canvas, cell_size: i32) {
        let half = cell_size / 2;
        let center = (self.position.x + half, self.position.y + half);
        canvas.fill_circle(center, half, FOOD_COLOR);
        canvas.outline_circle(center, half, BORDER_COLOR);
    }
}

impl Renderable for Snake {
    fn position(&self) -> Position {
        self.head()
    }

    fn draw(&self, canvas: &mut dyn Canvas, cell_size: i32) {
        for segment in self.segments().skip(1) {
            draw_cell(canvas, *segment, cell_size, SNAKE_BODY_COLOR);
        }

        let head = self.head();
        draw_cell(canvas, head, cell_size, SNAKE_HEAD_COLOR);

        let eye_offset = cell_size / 4;
        let eye_radius = (cell_size / 10).max(1);
        let eye_y = head.y + eye_offset;
        canvas.fill_circle((head.x + eye_offset, eye_y), eye_radius, SNAKE_EYES_COLOR);
        canvas.fill_circle(
            (head.x + cell_size - eye_offset, eye_y),
            eye_radius,
            SNAKE_EYES_COLOR,
        );
    }
}

fn cell_rect(position: Position, cell_size: i32) -> PixelRect {
    PixelRect::new(position.x, position.y, cell_size, cell_size)
}

fn draw_cell(canvas: &mut dyn Canvas, position: Position, cell_size: i32, fill: Color) {
    let rect = cell_rect(position, cell_size);
    canvas.fill_rect(rect, fill);
    canvas.outline_rect(rect, BORDER_COLOR);
}

/// Draws the first frame of a session.
pub fn render_initial<R>(canvas: &mut dyn Canvas, game: &Game<R>) {
    canvas.clear(BACKGROUND_COLOR);
    draw_objects(canvas, game);
}

/// Brings the surface up to date after one tick.
///
/// The surface keeps its content between ticks, so only the vacated cell is
/// erased; a restart wipes everything.
pub fn render_tick<R>(canvas: &mut dyn Canvas, game: &Game<R>, outcome: Outcome) {
    let cell_size = game.board().cell_size;

    if outcome == Outcome::SelfCollision {
        canvas.clear(BACKGROUND_COLOR);
    } else if let Some(vacated) = game.snake.vacated_cell() {
        canvas.fill_rect(cell_rect(vacated, cell_size), BACKGROUND_COLOR);
    }

    draw_objects(canvas, game);
}

fn draw_objects<R>(canvas: &mut dyn Canvas, game: &Game<R>) {
    let cell_size = game.board().cell_size;
    let objects: [&dyn Renderable; 2] = [&game.food, &game.snake];

    for object in objects {
        object.draw(canvas, cell_size);
    }
}
