use log::{info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Board;
use crate::error::Result;
use crate::food::Food;
use crate::input::InputEvent;
use crate::snake::{Outcome, Snake};

/// What the loop should do after processing input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    pub snake: Snake,
    pub food: Food,
    pub tick_count: u64,
    board: Board,
    rng: R,
}

impl Game<StdRng> {
    /// Creates a game seeded from system entropy.
    pub fn new(board: Board) -> Result<Self> {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    pub fn new_with_seed(board: Board, seed: u64) -> Result<Self> {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }
}

impl<R> Game<R> {
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(board: Board, mut rng: R) -> Result<Self> {
        let snake = Snake::new(board);
        let food = Food::spawn(&mut rng, board, snake.segments())?;

        Ok(Self {
            snake,
            food,
            tick_count: 0,
            board,
            rng,
        })
    }

    /// Applies one input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::Quit => Control::Quit,
            InputEvent::KeyDown(key) => {
                self.snake.request_direction(key.direction());
                Control::Continue
            }
        }
    }

    /// Applies a batch of events in order, stopping at the first quit.
    pub fn handle_events<I>(&mut self, events: I) -> Control
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_event(event) == Control::Quit {
                return Control::Quit;
            }
        }
        Control::Continue
    }

    /// Advances the simulation by one tick and resolves its outcome.
    ///
    /// A self-collision resets the snake and moves the food off the fresh
    /// body. Eating moves the food off the grown body.
    pub fn tick(&mut self) -> Result<Outcome> {
        self.tick_count += 1;

        self.snake.update_direction();
        let outcome = self.snake.advance(self.food.position);
        trace!(
            "tick {}: {outcome:?}, head at ({}, {})",
            self.tick_count,
            self.snake.head().x,
            self.snake.head().y
        );

        match outcome {
            Outcome::SelfCollision => {
                info!("self-collision on tick {}, restarting", self.tick_count);
                self.snake.reset();
                self.food
                    .relocate(&mut self.rng, self.board, self.snake.segments())?;
            }
            Outcome::AteFood => {
                info!("food eaten, length is now {}", self.snake.len());
                self.food
                    .relocate(&mut self.rng, self.board, self.snake.segments())?;
            }
            Outcome::Moved => {}
        }

        Ok(outcome)
    }
}
