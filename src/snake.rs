use std::collections::VecDeque;

use log::{debug, info};

use crate::config::Board;
use crate::geometry::{contains, step, Position};
use crate::input::{direction_change_is_valid, Direction};

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    /// The head entered a free cell and the tail followed.
    Moved,
    /// The head entered the food cell; the tail stayed, so the snake is one
    /// segment longer.
    AteFood,
    /// The new head landed on one of the snake's own segments.
    SelfCollision,
}

/// Mutable snake state and direction buffering behavior.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
    vacated: Option<Position>,
    board: Board,
}

impl Snake {
    /// Creates a one-cell snake at the board center moving right.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            body: VecDeque::from([Position::board_center(board)]),
            direction: Direction::Right,
            pending_direction: None,
            target_length: 1,
            vacated: None,
            board,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The target length is the number of segments given.
    #[must_use]
    pub fn from_segments(board: Board, segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            target_length: segments.len(),
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            vacated: None,
            board,
        }
    }

    /// Requests a turn for the next step.
    ///
    /// A reversal of the current direction is ignored. Several requests
    /// before the next step overwrite each other, so only the last valid
    /// one is applied.
    pub fn request_direction(&mut self, direction: Direction) {
        if !direction_change_is_valid(self.direction, direction) {
            return;
        }

        debug!("direction requested: {direction:?}");
        self.pending_direction = Some(direction);
    }

    /// Applies and clears the pending direction, if any.
    pub fn update_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Moves the snake one cell, growing if the new head lands on `food`.
    ///
    /// Collision is judged on the body after the head was inserted and the
    /// tail removed, so moving into the cell the tail just left is legal.
    pub fn advance(&mut self, food: Position) -> Outcome {
        self.update_direction();

        let next_head = step(self.head(), self.direction, self.board);
        self.body.push_front(next_head);

        let outcome = if next_head == food {
            self.target_length += 1;
            self.vacated = None;
            Outcome::AteFood
        } else {
            self.vacated = self.body.pop_back();
            Outcome::Moved
        };

        if self.head_overlaps_body() {
            return Outcome::SelfCollision;
        }

        outcome
    }

    /// Returns every field to the initial single-cell state.
    pub fn reset(&mut self) {
        info!("snake reset after reaching length {}", self.body.len());

        self.body.clear();
        self.body.push_front(Position::board_center(self.board));
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.target_length = 1;
        self.vacated = None;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        contains(&self.body, position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        contains(self.body.iter().skip(1), self.head())
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the turn waiting for the next step.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Cell freed by the tail during the most recent step.
    #[must_use]
    pub fn vacated_cell(&self) -> Option<Position> {
        self.vacated
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
