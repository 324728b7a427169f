use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::config::Board;
use crate::error::{GameError, Result};
use crate::geometry::Position;

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random cell outside `forbidden`.
    pub fn spawn<'a, R, I>(rng: &mut R, board: Board, forbidden: I) -> Result<Self>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Position>,
    {
        Ok(Self::new(free_position(rng, board, forbidden)?))
    }

    /// Moves the food to a uniformly random cell outside `forbidden` and
    /// returns the new position.
    pub fn relocate<'a, R, I>(&mut self, rng: &mut R, board: Board, forbidden: I) -> Result<Position>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Position>,
    {
        self.position = free_position(rng, board, forbidden)?;
        debug!(
            "food relocated to ({}, {})",
            self.position.x, self.position.y
        );
        Ok(self.position)
    }
}

/// Picks a free cell by sampling the complement of `forbidden`.
///
/// Fails with [`GameError::BoardFull`] when every cell is forbidden.
pub fn free_position<'a, R, I>(rng: &mut R, board: Board, forbidden: I) -> Result<Position>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Position>,
{
    let forbidden: HashSet<Position> = forbidden.into_iter().copied().collect();
    let candidates = free_cells(board, &forbidden);

    if candidates.is_empty() {
        return Err(GameError::BoardFull {
            cells: board.total_cells(),
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}

fn free_cells(board: Board, forbidden: &HashSet<Position>) -> Vec<Position> {
    let mut candidates = Vec::with_capacity(board.total_cells());

    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let position = Position::from_cell(board, column, row);
            if !forbidden.contains(&position) {
                candidates.push(position);
            }
        }
    }

    candidates
}
