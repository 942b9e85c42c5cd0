use std::iter::FusedIterator;

use crate::{
    dims::Dims,
    gameboard::{Direction, Maze},
    progress::Progress,
};

use super::{GenError, RandomSource};

/// Single decision made by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// First cell of the maze was created.
    Seed { cell: Dims },
    /// New cell `to` was created and connected to `from`.
    Passage {
        from: Dims,
        to: Dims,
        direction: Direction,
    },
    /// Wall between two existing cells.
    Wall {
        from: Dims,
        to: Dims,
        direction: Direction,
    },
    /// Wall on the border of the maze.
    Border { cell: Dims, direction: Direction },
    /// Cell has all of its sides decided and left the frontier.
    Retire { cell: Dims },
}

/// Result of a generation, that could have been stopped before completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Complete(Maze),
    Partial(Maze),
}

impl Outcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn maze(&self) -> &Maze {
        match self {
            Self::Complete(maze) | Self::Partial(maze) => maze,
        }
    }
}

/// Growing tree generator, which always continues from the newest cell of the frontier.
///
/// Generation is carried out lazily, each call to [`Iterator::next`] performs one step,
/// so the caller can observe or pace it. Stopping early leaves the maze partial.
#[derive(Debug, Clone)]
pub struct GrowingTree<R> {
    maze: Maze,
    frontier: Vec<Dims>,
    rng: R,
    seeded: bool,
    decided: usize,
    retired: usize,
}

impl<R: RandomSource> GrowingTree<R> {
    pub fn new(size: Dims, rng: R) -> Result<Self, GenError> {
        if !size.all_positive() {
            return Err(GenError::InvalidSize(size));
        }

        Ok(Self {
            maze: Maze::new_empty(size),
            frontier: Vec::with_capacity(size.product() as usize),
            rng,
            seeded: false,
            decided: 0,
            retired: 0,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Cells still being explored, the last one is explored next.
    pub fn frontier(&self) -> &[Dims] {
        &self.frontier
    }

    pub fn is_done(&self) -> bool {
        self.seeded && self.frontier.is_empty()
    }

    /// Every cell needs all of its sides decided and has to be retired once.
    pub fn progress(&self) -> Progress {
        let cells = self.maze.size().product() as usize;
        let mut progress = Progress::new(
            self.decided + self.retired,
            cells * (Direction::COUNT + 1),
        );
        if self.is_done() {
            progress.finish();
        }
        progress
    }

    /// Runs the generation to the end.
    pub fn run(mut self) -> Maze {
        while self.next().is_some() {}
        self.maze
    }

    pub fn into_outcome(self) -> Outcome {
        if self.is_done() {
            Outcome::Complete(self.maze)
        } else {
            Outcome::Partial(self.maze)
        }
    }

    fn seed(&mut self) -> Step {
        let Dims(width, depth) = self.maze.size();
        let x = self.rng.uniform(0, width as usize) as i32;
        let z = self.rng.uniform(0, depth as usize) as i32;
        let cell = Dims(x, z);

        self.maze.create_cell(cell);
        self.frontier.push(cell);
        log::debug!("Growing maze of size {:?} from {:?}", self.maze.size(), cell);

        Step::Seed { cell }
    }

    fn step(&mut self, current: Dims) -> Step {
        let cell = self.maze.get_cell(current);
        if cell.is_fully_initialized() {
            self.frontier.pop();
            self.retired += 1;
            return Step::Retire { cell: current };
        }

        let direction = cell.random_uninitialized_direction(&mut self.rng);
        let target = current + direction.to_coord();

        if !self.maze.contains(target) {
            self.maze.add_border_wall(current, direction);
            self.decided += 1;
            Step::Border {
                cell: current,
                direction,
            }
        } else if self.maze.try_get_cell(target).is_none() {
            self.maze.create_cell(target);
            self.maze.add_passage(current, direction);
            self.frontier.push(target);
            self.decided += 2;
            Step::Passage {
                from: current,
                to: target,
                direction,
            }
        } else {
            self.maze.add_wall(current, direction);
            self.decided += 2;
            Step::Wall {
                from: current,
                to: target,
                direction,
            }
        }
    }
}

impl<R: RandomSource> Iterator for GrowingTree<R> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if !self.seeded {
            self.seeded = true;
            return Some(self.seed());
        }

        let current = *self.frontier.last()?;
        let step = self.step(current);
        log::trace!("{:?}", step);

        if self.frontier.is_empty() {
            log::debug!(
                "Maze of size {:?} finished with {} passages",
                self.maze.size(),
                self.maze.passage_count()
            );
        }

        Some(step)
    }
}

impl<R: RandomSource> FusedIterator for GrowingTree<R> {}
