use crate::{algorithms::RandomSource, dims::Dims};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const COUNT: usize = 4;

    pub fn to_coord(self) -> Dims {
        match self {
            Self::North => Dims(0, 1),
            Self::East => Dims(1, 0),
            Self::South => Dims(0, -1),
            Self::West => Dims(-1, 0),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Slot of the direction in per-direction arrays, matches [`Direction::in_order`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn in_order() -> [Self; Self::COUNT] {
        use Direction::*;
        [North, East, South, West]
    }
}

/// What lies on one side of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Open way into the neighbor at the given position.
    Passage(Dims),
    /// Blocked way, `None` if the wall is on the border of the maze.
    Wall(Option<Dims>),
}

impl Edge {
    pub fn is_passage(&self) -> bool {
        matches!(self, Self::Passage(_))
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Self::Wall(_))
    }

    /// Position of the cell on the other side, if there is one.
    pub fn neighbor(&self) -> Option<Dims> {
        match *self {
            Self::Passage(pos) => Some(pos),
            Self::Wall(pos) => pos,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    coord: Dims,
    edges: [Option<Edge>; Direction::COUNT],
    decided: usize,
}

impl Cell {
    pub fn new(coord: Dims) -> Cell {
        Cell {
            coord,
            edges: [None; Direction::COUNT],
            decided: 0,
        }
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }

    /// Returns `None` while the direction is undecided
    pub fn get_edge(&self, dir: Direction) -> Option<Edge> {
        self.edges[dir.index()]
    }

    /// Decides the given direction.
    ///
    /// # Panics
    ///
    /// Each direction can be decided only once, panics if `dir` already has an edge.
    pub fn set_edge(&mut self, dir: Direction, edge: Edge) {
        let slot = &mut self.edges[dir.index()];
        if let Some(old) = slot {
            panic!(
                "Edge {:?} of cell {:?} is already decided as {:?}",
                dir, self.coord, old
            );
        }

        *slot = Some(edge);
        self.decided += 1;
    }

    pub fn decided_count(&self) -> usize {
        self.decided
    }

    pub fn is_fully_initialized(&self) -> bool {
        self.decided == Direction::COUNT
    }

    pub fn is_passage(&self, dir: Direction) -> bool {
        self.get_edge(dir).is_some_and(|edge| edge.is_passage())
    }

    /// Directions, in which this cell is open to a neighbor.
    pub fn passages(&self) -> impl Iterator<Item = (Direction, Dims)> + '_ {
        Direction::in_order()
            .into_iter()
            .filter_map(|dir| match self.get_edge(dir) {
                Some(Edge::Passage(to)) => Some((dir, to)),
                _ => None,
            })
    }

    /// Uniformly chooses one of the directions, which are not decided yet.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already fully initialized.
    pub fn random_uninitialized_direction<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Direction {
        let left = Direction::COUNT - self.decided;
        assert!(
            left > 0,
            "Cell {:?} has no uninitialized directions left",
            self.coord
        );

        let mut skips = rng.uniform(0, left);
        for dir in Direction::in_order() {
            if self.get_edge(dir).is_none() {
                if skips == 0 {
                    return dir;
                }
                skips -= 1;
            }
        }

        unreachable!("decided count of cell {:?} is out of sync", self.coord)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord && self.edges == other.edges
    }
}

impl Eq for Cell {}
