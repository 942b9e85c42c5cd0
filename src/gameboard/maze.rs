use crate::{array::Array2D, dims::Dims};

use super::{Cell, Direction, Edge};

/// Grid of cells. Cells, which were not created yet, are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) cells: Array2D<Option<Cell>>,
}

impl Maze {
    /// Creates a grid without any cells.
    ///
    /// Size must be already validated to be positive.
    pub(crate) fn new_empty(size: Dims) -> Self {
        Maze {
            cells: Array2D::new(None, size.0 as usize, size.1 as usize),
        }
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn contains(&self, pos: Dims) -> bool {
        let Dims(width, depth) = self.size();
        0 <= pos.0 && pos.0 < width && 0 <= pos.1 && pos.1 < depth
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside of the maze or the cell wasn't created yet.
    pub fn get_cell(&self, pos: Dims) -> &Cell {
        self.cells[pos]
            .as_ref()
            .unwrap_or_else(|| panic!("Cell {:?} was not created yet", pos))
    }

    pub fn try_get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos).and_then(Option::as_ref)
    }

    pub(crate) fn get_cell_mut(&mut self, pos: Dims) -> &mut Cell {
        self.cells[pos]
            .as_mut()
            .unwrap_or_else(|| panic!("Cell {:?} was not created yet", pos))
    }

    /// Places a fresh cell at `pos`, which must still be empty.
    pub(crate) fn create_cell(&mut self, pos: Dims) -> &mut Cell {
        let slot = &mut self.cells[pos];
        assert!(slot.is_none(), "Cell {:?} already exists", pos);
        slot.insert(Cell::new(pos))
    }

    /// Connects `from` with the cell on the other side of `dir`, on both sides.
    pub(crate) fn add_passage(&mut self, from: Dims, dir: Direction) -> Dims {
        let to = from + dir.to_coord();
        self.get_cell_mut(from).set_edge(dir, Edge::Passage(to));
        self.get_cell_mut(to).set_edge(dir.reverse(), Edge::Passage(from));
        to
    }

    /// Separates `from` from the cell on the other side of `dir`, on both sides.
    pub(crate) fn add_wall(&mut self, from: Dims, dir: Direction) -> Dims {
        let to = from + dir.to_coord();
        self.get_cell_mut(from).set_edge(dir, Edge::Wall(Some(to)));
        self.get_cell_mut(to).set_edge(dir.reverse(), Edge::Wall(Some(from)));
        to
    }

    pub(crate) fn add_border_wall(&mut self, from: Dims, dir: Direction) {
        self.get_cell_mut(from).set_edge(dir, Edge::Wall(None));
    }

    /// All created cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Number of passages, each one counted once, not once per side.
    pub fn passage_count(&self) -> usize {
        self.cells().map(|cell| cell.passages().count()).sum::<usize>() / 2
    }

    /// Every position has a cell and every cell has all of its edges decided.
    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.as_ref().is_some_and(Cell::is_fully_initialized))
    }

    /// Whether every created cell can be reached from any other one through passages.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.cells().next() else {
            return false;
        };

        let mut visited = Array2D::new_dims(false, self.size())
            .expect("maze size is always positive");
        let mut stack = vec![start.get_coord()];
        visited[start.get_coord()] = true;
        let mut reached = 1;

        while let Some(pos) = stack.pop() {
            for (_, next) in self.get_cell(pos).passages() {
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        reached == self.cell_count()
    }

    /// Complete, connected and without any loops.
    pub fn is_perfect(&self) -> bool {
        self.is_complete()
            && self.is_connected()
            && self.passage_count() + 1 == self.cell_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cells() -> Maze {
        let mut maze = Maze::new_empty(Dims(2, 1));
        maze.create_cell(Dims(0, 0));
        maze.create_cell(Dims(1, 0));
        maze
    }

    #[test]
    fn bounds() {
        let maze = Maze::new_empty(Dims(3, 2));
        assert_eq!(maze.size(), Dims(3, 2));
        assert!(maze.contains(Dims(0, 0)));
        assert!(maze.contains(Dims(2, 1)));
        assert!(!maze.contains(Dims(3, 1)));
        assert!(!maze.contains(Dims(2, 2)));
        assert!(!maze.contains(Dims(-1, 0)));
        assert!(!maze.contains(Dims(0, -1)));
        assert_eq!(maze.cell_count(), 0);
        assert!(!maze.is_connected());
        assert!(!maze.is_complete());
    }

    #[test]
    fn passage_is_mirrored() {
        let mut maze = two_cells();
        let to = maze.add_passage(Dims(0, 0), Direction::East);
        assert_eq!(to, Dims(1, 0));
        assert_eq!(
            maze.get_cell(Dims(0, 0)).get_edge(Direction::East),
            Some(Edge::Passage(Dims(1, 0)))
        );
        assert_eq!(
            maze.get_cell(Dims(1, 0)).get_edge(Direction::West),
            Some(Edge::Passage(Dims(0, 0)))
        );
        assert_eq!(maze.passage_count(), 1);
        assert!(maze.is_connected());
    }

    #[test]
    fn wall_is_mirrored() {
        let mut maze = two_cells();
        maze.add_wall(Dims(1, 0), Direction::West);
        assert_eq!(
            maze.get_cell(Dims(0, 0)).get_edge(Direction::East),
            Some(Edge::Wall(Some(Dims(1, 0))))
        );
        assert_eq!(maze.passage_count(), 0);
        assert!(!maze.is_connected());
    }

    #[test]
    fn border_wall_is_one_sided() {
        let mut maze = two_cells();
        maze.add_border_wall(Dims(0, 0), Direction::West);
        assert_eq!(
            maze.get_cell(Dims(0, 0)).get_edge(Direction::West),
            Some(Edge::Wall(None))
        );
        assert_eq!(maze.get_cell(Dims(1, 0)).decided_count(), 0);
    }

    #[test]
    fn try_get_cell() {
        let maze = two_cells();
        assert!(maze.try_get_cell(Dims(1, 0)).is_some());
        assert!(maze.try_get_cell(Dims(2, 0)).is_none());
        assert!(Maze::new_empty(Dims(1, 1)).try_get_cell(Dims::ZERO).is_none());
    }

    #[test]
    #[should_panic(expected = "was not created")]
    fn get_missing_cell() {
        Maze::new_empty(Dims(2, 2)).get_cell(Dims(1, 1));
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn get_cell_out_of_bounds() {
        two_cells().get_cell(Dims(0, 1));
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn create_twice() {
        let mut maze = two_cells();
        maze.create_cell(Dims(0, 0));
    }
}
