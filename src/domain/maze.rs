//! Randomized Kruskal maze carving.
//!
//! Walls between orthogonal neighbors are visited in random order; a wall
//! comes down only when it separates two cells not yet connected, so the
//! opened walls form a spanning tree of the grid.

use std::collections::{HashSet, VecDeque};

use super::components::MergeStrategy;
use super::coord::Coord;
use super::error::{Error, Result};
use super::observer::GridObserver;
use super::random::RandomSource;

/// Removable boundary between two cells. The pair is unordered: both
/// argument orders build the same wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wall {
    one: Coord,
    two: Coord,
}

impl Wall {
    pub fn new(a: Coord, b: Coord) -> Self {
        if a <= b {
            Self { one: a, two: b }
        } else {
            Self { one: b, two: a }
        }
    }

    pub const fn cells(&self) -> (Coord, Coord) {
        (self.one, self.two)
    }

    /// Whether the wall lies between a cell and its south neighbor
    pub fn is_horizontal(&self) -> bool {
        self.one.col == self.two.col
    }
}

/// Every cell of a `rows`x`cols` grid in row-major order
pub fn grid_cells(rows: usize, cols: usize) -> Vec<Coord> {
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| Coord::new(row, col)))
        .collect()
}

/// All interior walls, stored per cell as its east then south wall so no
/// wall appears twice
pub fn grid_walls(rows: usize, cols: usize) -> Vec<Wall> {
    let mut walls = Vec::with_capacity(2 * rows * cols);
    for cell in grid_cells(rows, cols) {
        if cell.col + 1 < cols {
            walls.push(Wall::new(cell, Coord::new(cell.row, cell.col + 1)));
        }
        if cell.row + 1 < rows {
            walls.push(Wall::new(cell, Coord::new(cell.row + 1, cell.col)));
        }
    }
    walls
}

/// Uniform random permutation: repeatedly draw one of the remaining walls
pub fn shuffle_walls<R: RandomSource + ?Sized>(mut walls: Vec<Wall>, rng: &mut R) -> Vec<Wall> {
    let mut shuffled = Vec::with_capacity(walls.len());
    while !walls.is_empty() {
        let pick = rng.uniform_int(0, walls.len() - 1);
        shuffled.push(walls.swap_remove(pick));
    }
    shuffled
}

/// Outcome of processing a wall sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carving {
    /// Opened walls, in processing order
    pub removed: Vec<Wall>,
    /// Walls left standing because their cells were already connected
    pub kept: Vec<Wall>,
}

/// A carved rectangular maze.
#[derive(Clone, Debug)]
pub struct Maze {
    rows: usize,
    cols: usize,
    carving: Carving,
    passages: HashSet<Wall>,
}

impl Maze {
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn removed(&self) -> &[Wall] {
        &self.carving.removed
    }

    pub fn kept(&self) -> &[Wall] {
        &self.carving.kept
    }

    /// Whether the wall between two cells has been opened
    pub fn is_passage(&self, a: Coord, b: Coord) -> bool {
        self.passages.contains(&Wall::new(a, b))
    }

    /// Cells reachable in one move from `at`
    pub fn neighbors(&self, at: Coord) -> Vec<Coord> {
        [(-1, 0), (0, 1), (1, 0), (0, -1)]
            .into_iter()
            .filter_map(|(dr, dc)| at.offset(dr, dc))
            .filter(|n| n.row < self.rows && n.col < self.cols && self.is_passage(at, *n))
            .collect()
    }

    /// Cells reachable from `start` through opened walls
    pub fn reachable_from(&self, start: Coord) -> HashSet<Coord> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(at) = queue.pop_front() {
            for next in self.neighbors(at) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Exactly `cells - 1` openings and every cell reachable, hence no cycle
    pub fn is_spanning_tree(&self) -> bool {
        let cells = self.rows * self.cols;
        if cells == 0 {
            return false;
        }
        self.carving.removed.len() == cells - 1
            && self.reachable_from(Coord::new(0, 0)).len() == cells
    }
}

/// Carves mazes with a chosen component tracker.
#[derive(Clone, Copy, Debug, Default)]
pub struct MazeBuilder {
    strategy: MergeStrategy,
}

impl MazeBuilder {
    pub fn new(strategy: MergeStrategy) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Process walls in the given order, opening each wall whose cells are
    /// not yet connected and leaving the rest.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when there are cells but no walls, or a wall
    /// names a cell outside `cells`. Nothing is carved in either case.
    pub fn carve(
        &self,
        cells: &[Coord],
        walls: &[Wall],
        observer: &mut dyn GridObserver,
    ) -> Result<Carving> {
        if walls.is_empty() && !cells.is_empty() {
            return Err(Error::InvalidInput(format!(
                "no walls to process for {} cells",
                cells.len()
            )));
        }

        let known: HashSet<Coord> = cells.iter().copied().collect();
        if let Some(stray) = walls
            .iter()
            .find(|w| !known.contains(&w.one) || !known.contains(&w.two))
        {
            return Err(Error::InvalidInput(format!(
                "wall {:?} references a cell outside the maze",
                stray
            )));
        }

        let mut components = self.strategy.tracker(cells);
        let mut carving = Carving::default();

        for wall in walls {
            if components.connected(wall.one, wall.two) {
                carving.kept.push(*wall);
                continue;
            }
            observer.remove_wall(wall);
            components.merge(wall.one, wall.two);
            carving.removed.push(*wall);
        }

        tracing::debug!(
            strategy = self.strategy.name(),
            removed = carving.removed.len(),
            kept = carving.kept.len(),
            components = components.count(),
            "Carved maze"
        );

        Ok(carving)
    }

    /// Build a `rows`x`cols` maze from a random wall order
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut R,
        observer: &mut dyn GridObserver,
    ) -> Result<Maze> {
        let cells = grid_cells(rows, cols);
        let walls = grid_walls(rows, cols);

        observer.set_dimensions(rows, cols);
        walls.iter().for_each(|wall| observer.draw_wall(wall));

        let order = shuffle_walls(walls, rng);
        let carving = self.carve(&cells, &order, observer)?;
        let passages = carving.removed.iter().copied().collect();

        Ok(Maze {
            rows,
            cols,
            carving,
            passages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::observer::NullObserver;
    use crate::domain::random::testing::Scripted;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct Recorder {
        drawn: Vec<Wall>,
        removed: Vec<Wall>,
    }

    impl GridObserver for Recorder {
        fn draw_wall(&mut self, wall: &Wall) {
            self.drawn.push(*wall);
        }

        fn remove_wall(&mut self, wall: &Wall) {
            self.removed.push(*wall);
        }
    }

    #[test]
    fn test_wall_is_unordered() {
        let a = Coord::new(1, 1);
        let b = Coord::new(1, 2);
        assert_eq!(Wall::new(a, b), Wall::new(b, a));
        assert!(!Wall::new(a, b).is_horizontal());
        assert!(Wall::new(a, Coord::new(2, 1)).is_horizontal());
    }

    #[test]
    fn test_grid_walls_count_and_uniqueness() {
        let walls = grid_walls(4, 6);
        // rows * (cols - 1) + (rows - 1) * cols
        assert_eq!(walls.len(), 4 * 5 + 3 * 6);

        let unique: HashSet<_> = walls.iter().collect();
        assert_eq!(unique.len(), walls.len());
        assert!(walls.iter().all(|w| {
            let (a, b) = w.cells();
            a.is_adjacent4(b)
        }));
    }

    #[test]
    fn test_grid_walls_east_then_south() {
        let c = |row, col| Coord::new(row, col);
        assert_eq!(
            grid_walls(2, 2),
            vec![
                Wall::new(c(0, 0), c(0, 1)),
                Wall::new(c(0, 0), c(1, 0)),
                Wall::new(c(0, 1), c(1, 1)),
                Wall::new(c(1, 0), c(1, 1)),
            ]
        );
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let walls = grid_walls(5, 5);
        let mut rng = StdRng::seed_from_u64(42);
        let shuffled = shuffle_walls(walls.clone(), &mut rng);

        let mut a = walls.clone();
        let mut b = shuffled.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_follows_draws() {
        let walls = grid_walls(1, 4);
        // Always take the first remaining wall
        let mut rng = Scripted::new(vec![0, 0, 0]);
        let shuffled = shuffle_walls(walls.clone(), &mut rng);
        // swap_remove(0) moves the last wall to the front
        assert_eq!(shuffled, vec![walls[0], walls[2], walls[1]]);
    }

    #[test]
    fn test_maze_is_spanning_tree() {
        for strategy in MergeStrategy::all() {
            for seed in 0..5 {
                let n = 8;
                let mut rng = StdRng::seed_from_u64(seed);
                let maze = MazeBuilder::new(strategy)
                    .generate(n, n, &mut rng, &mut NullObserver)
                    .unwrap();

                assert_eq!(maze.removed().len(), n * n - 1);
                assert_eq!(maze.removed().len() + maze.kept().len(), grid_walls(n, n).len());
                assert!(maze.is_spanning_tree());
            }
        }
    }

    #[test]
    fn test_removed_edges_have_no_cycle() {
        let mut rng = StdRng::seed_from_u64(9);
        let maze = MazeBuilder::default()
            .generate(6, 6, &mut rng, &mut NullObserver)
            .unwrap();

        // Plain union-find over the opened walls: a cycle would join two
        // cells already joined.
        let cells = grid_cells(6, 6);
        let mut parent: Vec<usize> = (0..cells.len()).collect();
        fn root(parent: &[usize], mut i: usize) -> usize {
            while parent[i] != i {
                i = parent[i];
            }
            i
        }
        for wall in maze.removed() {
            let (a, b) = wall.cells();
            let ra = root(&parent, a.row * 6 + a.col);
            let rb = root(&parent, b.row * 6 + b.col);
            assert_ne!(ra, rb);
            parent[ra] = rb;
        }
    }

    #[test]
    fn test_fixed_order_skips_transitive_edge() {
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 1);
        let c = Coord::new(0, 2);
        let walls = [Wall::new(a, b), Wall::new(b, c), Wall::new(a, c)];

        for strategy in MergeStrategy::all() {
            let carving = MazeBuilder::new(strategy)
                .carve(&[a, b, c], &walls, &mut NullObserver)
                .unwrap();
            assert_eq!(carving.removed, vec![walls[0], walls[1]]);
            assert_eq!(carving.kept, vec![walls[2]]);
        }
    }

    #[test]
    fn test_strategies_make_identical_decisions() {
        let cells = grid_cells(10, 10);
        let mut rng = StdRng::seed_from_u64(3);
        let order = shuffle_walls(grid_walls(10, 10), &mut rng);

        let sets = MazeBuilder::new(MergeStrategy::ComponentSets)
            .carve(&cells, &order, &mut NullObserver)
            .unwrap();
        let dsu = MazeBuilder::new(MergeStrategy::DisjointSet)
            .carve(&cells, &order, &mut NullObserver)
            .unwrap();
        assert_eq!(sets, dsu);
    }

    #[test]
    fn test_observer_sees_every_wall() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut recorder = Recorder::default();
        let maze = MazeBuilder::default()
            .generate(4, 4, &mut rng, &mut recorder)
            .unwrap();

        assert_eq!(recorder.drawn, grid_walls(4, 4));
        assert_eq!(recorder.removed, maze.removed());
    }

    #[test]
    fn test_rejects_bad_input() {
        let cells = grid_cells(2, 2);
        let builder = MazeBuilder::default();
        assert!(matches!(
            builder.carve(&cells, &[], &mut NullObserver),
            Err(Error::InvalidInput(_))
        ));

        let stray = [Wall::new(Coord::new(0, 0), Coord::new(5, 5))];
        assert!(matches!(
            builder.carve(&cells, &stray, &mut NullObserver),
            Err(Error::InvalidInput(_))
        ));

        assert!(builder.carve(&[], &[], &mut NullObserver).unwrap().removed.is_empty());
    }
}
