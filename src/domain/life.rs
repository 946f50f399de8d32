//! Synchronous Life transition with cell aging.
//!
//! Every cell of the next generation is computed from the previous board
//! only. Whether the run has stabilized is decided in the same pass.

use super::coord::Coord;
use super::grid::Grid;
use super::rules::{ConwayRule, Rule};
use super::Cell;

/// Age at which a live cell stops maturing
pub const DEFAULT_MAX_AGE: u32 = 9;

/// Result of advancing a board one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub board: Grid<Cell>,
    /// True when nothing changed that could make a later generation differ
    pub stabilized: bool,
}

/// Computes successive Life generations.
pub struct LifeStepper {
    rule: Box<dyn Rule>,
    max_age: u32,
}

impl Default for LifeStepper {
    fn default() -> Self {
        Self::new(Box::new(ConwayRule), DEFAULT_MAX_AGE)
    }
}

impl LifeStepper {
    pub fn new(rule: Box<dyn Rule>, max_age: u32) -> Self {
        Self {
            rule,
            max_age: max_age.max(1),
        }
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        self.rule = rule;
    }

    pub const fn max_age(&self) -> u32 {
        self.max_age
    }

    /// Compute the next generation.
    ///
    /// The board is still changing if a previously live cell dies, a cell
    /// is born, or some cell's new age is live but below `max_age`. A board
    /// made only of dead cells and cells pinned at `max_age` is stable, and
    /// so is a board left with no live cell at all.
    pub fn step(&self, prior: &Grid<Cell>) -> Generation {
        let mut changing = false;
        let mut any_alive = false;

        let board = prior.map(|at, &cell| {
            let next = cell.evolve(count_live_neighbors(prior, at), self.rule.as_ref(), self.max_age);

            let died = cell.is_alive() && !next.is_alive();
            let born = !cell.is_alive() && next.is_alive();
            let maturing = next.is_alive() && next.age() < self.max_age;
            changing |= died || born || maturing;
            any_alive |= next.is_alive();

            next
        });

        Generation {
            board,
            stabilized: !changing || !any_alive,
        }
    }

    /// Advance a board in place, returning whether it has stabilized
    pub fn step_in_place(&self, board: &mut Grid<Cell>) -> bool {
        let Generation { board: next, stabilized } = self.step(board);
        *board = next;
        stabilized
    }
}

/// Count live neighbors, bounds-checked, excluding the cell itself
pub fn count_live_neighbors(board: &Grid<Cell>, at: Coord) -> u8 {
    board
        .neighbors8(at)
        .filter(|&n| board[n].is_alive())
        .count() as u8
}

/// Count live cells on the board
pub fn population(board: &Grid<Cell>) -> usize {
    board.iter_cells().filter(|(_, cell)| cell.is_alive()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::SeedsRule;

    fn board_from(rows: &[&str]) -> Grid<Cell> {
        let rows = rows
            .iter()
            .map(|r| {
                r.chars()
                    .map(|c| match c.to_digit(10) {
                        Some(age) => Cell::with_age(age),
                        None => Cell::DEAD,
                    })
                    .collect()
            })
            .collect();
        Grid::from_rows(rows).unwrap()
    }

    fn alive(board: &Grid<Cell>) -> Vec<Coord> {
        board
            .iter_cells()
            .filter(|(_, c)| c.is_alive())
            .map(|(at, _)| at)
            .collect()
    }

    #[test]
    fn test_lonely_cell_dies_and_stabilizes() {
        let board = board_from(&["...", ".1.", "..."]);
        let next = LifeStepper::default().step(&board);

        assert_eq!(population(&next.board), 0);
        assert!(next.stabilized);
    }

    #[test]
    fn test_death_counts_as_change() {
        // One cell dies, the block neighbors stay pinned at max age.
        let board = board_from(&["99...", "99..1", "....."]);
        let next = LifeStepper::new(Box::new(ConwayRule), 9).step(&board);

        assert!(!next.stabilized);
        assert_eq!(alive(&next.board).len(), 4);

        let after = LifeStepper::new(Box::new(ConwayRule), 9).step(&next.board);
        assert!(after.stabilized);
    }

    #[test]
    fn test_still_life_stabilizes_at_max_age() {
        let stepper = LifeStepper::new(Box::new(ConwayRule), 3);
        let mut board = board_from(&["....", ".11.", ".11.", "...."]);

        // Ages 1 -> 2, still maturing
        assert!(!stepper.step_in_place(&mut board));
        assert_eq!(board[Coord::new(1, 1)].age(), 2);
        // Every new age equals the cap, nothing left to mature
        assert!(stepper.step_in_place(&mut board));
        assert_eq!(board[Coord::new(1, 1)].age(), 3);
        assert!(stepper.step_in_place(&mut board));
        assert_eq!(board[Coord::new(1, 1)].age(), 3);
    }

    #[test]
    fn test_blinker_oscillates() {
        let stepper = LifeStepper::default();
        let board = board_from(&[".....", "..1..", "..1..", "..1..", "....."]);

        let next = stepper.step(&board);
        assert_eq!(
            alive(&next.board),
            vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
        );
        assert_eq!(next.board[Coord::new(2, 2)].age(), 2);
        assert_eq!(next.board[Coord::new(2, 1)].age(), 1);
        assert!(!next.stabilized);

        let back = stepper.step(&next.board);
        assert_eq!(alive(&back.board), alive(&board));
    }

    #[test]
    fn test_uses_only_prior_generation() {
        // A row of three in a corner: births and deaths must not see each other.
        let board = board_from(&["111", "...", "..."]);
        let next = LifeStepper::default().step(&board);
        assert_eq!(alive(&next.board), vec![Coord::new(0, 1), Coord::new(1, 1)]);
    }

    #[test]
    fn test_step_is_deterministic() {
        let board = board_from(&[".1..1", "11.1.", "..111", "1...1", ".1.1."]);
        let stepper = LifeStepper::default();
        assert_eq!(stepper.step(&board), stepper.step(&board));
    }

    #[test]
    fn test_alternate_rule() {
        let board = board_from(&["1.1", "...", "..."]);
        let next = LifeStepper::new(Box::new(SeedsRule), 9).step(&board);
        assert_eq!(alive(&next.board), vec![Coord::new(0, 1), Coord::new(1, 1)]);
    }

    #[test]
    fn test_neighbor_count_edges() {
        let board = board_from(&["11", "11"]);
        assert_eq!(count_live_neighbors(&board, Coord::new(0, 0)), 3);
    }
}
