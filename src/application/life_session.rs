use crate::domain::life::population;
use crate::domain::{Cell, Grid, GridObserver, LifeStepper, RandomSource, Rule};

/// LifeSession drives a Life run frame by frame.
/// The board advances on a fixed interval while running and the run ends
/// once a generation reports it has stabilized.
pub struct LifeSession {
    pub board: Grid<Cell>,
    stepper: LifeStepper,
    initial: Grid<Cell>,
    pub is_running: bool,
    pub generation: u64,
    pub stabilized: bool,
    pub update_timer: f32,
    /// Seconds between generations
    pub interval: f32,
}

impl LifeSession {
    pub fn new(board: Grid<Cell>, stepper: LifeStepper, interval: f32) -> Self {
        Self {
            initial: board.clone(),
            board,
            stepper,
            is_running: false,
            generation: 0,
            stabilized: false,
            update_timer: 0.0,
            interval: interval.max(0.001),
        }
    }

    pub fn stepper(&self) -> &LifeStepper {
        &self.stepper
    }

    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        self.stepper.set_rule(rule);
        self.stabilized = false;
    }

    /// Live cells on the current board
    pub fn population(&self) -> usize {
        population(&self.board)
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running && !self.stabilized;
        self
    }

    /// Advance exactly one generation, unless the run has ended
    pub fn step(mut self) -> Self {
        self.advance();
        self
    }

    /// Restore the board the session started with
    pub fn reset(mut self) -> Self {
        self.board = self.initial.clone();
        self.generation = 0;
        self.stabilized = false;
        self.is_running = false;
        self.update_timer = 0.0;
        self
    }

    /// Seed a fresh board of the same size, roughly one cell in four alive
    pub fn randomize<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> Self {
        self.board = self.board.map(|_, _| {
            if rng.uniform_int(0, 3) == 0 { Cell::NEWBORN } else { Cell::DEAD }
        });
        self.initial = self.board.clone();
        self.reset()
    }

    /// Adjust the interval between generations
    pub fn adjust_speed(mut self, factor: f32) -> Self {
        self.interval = (self.interval * factor).clamp(0.01, 2.0);
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.interval {
            self.update_timer = 0.0;
            self.advance();
        }

        self
    }

    /// Send the current board to a display.
    pub fn publish(&self, observer: &mut dyn GridObserver) {
        let (rows, cols) = self.board.dimensions();
        observer.set_dimensions(rows, cols);
        for (at, cell) in self.board.iter_cells() {
            observer.draw_age(at, cell.age());
        }
    }

    fn advance(&mut self) {
        if self.stabilized {
            return;
        }

        self.stabilized = self.stepper.step_in_place(&mut self.board);
        self.generation += 1;

        if self.stabilized {
            self.is_running = false;
            tracing::info!(
                generation = self.generation,
                population = self.population(),
                "Life run stabilized"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coord, presets};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lonely_cell() -> Grid<Cell> {
        let mut board = Grid::new(3, 3);
        board[Coord::new(1, 1)] = Cell::NEWBORN;
        board
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let session = LifeSession::new(presets::blinker().to_board(1), LifeStepper::default(), 0.5)
            .toggle_running()
            .tick(0.2);
        assert_eq!(session.generation, 0);

        let session = session.tick(0.4);
        assert_eq!(session.generation, 1);
        assert_eq!(session.update_timer, 0.0);
    }

    #[test]
    fn test_paused_session_does_not_advance() {
        let session = LifeSession::new(lonely_cell(), LifeStepper::default(), 0.1).tick(1.0);
        assert_eq!(session.generation, 0);
        assert_eq!(session.population(), 1);
    }

    #[test]
    fn test_run_ends_when_stabilized() {
        let session = LifeSession::new(lonely_cell(), LifeStepper::default(), 0.1)
            .toggle_running()
            .tick(0.2);
        assert!(session.stabilized);
        assert!(!session.is_running);
        assert_eq!(session.generation, 1);
        assert_eq!(session.population(), 0);

        // Further stepping and restarting do nothing.
        let session = session.step().toggle_running().tick(0.2);
        assert_eq!(session.generation, 1);
        assert!(!session.is_running);
    }

    #[test]
    fn test_reset_restores_initial_board() {
        let start = presets::glider().to_board(2);
        let session = LifeSession::new(start.clone(), LifeStepper::default(), 0.1)
            .step()
            .step()
            .reset();
        assert_eq!(session.board, start);
        assert_eq!(session.generation, 0);
        assert!(!session.stabilized);
    }

    #[test]
    fn test_randomize_keeps_dimensions() {
        let mut rng = StdRng::seed_from_u64(3);
        let session = LifeSession::new(Grid::new(12, 20), LifeStepper::default(), 0.1)
            .randomize(&mut rng);
        assert_eq!(session.board.dimensions(), (12, 20));
        assert!(session.population() > 0);
        assert!(session.board.iter_cells().all(|(_, c)| c.age() <= 1));
    }

    #[test]
    fn test_adjust_speed_clamps() {
        let session = LifeSession::new(lonely_cell(), LifeStepper::default(), 0.1).adjust_speed(100.0);
        assert_eq!(session.interval, 2.0);
        let session = session.adjust_speed(0.0001);
        assert_eq!(session.interval, 0.01);
    }

    #[test]
    fn test_publish_sends_every_age() {
        #[derive(Default)]
        struct Ages {
            dims: (usize, usize),
            live: Vec<(Coord, u32)>,
        }
        impl GridObserver for Ages {
            fn set_dimensions(&mut self, rows: usize, cols: usize) {
                self.dims = (rows, cols);
            }
            fn draw_age(&mut self, at: Coord, age: u32) {
                if age > 0 {
                    self.live.push((at, age));
                }
            }
        }

        let mut ages = Ages::default();
        LifeSession::new(lonely_cell(), LifeStepper::default(), 0.1).publish(&mut ages);
        assert_eq!(ages.dims, (3, 3));
        assert_eq!(ages.live, vec![(Coord::new(1, 1), 1)]);
    }
}
