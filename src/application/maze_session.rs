use crate::domain::{GridObserver, Maze, MazeBuilder, RandomSource, Result, Wall};

/// One display notification captured while a maze was carved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallEvent {
    Draw(Wall),
    Remove(Wall),
}

/// Observer that keeps every wall notification in order
#[derive(Debug, Default)]
pub struct WallRecorder {
    pub dimensions: (usize, usize),
    pub events: Vec<WallEvent>,
}

impl GridObserver for WallRecorder {
    fn set_dimensions(&mut self, rows: usize, cols: usize) {
        self.dimensions = (rows, cols);
    }

    fn draw_wall(&mut self, wall: &Wall) {
        self.events.push(WallEvent::Draw(*wall));
    }

    fn remove_wall(&mut self, wall: &Wall) {
        self.events.push(WallEvent::Remove(*wall));
    }
}

/// MazeSession replays a finished build over time.
/// The maze is carved up front; the recorded wall removals are handed to
/// the display one per interval so the carving can be watched.
pub struct MazeSession {
    maze: Maze,
    events: Vec<WallEvent>,
    cursor: usize,
    pub is_running: bool,
    pub update_timer: f32,
    /// Seconds between replayed removals
    pub interval: f32,
}

impl MazeSession {
    /// Build a `dimension`x`dimension` maze and prepare its replay
    pub fn new<R: RandomSource + ?Sized>(
        builder: MazeBuilder,
        dimension: usize,
        rng: &mut R,
        interval: f32,
    ) -> Result<Self> {
        let mut recorder = WallRecorder::default();
        let maze = builder.generate(dimension, dimension, rng, &mut recorder)?;

        Ok(Self {
            maze,
            events: recorder.events,
            cursor: 0,
            is_running: true,
            update_timer: 0.0,
            interval: interval.max(0.0),
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Events not yet sent to the display
    pub fn pending(&self) -> usize {
        self.events.len() - self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == self.events.len()
    }

    /// Send the grid and every initial wall, up to the first removal.
    pub fn start(&mut self, observer: &mut dyn GridObserver) {
        let (rows, cols) = self.maze.dimensions();
        observer.set_dimensions(rows, cols);
        while let Some(WallEvent::Draw(wall)) = self.events.get(self.cursor) {
            observer.draw_wall(wall);
            self.cursor += 1;
        }
    }

    /// Update replay by one frame, sending at most one removal
    pub fn tick(&mut self, delta_time: f32, observer: &mut dyn GridObserver) {
        if !self.is_running || self.is_finished() {
            return;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.interval {
            self.update_timer = 0.0;
            self.replay_next(observer);
        }
    }

    /// Send everything still pending
    pub fn finish(&mut self, observer: &mut dyn GridObserver) {
        while self.replay_next(observer) {}
    }

    fn replay_next(&mut self, observer: &mut dyn GridObserver) -> bool {
        let Some(event) = self.events.get(self.cursor) else {
            return false;
        };
        match event {
            WallEvent::Draw(wall) => observer.draw_wall(wall),
            WallEvent::Remove(wall) => observer.remove_wall(wall),
        }
        self.cursor += 1;
        true
    }
}
