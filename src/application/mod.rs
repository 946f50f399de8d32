mod life_session;
mod maze_session;
mod word_game;

pub use life_session::LifeSession;
pub use maze_session::{MazeSession, WallEvent, WallRecorder};
pub use word_game::{GuessOutcome, WordRound};
