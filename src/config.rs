use anyhow::{Context, Result, ensure};
use std::env;
use std::path::PathBuf;

use crate::domain::life::DEFAULT_MAX_AGE;
use crate::domain::word_search::DEFAULT_MIN_WORD_LEN;

/// Smallest and largest maze side the display accepts
pub const MIN_MAZE_DIMENSION: usize = 7;
pub const MAX_MAZE_DIMENSION: usize = 50;

#[derive(Debug, Clone)]
pub struct Settings {
    pub life: LifeSettings,
    pub boggle: BoggleSettings,
    pub maze: MazeSettings,
}

#[derive(Debug, Clone)]
pub struct LifeSettings {
    pub max_age: u32,
    pub speed_ms: u64,
    /// Initial board file; a preset pattern is used when unset
    pub pattern_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct BoggleSettings {
    pub dictionary_path: PathBuf,
    pub min_word_len: usize,
    pub big_board: bool,
}

#[derive(Debug, Clone)]
pub struct MazeSettings {
    pub dimension: usize,
}

impl Settings {
    /// Read settings from the environment, loading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let life = LifeSettings {
            max_age: var("GRIDKIT_LIFE_MAX_AGE", &DEFAULT_MAX_AGE.to_string())
                .parse()
                .context("GRIDKIT_LIFE_MAX_AGE must be a number")?,
            speed_ms: var("GRIDKIT_LIFE_SPEED_MS", "250")
                .parse()
                .context("GRIDKIT_LIFE_SPEED_MS must be a number of milliseconds")?,
            pattern_path: lookup("GRIDKIT_LIFE_PATTERN").map(PathBuf::from),
        };
        ensure!(life.max_age >= 1, "GRIDKIT_LIFE_MAX_AGE must be at least 1");
        ensure!(life.speed_ms >= 1, "GRIDKIT_LIFE_SPEED_MS must be at least 1");

        let boggle = BoggleSettings {
            dictionary_path: PathBuf::from(var("GRIDKIT_DICTIONARY_PATH", "data/words.txt")),
            min_word_len: var("GRIDKIT_MIN_WORD_LEN", &DEFAULT_MIN_WORD_LEN.to_string())
                .parse()
                .context("GRIDKIT_MIN_WORD_LEN must be a number")?,
            big_board: var("GRIDKIT_BIG_BOARD", "false")
                .parse()
                .context("GRIDKIT_BIG_BOARD must be true or false")?,
        };
        ensure!(boggle.min_word_len >= 1, "GRIDKIT_MIN_WORD_LEN must be at least 1");

        let maze = MazeSettings {
            dimension: var("GRIDKIT_MAZE_DIMENSION", "15")
                .parse()
                .context("GRIDKIT_MAZE_DIMENSION must be a number")?,
        };
        ensure!(
            (MIN_MAZE_DIMENSION..=MAX_MAZE_DIMENSION).contains(&maze.dimension),
            "GRIDKIT_MAZE_DIMENSION must be between {} and {}",
            MIN_MAZE_DIMENSION,
            MAX_MAZE_DIMENSION
        );

        Ok(Settings { life, boggle, maze })
    }

    /// Interval between Life generations in seconds
    pub fn life_interval_secs(&self) -> f32 {
        self.life.speed_ms as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings.life.max_age, DEFAULT_MAX_AGE);
        assert_eq!(settings.life.speed_ms, 250);
        assert!(settings.life.pattern_path.is_none());
        assert_eq!(settings.boggle.dictionary_path, PathBuf::from("data/words.txt"));
        assert_eq!(settings.boggle.min_word_len, 4);
        assert!(!settings.boggle.big_board);
        assert_eq!(settings.maze.dimension, 15);
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("GRIDKIT_LIFE_MAX_AGE", "5"),
            ("GRIDKIT_LIFE_PATTERN", "boards/glider.txt"),
            ("GRIDKIT_BIG_BOARD", "true"),
            ("GRIDKIT_MAZE_DIMENSION", "50"),
        ])
        .unwrap();
        assert_eq!(settings.life.max_age, 5);
        assert_eq!(settings.life.pattern_path, Some(PathBuf::from("boards/glider.txt")));
        assert!(settings.boggle.big_board);
        assert_eq!(settings.maze.dimension, 50);
    }

    #[test]
    fn test_maze_dimension_range() {
        assert!(settings_from(&[("GRIDKIT_MAZE_DIMENSION", "6")]).is_err());
        assert!(settings_from(&[("GRIDKIT_MAZE_DIMENSION", "51")]).is_err());
        assert!(settings_from(&[("GRIDKIT_MAZE_DIMENSION", "7")]).is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(settings_from(&[("GRIDKIT_LIFE_SPEED_MS", "fast")]).is_err());
        assert!(settings_from(&[("GRIDKIT_LIFE_MAX_AGE", "0")]).is_err());
        assert!(settings_from(&[("GRIDKIT_BIG_BOARD", "yes")]).is_err());
    }

    #[test]
    fn test_life_interval() {
        let settings = settings_from(&[("GRIDKIT_LIFE_SPEED_MS", "500")]).unwrap();
        assert!((settings.life_interval_secs() - 0.5).abs() < f32::EPSILON);
    }
}
