//! Game configuration
//!
//! Board size, pacing, reset policy and RNG seed. None of these change the
//! gameplay rules.

use std::env;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use crate::types::{Direction, GRID_HEIGHT, GRID_WIDTH, TICK_MS};

/// Heading given to the snake when it is reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetDirection {
    Fixed(Direction),
    Random,
}

impl ResetDirection {
    /// Parse "random" or a direction name (see `Direction::from_str`)
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Some(ResetDirection::Random);
        }
        Direction::from_str(s).map(ResetDirection::Fixed)
    }

    /// Resolve to a concrete heading
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        match self {
            ResetDirection::Fixed(d) => *d,
            ResetDirection::Random => Direction::ALL[rng.gen_range(0..Direction::ALL.len())],
        }
    }
}

impl Default for ResetDirection {
    fn default() -> Self {
        ResetDirection::Fixed(Direction::Right)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small: need at least two cells")]
    GridTooSmall { width: u16, height: u16 },
    #[error("tick interval must be non-zero")]
    ZeroTick,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_ms: u32,
    pub seed: u64,
    pub reset_direction: ResetDirection,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            tick_ms: TICK_MS,
            seed: 1,
            reset_direction: ResetDirection::default(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `SNAKE_GRID_WIDTH` / `SNAKE_GRID_HEIGHT`: board size in cells
    /// - `SNAKE_TICK_MS`: tick interval
    /// - `SNAKE_SEED`: food placement seed (random when unset)
    /// - `SNAKE_RESET_DIRECTION`: `up|down|left|right|random`
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`], reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            grid_width: parse_var(&lookup, "SNAKE_GRID_WIDTH").unwrap_or(defaults.grid_width),
            grid_height: parse_var(&lookup, "SNAKE_GRID_HEIGHT").unwrap_or(defaults.grid_height),
            tick_ms: parse_var(&lookup, "SNAKE_TICK_MS").unwrap_or(defaults.tick_ms),
            seed: parse_var(&lookup, "SNAKE_SEED").unwrap_or_else(rand::random),
            reset_direction: lookup("SNAKE_RESET_DIRECTION")
                .and_then(|s| ResetDirection::from_str(&s))
                .unwrap_or(defaults.reset_direction),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_grid(mut self, width: u16, height: u16) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn with_reset_direction(mut self, reset_direction: ResetDirection) -> Self {
        self.reset_direction = reset_direction;
        self
    }

    /// Reject boards that cannot hold both a snake and a food cell
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = (self.grid_width as usize) * (self.grid_height as usize);
        if cells < 2 {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.reset_direction, ResetDirection::Fixed(Direction::Right));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let tiny = GameConfig::default().with_grid(1, 1);
        assert_eq!(
            tiny.validate(),
            Err(ConfigError::GridTooSmall { width: 1, height: 1 })
        );
        assert!(GameConfig::default().with_grid(0, 10).validate().is_err());
        assert!(GameConfig::default().with_grid(2, 1).validate().is_ok());

        let stopped = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(stopped.validate(), Err(ConfigError::ZeroTick));
    }

    #[test]
    fn test_reset_direction_parse() {
        assert_eq!(ResetDirection::from_str("random"), Some(ResetDirection::Random));
        assert_eq!(ResetDirection::from_str("Random "), Some(ResetDirection::Random));
        assert_eq!(
            ResetDirection::from_str("up"),
            Some(ResetDirection::Fixed(Direction::Up))
        );
        assert_eq!(ResetDirection::from_str("sideways"), None);
    }

    #[test]
    fn test_reset_direction_pick() {
        let mut rng = StdRng::seed_from_u64(5);
        let fixed = ResetDirection::Fixed(Direction::Left);
        for _ in 0..10 {
            assert_eq!(fixed.pick(&mut rng), Direction::Left);
        }

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(ResetDirection::Random.pick(&mut rng));
        }
        assert_eq!(seen.len(), 4);
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_from_lookup_reads_trimmed_values() {
        let config = GameConfig::from_lookup(lookup(&[
            ("SNAKE_GRID_WIDTH", " 40 "),
            ("SNAKE_GRID_HEIGHT", "20"),
            ("SNAKE_TICK_MS", "100\n"),
            ("SNAKE_SEED", "12345"),
            ("SNAKE_RESET_DIRECTION", "up"),
        ]));
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.reset_direction, ResetDirection::Fixed(Direction::Up));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_falls_back_on_garbage() {
        let config = GameConfig::from_lookup(lookup(&[
            ("SNAKE_GRID_WIDTH", "wide"),
            ("SNAKE_GRID_HEIGHT", "-3"),
            ("SNAKE_TICK_MS", "fast"),
            ("SNAKE_SEED", "7"),
            ("SNAKE_RESET_DIRECTION", "sideways"),
        ]));
        let defaults = GameConfig::default();
        assert_eq!(config.grid_width, defaults.grid_width);
        assert_eq!(config.grid_height, defaults.grid_height);
        assert_eq!(config.tick_ms, defaults.tick_ms);
        assert_eq!(config.reset_direction, defaults.reset_direction);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_from_lookup_random_reset_direction() {
        let config = GameConfig::from_lookup(lookup(&[("SNAKE_RESET_DIRECTION", "random")]));
        assert_eq!(config.reset_direction, ResetDirection::Random);
    }

    #[test]
    fn test_from_lookup_unset_seed_is_random() {
        // Two draws of a random u64 colliding is not a realistic outcome.
        let a = GameConfig::from_lookup(|_| None);
        let b = GameConfig::from_lookup(|_| None);
        assert_ne!(a.seed, b.seed);
        assert_eq!(a.grid_width, GRID_WIDTH);
    }

    #[test]
    fn test_from_lookup_degenerate_width_is_rejected() {
        let config = GameConfig::from_lookup(lookup(&[
            ("SNAKE_GRID_WIDTH", "1"),
            ("SNAKE_GRID_HEIGHT", "1"),
        ]));
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooSmall { width: 1, height: 1 })
        );

        let zero = GameConfig::from_lookup(lookup(&[("SNAKE_TICK_MS", "0")]));
        assert_eq!(zero.validate(), Err(ConfigError::ZeroTick));
    }
}
