//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `POLE_TICK_MS` | 40 |
//! | `POLE_SEED` | 1 |
//! | `POLE_DISTANCE_MODE` | `literal` (or `scaled`) |
//! | `POLE_KEY_RELEASE_TIMEOUT_MS` | 500 |
//! | `POLE_LOG_PATH` | unset (no log file) |
//!
//! Values that do not parse fall back to the default.

use std::path::PathBuf;

use crate::core::DistanceMode;
use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_ms: u32,
    pub seed: u32,
    pub distance_mode: DistanceMode,
    pub key_release_timeout_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: 1,
            distance_mode: DistanceMode::Literal,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = var("POLE_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let seed = var("POLE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let distance_mode = var("POLE_DISTANCE_MODE")
            .and_then(|s| DistanceMode::from_str(&s))
            .unwrap_or(defaults.distance_mode);

        let key_release_timeout_ms = var("POLE_KEY_RELEASE_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.key_release_timeout_ms);

        let log_path = var("POLE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            tick_ms,
            seed,
            distance_mode,
            key_release_timeout_ms,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(GameConfig::from_vars(lookup(&[])), GameConfig::default());
        assert_eq!(GameConfig::default().key_release_timeout_ms, 500);
    }

    #[test]
    fn test_reads_every_variable() {
        let config = GameConfig::from_vars(lookup(&[
            ("POLE_TICK_MS", "20"),
            ("POLE_SEED", " 42 "),
            ("POLE_DISTANCE_MODE", "Scaled"),
            ("POLE_KEY_RELEASE_TIMEOUT_MS", "250"),
            ("POLE_LOG_PATH", "/tmp/pole.log"),
        ]));
        assert_eq!(config.tick_ms, 20);
        assert_eq!(config.seed, 42);
        assert_eq!(config.distance_mode, DistanceMode::Scaled);
        assert_eq!(config.key_release_timeout_ms, 250);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/pole.log")));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = GameConfig::from_vars(lookup(&[
            ("POLE_TICK_MS", "0"),
            ("POLE_SEED", "-3"),
            ("POLE_DISTANCE_MODE", "warp"),
            ("POLE_LOG_PATH", "   "),
        ]));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
