//! Runtime configuration read from the environment.

use std::env;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::EngineConfig;
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_GRID_DIM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub start_level: u32,
    pub rows: usize,
    pub columns: usize,
    /// Append-only JSON-lines event log
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            start_level: 0,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from `BLOCKFALL_*` environment variables
    ///
    /// Unset or unparsable values fall back to defaults. Grid dimensions are
    /// capped at [`MAX_GRID_DIM`]; undersized grids are left for the engine to
    /// reject.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed: parse_var(&lookup, "BLOCKFALL_SEED").unwrap_or_else(clock_seed),
            start_level: parse_var(&lookup, "BLOCKFALL_START_LEVEL").unwrap_or(0),
            rows: parse_var(&lookup, "BLOCKFALL_ROWS")
                .unwrap_or(DEFAULT_ROWS)
                .min(MAX_GRID_DIM),
            columns: parse_var(&lookup, "BLOCKFALL_COLUMNS")
                .unwrap_or(DEFAULT_COLUMNS)
                .min(MAX_GRID_DIM),
            log_path,
        }
    }

    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            rows: self.rows,
            columns: self.columns,
            start_level: self.start_level,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
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
    fn test_reads_all_keys() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_START_LEVEL", "5"),
            ("BLOCKFALL_ROWS", "20"),
            ("BLOCKFALL_COLUMNS", " 8 "),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.jsonl"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.start_level, 5);
        assert_eq!((config.rows, config.columns), (20, 8));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blockfall.jsonl"));
        assert_eq!(config.engine().start_level, 5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BLOCKFALL_START_LEVEL", "fast"),
            ("BLOCKFALL_ROWS", "-3"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]));
        assert_eq!(config.start_level, 0);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_oversized_grid_is_capped() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BLOCKFALL_ROWS", "70000"),
            ("BLOCKFALL_COLUMNS", "40000"),
        ]));
        assert_eq!((config.rows, config.columns), (MAX_GRID_DIM, MAX_GRID_DIM));

        let small = AppConfig::from_lookup(lookup(&[("BLOCKFALL_ROWS", "2")]));
        assert_eq!(small.rows, 2);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = AppConfig::from_env();
    }
}
