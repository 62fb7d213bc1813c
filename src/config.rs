//! Engine configuration: heuristic codes, rule variants and search settings.
//!
//! All of these are plain values threaded through the engine. Two engines
//! with different settings can run side by side in the same process.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_DEPTH, DEFAULT_TOP_N, HEURISTIC_TERMS, SEEDS_PER_PIT};
use crate::error::EngineError;

/// A six-flag code selecting which heuristic terms (H1..H6) are summed
/// when a side's position is evaluated.
///
/// Parsed from strings such as `"100000"`; flag `i` enables term `H(i+1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HeuristicCode {
    flags: [bool; HEURISTIC_TERMS],
}

impl HeuristicCode {
    /// Build a code from explicit flags.
    pub const fn new(flags: [bool; HEURISTIC_TERMS]) -> Self {
        Self { flags }
    }

    /// The all-zero code: no heuristic preference, moves are chosen at random.
    pub const fn random() -> Self {
        Self::new([false; HEURISTIC_TERMS])
    }

    /// Whether term `H(index+1)` is enabled.
    #[inline]
    pub fn is_enabled(&self, index: usize) -> bool {
        self.flags[index]
    }

    /// True for the all-zero code.
    pub fn is_random(&self) -> bool {
        self.flags.iter().all(|&f| !f)
    }
}

impl Default for HeuristicCode {
    fn default() -> Self {
        Self::new([true, false, false, false, false, false])
    }
}

impl FromStr for HeuristicCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != HEURISTIC_TERMS {
            return Err(EngineError::InvalidHeuristicCode(s.to_string()));
        }
        let mut flags = [false; HEURISTIC_TERMS];
        for (flag, &b) in flags.iter_mut().zip(bytes) {
            *flag = match b {
                b'0' => false,
                b'1' => true,
                _ => return Err(EngineError::InvalidHeuristicCode(s.to_string())),
            };
        }
        Ok(Self { flags })
    }
}

impl fmt::Display for HeuristicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &flag in &self.flags {
            write!(f, "{}", if flag { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Rule variants applied by every board copy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Seeds placed in each pit by a new game.
    pub seeds_per_pit: u8,
    /// When set, a capture only happens if the opposite pit holds seeds.
    pub capture_requires_opposite: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            seeds_per_pit: SEEDS_PER_PIT,
            capture_requires_opposite: false,
        }
    }
}

/// Settings for `Engine::find_best_move`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search depth in full turns below each top-level candidate.
    pub depth: usize,
    /// Number of ranked candidates to return.
    pub top_n: usize,
    /// Worker threads; `None` uses every available processing unit.
    pub threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            top_n: DEFAULT_TOP_N,
            threads: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Resolve the worker count, falling back to the number of CPUs.
    pub fn worker_count(&self) -> usize {
        self.threads
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_code() {
        let code: HeuristicCode = "100000".parse().unwrap();
        assert_eq!(code, HeuristicCode::default());
        assert!(code.is_enabled(0));
        assert!(!code.is_enabled(5));
        assert_eq!(code.to_string(), "100000");
    }

    #[test]
    fn test_random_code() {
        let code: HeuristicCode = "000000".parse().unwrap();
        assert!(code.is_random());
        assert!(!HeuristicCode::default().is_random());
    }

    #[test]
    fn test_reject_malformed_codes() {
        for bad in ["", "10000", "1000000", "10a000", "2000001", "１00000"] {
            assert!(
                matches!(
                    bad.parse::<HeuristicCode>(),
                    Err(EngineError::InvalidHeuristicCode(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_worker_count_never_zero() {
        let cfg = SearchConfig {
            threads: Some(0),
            ..SearchConfig::default()
        };
        assert_eq!(cfg.worker_count(), 1);
        assert!(SearchConfig::default().worker_count() >= 1);
    }
}
