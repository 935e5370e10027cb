//! Batch validation runner

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tenpin_core::ScoringEngine;

use crate::generators::RollGenerator;
use crate::oracle;

/// Batch run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Games per run
    pub iterations: usize,

    /// Seed for reproducible runs (`None`: seeded from the OS)
    pub seed: Option<u64>,

    /// Probability of a strike on a fresh rack
    pub strike_rate: f64,

    /// Probability of converting a leave into a spare
    pub spare_rate: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000,
            seed: None,
            strike_rate: 0.25,
            spare_rate: 0.25,
        }
    }
}

/// Why a replayed game diverged
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
pub enum SimError {
    /// Engine refused a roll the script still owed it
    #[error("roll {roll} rejected while the game was still open")]
    RollRejected { roll: usize },

    /// Engine reported game over before the script ended
    #[error("game over after roll {roll}, script has {script_len} rolls")]
    EndedEarly { roll: usize, script_len: usize },

    /// Script exhausted without the engine terminating
    #[error("script exhausted but the game is not over")]
    NotOverAtEnd,

    /// Terminal state accepted another roll
    #[error("engine accepted a roll after game end")]
    AcceptedAfterEnd,

    /// Running total decreased
    #[error("total decreased from {from} to {to} at roll {roll}")]
    TotalDecreased { roll: usize, from: u32, to: u32 },

    /// Script the oracle cannot score (generator bug)
    #[error("oracle could not score the script")]
    UnscorableScript,

    /// Engine and oracle disagree on a frame value
    #[error("frame {frame} scored {engine} by the engine, {oracle} by the oracle")]
    FrameDiverged {
        frame: usize,
        engine: u32,
        oracle: u32,
    },
}

/// One failed game with its reproduction data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimFailure {
    /// Iteration number within the batch
    pub iteration: usize,
    /// The full roll script that failed
    pub script: Vec<u32>,
    /// What went wrong
    pub error: SimError,
}

/// Result of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    /// Games played
    pub iterations: usize,
    /// Seed used (for reproducibility)
    pub seed: Option<u64>,
    /// Divergent games with their scripts
    pub failures: Vec<SimFailure>,
    /// Lowest game total seen
    pub min_total: u32,
    /// Highest game total seen
    pub max_total: u32,
    /// Mean game total
    pub mean_total: f64,
    /// Whether every game passed
    pub passed: bool,
}

/// Batch runner: generates seeded games and cross-checks the engine against
/// the oracle on each one.
pub struct SimRunner {
    config: SimConfig,
}

impl SimRunner {
    /// Create a runner with the given config
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Run the batch
    pub fn run(&self) -> SimReport {
        let mut generator = RollGenerator::new(self.config.seed)
            .with_mark_rates(self.config.strike_rate, self.config.spare_rate);

        let mut failures = Vec::new();
        let mut min_total = u32::MAX;
        let mut max_total = 0u32;
        let mut total_sum = 0u64;
        let mut passes = 0usize;

        for iteration in 0..self.config.iterations {
            let script = generator.game();
            match check_game(&script) {
                Ok(total) => {
                    min_total = min_total.min(total);
                    max_total = max_total.max(total);
                    total_sum += u64::from(total);
                    passes += 1;
                }
                Err(error) => failures.push(SimFailure {
                    iteration,
                    script,
                    error,
                }),
            }
        }

        log::debug!(
            "sim batch done: {}/{} games passed",
            passes,
            self.config.iterations
        );

        SimReport {
            iterations: self.config.iterations,
            seed: self.config.seed,
            passed: failures.is_empty(),
            failures,
            min_total: if passes == 0 { 0 } else { min_total },
            max_total,
            mean_total: if passes == 0 {
                0.0
            } else {
                total_sum as f64 / passes as f64
            },
        }
    }
}

/// Replay one complete script through a fresh engine, checking every
/// invariant along the way. Returns the final total on success.
pub fn check_game(script: &[u32]) -> Result<u32, SimError> {
    let expected = oracle::frame_scores(script).ok_or(SimError::UnscorableScript)?;

    let mut engine = ScoringEngine::new();
    let mut previous = 0u32;

    for (roll, &pins) in script.iter().enumerate() {
        if engine.is_over() {
            return Err(SimError::EndedEarly {
                roll,
                script_len: script.len(),
            });
        }
        engine
            .record_roll(pins)
            .map_err(|_| SimError::RollRejected { roll })?;

        let total = engine.total_score();
        if total < previous {
            return Err(SimError::TotalDecreased {
                roll,
                from: previous,
                to: total,
            });
        }
        previous = total;
    }

    if !engine.is_over() {
        return Err(SimError::NotOverAtEnd);
    }
    if engine.record_roll(0).is_ok() {
        return Err(SimError::AcceptedAfterEnd);
    }

    for (frame, (got, want)) in engine.frames().iter().zip(expected).enumerate() {
        if got.score != want {
            return Err(SimError::FrameDiverged {
                frame,
                engine: got.score,
                oracle: want,
            });
        }
    }

    Ok(engine.total_score())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_game_accepts_known_scripts() {
        assert_eq!(check_game(&[10; 12]), Ok(300));
        assert_eq!(check_game(&[5; 21]), Ok(150));
        assert_eq!(check_game(&[0; 20]), Ok(0));
    }

    #[test]
    fn test_check_game_flags_bad_scripts() {
        assert_eq!(check_game(&[10; 11]), Err(SimError::UnscorableScript));
        assert_eq!(check_game(&[0; 21]), Err(SimError::UnscorableScript));
    }

    #[test]
    fn test_seeded_batch_passes() {
        let report = SimRunner::new(SimConfig {
            iterations: 500,
            seed: Some(1337),
            ..Default::default()
        })
        .run();

        assert!(report.passed, "failures: {:?}", report.failures);
        assert_eq!(report.iterations, 500);
        assert!(report.max_total <= 300);
        assert!(f64::from(report.min_total) <= report.mean_total);
        assert!(report.mean_total <= f64::from(report.max_total));
    }

    #[test]
    fn test_report_serde_round_trip() {
        let report = SimRunner::new(SimConfig {
            iterations: 10,
            seed: Some(5),
            ..Default::default()
        })
        .run();

        let json = serde_json::to_string(&report).unwrap();
        let back: SimReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.iterations, report.iterations);
        assert_eq!(back.passed, report.passed);
        assert_eq!(back.max_total, report.max_total);
    }
}
