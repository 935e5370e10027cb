//! # tenpin-sim — Batch Validation Harness for the Scoring Engine
//!
//! Generates seeded, rule-valid games, replays them through
//! [`tenpin_core::ScoringEngine`], and cross-checks every game against an
//! independent classical scorer. Used to validate engine invariants over
//! large random batches:
//!
//! - engine frame values and totals match the oracle
//! - the running total never decreases
//! - the game ends exactly when the script does, and stays ended
//!
//! Runs are reproducible: a seed plus the mark-rate knobs fully determine
//! every generated script, and failures carry the offending script.

pub mod generators;
pub mod harness;
pub mod oracle;

pub use generators::*;
pub use harness::*;
