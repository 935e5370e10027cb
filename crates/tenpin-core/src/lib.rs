//! # tenpin-core — Incremental Ten-Pin Scoring Engine
//!
//! Scores a ten-pin bowling game one roll at a time. Strike and spare bonuses
//! are attributed to earlier frames as the bonus rolls actually arrive, so
//! every frame's score and the running total are always current.
//!
//! ## Architecture
//!
//! ```text
//! ScoringEngine
//!     │
//!     ├── [Frame; 10] (score + raw pins per frame)
//!     ├── cursor state (frame index, roll index, over flag)
//!     └── pending-bonus queue (frame indices owed future pins)
//!           │
//!           v
//!     record_roll(pins) → frames() / total_score() / is_over()
//! ```
//!
//! The engine validates game *flow* (no rolls after the tenth frame is
//! resolved) but not pin counts; callers feed values in `0..=10`.

pub mod engine;
pub mod error;
pub mod frame;

pub use engine::*;
pub use error::*;
pub use frame::*;
