//! Per-frame scoring record

use serde::{Deserialize, Serialize};

/// Frames in one game
pub const FRAMES_PER_GAME: usize = 10;

/// Pins on a full deck
pub const ALL_PINS: u32 = 10;

/// One of the ten scoring units of a game.
///
/// `score` keeps growing after the frame's own rolls are done while the frame
/// still has bonus credit outstanding (strike or spare), so it is only final
/// once the bonus rolls have been recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Total attributed to this frame so far, bonus pins included
    pub score: u32,
    /// Raw pin counts rolled within this frame (3 entries only in the 10th)
    pub pins_rolled: Vec<u32>,
}

impl Frame {
    /// All ten pins on the frame's first roll
    pub fn is_strike(&self) -> bool {
        self.pins_rolled.first() == Some(&ALL_PINS)
    }

    /// All ten pins across the frame's two regular rolls, none on the first
    /// roll alone
    pub fn is_spare(&self) -> bool {
        !self.is_strike()
            && self.pins_rolled.len() >= 2
            && self.pins_rolled[..2].iter().sum::<u32>() == ALL_PINS
    }

    /// Sum of raw pins rolled in this frame, without bonus credit
    pub fn pin_total(&self) -> u32 {
        self.pins_rolled.iter().sum()
    }
}
