//! Incremental scoring state machine

use std::collections::VecDeque;

use crate::error::{GameError, GameResult};
use crate::frame::{ALL_PINS, FRAMES_PER_GAME, Frame};

/// Incremental ten-pin scoring engine.
///
/// Consumes one roll at a time and keeps all ten frame scores current as
/// bonus pins arrive. A strike or spare's full value is unknown until later
/// rolls happen, so the engine keeps a FIFO queue of frame indices still owed
/// bonus pins: a spare frame is queued once, a strike frame twice, and each
/// subsequent roll settles the queued credit.
///
/// Rolls are rejected once the game is over. Pin counts are not validated;
/// callers supply values in `0..=10`.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    /// The ten frames, fixed for the whole game
    frames: [Frame; FRAMES_PER_GAME],
    /// Frame the next roll lands in
    current_frame: usize,
    /// Roll cursor within the current frame
    current_roll: usize,
    /// Terminal flag
    over: bool,
    /// Frame indices still owed bonus pins, oldest first. Entries for one
    /// frame are adjacent and must be settled by different rolls.
    pending_bonus: VecDeque<usize>,
}

impl ScoringEngine {
    /// Fresh engine: ten zeroed frames, empty bonus queue
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|_| Frame::default()),
            current_frame: 0,
            current_roll: 0,
            over: false,
            pending_bonus: VecDeque::new(),
        }
    }

    /// Record a single roll.
    ///
    /// Updates the rolled frame, pays outstanding bonus credit to earlier
    /// frames, and advances the cursor. Fails with [`GameError::AlreadyOver`]
    /// once the tenth frame is resolved; no state is touched in that case.
    pub fn record_roll(&mut self, pins: u32) -> GameResult<()> {
        if self.over {
            return Err(GameError::AlreadyOver);
        }

        log::trace!(
            "roll: {} pins, frame {}, roll {}",
            pins,
            self.current_frame + 1,
            self.current_roll + 1
        );

        if pins == ALL_PINS && self.current_roll == 0 {
            self.record_strike();
        } else if self.in_last_frame() && self.bonus_roll_armed() {
            self.record_bonus_roll(pins);
        } else {
            self.record_normal_roll(pins);
        }

        if self.over {
            log::debug!("game over, final score {}", self.total_score());
        }
        Ok(())
    }

    /// All ten frames, in play order. Valid at any time; scores of frames
    /// with outstanding bonus credit are still growing.
    pub fn frames(&self) -> &[Frame; FRAMES_PER_GAME] {
        &self.frames
    }

    /// Sum of all frame scores. A running total mid-game, the final score
    /// once [`is_over`](Self::is_over) is true.
    pub fn total_score(&self) -> u32 {
        self.frames.iter().map(|f| f.score).sum()
    }

    /// Whether the tenth frame is resolved and further rolls are rejected
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Strike on a frame's first roll: the frame is done after one roll and
    /// is owed pins from the next two.
    fn record_strike(&mut self) {
        let idx = self.current_frame;
        self.frames[idx].pins_rolled.push(ALL_PINS);
        self.frames[idx].score = ALL_PINS;
        self.settle_pending_bonus(ALL_PINS);

        self.pending_bonus.push_back(idx);
        self.pending_bonus.push_back(idx);

        if self.in_last_frame() {
            // stay in the tenth, the bonus rolls land in its remaining slots
            self.current_roll = 1;
        } else {
            self.advance_frame();
        }
    }

    /// Bonus roll in the tenth frame. The pins reach the frame through its
    /// own queue entries; a bonus strike earns no further credit. Three
    /// recorded rolls resolve the frame and end the game.
    fn record_bonus_roll(&mut self, pins: u32) {
        let idx = self.current_frame;
        self.frames[idx].pins_rolled.push(pins);
        self.settle_pending_bonus(pins);
        self.current_roll += 1;

        if self.frames[idx].pins_rolled.len() == 3 {
            self.over = true;
        }
    }

    /// First or second roll of a non-strike frame
    fn record_normal_roll(&mut self, pins: u32) {
        let idx = self.current_frame;
        self.frames[idx].score += pins;
        self.frames[idx].pins_rolled.push(pins);
        self.settle_pending_bonus(pins);

        if self.current_roll == 0 {
            self.current_roll = 1;
            return;
        }

        // second roll, the frame is complete
        if self.frames[idx].is_spare() {
            self.pending_bonus.push_back(idx);
            if self.in_last_frame() {
                // arm the tenth frame's single bonus roll
                self.current_roll = 2;
                return;
            }
        }

        if self.in_last_frame() {
            self.over = true;
        } else {
            self.advance_frame();
        }
    }

    /// Pay outstanding bonus credit from the current roll.
    ///
    /// Every queued frame gets one credit per entry, and a frame queued twice
    /// (strike) must be paid by two different rolls. Entries for one frame
    /// are adjacent in the queue, so settling the head plus a differing
    /// second entry pays each pending frame exactly once.
    fn settle_pending_bonus(&mut self, pins: u32) {
        let Some(first) = self.pending_bonus.pop_front() else {
            return;
        };
        self.frames[first].score += pins;

        if let Some(&next) = self.pending_bonus.front() {
            if next != first {
                self.pending_bonus.pop_front();
                self.frames[next].score += pins;
            }
        }
    }

    fn in_last_frame(&self) -> bool {
        self.current_frame == FRAMES_PER_GAME - 1
    }

    /// Tenth frame only: true once the regular rolls formed a strike or
    /// spare, i.e. the next roll is a pure bonus roll
    fn bonus_roll_armed(&self) -> bool {
        self.frames[self.current_frame].is_strike() || self.current_roll == 2
    }

    fn advance_frame(&mut self) {
        self.current_roll = 0;
        self.current_frame += 1;
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
