//! Seeded roll-script generation

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use tenpin_core::{ALL_PINS, FRAMES_PER_GAME};

/// Generates complete, rule-valid games as flat roll scripts.
///
/// Mark rates are tunable so batches can lean on the bonus-heavy paths
/// (strike chains, tenth-frame bonus rolls) that plain uniform rolls would
/// rarely reach.
pub struct RollGenerator {
    rng: ChaCha8Rng,
    strike_rate: f64,
    spare_rate: f64,
}

impl RollGenerator {
    /// Create a generator with optional seed
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };

        Self {
            rng,
            strike_rate: 0.25,
            spare_rate: 0.25,
        }
    }

    /// Set the strike and spare probabilities
    pub fn with_mark_rates(mut self, strike_rate: f64, spare_rate: f64) -> Self {
        self.strike_rate = strike_rate;
        self.spare_rate = spare_rate;
        self
    }

    /// Produce one complete game as a flat list of rolls (11 to 21 entries)
    pub fn game(&mut self) -> Vec<u32> {
        let mut rolls = Vec::with_capacity(21);

        for frame in 0..FRAMES_PER_GAME {
            let last = frame == FRAMES_PER_GAME - 1;

            if self.rng.random_bool(self.strike_rate) {
                rolls.push(ALL_PINS);
                if last {
                    // two bonus rolls; the second shares the rack unless the
                    // first cleared it
                    let first_bonus = self.fresh_rack_roll();
                    rolls.push(first_bonus);
                    if first_bonus == ALL_PINS {
                        rolls.push(self.fresh_rack_roll());
                    } else {
                        rolls.push(self.rng.random_range(0..=ALL_PINS - first_bonus));
                    }
                }
                continue;
            }

            let first = self.rng.random_range(0..ALL_PINS);
            rolls.push(first);

            if self.rng.random_bool(self.spare_rate) {
                rolls.push(ALL_PINS - first);
                if last {
                    rolls.push(self.fresh_rack_roll());
                }
            } else {
                // open frame, leave at least one pin standing
                rolls.push(self.rng.random_range(0..ALL_PINS - first));
            }
        }

        rolls
    }

    /// One roll against a full deck, mark bias applied
    fn fresh_rack_roll(&mut self) -> u32 {
        if self.rng.random_bool(self.strike_rate) {
            ALL_PINS
        } else {
            self.rng.random_range(0..ALL_PINS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle;

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let mut a = RollGenerator::new(Some(42));
        let mut b = RollGenerator::new(Some(42));
        for _ in 0..50 {
            assert_eq!(a.game(), b.game());
        }
    }

    #[test]
    fn test_generated_games_are_scorable() {
        let mut generator = RollGenerator::new(Some(7)).with_mark_rates(0.4, 0.4);
        for _ in 0..200 {
            let script = generator.game();
            assert!(
                oracle::frame_scores(&script).is_some(),
                "unscorable script: {script:?}"
            );
        }
    }

    #[test]
    fn test_roll_count_bounds() {
        let mut generator = RollGenerator::new(Some(99)).with_mark_rates(0.5, 0.3);
        for _ in 0..200 {
            let script = generator.game();
            assert!((11..=21).contains(&script.len()), "script: {script:?}");
            assert!(script.iter().all(|&pins| pins <= ALL_PINS));
        }
    }
}
