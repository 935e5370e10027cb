//! Independent classical scorer used as the batch oracle
//!
//! Scores a *complete* game script with the textbook look-ahead rules
//! (strike frame = 10 + next two rolls, spare frame = 10 + next roll).
//! Deliberately shares no code with the incremental engine.

use tenpin_core::{ALL_PINS, FRAMES_PER_GAME};

/// Per-frame values of a complete game.
///
/// Returns `None` when the script is truncated or carries extra rolls, both
/// of which a valid generated game never does.
pub fn frame_scores(rolls: &[u32]) -> Option<[u32; FRAMES_PER_GAME]> {
    let mut scores = [0u32; FRAMES_PER_GAME];
    let mut i = 0usize;

    for slot in scores.iter_mut().take(FRAMES_PER_GAME - 1) {
        let first = *rolls.get(i)?;
        if first == ALL_PINS {
            *slot = ALL_PINS + *rolls.get(i + 1)? + *rolls.get(i + 2)?;
            i += 1;
        } else {
            let second = *rolls.get(i + 1)?;
            *slot = if first + second == ALL_PINS {
                ALL_PINS + *rolls.get(i + 2)?
            } else {
                first + second
            };
            i += 2;
        }
    }

    // the tenth frame's value is its own rolls, bonus rolls included
    let tail = &rolls[i..];
    let needed = match tail {
        [ALL_PINS, ..] => 3,
        [a, b, ..] if a + b == ALL_PINS => 3,
        _ => 2,
    };
    if tail.len() != needed {
        return None;
    }
    scores[FRAMES_PER_GAME - 1] = tail.iter().sum();

    Some(scores)
}

/// Total score of a complete game
pub fn game_total(rolls: &[u32]) -> Option<u32> {
    frame_scores(rolls).map(|scores| scores.iter().sum())
}
