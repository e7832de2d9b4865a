//! Recovery from a conflict, and restarts.
//!
//! A backjump unwinds the trail to some lower decision level. Every
//! assignment above the target level is cleared, saving its phase and
//! returning its variable to the activity heap, and the propagation
//! cursor is brought to the write position --- everything below it has
//! already been propagated.
//!
//! Backjumping to the current level or above is a no-op, which makes the
//! operation idempotent.

use crate::{context::GenericContext, db::LevelIndex, misc::log::targets};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        while self.trail.level() > target {
            if let Some(start) = self.trail.level_indices.pop() {
                while self.trail.literals.len() > start {
                    if let Some(literal) = self.trail.literals.pop() {
                        self.variable_db.clear_value(literal.variable());
                    }
                }
            }
        }
        self.trail.q_head = self.trail.literals.len();
    }
}
