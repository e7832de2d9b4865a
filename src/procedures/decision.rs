//! Decisions --- opening a level on an unvalued variable.
//!
//! The variable is taken from the activity heap, skipping any entry valued
//! since it was placed on the heap. The polarity is the saved phase of the
//! variable, so a decision re-confirms whatever the variable was last ---
//! false, for a variable never yet valued.
//!
//! With a configured bias, an occasional decision instead takes a variable
//! at random. The bias defaults to zero and the default source of
//! randomness is seeded constantly, keeping solves reproducible.

use crate::{
    context::GenericContext,
    db::HANDLE_NIL,
    misc::log::targets,
    structures::literal::{Literal, Variable},
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Opens a fresh level on some unvalued variable.
    ///
    /// Errs if no unvalued variable remains; the driver returns
    /// satisfiable before this can happen.
    pub fn make_decision(&mut self) -> Result<(), err::ErrorKind> {
        let Some(variable) = self.choose_variable() else {
            return Err(err::ErrorKind::InvalidState);
        };

        self.counters.total_decisions += 1;
        self.trail.open_level();

        let polarity =
            self.config.phase_saving.value && self.variable_db.previous_polarity(variable);
        let literal = Literal::new(variable, polarity);
        let level = self.trail.level();
        log::trace!(target: targets::DECISION, "Decided {literal} at level {level}");

        self.assign(literal, level, HANDLE_NIL);
        Ok(())
    }

    /// An unvalued variable of maximum activity --- or, with the
    /// configured probability, a random unvalued variable.
    fn choose_variable(&mut self) -> Option<Variable> {
        let bias = self.config.random_decision_bias.value;
        if bias > 0.0 && self.rng.gen_bool(bias) {
            let candidate = self.rng.gen_range(1..=self.variable_db.count() as Variable);
            if self.variable_db.value_of(candidate).is_none() {
                // The candidate stays on the heap; the pop loop below
                // skips valued entries, so a stale entry is harmless.
                return Some(candidate);
            }
        }

        while let Some(variable) = self.variable_db.activity.pop_max() {
            if self.variable_db.value_of(variable).is_none() {
                return Some(variable);
            }
        }
        None
    }
}
