use crate::{
    config::Config,
    context::{ContextState, Counters},
    db::{clause::ClauseDB, trail::Trail, variable::VariableDB, Handle, LevelIndex},
    reports::Report,
    resolution_buffer::ResolutionBuffer,
    structures::literal::{Literal, Variable},
};

/// A context, generic over a source of randomness.
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters over the context, and the agility measure.
    pub counters: Counters,

    /// The formula, in a packed arena with intrusive watch lists.
    pub clause_db: ClauseDB,

    /// The valuation, saved phases, levels, reasons, and activities.
    pub variable_db: VariableDB,

    /// Assignments in order, with the propagation cursor and level marks.
    pub trail: Trail,

    /// Scratch for conflict analysis.
    pub resolution_buffer: ResolutionBuffer,

    /// The state of the context.
    pub state: ContextState,

    /// The source of randomness.
    pub rng: R,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A count of variables in the context.
    pub fn variable_count(&self) -> usize {
        self.variable_db.count()
    }

    /// The value of a variable, if set.
    pub fn value_of(&self, variable: Variable) -> Option<bool> {
        self.variable_db.value_of(variable)
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
            _ => Report::Unknown,
        }
    }

    /// Extends the trail with a literal at the given level.
    ///
    /// Records the trail position of the variable, values it, and folds
    /// the assignment into the agility measure. The reason is nil for
    /// decisions, and forced to nil for any root-level assignment.
    pub fn assign(&mut self, literal: Literal, level: LevelIndex, reason: Handle) {
        let position = self.trail.literals.len();
        let flipped = self.variable_db.set_value(literal, level, reason, position);
        self.trail.literals.push(literal);
        self.counters.note_assignment(flipped);
    }
}
