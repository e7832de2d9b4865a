//! Methods for building a formula in a context.
//!
//! Clauses are added before a solve begins, either
//! [programmatically](GenericContext::add_clause) or by
//! [reading DIMACS](GenericContext::read_dimacs). A unit clause values its
//! literal at the root level as soon as it is added, so contradictory
//! units surface as unsatisfiability without any search.

pub mod dimacs;

use crate::{
    context::{ContextState, GenericContext},
    db::HANDLE_NIL,
    misc::log::targets,
    structures::literal::Literal,
    types::err::{self, BuildError},
};

/// Ok results from adding a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the database.
    Added,

    /// The clause was a tautology, and skipped.
    Skipped,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Grows every database to hold variables `1..=count`.
    pub fn ensure_variables(&mut self, count: usize) -> Result<(), err::ErrorKind> {
        if count > i32::MAX as usize {
            return Err(err::ErrorKind::from(BuildError::VariableBound));
        }
        self.variable_db.grow_to(count);
        self.clause_db.watches.grow_to(count);
        self.resolution_buffer.grow_to(count);
        Ok(())
    }

    /// Adds a clause to the context.
    ///
    /// Duplicate literals are dropped and tautologies skipped. An empty
    /// clause, or a unit clause contradicting the root-level valuation,
    /// marks the context unsatisfiable and returns a build error.
    pub fn add_clause(&mut self, clause: Vec<Literal>) -> Result<ClauseOk, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::ErrorKind::InvalidState);
        }

        let mut clause = clause;
        clause.sort_unstable_by_key(|literal| (literal.variable(), literal.polarity()));
        clause.dedup();

        if clause.is_empty() {
            self.state = ContextState::Unsatisfiable;
            return Err(err::ErrorKind::from(BuildError::EmptyClause));
        }

        for pair in clause.windows(2) {
            if pair[0].variable() == pair[1].variable() {
                log::trace!(target: targets::CLAUSE_DB, "Tautology skipped");
                return Ok(ClauseOk::Skipped);
            }
        }

        let top = clause[clause.len() - 1].variable() as usize;
        if top > self.variable_count() {
            self.ensure_variables(top)?;
        }

        self.clause_db.install_original(&clause)?;

        if let [literal] = clause.as_slice() {
            match self.variable_db.value_of(literal.variable()) {
                None => self.assign(*literal, 0, HANDLE_NIL),
                Some(value) if value == literal.polarity() => {}
                Some(_) => {
                    log::info!(target: targets::PARSE, "Contradictory units on {}", literal.variable());
                    self.state = ContextState::Unsatisfiable;
                    return Err(err::ErrorKind::from(BuildError::Unsatisfiable));
                }
            }
        }

        Ok(ClauseOk::Added)
    }
}
