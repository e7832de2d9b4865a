/*!
Conflict analysis --- resolution to a first unique implication point.

# Overview

Analysis takes a clause unsatisfiable on the current valuation at some
level above the root and produces an asserting clause: one false at the
backjump level except for a single unvalued literal, the negation of the
first UIP.

The [resolution buffer](crate::resolution_buffer) opens a fresh epoch, and
every variable of the conflict clause is stamped as seen. Variables at the
conflict level are counted as pending; literals at lower levels join the
accumulating clause (root-level literals are dropped --- they are false
forever). A cursor then walks the trail from the latest stamped position
downwards. Each stamped literal passed resolves the accumulator with its
reason, stamping the reason's literals by the same rule, until a single
pending variable remains: the literal which brought the count to one
short of exhaustion is the first UIP, and its reason is never expanded.

# Optimizations

Three run inside or immediately after the walk:

- **On-the-fly subsumption.** When a reason clause turns out to contain
  the whole of the accumulating clause and another literal of the conflict
  level remains, the reason is shrunk in place: the literal resolved upon
  leaves the clause, and a conflict-level body literal takes over its
  watch slot.
- **Redundant-literal minimization.** A literal of the learned clause
  whose reason-side ancestors all lie in the clause (or at the root level)
  is implied by the rest of the clause and is removed. The stamp bands
  memoize both outcomes, so the cost is bounded by the trail.
- **Tail subsumption.** When the learned clause is a subset of the
  previously learned clause and that clause has not yet been used, the
  previous clause is truncated from the arena tail and the new clause
  takes its place.

The backjump level is recomputed from the clause after minimization, the
LBD of the clause is the count of distinct levels among its literals (one
more than the count over the accumulator, for the conflict level), and the
asserting literal is placed first with a deepest-level literal as the
second watch --- the last to become false after the backjump.
*/

use crate::{
    context::GenericContext,
    db::{Handle, LevelIndex, HANDLE_NIL, POSITION_NIL},
    misc::log::targets,
    structures::literal::{Literal, Variable},
    types::err::{self, AnalysisError},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Learns an asserting clause from a conflict, backjumps, installs the
    /// clause, and values its asserting literal.
    pub fn resolve_conflict(&mut self, conflict: Handle) -> Result<(), err::ErrorKind> {
        let conflict_level = self.trail.level();
        debug_assert!(conflict_level > 0);
        log::info!(target: targets::ANALYSIS, "Analysis of clause {conflict} at level {conflict_level}");

        self.resolution_buffer.open_epoch();
        let mut pending: usize = 0;
        let mut cursor: usize = 0;

        for offset in 0..self.clause_db.size(conflict) {
            let literal = self.clause_db.literal(conflict, offset);
            self.stamp_literal(literal, conflict_level, &mut pending, &mut cursor);
        }
        if pending == 0 {
            return Err(err::ErrorKind::from(AnalysisError::EmptyResolution));
        }

        let uip: Literal = loop {
            while !self
                .resolution_buffer
                .is_stamped(self.trail.literals[cursor].variable())
            {
                debug_assert!(cursor > 0);
                cursor -= 1;
            }
            let literal = self.trail.literals[cursor];
            pending -= 1;
            if pending == 0 {
                break literal;
            }

            let reason = self.variable_db.reason_of(literal.variable());
            if reason != HANDLE_NIL {
                self.clause_db.orient_watch(reason, literal);
                for offset in 1..self.clause_db.size(reason) {
                    let premise = self.clause_db.literal(reason, offset);
                    self.stamp_literal(premise, conflict_level, &mut pending, &mut cursor);
                }

                // On-the-fly subsumption: the resolvent is contained in
                // the reason, and a conflict-level body literal is on
                // hand to take over the vacated watch slot.
                let size = self.clause_db.size(reason);
                if pending > 0 && pending + self.resolution_buffer.clause.len() + 1 < size {
                    let replacement = (2..size).find(|&offset| {
                        let variable = self.clause_db.literal(reason, offset).variable();
                        self.variable_db.level_of(variable) >= conflict_level
                    });
                    if let Some(offset) = replacement {
                        self.clause_db.subsume_in_place(reason, offset);
                        self.counters.subsumed_on_the_fly += 1;
                    }
                }
            }

            debug_assert!(cursor > 0);
            cursor -= 1;
        };

        // Redundant-literal minimization, for literals of levels with at
        // least one other variable in the clause.
        let mut learned = std::mem::take(&mut self.resolution_buffer.clause);
        let before = learned.len();
        learned.retain(|literal| {
            let variable = literal.variable();
            let level = self.variable_db.level_of(variable);
            !(self.resolution_buffer.level_has_pair(level) && self.literal_redundant(variable))
        });
        self.counters.minimized_literals += before - learned.len();

        // Minimization may have removed the sole literal of the deepest
        // level, so the backjump level is recomputed from what remains.
        let mut backjump_level: LevelIndex = 0;
        for literal in &learned {
            let level = self.variable_db.level_of(literal.variable());
            if level > backjump_level {
                backjump_level = level;
            }
        }

        let asserting = uip.negate();
        log::info!(
            target: targets::ANALYSIS,
            "Learned clause asserts {asserting} at level {backjump_level} over {} literals",
            learned.len(),
        );

        // Subset test against the previously learned clause. Whether the
        // clause is still unused can only be read after the backjump, when
        // its asserting literal may have become unvalued.
        let last = self.clause_db.last_learned;
        let mut tail_subsumable = false;
        if last != HANDLE_NIL {
            let mut needed = learned.len() + 1;
            for offset in (0..self.clause_db.size(last)).rev() {
                let candidate = self.clause_db.literal(last, offset);
                let variable = candidate.variable();
                let absorbed = candidate == asserting
                    || (self.resolution_buffer.is_stamped(variable)
                        && self.variable_db.value_of(variable).is_some()
                        && self.variable_db.level_of(variable) <= backjump_level);
                if absorbed {
                    needed -= 1;
                    if needed == 0 {
                        break;
                    }
                }
            }
            tail_subsumable = needed == 0;
        }

        self.backjump(backjump_level);

        if tail_subsumable {
            let anchor = self.clause_db.literal(last, 0);
            if self.variable_db.value_of(anchor.variable()).is_none() {
                self.clause_db.truncate_last();
                self.counters.tail_subsumed += 1;
            }
        }

        // LBD: distinct levels among the clause literals, plus one for
        // the conflict level of the asserting literal.
        let mut lbd: u32 = 1;
        for literal in &learned {
            if self
                .resolution_buffer
                .mark_lbd(self.variable_db.level_of(literal.variable()))
            {
                lbd += 1;
            }
        }

        self.counters.total_learned += 1;
        if learned.is_empty() {
            self.clause_db.install_learned_unit(asserting)?;
            self.assign(asserting, 0, HANDLE_NIL);
        } else {
            // A deepest-level literal takes the second watch slot: it is
            // the last to become false after the backjump.
            let deepest = (0..learned.len()).find(|&index| {
                self.variable_db.level_of(learned[index].variable()) == backjump_level
            });
            if let Some(index) = deepest {
                learned.swap(0, index);
            }

            let mut literals = Vec::with_capacity(learned.len() + 1);
            literals.push(asserting);
            literals.extend_from_slice(&learned);
            let handle = self.clause_db.install_learned(&literals, lbd)?;
            self.assign(asserting, backjump_level, handle);
        }

        self.variable_db.activity.rescale_delta();
        // Hand the accumulator back for its capacity; the next epoch
        // clears it.
        self.resolution_buffer.clause = learned;
        Ok(())
    }

    /// Stamps one clause literal during resolution: the variable is
    /// bumped and marked seen, a conflict-level variable joins the pending
    /// count, and a literal of an intermediate level joins the
    /// accumulating clause. Root-level literals are dropped.
    fn stamp_literal(
        &mut self,
        literal: Literal,
        conflict_level: LevelIndex,
        pending: &mut usize,
        cursor: &mut usize,
    ) {
        let variable = literal.variable();
        let position = self.variable_db.position_of(variable);
        debug_assert!(position != POSITION_NIL);
        if position > *cursor {
            *cursor = position;
        }

        if self.resolution_buffer.is_stamped(variable) {
            return;
        }
        self.resolution_buffer.stamp_seen(variable);
        self.variable_db.bump(variable);

        let level = self.variable_db.level_of(variable);
        if level == conflict_level {
            *pending += 1;
        } else if level > 0 {
            self.resolution_buffer.clause.push(literal);
            self.resolution_buffer.note_level(level);
        }
    }

    /// True when the literal of the variable is implied by the rest of
    /// the learned clause: every reason-side ancestor is in the clause,
    /// at the root level, or redundant in turn.
    ///
    /// Outcomes are memoized in the stamp bands, bounding the recursion
    /// by the trail.
    fn literal_redundant(&mut self, variable: Variable) -> bool {
        let reason = self.variable_db.reason_of(variable);
        if reason == HANDLE_NIL {
            return false;
        }

        let epoch = self.resolution_buffer.epoch;
        for offset in 0..self.clause_db.size(reason) {
            let premise = self.clause_db.literal(reason, offset).variable();
            if premise == variable {
                continue;
            }
            let level = self.variable_db.level_of(premise);
            if level == 0 {
                continue;
            }
            let stamp = self.resolution_buffer.stamp_of(premise);
            if stamp == epoch || stamp == epoch + 1 {
                continue;
            }
            if stamp == epoch + 2 {
                return false;
            }
            if !self.resolution_buffer.level_seen(level) || !self.literal_redundant(premise) {
                self.resolution_buffer.stamp_non_redundant(premise);
                return false;
            }
        }

        self.resolution_buffer.stamp_redundant(variable);
        true
    }
}
