/*!
Unit propagation over the two-watched-literal scheme.

# Overview

[propagate](GenericContext::propagate) takes literals from the trail, from
the propagation cursor until the cursor meets the write position, and for
each literal traverses the watch list of its negation. Every clause on the
list has the traversal literal as one of its two watches, and so may have
become unit or unsatisfiable.

For each clause, in order:

1. The falsified watch is normalized into slot 1, swapping the literal and
   link header cells together so each watch list still threads through the
   slot holding its literal. The continuation of the traversal is then
   always the slot 1 link.
2. If the literal at slot 0 is true the clause is satisfied, and stays
   where it is.
3. Otherwise the body is scanned for a non-false literal. A body literal
   false at the root level is tombstoned during the scan and compacted out
   afterwards: it can never be true again, and dropping it shortens every
   future scan.
4. A non-false body literal replaces the falsified watch, and the clause
   moves to the watch list of its fresh watch.
5. With every body literal false, the clause is unit or unsatisfiable by
   the value of the slot 0 watch: unit extends the trail with that watch
   and the clause as reason; false stops propagation with the clause as
   the conflict.

# The list rewrite

Clauses which keep watching the falsified literal --- satisfied, unit, and
conflicting clauses --- are retained by patching the link of the clause
retained before them (or the list head), so the rewrite costs a single
write per retained clause. A clause which moves to another list is simply
skipped. On a conflict the remainder of the list is still intact: the
conflicting clause is retained first, and its own link is untouched.
*/

use crate::{
    context::GenericContext,
    db::{Handle, HANDLE_NIL},
    misc::log::targets,
    structures::literal::Literal,
    types::err::BCPError,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates queued trail literals until saturation or conflict.
    pub fn propagate(&mut self) -> Result<(), BCPError> {
        while self.trail.q_head < self.trail.literals.len() {
            let literal = self.trail.literals[self.trail.q_head];
            self.trail.q_head += 1;
            self.counters.total_propagations += 1;
            self.propagate_literal(literal)?;
        }
        Ok(())
    }

    /// Examines every clause watching the negation of a just-assigned
    /// literal.
    fn propagate_literal(&mut self, literal: Literal) -> Result<(), BCPError> {
        let falsified = literal.negate();
        let level = self.trail.level();
        log::trace!(target: targets::PROPAGATION, "Examining the watch list of {falsified}");

        // The write site for the next retained clause: the list head, or
        // the slot 1 link of the clause retained most recently.
        let mut site: Option<Handle> = None;
        let mut current = self.clause_db.watches.head(falsified);

        while current != HANDLE_NIL {
            let handle = current;

            if self.clause_db.size(handle) == 1 {
                // The only literal of the clause was just falsified.
                self.clause_db.patch_watch(falsified, site, handle);
                return Err(BCPError::Conflict(handle));
            }

            if self.clause_db.literal(handle, 0) == falsified {
                self.clause_db.swap_watch_slots(handle);
            }
            let next = self.clause_db.link(handle, 1);
            let first = self.clause_db.literal(handle, 0);

            if self.variable_db.is_true(first) {
                self.clause_db.patch_watch(falsified, site, handle);
                site = Some(handle);
                current = next;
                continue;
            }

            let mut replacement = None;
            let mut tombstoned = false;
            for offset in 2..self.clause_db.size(handle) {
                let candidate = self.clause_db.literal(handle, offset);
                if self.variable_db.is_false(candidate) {
                    if self.variable_db.level_of(candidate.variable()) == 0 {
                        self.clause_db.tombstone(handle, offset);
                        tombstoned = true;
                    }
                    continue;
                }
                replacement = Some(offset);
                break;
            }

            match replacement {
                Some(offset) => {
                    let fresh = self.clause_db.replace_second_watch(handle, offset);
                    if tombstoned {
                        self.counters.tombstoned_cells +=
                            self.clause_db.remove_tombstones(handle);
                    }
                    log::trace!(target: targets::PROPAGATION, "Clause {handle} now watches {fresh}");
                }

                None => {
                    // Every body literal is false.
                    if tombstoned {
                        self.counters.tombstoned_cells +=
                            self.clause_db.remove_tombstones(handle);
                    }
                    self.clause_db.patch_watch(falsified, site, handle);
                    site = Some(handle);

                    if self.variable_db.is_false(first) {
                        log::trace!(target: targets::PROPAGATION, "Conflict at clause {handle}");
                        return Err(BCPError::Conflict(handle));
                    }

                    log::trace!(target: targets::PROPAGATION, "Clause {handle} forces {first}");
                    self.assign(first, level, handle);
                }
            }

            current = next;
        }

        self.clause_db.patch_watch(falsified, site, HANDLE_NIL);
        Ok(())
    }
}
