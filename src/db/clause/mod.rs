/*!
The clause database --- a single packed arena of literal-sized cells.

A clause of k literals occupies four header cells followed by k body cells,
and is identified by the [Handle] of its first body cell. The header fields
sit at fixed negative offsets from the handle:

- handle − 1: the current literal count.
- handle − 2: the next clause in the watch list of the literal at offset 0.
- handle − 3: the next clause in the watch list of the literal at offset 1.
- handle − 4: the LBD score, with 0 marking an original clause (never
  purged).

The literals at offsets 0 and 1 are the watches. A clause of size two or
more appears on exactly the two watch lists of those literals; a unit
clause appears on the single list of its only literal, linked through the
offset 0 link. Watch lists are intrusive singly-linked lists threaded
through the link cells, with heads in a dense [WatchTable].

New clauses append at the arena tail. Three operations disturb handles and
are the only ones which may:

- [subsume_in_place](ClauseDB::subsume_in_place) shrinks a clause by one
  literal, leaving a dead cell inside the arena.
- [truncate_last](ClauseDB::truncate_last) removes the most recently
  learned clause from the arena tail.
- [retain_learned](ClauseDB::retain_learned) compacts the arena in bulk,
  dropping high-LBD lemmas and rebuilding every watch list.

Tombstoned body literals are stored as cell 0 and compacted out by
[remove_tombstones](ClauseDB::remove_tombstones) before a scan ends, so no
live clause holds a tombstone between propagation steps.
*/

pub mod watches;

use crate::db::{Handle, HANDLE_NIL};
use crate::misc::log::targets;
use crate::structures::literal::Literal;
use crate::types::err::ClauseDBError;
use watches::WatchTable;

/// Header offset of the literal count.
const SIZE_OFFSET: usize = 1;

/// Header offsets of the two watch links, paired with body offsets 0 and 1.
const LINK_OFFSET: [usize; 2] = [2, 3];

/// Header offset of the LBD score.
const LBD_OFFSET: usize = 4;

pub struct ClauseDB {
    arena: Vec<i32>,

    /// Watch list heads, indexed by literal.
    pub watches: WatchTable,

    /// Every live clause, in installation order.
    pub handles: Vec<Handle>,

    /// A count of original clauses.
    pub original_count: usize,

    /// A count of learned clauses currently stored.
    pub learned_count: usize,

    /// The most recently learned non-unit clause, or [HANDLE_NIL].
    ///
    /// The candidate for tail subsumption by the next learned clause.
    pub last_learned: Handle,

    /// Cells orphaned by in-place shrinking, reclaimed at the next purge.
    pub dead_cells: usize,
}

impl Default for ClauseDB {
    fn default() -> Self {
        ClauseDB {
            arena: Vec::default(),
            watches: WatchTable::default(),
            handles: Vec::default(),
            original_count: 0,
            learned_count: 0,
            last_learned: HANDLE_NIL,
            dead_cells: 0,
        }
    }
}

// Cell access.
impl ClauseDB {
    /// The literal count of a clause.
    pub fn size(&self, handle: Handle) -> usize {
        self.arena[handle as usize - SIZE_OFFSET] as usize
    }

    fn set_size(&mut self, handle: Handle, size: usize) {
        self.arena[handle as usize - SIZE_OFFSET] = size as i32;
    }

    /// The literal at a body offset.
    pub fn literal(&self, handle: Handle, offset: usize) -> Literal {
        Literal::from_cell(self.arena[handle as usize + offset])
    }

    fn set_literal(&mut self, handle: Handle, offset: usize, literal: Literal) {
        self.arena[handle as usize + offset] = literal.as_int();
    }

    /// The raw cell at a body offset --- zero for a tombstone.
    fn cell(&self, handle: Handle, offset: usize) -> i32 {
        self.arena[handle as usize + offset]
    }

    /// The next clause in the watch list threaded through the given watch
    /// slot.
    pub fn link(&self, handle: Handle, watch: usize) -> Handle {
        self.arena[handle as usize - LINK_OFFSET[watch]] as Handle
    }

    pub(crate) fn set_link(&mut self, handle: Handle, watch: usize, target: Handle) {
        self.arena[handle as usize - LINK_OFFSET[watch]] = target as i32;
    }

    /// The LBD score of a clause --- zero for an original clause.
    pub fn lbd(&self, handle: Handle) -> u32 {
        self.arena[handle as usize - LBD_OFFSET] as u32
    }

    /// The literals of a clause, in body order.
    pub fn literals(&self, handle: Handle) -> impl Iterator<Item = Literal> + '_ {
        (0..self.size(handle)).map(move |offset| self.literal(handle, offset))
    }

    /// The clause as DIMACS text, for diagnostics.
    pub fn as_dimacs(&self, handle: Handle) -> String {
        let mut string = String::default();
        for literal in self.literals(handle) {
            string.push_str(format!("{literal} ").as_str());
        }
        string.push('0');
        string
    }
}

// Watch maintenance.
impl ClauseDB {
    /// The watch slot (0 or 1) through which the clause watches a literal.
    ///
    /// # Soundness
    /// The clause must watch the literal.
    fn watch_slot(&self, handle: Handle, literal: Literal) -> usize {
        if self.literal(handle, 0) == literal {
            0
        } else {
            debug_assert!(self.size(handle) > 1 && self.literal(handle, 1) == literal);
            1
        }
    }

    /// Swaps the two watched literals together with their link cells, so
    /// each list still threads through the slot holding its literal.
    pub fn swap_watch_slots(&mut self, handle: Handle) {
        let index = handle as usize;
        self.arena.swap(index, index + 1);
        self.arena
            .swap(index - LINK_OFFSET[0], index - LINK_OFFSET[1]);
    }

    /// Ensures the literal at offset 0 is the given (watched) literal.
    pub fn orient_watch(&mut self, handle: Handle, literal: Literal) {
        if self.literal(handle, 0) != literal {
            debug_assert_eq!(self.literal(handle, 1), literal);
            self.swap_watch_slots(handle);
        }
    }

    /// Pushes a clause onto the head of a literal's watch list, through the
    /// given watch slot.
    fn push_watch(&mut self, handle: Handle, watch: usize, literal: Literal) {
        let head = self.watches.head(literal);
        self.set_link(handle, watch, head);
        self.watches.set_head(literal, handle);
    }

    /// Replaces the watch at slot 1 --- the falsified watch, after
    /// normalization --- with the body literal at `offset`, splicing the
    /// clause into the fresh literal's watch list. The caller has already
    /// saved the old slot 1 link as its traversal continuation.
    pub(crate) fn replace_second_watch(&mut self, handle: Handle, offset: usize) -> Literal {
        debug_assert!(offset >= 2);
        let falsified = self.literal(handle, 1);
        let fresh = self.literal(handle, offset);
        self.set_literal(handle, 1, fresh);
        self.set_literal(handle, offset, falsified);
        self.push_watch(handle, 1, fresh);
        fresh
    }

    /// Splices a clause out of a literal's watch list.
    pub fn unlink_watch(&mut self, literal: Literal, handle: Handle) {
        let slot = self.watch_slot(handle, literal);
        let continuation = self.link(handle, slot);

        let mut current = self.watches.head(literal);
        if current == handle {
            self.watches.set_head(literal, continuation);
            return;
        }
        while current != HANDLE_NIL {
            let current_slot = self.watch_slot(current, literal);
            let next = self.link(current, current_slot);
            if next == handle {
                self.set_link(current, current_slot, continuation);
                return;
            }
            current = next;
        }
        debug_assert!(false, "clause {handle} missing from a watch list");
    }

    /// Writes the continuation of a watch list during a propagation
    /// traversal: either the table head or the link cell of the clause
    /// retained most recently.
    pub(crate) fn patch_watch(&mut self, literal: Literal, site: Option<Handle>, target: Handle) {
        match site {
            None => self.watches.set_head(literal, target),
            Some(retained) => self.set_link(retained, 1, target),
        }
    }
}

// Installation.
impl ClauseDB {
    /// Appends header and body cells for a clause and links its watches.
    ///
    /// The literals at offsets 0 and 1 of the slice become the watches.
    fn push_clause(&mut self, literals: &[Literal], lbd: u32) -> Result<Handle, ClauseDBError> {
        debug_assert!(!literals.is_empty());
        let required = self.arena.len() + 4 + literals.len();
        if required > i32::MAX as usize {
            return Err(ClauseDBError::StorageExhausted);
        }

        self.arena.push(lbd as i32);
        self.arena.push(HANDLE_NIL as i32);
        self.arena.push(HANDLE_NIL as i32);
        self.arena.push(literals.len() as i32);
        let handle = self.arena.len() as Handle;
        for literal in literals {
            self.arena.push(literal.as_int());
        }

        self.push_watch(handle, 0, literals[0]);
        if literals.len() > 1 {
            self.push_watch(handle, 1, literals[1]);
        }
        self.handles.push(handle);
        Ok(handle)
    }

    /// Installs an original clause, watching its first two literals.
    pub fn install_original(&mut self, literals: &[Literal]) -> Result<Handle, ClauseDBError> {
        let handle = self.push_clause(literals, 0)?;
        self.original_count += 1;
        log::trace!(target: targets::CLAUSE_DB, "Original {handle}: {}", self.as_dimacs(handle));
        Ok(handle)
    }

    /// Installs a learned clause.
    ///
    /// The caller places the asserting literal at offset 0 and a literal of
    /// maximum level among the rest at offset 1, so the second watch is the
    /// last to become false after the coming backjump.
    pub fn install_learned(
        &mut self,
        literals: &[Literal],
        lbd: u32,
    ) -> Result<Handle, ClauseDBError> {
        let handle = self.push_clause(literals, lbd)?;
        self.learned_count += 1;
        self.last_learned = handle;
        log::trace!(target: targets::CLAUSE_DB, "Learned {handle} (lbd {lbd}): {}", self.as_dimacs(handle));
        Ok(handle)
    }

    /// Installs a learned unit clause.
    ///
    /// Stored with LBD 0 so a purge can never drop it: the clause records a
    /// permanent root-level assignment.
    pub fn install_learned_unit(&mut self, literal: Literal) -> Result<Handle, ClauseDBError> {
        let handle = self.push_clause(&[literal], 0)?;
        self.learned_count += 1;
        self.last_learned = HANDLE_NIL;
        log::trace!(target: targets::CLAUSE_DB, "Learned unit {handle}: {literal}");
        Ok(handle)
    }
}

// In-place shrinking.
impl ClauseDB {
    /// Tombstones the body literal at the given offset.
    ///
    /// The caller compacts the clause with
    /// [remove_tombstones](Self::remove_tombstones) before its scan ends.
    pub fn tombstone(&mut self, handle: Handle, offset: usize) {
        debug_assert!(offset >= 2);
        self.arena[handle as usize + offset] = 0;
    }

    /// Compacts tombstoned cells out of the body, shrinking the size.
    ///
    /// Returns the count of cells removed; the orphaned tail cells stay nil
    /// until the next purge reclaims them.
    pub fn remove_tombstones(&mut self, handle: Handle) -> usize {
        let size = self.size(handle);
        let mut write = 2;
        for read in 2..size {
            let cell = self.cell(handle, read);
            if cell != 0 {
                self.arena[handle as usize + write] = cell;
                write += 1;
            }
        }
        let removed = size - write;
        for offset in write..size {
            self.arena[handle as usize + offset] = 0;
        }
        self.set_size(handle, write);
        self.dead_cells += removed;
        removed
    }

    /// On-the-fly subsumption: removes the literal at offset 0 by
    /// relocating the body literal at `offset` into the first watch slot.
    ///
    /// The caller guarantees `offset ≥ 2` and that the relocated literal is
    /// at the current decision level, so the watch invariant is restored
    /// once the coming backjump unsets it.
    pub fn subsume_in_place(&mut self, handle: Handle, offset: usize) {
        debug_assert!(offset >= 2);
        let size = self.size(handle);
        let removed = self.literal(handle, 0);
        self.unlink_watch(removed, handle);

        let fresh = self.literal(handle, offset);
        let last = self.literal(handle, size - 1);
        self.set_literal(handle, 0, fresh);
        self.set_literal(handle, offset, last);
        self.arena[handle as usize + size - 1] = 0;
        self.set_size(handle, size - 1);
        self.dead_cells += 1;

        self.push_watch(handle, 0, fresh);
        log::trace!(target: targets::SUBSUMPTION, "Clause {handle} shrunk in place: {}", self.as_dimacs(handle));
    }

    /// Removes the most recently learned clause from the arena tail.
    ///
    /// Sound only while the clause is not the reason of any assignment ---
    /// checked by the caller through the value of its asserting literal.
    pub fn truncate_last(&mut self) {
        let handle = self.last_learned;
        debug_assert!(handle != HANDLE_NIL);
        self.unlink_watch(self.literal(handle, 0), handle);
        if self.size(handle) > 1 {
            self.unlink_watch(self.literal(handle, 1), handle);
        }
        self.arena.truncate(handle as usize - 4);
        self.handles.pop();
        self.learned_count -= 1;
        self.last_learned = HANDLE_NIL;
        log::trace!(target: targets::SUBSUMPTION, "Learned clause {handle} subsumed from the tail");
    }
}

// Bulk purging.
impl ClauseDB {
    /// Compacts the arena, keeping original clauses and learned clauses
    /// with LBD at most `cutoff`. Watch lists are rebuilt from scratch and
    /// every surviving clause receives a fresh handle.
    ///
    /// Returns the count of clauses dropped. The caller must hold no
    /// handle across the call: reasons are nil at the root level, and the
    /// last-learned candidate is invalidated here.
    pub fn retain_learned(&mut self, cutoff: u32) -> usize {
        let handles = std::mem::take(&mut self.handles);
        let total = handles.len();
        self.watches.clear();

        let mut write: usize = 0;
        let mut learned = 0;
        for handle in handles {
            let lbd = self.lbd(handle);
            if lbd > cutoff {
                continue;
            }
            let size = self.size(handle);
            let start = handle as usize - 4;
            self.arena.copy_within(start..handle as usize + size, write);
            let fresh = (write + 4) as Handle;
            write += 4 + size;

            let first = self.literal(fresh, 0);
            self.push_watch(fresh, 0, first);
            if size > 1 {
                let second = self.literal(fresh, 1);
                self.push_watch(fresh, 1, second);
            }
            if lbd > 0 {
                learned += 1;
            }
            self.handles.push(fresh);
        }
        self.arena.truncate(write);
        self.learned_count = learned;
        self.last_learned = HANDLE_NIL;
        self.dead_cells = 0;
        total - self.handles.len()
    }
}

#[cfg(test)]
mod clause_db_tests {
    use super::*;

    fn literals(ints: &[i32]) -> Vec<Literal> {
        ints.iter().map(|&int| Literal::from(int)).collect()
    }

    fn list_of(db: &ClauseDB, literal: Literal) -> Vec<Handle> {
        let mut found = Vec::default();
        let mut current = db.watches.head(literal);
        while current != HANDLE_NIL {
            found.push(current);
            let slot = db.watch_slot(current, literal);
            current = db.link(current, slot);
        }
        found
    }

    fn fresh_db() -> ClauseDB {
        let mut db = ClauseDB::default();
        db.watches.grow_to(8);
        db
    }

    #[test]
    fn install_links_watches() {
        let mut db = fresh_db();
        let a = db.install_original(&literals(&[1, -2, 3])).unwrap();
        let b = db.install_original(&literals(&[1, 2])).unwrap();

        assert_eq!(a, 4);
        assert_eq!(db.size(a), 3);
        assert_eq!(db.lbd(a), 0);
        assert_eq!(list_of(&db, Literal::from(1)), vec![b, a]);
        assert_eq!(list_of(&db, Literal::from(-2)), vec![a]);
        assert_eq!(list_of(&db, Literal::from(2)), vec![b]);
        assert_eq!(list_of(&db, Literal::from(3)), vec![]);
    }

    #[test]
    fn unit_links_once() {
        let mut db = fresh_db();
        let u = db.install_original(&literals(&[5])).unwrap();
        assert_eq!(list_of(&db, Literal::from(5)), vec![u]);
        assert_eq!(db.size(u), 1);
    }

    #[test]
    fn swap_keeps_list_pairing() {
        let mut db = fresh_db();
        let a = db.install_original(&literals(&[1, -2, 3])).unwrap();
        db.swap_watch_slots(a);

        assert_eq!(db.literal(a, 0), Literal::from(-2));
        assert_eq!(list_of(&db, Literal::from(1)), vec![a]);
        assert_eq!(list_of(&db, Literal::from(-2)), vec![a]);
    }

    #[test]
    fn tombstone_compaction() {
        let mut db = fresh_db();
        let a = db.install_original(&literals(&[1, 2, 3, 4, 5])).unwrap();
        db.tombstone(a, 2);
        db.tombstone(a, 4);
        let removed = db.remove_tombstones(a);

        assert_eq!(removed, 2);
        assert_eq!(db.size(a), 3);
        let remaining: Vec<Literal> = db.literals(a).collect();
        assert_eq!(remaining, literals(&[1, 2, 4]));
        assert_eq!(db.dead_cells, 2);
    }

    #[test]
    fn subsume_in_place_drops_first_watch() {
        let mut db = fresh_db();
        let a = db.install_original(&literals(&[1, 2, 3, 4])).unwrap();
        db.subsume_in_place(a, 2);

        assert_eq!(db.size(a), 3);
        let remaining: Vec<Literal> = db.literals(a).collect();
        assert_eq!(remaining, literals(&[3, 2, 4]));
        assert_eq!(list_of(&db, Literal::from(1)), vec![]);
        assert_eq!(list_of(&db, Literal::from(3)), vec![a]);
        assert_eq!(list_of(&db, Literal::from(2)), vec![a]);
    }

    #[test]
    fn subsume_in_place_with_last_offset() {
        let mut db = fresh_db();
        let a = db.install_original(&literals(&[1, 2, 3])).unwrap();
        db.subsume_in_place(a, 2);

        assert_eq!(db.size(a), 2);
        let remaining: Vec<Literal> = db.literals(a).collect();
        assert_eq!(remaining, literals(&[3, 2]));
    }

    #[test]
    fn truncate_last_unlinks() {
        let mut db = fresh_db();
        let _a = db.install_original(&literals(&[1, 2])).unwrap();
        let b = db.install_learned(&literals(&[-1, -2]), 2).unwrap();
        assert_eq!(db.last_learned, b);

        let tail = db.arena.len();
        db.truncate_last();

        assert_eq!(db.learned_count, 0);
        assert_eq!(db.last_learned, HANDLE_NIL);
        assert!(db.arena.len() < tail);
        assert_eq!(list_of(&db, Literal::from(-1)), vec![]);
        assert_eq!(list_of(&db, Literal::from(-2)), vec![]);
    }

    #[test]
    fn retain_learned_keeps_originals_and_glue() {
        let mut db = fresh_db();
        let _o = db.install_original(&literals(&[1, 2, 3])).unwrap();
        let _glue = db.install_learned(&literals(&[-1, -2]), 2).unwrap();
        let _loose = db.install_learned(&literals(&[-2, -3, -4]), 9).unwrap();

        let dropped = db.retain_learned(3);

        assert_eq!(dropped, 1);
        assert_eq!(db.original_count, 1);
        assert_eq!(db.learned_count, 1);
        assert_eq!(db.handles.len(), 2);
        assert_eq!(db.last_learned, HANDLE_NIL);

        let o = db.handles[0];
        let glue = db.handles[1];
        let o_lits: Vec<Literal> = db.literals(o).collect();
        assert_eq!(o_lits, literals(&[1, 2, 3]));
        assert_eq!(list_of(&db, Literal::from(1)), vec![o]);
        assert_eq!(list_of(&db, Literal::from(-1)), vec![glue]);
        assert_eq!(list_of(&db, Literal::from(-2)), vec![glue]);
        assert_eq!(list_of(&db, Literal::from(-3)), vec![]);
    }
}
