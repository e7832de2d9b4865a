//! The table of watch list heads.
//!
//! One head per literal, in a dense table indexed by `2·variable` for the
//! positive literal and `2·variable + 1` for the negative. The lists
//! themselves are threaded through clause header cells in the arena; the
//! table only holds the first handle of each list.

use crate::db::{Handle, HANDLE_NIL};
use crate::structures::literal::Literal;

#[derive(Default)]
pub struct WatchTable {
    heads: Vec<Handle>,
}

impl WatchTable {
    fn index(literal: Literal) -> usize {
        let variable = literal.variable() as usize;
        match literal.polarity() {
            true => 2 * variable,
            false => 2 * variable + 1,
        }
    }

    /// Grows the table to hold both literals of variables `1..=count`.
    pub fn grow_to(&mut self, count: usize) {
        let required = 2 * (count + 1);
        if required > self.heads.len() {
            self.heads.resize(required, HANDLE_NIL);
        }
    }

    /// The first clause watching the literal, or [HANDLE_NIL].
    pub fn head(&self, literal: Literal) -> Handle {
        self.heads[Self::index(literal)]
    }

    /// Sets the first clause watching the literal.
    pub fn set_head(&mut self, literal: Literal, handle: Handle) {
        self.heads[Self::index(literal)] = handle;
    }

    /// Clears every list head.
    pub fn clear(&mut self) {
        self.heads.fill(HANDLE_NIL);
    }
}
