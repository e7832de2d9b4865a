/*!
Scratch state for conflict analysis.

The buffer holds the accumulating learned clause together with the stamp
tables which make each analysis start from clean scratch in constant time:
rather than clearing the tables, the epoch counter advances by three at the
start of every analysis, and a table entry is current only when it falls in
the new epoch's band. The stride of three leaves room for the sentinel
values used during analysis without colliding with any earlier epoch.

Variable stamps:

- `epoch` --- the variable has been seen in the current analysis.
- `epoch + 1` --- the variable is proved redundant in the learned clause.
- `epoch + 2` --- the variable is proved non-redundant.

Level stamps:

- `epoch` --- exactly one variable of the level is in the learned clause.
- `epoch + 1` --- at least two, so a literal of the level is a candidate
  for redundancy.

A separate level-indexed table serves the LBD count of the learned clause.
*/

use crate::db::LevelIndex;
use crate::structures::literal::{Literal, Variable};

#[derive(Default)]
pub struct ResolutionBuffer {
    /// The current epoch, advanced by three at each conflict analysis.
    pub epoch: u64,

    stamp: Vec<u64>,
    level_stamp: Vec<u64>,
    lbd_stamp: Vec<u64>,

    /// The literals of the accumulating learned clause below the conflict
    /// level. The asserting literal is prepended at installation.
    pub clause: Vec<Literal>,
}

impl ResolutionBuffer {
    /// Grows the stamp tables to hold variables `1..=count` --- and so also
    /// every reachable decision level.
    pub fn grow_to(&mut self, count: usize) {
        if count + 1 > self.stamp.len() {
            self.stamp.resize(count + 1, 0);
            self.level_stamp.resize(count + 1, 0);
            self.lbd_stamp.resize(count + 1, 0);
        }
    }

    /// Opens a fresh analysis: advances the epoch and clears the clause.
    pub fn open_epoch(&mut self) {
        self.epoch += 3;
        self.clause.clear();
    }

    /// True when the variable was seen in the current analysis.
    pub fn is_stamped(&self, variable: Variable) -> bool {
        self.stamp[variable as usize] == self.epoch
    }

    /// The raw stamp of a variable, for band comparisons.
    pub fn stamp_of(&self, variable: Variable) -> u64 {
        self.stamp[variable as usize]
    }

    /// Stamps a variable as seen.
    pub fn stamp_seen(&mut self, variable: Variable) {
        self.stamp[variable as usize] = self.epoch;
    }

    /// Stamps a variable as proved redundant.
    pub fn stamp_redundant(&mut self, variable: Variable) {
        self.stamp[variable as usize] = self.epoch + 1;
    }

    /// Stamps a variable as proved non-redundant.
    pub fn stamp_non_redundant(&mut self, variable: Variable) {
        self.stamp[variable as usize] = self.epoch + 2;
    }

    /// Notes a clause variable at the given level, saturating at the
    /// at-least-two band.
    pub fn note_level(&mut self, level: LevelIndex) {
        let index = level as usize;
        if self.level_stamp[index] < self.epoch {
            self.level_stamp[index] = self.epoch;
        } else {
            self.level_stamp[index] = self.epoch + 1;
        }
    }

    /// True when some variable of the level is in the learned clause.
    pub fn level_seen(&self, level: LevelIndex) -> bool {
        self.level_stamp[level as usize] >= self.epoch
    }

    /// True when at least two variables of the level are in the learned
    /// clause, so one of them may be redundant.
    pub fn level_has_pair(&self, level: LevelIndex) -> bool {
        self.level_stamp[level as usize] == self.epoch + 1
    }

    /// Marks a level for the LBD count, returning true on the first mark
    /// of the level this analysis.
    pub fn mark_lbd(&mut self, level: LevelIndex) -> bool {
        let index = level as usize;
        if self.lbd_stamp[index] == self.epoch {
            false
        } else {
            self.lbd_stamp[index] = self.epoch;
            true
        }
    }
}
