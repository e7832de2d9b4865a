//! The variable database.
//!
//! A struct-of-arrays store for everything known about a variable:
//!
//! - The current value, one of unset, false, or true.
//! - The previous value, used for phase saving and initialized to false.
//! - The decision level at which the variable was set.
//! - The position of the variable on the trail.
//! - The reason handle --- nil for unset variables, decisions, and
//!   root-level units.
//! - The activity, held by the [activity heap](crate::generic::activity_heap).
//!
//! Index 0 of each array is reserved, so a variable indexes its own state.

use crate::db::{Handle, LevelIndex, HANDLE_NIL, POSITION_NIL};
use crate::generic::activity_heap::ActivityHeap;
use crate::structures::literal::{Literal, Variable};

/// The value of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Unset,
    False,
    True,
}

pub struct VariableDB {
    value: Vec<Status>,
    previous: Vec<Status>,
    level: Vec<LevelIndex>,
    position: Vec<usize>,
    reason: Vec<Handle>,

    /// Variable activities and the max-activity heap over them.
    pub activity: ActivityHeap,
}

impl Default for VariableDB {
    fn default() -> Self {
        VariableDB {
            value: vec![Status::Unset],
            previous: vec![Status::False],
            level: vec![0],
            position: vec![POSITION_NIL],
            reason: vec![HANDLE_NIL],
            activity: ActivityHeap::default(),
        }
    }
}

impl VariableDB {
    /// A count of variables in the database.
    pub fn count(&self) -> usize {
        self.value.len() - 1
    }

    /// Grows the database to hold variables `1..=count`.
    ///
    /// Fresh variables are unset, phase-saved to false, and entered on the
    /// activity heap.
    pub fn grow_to(&mut self, count: usize) {
        let old = self.count();
        if count <= old {
            return;
        }
        self.value.resize(count + 1, Status::Unset);
        self.previous.resize(count + 1, Status::False);
        self.level.resize(count + 1, 0);
        self.position.resize(count + 1, POSITION_NIL);
        self.reason.resize(count + 1, HANDLE_NIL);
        self.activity.grow_to(count);
        for variable in (old + 1)..=count {
            self.activity.insert(variable as Variable);
        }
    }

    /// The value of a variable, if set.
    pub fn value_of(&self, variable: Variable) -> Option<bool> {
        match self.value[variable as usize] {
            Status::Unset => None,
            Status::False => Some(false),
            Status::True => Some(true),
        }
    }

    /// True exactly when the literal is true on the current valuation.
    pub fn is_true(&self, literal: Literal) -> bool {
        match self.value[literal.variable() as usize] {
            Status::Unset => false,
            Status::False => !literal.polarity(),
            Status::True => literal.polarity(),
        }
    }

    /// True exactly when the literal is false on the current valuation.
    pub fn is_false(&self, literal: Literal) -> bool {
        match self.value[literal.variable() as usize] {
            Status::Unset => false,
            Status::False => literal.polarity(),
            Status::True => !literal.polarity(),
        }
    }

    /// The level at which a variable was set.
    ///
    /// Zero for unset variables.
    pub fn level_of(&self, variable: Variable) -> LevelIndex {
        self.level[variable as usize]
    }

    /// The trail position of a variable, or [POSITION_NIL].
    pub fn position_of(&self, variable: Variable) -> usize {
        self.position[variable as usize]
    }

    /// The reason handle of a variable, or [HANDLE_NIL].
    pub fn reason_of(&self, variable: Variable) -> Handle {
        self.reason[variable as usize]
    }

    /// The saved phase of a variable.
    pub fn previous_polarity(&self, variable: Variable) -> bool {
        self.previous[variable as usize] == Status::True
    }

    /// Values a literal at the given level with the given reason.
    ///
    /// Root-level assignments take a nil reason regardless of how they were
    /// derived, maintaining the invariant that a reason is nil exactly for
    /// unset variables, decisions, and root-level units.
    ///
    /// Returns true when the assigned polarity differs from the saved
    /// phase --- the signal from which agility is maintained.
    pub fn set_value(
        &mut self,
        literal: Literal,
        level: LevelIndex,
        reason: Handle,
        position: usize,
    ) -> bool {
        let index = literal.variable() as usize;
        debug_assert_eq!(self.value[index], Status::Unset);
        let status = match literal.polarity() {
            true => Status::True,
            false => Status::False,
        };
        self.value[index] = status;
        self.level[index] = level;
        self.position[index] = position;
        self.reason[index] = match level {
            0 => HANDLE_NIL,
            _ => reason,
        };
        self.previous[index] != status
    }

    /// Clears the value of a variable, saving its phase and returning the
    /// variable to the activity heap.
    pub fn clear_value(&mut self, variable: Variable) {
        let index = variable as usize;
        self.previous[index] = self.value[index];
        self.value[index] = Status::Unset;
        self.position[index] = POSITION_NIL;
        self.reason[index] = HANDLE_NIL;
        self.activity.insert(variable);
    }

    /// Bumps the activity of a variable.
    pub fn bump(&mut self, variable: Variable) {
        self.activity.bump(variable);
    }
}

#[cfg(test)]
mod variable_db_tests {
    use super::*;

    #[test]
    fn value_cycle() {
        let mut db = VariableDB::default();
        db.grow_to(3);

        assert_eq!(db.value_of(2), None);
        let flipped = db.set_value(Literal::from(2), 1, 77, 0);
        assert!(flipped, "positive assignment against a false saved phase");
        assert_eq!(db.value_of(2), Some(true));
        assert!(db.is_true(Literal::from(2)));
        assert!(db.is_false(Literal::from(-2)));
        assert_eq!(db.reason_of(2), 77);

        db.clear_value(2);
        assert_eq!(db.value_of(2), None);
        assert!(db.previous_polarity(2));
        assert_eq!(db.reason_of(2), HANDLE_NIL);
        assert_eq!(db.position_of(2), POSITION_NIL);
    }

    #[test]
    fn root_reason_is_nil() {
        let mut db = VariableDB::default();
        db.grow_to(1);
        db.set_value(Literal::from(-1), 0, 42, 0);
        assert_eq!(db.reason_of(1), HANDLE_NIL);
    }
}
