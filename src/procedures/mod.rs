//! The procedures of a solve, each a collection of context methods.
//!
//! - [bcp] --- unit propagation over the watch lists.
//! - [analysis] --- conflict analysis to a first unique implication point.
//! - [backjump] --- unwinding the trail to a lower decision level.
//! - [decision] --- opening a level on an unvalued variable.
//! - [purge] --- bulk removal of high-LBD lemmas.
//! - [solve] --- the outer loop tying the others together.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod purge;
pub mod solve;
