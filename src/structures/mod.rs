//! The abstract elements of a solve, independent of any database.

pub mod literal;
