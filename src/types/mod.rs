//! Types without a natural home in any database or procedure.

pub mod err;
