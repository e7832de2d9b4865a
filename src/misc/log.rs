/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made throughout the library, narrowed by
target. No log implementation is provided; the CLI installs
[env_logger](https://docs.rs/env_logger), so, for example, propagation
traces can be isolated with `RUST_LOG=propagation=trace …`.
*/

/// Targets to be used within a [log] macro.
pub mod targets {
    pub const ANALYSIS: &str = "analysis";
    pub const BACKJUMP: &str = "backjump";
    pub const CLAUSE_DB: &str = "clause_db";
    pub const DECISION: &str = "decision";
    pub const PARSE: &str = "parse";
    pub const PROPAGATION: &str = "propagation";
    pub const PURGE: &str = "purge";
    pub const RESTART: &str = "restart";
    pub const SUBSUMPTION: &str = "subsumption";
}
