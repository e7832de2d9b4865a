//! A library for determining the satisfiability of boolean formulas
//! written in conjunctive normal form.
//!
//! stoat_sat is a conflict-driven clause-learning solver built over a
//! single packed clause arena: clause literals, watch links, sizes, and
//! LBD scores share one cell store, and unit propagation, analysis, and
//! purging all work the arena in place.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config), and clauses
//! may be added through the [DIMACS](crate::builder::dimacs)
//! representation of a formula or
//! [programmatically](crate::context::GenericContext::add_clause).
//!
//! At a high level, a solve manipulates a handful of databases:
//!
//! - The formula is stored in a [clause database](crate::db::clause).
//! - The valuation is stored in a [variable database](crate::db::variable).
//! - Consequences of the current valuation with respect to the formula
//!   are recorded on the [trail](crate::db::trail).
//!
//! Useful starting points:
//!
//! - The high-level [solve procedure](crate::procedures::solve) for the
//!   dynamics of a solve.
//! - The [clause database](crate::db::clause) for the packed arena and
//!   the watch list invariants everything else relies on.
//! - The [analysis procedure](crate::procedures::analysis) for clause
//!   learning and its optimizations.
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! # use stoat_sat::structures::literal::Literal;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p_or_q = vec![Literal::from(1), Literal::from(2)];
//! assert!(the_context.add_clause(p_or_q).is_ok());
//!
//! let not_p = vec![Literal::from(-1)];
//! assert!(the_context.add_clause(not_p).is_ok());
//!
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Satisfiable);
//!
//! assert_eq!(the_context.value_of(1), Some(false));
//! assert_eq!(the_context.value_of(2), Some(true));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues, calls to the [log] macros are made with a
//! variety of targets, listed in [misc::log]. No implementation is forced
//! on library users; the CLI installs
//! [env_logger](https://docs.rs/env_logger), so, for example, propagation
//! traces can be isolated with `RUST_LOG=propagation=trace …`.

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;
pub mod resolution_buffer;

pub mod misc;
pub mod reports;
