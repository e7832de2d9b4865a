use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("stoat_sat")
        .about("Determines whether a DIMACS CNF formula is satisfiable or unsatisfiable")

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS CNF file to solve (plain or xz-compressed)."))

        .arg(Arg::new("detail")
            .long("detail")
            .short('d')
            .value_name("LEVEL")
            .value_parser(value_parser!(u8))
            .required(false)
            .num_args(1)
            .help("The level to which details are communicated during a solve.
Default: 0"))

        .arg(Arg::new("stats")
            .long("stats")
            .short('s')
            .action(ArgAction::SetTrue)
            .help("Display counters at exit."))

        .arg(Arg::new("no_restarts")
            .long("no-restart")
            .action(ArgAction::SetTrue)
            .help("Prevent decisions from being forgotten."))

        .arg(Arg::new("lemma_cap")
            .long("lemma-cap")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The learned-clause count above which lemmas are purged.
Default: 10000

A purge keeps original clauses and the learned clauses of smallest LBD."))

        .arg(Arg::new("agility")
            .long("agility")
            .value_name("FRACTION")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help("The agility fraction below which a restart is considered.
Default: 0.25

Agility tracks the recent rate of assignments flipping a saved phase.
Low agility means the search is re-confirming prior phases, and a
restart is unlikely to lose progress."))
}
