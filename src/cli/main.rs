use std::path::PathBuf;

use stoat_sat::{
    config::Config,
    reports::Report,
    types::err::{BuildError, ErrorKind},
};

mod misc;
mod parse_args;

fn main() {
    env_logger::init();

    let matches = parse_args::cli().get_matches();

    let detail: u8 = matches.get_one("detail").copied().unwrap_or(0);
    let stats = matches.get_flag("stats") || detail > 0;

    let mut config = Config::default();
    if matches.get_flag("no_restarts") {
        config.restarts.value = false;
    }
    if let Some(&cap) = matches.get_one::<usize>("lemma_cap") {
        let (min, max) = config.lemma_cap.min_max();
        if cap < min || cap > max {
            println!("The {} option requires a value of at least {min}", config.lemma_cap.name);
            std::process::exit(1);
        }
        config.lemma_cap.value = cap;
    }
    if let Some(&agility) = matches.get_one::<f64>("agility") {
        let (min, max) = config.restart_agility.min_max();
        if !(min..=max).contains(&agility) {
            println!("The {} option requires a value between {min} and {max}", config.restart_agility.name);
            std::process::exit(1);
        }
        config.restart_agility.value = agility;
    }

    let Some(path) = matches.get_one::<PathBuf>("path") else {
        println!("A path to a CNF file is required");
        std::process::exit(1);
    };

    let mut the_context = stoat_sat::context::Context::from_config(config);

    match misc::load_dimacs(&mut the_context, path) {
        Ok(info) => {
            if detail > 0 {
                println!(
                    "c Parsed {} clauses over {} variables from {path:?}",
                    info.added_clauses,
                    the_context.variable_count(),
                );
            }
        }
        Err(ErrorKind::Build(BuildError::EmptyClause | BuildError::Unsatisfiable)) => {
            // Unsatisfiability noticed while reading: an empty clause or
            // contradictory units.
            println!("s UNSATISFIABLE");
            std::process::exit(20);
        }
        Err(e) => {
            println!("c Error loading DIMACS: {e:?}");
            std::process::exit(1);
        }
    };

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Context error: {e:?}");
            std::process::exit(1);
        }
    };

    if stats {
        misc::print_stats(&the_context);
    }

    match report {
        Report::Satisfiable => {
            println!("s SATISFIABLE");
            misc::print_model(&the_context);
            std::process::exit(10)
        }
        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            std::process::exit(20)
        }
        Report::Unknown => {
            println!("s UNKNOWN");
            std::process::exit(1)
        }
    };
}
