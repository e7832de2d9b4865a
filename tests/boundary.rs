use std::io::Write;

use stoat_sat::{
    config::Config,
    context::Context,
    reports::Report,
    types::err::{BuildError, ErrorKind},
};

mod boundary {
    use super::*;

    #[test]
    fn zero_clauses_default_to_false() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf 3 0\n");
        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        for variable in 1..=3 {
            assert_eq!(ctx.value_of(variable), Some(false));
        }
    }

    #[test]
    fn zero_variables() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf 0 0\n");
        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn empty_clause_is_immediately_unsatisfiable() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf 2 2\n1 2 0\n0\n");

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Build(BuildError::EmptyClause))
        );
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn opposed_units_are_unsatisfiable_without_search() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf 1 2\n1 0\n-1 0\n");

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Build(BuildError::Unsatisfiable))
        );
        assert_eq!(ctx.report(), Report::Unsatisfiable);
        assert_eq!(ctx.counters.total_conflicts, 0);
    }

    #[test]
    fn root_conflict_through_propagation() {
        // No contradictory units, but unit propagation at the root level
        // falsifies the final clause.
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf 3 4\n1 0\n-1 2 0\n-2 3 0\n-2 -3 0\n");
        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.total_conflicts, 1);
        assert_eq!(ctx.counters.total_decisions, 0);
    }
}
