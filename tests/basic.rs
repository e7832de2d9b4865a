use stoat_sat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::Literal,
};

fn clause(ints: &[i32]) -> Vec<Literal> {
    ints.iter().map(|&int| Literal::from(int)).collect()
}

fn context_over(formula: &[&[i32]]) -> Context {
    let mut ctx = Context::from_config(Config::default());
    for ints in formula {
        let _ = ctx.add_clause(clause(ints));
    }
    ctx
}

fn model_satisfies(ctx: &Context, formula: &[&[i32]]) -> bool {
    formula.iter().all(|ints| {
        ints.iter()
            .any(|&int| ctx.value_of(int.unsigned_abs()) == Some(int > 0))
    })
}

mod basic {
    use super::*;

    #[test]
    fn three_clause_model() {
        let formula: &[&[i32]] = &[&[1, 2], &[-1, 2], &[1, -2]];
        let mut ctx = context_over(formula);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(1), Some(true));
        assert_eq!(ctx.value_of(2), Some(true));
    }

    #[test]
    fn contradictory_units_skip_search() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause(clause(&[1])), Ok(ClauseOk::Added));
        assert!(ctx.add_clause(clause(&[-1])).is_err());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.total_iterations, 0);
    }

    #[test]
    fn forced_chain() {
        let formula: &[&[i32]] = &[&[1, 2], &[3], &[-2, -3, 4]];
        let mut ctx = context_over(formula);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(3), Some(true));
        if ctx.value_of(2) == Some(true) {
            assert_eq!(ctx.value_of(4), Some(true));
        }
        assert!(model_satisfies(&ctx, formula));
    }

    #[test]
    fn duplicates_dropped() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.add_clause(clause(&[1, 1, 2, 2])), Ok(ClauseOk::Added));

        let handle = ctx.clause_db.handles[0];
        assert_eq!(ctx.clause_db.size(handle), 2);
    }

    #[test]
    fn tautology_skipped() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.add_clause(clause(&[1, -2, -1])), Ok(ClauseOk::Skipped));
        assert!(ctx.clause_db.handles.is_empty());
    }

    #[test]
    fn unit_propagates_through_pair() {
        let formula: &[&[i32]] = &[&[1, 2], &[-1]];
        let mut ctx = context_over(formula);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(1), Some(false));
        assert_eq!(ctx.value_of(2), Some(true));
    }

    #[test]
    fn outcomes_are_reproducible() {
        let formula: &[&[i32]] = &[
            &[1, 2, -3],
            &[-1, 3],
            &[-2, 3, 4],
            &[2, -4],
            &[-3, -4, 5],
            &[3, -5, 1],
        ];

        let mut first = context_over(formula);
        let mut second = context_over(formula);
        assert_eq!(first.solve(), second.solve());

        for variable in 1..=5 {
            assert_eq!(first.value_of(variable), second.value_of(variable));
        }
    }
}
