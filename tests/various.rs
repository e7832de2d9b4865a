use stoat_sat::{config::Config, context::Context, reports::Report, structures::literal::Literal};

fn clause(ints: &[i32]) -> Vec<Literal> {
    ints.iter().map(|&int| Literal::from(int)).collect()
}

mod wide_clause {
    use super::*;

    /// A single true literal buried among root-false literals: the scan
    /// for a replacement watch tombstones the dead body and shrinks the
    /// clause in place.
    #[test]
    fn root_false_body_is_tombstoned() {
        let mut ctx = Context::from_config(Config::default());

        for variable in 1..1000i32 {
            assert!(ctx.add_clause(clause(&[-variable])).is_ok());
        }
        let wide: Vec<Literal> = (1..=1000i32).map(Literal::from).collect();
        assert!(ctx.add_clause(wide).is_ok());
        let handle = *ctx.clause_db.handles.last().unwrap();

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(1000), Some(true));
        assert!(ctx.counters.tombstoned_cells > 900);
        assert!(ctx.clause_db.size(handle) < 1000);
    }
}

mod backjump_laws {
    use super::*;

    fn snapshot(ctx: &Context) -> (Vec<Literal>, usize, u32, Vec<Option<bool>>) {
        (
            ctx.trail.literals.clone(),
            ctx.trail.q_head,
            ctx.trail.level(),
            (1..=ctx.variable_count() as u32)
                .map(|variable| ctx.value_of(variable))
                .collect(),
        )
    }

    #[test]
    fn backjump_is_idempotent() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.add_clause(clause(&[1, 2])).is_ok());
        assert!(ctx.add_clause(clause(&[3, 4])).is_ok());
        assert!(ctx.add_clause(clause(&[5, 6])).is_ok());
        assert!(ctx.add_clause(clause(&[7, 8])).is_ok());

        // Three levels of decisions with their consequences.
        for _ in 0..3 {
            assert!(ctx.propagate().is_ok());
            assert!(ctx.make_decision().is_ok());
        }
        assert!(ctx.propagate().is_ok());

        ctx.backjump(1);
        let once = snapshot(&ctx);
        ctx.backjump(1);
        assert_eq!(once, snapshot(&ctx));

        ctx.backjump(0);
        let grounded = snapshot(&ctx);
        ctx.backjump(0);
        assert_eq!(grounded, snapshot(&ctx));
        assert_eq!(ctx.trail.level(), 0);
    }

    #[test]
    fn backjump_saves_phases() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.add_clause(clause(&[1, 2])).is_ok());

        assert!(ctx.propagate().is_ok());
        assert!(ctx.make_decision().is_ok());
        let decided = ctx.trail.literals[ctx.trail.literals.len() - 1];

        ctx.backjump(0);
        assert_eq!(ctx.value_of(decided.variable()), None);
        assert_eq!(
            ctx.variable_db.previous_polarity(decided.variable()),
            decided.polarity(),
        );
    }
}

mod learning {
    use super::*;

    /// A chain forcing a conflict two levels up: analysis must backjump
    /// and assert rather than merely backtrack.
    #[test]
    fn asserting_clause_redirects_search() {
        let formula: &[&[i32]] = &[
            &[-1, -5, 6],
            &[-2, -6, 7],
            &[-2, -6, -7],
            &[1, 2],
            &[5, 2],
            &[3, 4],
        ];
        let mut ctx = Context::from_config(Config::default());
        for ints in formula {
            assert!(ctx.add_clause(clause(ints)).is_ok());
        }

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        for ints in formula {
            assert!(ints
                .iter()
                .any(|&int| ctx.value_of(int.unsigned_abs()) == Some(int > 0)));
        }
    }
}
