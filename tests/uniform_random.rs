use rand_core::{RngCore, SeedableRng};

use stoat_sat::{
    config::Config, context::Context, generic::splitmix::SplitMix64, reports::Report,
    structures::literal::Literal,
};

const VARIABLES: u32 = 50;

/// Clause count for a clause-to-variable ratio of 4.0.
const CLAUSES: usize = 200;

/// A uniform random 3-SAT formula over distinct variables per clause.
fn uniform_formula(seed: u64) -> Vec<Vec<i32>> {
    let mut rng = SplitMix64::from_seed(seed.to_le_bytes());
    let mut formula = Vec::with_capacity(CLAUSES);

    while formula.len() < CLAUSES {
        let mut ints: Vec<i32> = Vec::with_capacity(3);
        while ints.len() < 3 {
            let variable = (rng.next_u64() % VARIABLES as u64) as i32 + 1;
            if ints.iter().any(|int| int.abs() == variable) {
                continue;
            }
            let polarity = rng.next_u64() & 1 == 1;
            ints.push(if polarity { variable } else { -variable });
        }
        formula.push(ints);
    }
    formula
}

fn solve_formula(formula: &[Vec<i32>]) -> Context {
    let mut ctx = Context::from_config(Config::default());
    for ints in formula {
        let clause: Vec<Literal> = ints.iter().map(|&int| Literal::from(int)).collect();
        assert!(ctx.add_clause(clause).is_ok());
    }
    assert!(ctx.solve().is_ok());
    ctx
}

fn model_satisfies(ctx: &Context, formula: &[Vec<i32>]) -> bool {
    formula.iter().all(|ints| {
        ints.iter()
            .any(|&int| ctx.value_of(int.unsigned_abs()) == Some(int > 0))
    })
}

mod uniform_random {
    use super::*;

    #[test]
    fn seeded_formulas_terminate_with_verified_models() {
        for seed in 0..8u64 {
            let formula = uniform_formula(seed);
            let ctx = solve_formula(&formula);

            match ctx.report() {
                Report::Satisfiable => {
                    assert!(
                        model_satisfies(&ctx, &formula),
                        "model fails formula of seed {seed}",
                    );
                }
                Report::Unsatisfiable => {}
                Report::Unknown => panic!("no verdict on seed {seed}"),
            }
        }
    }

    #[test]
    fn verdicts_and_models_are_reproducible() {
        let formula = uniform_formula(91);
        let first = solve_formula(&formula);
        let second = solve_formula(&formula);

        assert_eq!(first.report(), second.report());
        for variable in 1..=VARIABLES {
            assert_eq!(first.value_of(variable), second.value_of(variable));
        }
    }
}
