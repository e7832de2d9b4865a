/*!
Determines the satisfiability of the formula in a context.

# Overview

The loop alternates propagation with one of three actions, chosen at
quiescence, and conflict analysis otherwise:

```none
          +---------------+
  +-------| make_decision |
  |       +---------------+
  |               ⌃
  |               | at quiescence, with no purge or restart due
  |               |
  |               |            +-----> satisfiable, if the trail is full
  ⌄   +-----------+-------+    |
--+-->|     propagate     |----+
  ⌃   +-------------------+    |
  |               |            +-----> unsatisfiable, on a root conflict
  |               |
  |               | on a conflict above the root
  |               ⌄
  |      +------------------+
  +------| resolve_conflict |
         +------------------+
```

A full trail at quiescence is a model, and a conflict at the root level is
a refutation --- every root assignment is forced by the formula.

# Scheduling

Two maintenance actions interleave at quiescence, checked in order:

- A purge of learned clauses, when the learned count crosses the cap.
- A restart, when agility has fallen below the configured fraction and
  enough epochs have passed since the last restart. Low agility means
  recent assignments mostly re-confirm saved phases --- the search is
  treading water, and a restart redirects it with its activities and
  phases intact.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    reports::Report,
    types::err::{self, BCPError},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => {
                return Ok(self.report());
            }
            ContextState::Input | ContextState::Solving => self.state = ContextState::Solving,
        }

        let timer = std::time::Instant::now();
        let variable_count = self.variable_db.count();
        let agility_bound = (self.config.restart_agility.value * 2.0_f64.powi(32)) as u64;

        'solve_loop: loop {
            self.counters.total_iterations += 1;

            if let Err(BCPError::Conflict(conflict)) = self.propagate() {
                self.counters.total_conflicts += 1;
                if self.trail.level() == 0 {
                    log::info!(target: targets::ANALYSIS, "Fundamental conflict at clause {conflict}");
                    self.state = ContextState::Unsatisfiable;
                    break 'solve_loop;
                }
                self.resolve_conflict(conflict)?;
                continue 'solve_loop;
            }

            // Quiescence.
            if self.trail.length() == variable_count {
                self.state = ContextState::Satisfiable;
                break 'solve_loop;
            }

            if self.clause_db.learned_count > self.config.lemma_cap.value {
                self.purge_lemmas();
                continue 'solve_loop;
            }

            if self.restart_due(agility_bound) {
                log::info!(
                    target: targets::RESTART,
                    "Restart {} at agility {:.3}",
                    self.counters.restarts + 1,
                    self.counters.agility_fraction(),
                );
                self.backjump(0);
                self.counters.restarts += 1;
                self.counters.last_restart_epoch = self.resolution_buffer.epoch;
                continue 'solve_loop;
            }

            self.make_decision()?;
        }

        self.counters.time = timer.elapsed();
        Ok(self.report())
    }

    fn restart_due(&self, agility_bound: u64) -> bool {
        self.config.restarts.value
            && (self.counters.agility as u64) < agility_bound
            && self.resolution_buffer.epoch - self.counters.last_restart_epoch
                >= self.config.restart_interval.value
    }
}
