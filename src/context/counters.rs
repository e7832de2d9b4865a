use std::time::Duration;

/// Counts for various things which count, roughly --- and the agility
/// measure, which lives here as the driver reads it alongside the restart
/// bookkeeping.
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of literals taken from the propagation queue.
    pub total_propagations: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// A count of clauses learned, including any later purged.
    pub total_learned: usize,

    /// The number of restarts through a solve.
    pub restarts: usize,

    /// The number of lemma purges through a solve.
    pub purges: usize,

    /// Lemmas dropped across all purges.
    pub purged_lemmas: usize,

    /// Reason clauses shrunk by on-the-fly subsumption.
    pub subsumed_on_the_fly: usize,

    /// Learned clauses subsumed from the arena tail by their successor.
    pub tail_subsumed: usize,

    /// Literals removed from learned clauses as redundant.
    pub minimized_literals: usize,

    /// Root-false literals tombstoned out of clause bodies.
    pub tombstoned_cells: usize,

    /// A fixed-point fraction of 2³² tracking the recent rate of phase
    /// flips. Low agility means assignments mostly re-confirm saved
    /// phases --- a restart signal.
    pub agility: u32,

    /// The epoch at which the last restart was made.
    pub last_restart_epoch: u64,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_conflicts: 0,
            total_decisions: 0,
            total_propagations: 0,
            total_iterations: 0,
            total_learned: 0,

            restarts: 0,
            purges: 0,
            purged_lemmas: 0,

            subsumed_on_the_fly: 0,
            tail_subsumed: 0,
            minimized_literals: 0,
            tombstoned_cells: 0,

            agility: 0,
            last_restart_epoch: 0,

            time: Duration::from_secs(0),
        }
    }
}

impl Counters {
    /// Folds an assignment into the agility measure: a geometric decay at
    /// every assignment, and a boost when the assigned polarity differs
    /// from the saved phase.
    pub fn note_assignment(&mut self, flipped: bool) {
        self.agility -= self.agility >> 13;
        if flipped {
            self.agility = self.agility.saturating_add(1 << 19);
        }
    }

    /// Agility as a fraction in [0, 1).
    pub fn agility_fraction(&self) -> f64 {
        self.agility as f64 / 2.0_f64.powi(32)
    }
}

#[cfg(test)]
mod counter_tests {
    use super::*;

    #[test]
    fn agility_rises_on_flips_and_decays_without() {
        let mut counters = Counters::default();
        for _ in 0..64 {
            counters.note_assignment(true);
        }
        let risen = counters.agility;
        assert!(risen > 0);

        for _ in 0..10_000 {
            counters.note_assignment(false);
        }
        assert!(counters.agility < risen / 2);
    }

    #[test]
    fn agility_saturates() {
        let mut counters = Counters::default();
        for _ in 0..1_000_000 {
            counters.note_assignment(true);
        }
        assert!(counters.agility_fraction() < 1.0);
    }
}
