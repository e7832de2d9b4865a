//! Bulk removal of learned clauses.
//!
//! Scheduled by the driver when the learned count crosses the configured
//! cap. The solve first backjumps to the root level, so every reason
//! handle is nil and nothing outside the database can dangle across the
//! compaction; the arena is then rebuilt keeping original clauses and the
//! learned clauses of smallest LBD.
//!
//! The cutoff is read from an LBD histogram: the largest LBD bound
//! retaining at most half the cap, never below the glue bound of two.

use crate::{context::GenericContext, misc::log::targets};

/// Learned clauses with LBD at most this bound always survive a purge.
const GLUE_BOUND: u32 = 2;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Drops high-LBD lemmas and compacts the clause arena.
    pub fn purge_lemmas(&mut self) {
        self.counters.purges += 1;
        self.backjump(0);

        const BUCKETS: usize = 64;
        let mut histogram = [0usize; BUCKETS];
        for &handle in &self.clause_db.handles {
            let lbd = self.clause_db.lbd(handle) as usize;
            if lbd > 0 {
                histogram[lbd.min(BUCKETS - 1)] += 1;
            }
        }

        let target = self.config.lemma_cap.value / 2;
        let mut cumulative = 0;
        let mut cutoff = GLUE_BOUND;
        for band in 1..BUCKETS {
            cumulative += histogram[band];
            if cumulative <= target || band <= GLUE_BOUND as usize {
                cutoff = band as u32;
            } else {
                break;
            }
        }

        let dropped = self.clause_db.retain_learned(cutoff);
        self.counters.purged_lemmas += dropped;

        // With enough unpurgeable lemmas the cap itself has to give, or
        // every quiescence would schedule another purge.
        if self.clause_db.learned_count >= self.config.lemma_cap.value {
            self.config.lemma_cap.value =
                self.clause_db.learned_count + self.config.lemma_cap.value / 2;
        }
        log::info!(
            target: targets::PURGE,
            "Purge {} dropped {dropped} lemmas above lbd {cutoff}, keeping {}",
            self.counters.purges,
            self.clause_db.learned_count,
        );
    }
}
