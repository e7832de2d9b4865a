/*!
Configuration of a context.

All configuration for a context is contained within the context, cloned
from a [Config] when the context is built. Options carry their CLI name
and bounds so external surfaces can validate requests uniformly.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The learned-clause count above which a purge is scheduled.
    pub lemma_cap: ConfigOption<usize>,

    /// Permit agility-driven restarts.
    pub restarts: ConfigOption<bool>,

    /// The agility fraction below which a restart is considered.
    pub restart_agility: ConfigOption<f64>,

    /// The minimum count of epochs between restarts.
    ///
    /// The epoch counter advances by three at each conflict analysis.
    pub restart_interval: ConfigOption<u64>,

    /// Default to the last set value of a variable when deciding on it.
    pub phase_saving: ConfigOption<bool>,

    /// The probability of deciding on a random variable rather than the
    /// most active.
    ///
    /// Zero by default: a solve is deterministic unless asked otherwise.
    pub random_decision_bias: ConfigOption<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lemma_cap: ConfigOption {
                name: "lemma_cap",
                min: 1,
                max: usize::MAX,
                value: 10_000,
            },

            restarts: ConfigOption {
                name: "restarts",
                min: false,
                max: true,
                value: true,
            },

            restart_agility: ConfigOption {
                name: "restart_agility",
                min: 0.0,
                max: 1.0,
                value: 0.25,
            },

            restart_interval: ConfigOption {
                name: "restart_interval",
                min: 1,
                max: u64::MAX,
                value: 1_000,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },
        }
    }
}
