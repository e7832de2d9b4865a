use crate::{
    config::Config,
    context::{ContextState, Counters, GenericContext},
    db::{clause::ClauseDB, trail::Trail, variable::VariableDB},
    generic::splitmix::SplitMix64,
    resolution_buffer::ResolutionBuffer,
};

/// A context fixed to the default source of randomness.
pub type Context = GenericContext<SplitMix64>;

impl Context {
    /// A fresh context with the given configuration.
    pub fn from_config(config: Config) -> Self {
        GenericContext {
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
            variable_db: VariableDB::default(),
            trail: Trail::default(),
            resolution_buffer: ResolutionBuffer::default(),
            state: ContextState::Input,
            rng: SplitMix64::default(),
        }
    }
}
