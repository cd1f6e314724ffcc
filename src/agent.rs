use crate::config::AgentConfig;
use crate::error::{ConfigError, SearchError};
use crate::game::{GameState, PlayerId};
use crate::search::alphabeta::SearchLimits;
use crate::search::deepening::{choose_action, Publish, SearchUpdate};
use crate::search::eval::{Evaluator, Heuristic};
use crate::search::opening::{in_opening, random_action};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A player seat: the side it controls, its evaluator and its settings.
pub struct Agent<E = Heuristic> {
    player: PlayerId,
    config: AgentConfig,
    evaluator: E,
    rng: SmallRng,
    /// Free slot the host may carry between turns. The agent never reads it.
    pub context: Option<serde_json::Value>,
}

impl Agent<Heuristic> {
    pub fn from_config(player: PlayerId, config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let evaluator = config.heuristic();
        Ok(Self::new(player, config, evaluator))
    }
}

impl<E: Evaluator> Agent<E> {
    pub fn new(player: PlayerId, config: AgentConfig, evaluator: E) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { player, config, evaluator, rng, context: None }
    }

    pub fn player(&self) -> PlayerId { self.player }
    pub fn config(&self) -> &AgentConfig { &self.config }

    /// Pick an action for `state`, publishing each improvement to `sink`.
    pub fn get_action<S, P>(&mut self, state: &S, sink: &mut P) -> Result<S::Action, SearchError>
    where
        S: GameState,
        P: Publish<S::Action>,
    {
        let limits = self.config.limits();
        self.get_action_with_limits(state, &limits, sink)
    }

    /// As `get_action`, with caller-supplied cutoffs in place of the configured ones.
    pub fn get_action_with_limits<S, P>(&mut self, state: &S, limits: &SearchLimits, sink: &mut P) -> Result<S::Action, SearchError>
    where
        S: GameState,
        P: Publish<S::Action>,
    {
        if in_opening(state) {
            let action = random_action(state, &mut self.rng)?;
            info!("opening ply {}: player {} plays {:?} without search", state.ply_count(), self.player, action);
            sink.publish(SearchUpdate { depth: 0, action, score: 0.0, nodes: 0 });
            return Ok(action);
        }
        let r = choose_action(state, self.player, &self.evaluator, limits, sink)?;
        Ok(r.best_action)
    }
}
