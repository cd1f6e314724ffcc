use crate::error::SearchError;
use crate::game::{GameState, PlayerId};
use crate::search::eval::Evaluator;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// External cutoff for one decision. Any of the three stops the search at
/// the next visited node; the depth in progress is then discarded.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    pub depth_limit: u32,
    pub deadline: Option<Instant>,
    pub abort: Option<Arc<AtomicBool>>,
    pub max_nodes: Option<u64>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { depth_limit: 5, deadline: None, abort: None, max_nodes: None }
    }
}

impl SearchLimits {
    pub fn depth(depth_limit: u32) -> Self {
        Self { depth_limit, ..Self::default() }
    }

    pub fn with_movetime(mut self, movetime: Duration) -> Self {
        self.deadline = Some(Instant::now() + movetime);
        self
    }

    pub fn with_abort(mut self, flag: Arc<AtomicBool>) -> Self {
        self.abort = Some(flag);
        self
    }

    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = Some(nodes);
        self
    }
}

/// Outcome of one fully searched depth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<A> {
    pub best_action: A,
    pub score: f64,
    pub depth: u32,
    pub nodes: u64,
}

/// Fail-soft alpha-beta, maximizing for `player` and minimizing for the
/// opponent. Actions are visited in the order the state yields them.
pub struct Searcher<E> {
    evaluator: E,
    player: PlayerId,
    pub(crate) nodes: u64,
    node_limit: u64,
    deadline: Option<Instant>,
    abort: Option<Arc<AtomicBool>>,
    iteration: u32,
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(evaluator: E, player: PlayerId) -> Self {
        Self {
            evaluator,
            player,
            nodes: 0,
            node_limit: u64::MAX,
            deadline: None,
            abort: None,
            iteration: 0,
        }
    }

    pub fn with_limits(mut self, limits: &SearchLimits) -> Self {
        self.node_limit = limits.max_nodes.unwrap_or(u64::MAX);
        self.deadline = limits.deadline;
        self.abort = limits.abort.clone();
        self
    }

    pub fn player(&self) -> PlayerId { self.player }
    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn evaluator(&self) -> &E { &self.evaluator }

    /// Best root action at exactly `depth` plies. Ties go to the action seen
    /// first, so the result depends on the state's action order.
    pub fn search_depth<S: GameState>(&mut self, state: &S, depth: u32) -> Result<SearchResult<S::Action>, SearchError> {
        self.iteration = depth;
        self.visit()?;
        let actions = state.actions()?;
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions { ply: state.ply_count() });
        }
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(S::Action, f64)> = None;
        for a in actions {
            let child = state.result(a)?;
            let value = self.min_value(&child, alpha, beta, depth.saturating_sub(1))?;
            alpha = alpha.max(value);
            // A root where every line loses still yields its first action.
            if best.map_or(true, |(_, bs)| value > bs) { best = Some((a, value)); }
        }
        let (best_action, score) = match best {
            Some(b) => b,
            None => return Err(SearchError::NoLegalActions { ply: state.ply_count() }),
        };
        Ok(SearchResult { best_action, score, depth, nodes: self.nodes })
    }

    /// Minimax value of `state` for the searching player, with `state` as a
    /// maximizing node.
    pub fn value<S: GameState>(&mut self, state: &S, depth: u32) -> Result<f64, SearchError> {
        self.iteration = depth;
        self.max_value(state, f64::NEG_INFINITY, f64::INFINITY, depth)
    }

    fn max_value<S: GameState>(&mut self, state: &S, mut alpha: f64, beta: f64, depth: u32) -> Result<f64, SearchError> {
        self.visit()?;
        if state.terminal_test()? { return Ok(state.utility(self.player)?); }
        if depth == 0 { return Ok(self.evaluator.score(state, self.player)?); }
        let mut value = f64::NEG_INFINITY;
        for a in state.actions()? {
            let child = state.result(a)?;
            value = value.max(self.min_value(&child, alpha, beta, depth - 1)?);
            if value >= beta { return Ok(value); }
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    fn min_value<S: GameState>(&mut self, state: &S, alpha: f64, mut beta: f64, depth: u32) -> Result<f64, SearchError> {
        self.visit()?;
        if state.terminal_test()? { return Ok(state.utility(self.player)?); }
        if depth == 0 { return Ok(self.evaluator.score(state, self.player)?); }
        let mut value = f64::INFINITY;
        for a in state.actions()? {
            let child = state.result(a)?;
            value = value.min(self.max_value(&child, alpha, beta, depth - 1)?);
            if value <= alpha { return Ok(value); }
            beta = beta.min(value);
        }
        Ok(value)
    }

    fn visit(&mut self) -> Result<(), SearchError> {
        let stop = self.nodes >= self.node_limit
            || self.abort.as_ref().map_or(false, |flag| flag.load(Ordering::Relaxed))
            || self.deadline.map_or(false, |dl| Instant::now() >= dl);
        if stop { return Err(SearchError::Interrupted { depth: self.iteration }); }
        self.nodes += 1;
        Ok(())
    }
}
