use crate::error::SearchError;
use crate::game::{GameState, PlayerId};
use crate::search::alphabeta::{SearchLimits, SearchResult, Searcher};
use crate::search::eval::Evaluator;
use log::{debug, info};
use serde::Serialize;
use std::sync::mpsc::Sender;

/// One published answer. Later publications supersede earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchUpdate<A> {
    /// Completed depth; 0 marks an opening pick made without search.
    pub depth: u32,
    pub action: A,
    pub score: f64,
    pub nodes: u64,
}

impl<A: Copy> From<&SearchResult<A>> for SearchUpdate<A> {
    fn from(r: &SearchResult<A>) -> Self {
        Self { depth: r.depth, action: r.best_action, score: r.score, nodes: r.nodes }
    }
}

/// Append-only outlet for best-so-far actions.
pub trait Publish<A> {
    fn publish(&mut self, update: SearchUpdate<A>);
}

impl<A> Publish<A> for Vec<SearchUpdate<A>> {
    fn publish(&mut self, update: SearchUpdate<A>) { self.push(update); }
}

impl<A> Publish<A> for Sender<SearchUpdate<A>> {
    fn publish(&mut self, update: SearchUpdate<A>) {
        // A dropped receiver means the caller has already stopped listening.
        let _ = self.send(update);
    }
}

/// Discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPublish;

impl<A> Publish<A> for NoPublish {
    fn publish(&mut self, _update: SearchUpdate<A>) {}
}

/// Iterative deepening over depths `1..=limits.depth_limit`.
///
/// Each depth that completes is published before the next one starts and
/// replaces the previous answer outright. A cutoff inside a depth throws that
/// depth away and returns the last completed one; a cutoff before depth 1
/// finishes yields `NoCompletedDepth`.
pub fn choose_action<S, E, P>(
    state: &S,
    player: PlayerId,
    evaluator: E,
    limits: &SearchLimits,
    sink: &mut P,
) -> Result<SearchResult<S::Action>, SearchError>
where
    S: GameState,
    E: Evaluator,
    P: Publish<S::Action>,
{
    let mut searcher = Searcher::new(evaluator, player).with_limits(limits);
    let mut best: Option<SearchResult<S::Action>> = None;
    for depth in 1..=limits.depth_limit {
        match searcher.search_depth(state, depth) {
            Ok(r) => {
                debug!("depth {} complete: action={:?} score={} nodes={}", r.depth, r.best_action, r.score, r.nodes);
                sink.publish(SearchUpdate::from(&r));
                best = Some(r);
            }
            Err(SearchError::Interrupted { depth }) => {
                info!("cutoff during depth {} after {} nodes", depth, searcher.nodes());
                break;
            }
            Err(e) => return Err(e),
        }
    }
    best.ok_or(SearchError::NoCompletedDepth)
}
