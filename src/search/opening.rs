use crate::error::SearchError;
use crate::game::GameState;
use rand::Rng;

/// Plies before which the agent skips search entirely.
pub const OPENING_PLIES: u32 = 2;

/// True until both players have made their first move.
pub fn in_opening<S: GameState>(state: &S) -> bool {
    state.ply_count() < OPENING_PLIES
}

/// Uniform pick from the legal actions. The rng is the only source of
/// randomness in the agent; seed it for reproducible openings.
pub fn random_action<S: GameState, R: Rng>(state: &S, rng: &mut R) -> Result<S::Action, SearchError> {
    let actions = state.actions()?;
    if actions.is_empty() {
        return Err(SearchError::NoLegalActions { ply: state.ply_count() });
    }
    let idx = rng.gen_range(0..actions.len());
    Ok(actions[idx])
}
