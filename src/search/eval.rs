use crate::error::StateError;
use crate::game::{GameState, PlayerId};

/// Static evaluation of a position from `player`'s point of view.
/// Must be cheap and must not search.
pub trait Evaluator {
    fn score<S: GameState>(&self, state: &S, player: PlayerId) -> Result<f64, StateError>;
}

/// Liberty count for a player's current square; unplaced players have none.
pub fn mobility<S: GameState>(state: &S, player: PlayerId) -> Result<usize, StateError> {
    match state.location(player) {
        Some(loc) => Ok(state.liberties(loc)?.len()),
        None => Ok(0),
    }
}

/// Own liberties minus opponent liberties.
#[derive(Clone, Copy, Debug, Default)]
pub struct LibertyDifference;

impl Evaluator for LibertyDifference {
    fn score<S: GameState>(&self, state: &S, player: PlayerId) -> Result<f64, StateError> {
        Ok(mobility(state, player)? as f64 - mobility(state, player.opponent())? as f64)
    }
}

/// Own liberties minus `weight` times opponent liberties. Weights above 1
/// favour boxing the opponent in over keeping our own squares open.
#[derive(Clone, Copy, Debug)]
pub struct WeightedLibertyDifference {
    pub weight: f64,
}

impl Evaluator for WeightedLibertyDifference {
    fn score<S: GameState>(&self, state: &S, player: PlayerId) -> Result<f64, StateError> {
        Ok(mobility(state, player)? as f64 - self.weight * mobility(state, player.opponent())? as f64)
    }
}

/// Evaluator picked from configuration.
#[derive(Clone, Copy, Debug)]
pub enum Heuristic {
    Baseline(LibertyDifference),
    Weighted(WeightedLibertyDifference),
}

impl Heuristic {
    /// Weight 1 is the plain difference; anything larger selects the weighted form.
    pub fn from_weight(weight: f64) -> Self {
        if weight > 1.0 {
            Heuristic::Weighted(WeightedLibertyDifference { weight })
        } else {
            Heuristic::Baseline(LibertyDifference)
        }
    }

    pub fn aggressive() -> Self { Self::from_weight(2.0) }
}

impl Default for Heuristic {
    fn default() -> Self { Heuristic::Baseline(LibertyDifference) }
}

impl Evaluator for Heuristic {
    fn score<S: GameState>(&self, state: &S, player: PlayerId) -> Result<f64, StateError> {
        match self {
            Heuristic::Baseline(e) => e.score(state, player),
            Heuristic::Weighted(e) => e.score(state, player),
        }
    }
}

impl<E: Evaluator> Evaluator for &E {
    fn score<S: GameState>(&self, state: &S, player: PlayerId) -> Result<f64, StateError> { (**self).score(state, player) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tree::{TreeNode, TreeState};

    fn position() -> TreeState {
        let node = TreeNode::default()
            .with_locs(3, 17)
            .with_liberties(3, vec![10, 12, 20])
            .with_liberties(17, vec![0, 2]);
        TreeState::new(node, 6)
    }

    #[test]
    fn from_weight_picks_variant() {
        assert!(matches!(Heuristic::from_weight(1.0), Heuristic::Baseline(_)));
        assert!(matches!(Heuristic::from_weight(2.5), Heuristic::Weighted(w) if w.weight == 2.5));
        assert!(matches!(Heuristic::aggressive(), Heuristic::Weighted(w) if w.weight == 2.0));
    }

    #[test]
    fn both_perspectives() {
        let s = position();
        assert_eq!(LibertyDifference.score(&s, PlayerId::FIRST).expect("score"), 1.0);
        assert_eq!(LibertyDifference.score(&s, PlayerId::SECOND).expect("score"), -1.0);
        let w = WeightedLibertyDifference { weight: 2.0 };
        assert_eq!(w.score(&s, PlayerId::FIRST).expect("score"), 3.0 - 4.0);
        assert_eq!(w.score(&s, PlayerId::SECOND).expect("score"), 2.0 - 6.0);
    }
}
