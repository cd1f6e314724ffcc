pub mod tree;

use crate::error::StateError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// One of the two sides, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    pub fn new(id: u8) -> Result<Self, StateError> {
        match id {
            0 | 1 => Ok(Self(id)),
            other => Err(StateError::InvalidPlayer(other)),
        }
    }

    pub fn opponent(self) -> Self { Self(1 - self.0) }
    pub fn index(self) -> usize { self.0 as usize }
}

impl TryFrom<u8> for PlayerId {
    type Error = StateError;
    fn try_from(id: u8) -> Result<Self, Self::Error> { Self::new(id) }
}

impl From<PlayerId> for u8 {
    fn from(p: PlayerId) -> u8 { p.0 }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Contract the agent needs from a game position.
///
/// Implementations are immutable values: `result` returns a successor and
/// leaves the receiver untouched, and `ply_count` grows by one along it.
/// Rules, move generation and terminal detection all live behind this trait.
/// Every query except `ply_count` and `location` may fail; the search passes
/// such failures straight back to its caller.
pub trait GameState: Clone {
    type Action: Copy + Eq + Debug;
    type Location: Copy + Eq + Debug;

    /// Plies played so far.
    fn ply_count(&self) -> u32;

    /// Legal actions, in the order the search will visit them.
    fn actions(&self) -> Result<Vec<Self::Action>, StateError>;

    fn result(&self, action: Self::Action) -> Result<Self, StateError>;

    fn terminal_test(&self) -> Result<bool, StateError>;

    /// Terminal payoff from `player`'s perspective. Only meaningful when
    /// `terminal_test` holds.
    fn utility(&self, player: PlayerId) -> Result<f64, StateError>;

    /// Current square of `player`, or `None` before they have been placed.
    fn location(&self, player: PlayerId) -> Option<Self::Location>;

    /// Squares reachable in one move from `loc`.
    fn liberties(&self, loc: Self::Location) -> Result<Vec<Self::Location>, StateError>;
}
