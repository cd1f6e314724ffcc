pub mod alphabeta;
pub mod deepening;
pub mod eval;
pub mod opening;
