use thiserror::Error;

/// Failures raised by a game state. The search never inspects or retries these.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("illegal action {action} at ply {ply}")]
    IllegalAction { action: String, ply: u32 },
    #[error("invalid player id {0} (expected 0 or 1)")]
    InvalidPlayer(u8),
    #[error("game state query failed: {0}")]
    Query(String),
    #[error("malformed game tree: {0}")]
    Malformed(String),
    #[error("failed to decode game tree: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read game tree: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no legal actions from a non-terminal state at ply {ply}")]
    NoLegalActions { ply: u32 },
    #[error(transparent)]
    State(#[from] StateError),
    /// Cutoff fired while `depth` was being searched. The driver absorbs it.
    #[error("search interrupted during depth {depth}")]
    Interrupted { depth: u32 },
    #[error("search cut off before depth 1 completed")]
    NoCompletedDepth,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("depth_limit must be at least 1, got {0}")]
    DepthLimit(u32),
    #[error("evaluator_weight must be a finite number >= 1, got {0}")]
    EvaluatorWeight(f64),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
