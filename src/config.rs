use crate::error::ConfigError;
use crate::search::alphabeta::SearchLimits;
use crate::search::eval::Heuristic;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Per-agent tuning. Every field has a default, so a JSON config may name
/// only the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Deepest iteration the driver will attempt.
    pub depth_limit: u32,
    /// Weight on opponent liberties; 1 is the plain difference.
    pub evaluator_weight: f64,
    /// Seed for the opening pick. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub movetime_ms: Option<u64>,
    pub max_nodes: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { depth_limit: 5, evaluator_weight: 1.0, seed: None, movetime_ms: None, max_nodes: None }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth_limit < 1 {
            return Err(ConfigError::DepthLimit(self.depth_limit));
        }
        if !self.evaluator_weight.is_finite() || self.evaluator_weight < 1.0 {
            return Err(ConfigError::EvaluatorWeight(self.evaluator_weight));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: AgentConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    pub fn heuristic(&self) -> Heuristic {
        Heuristic::from_weight(self.evaluator_weight)
    }

    /// Limits for a decision starting now; the movetime clock starts here.
    pub fn limits(&self) -> SearchLimits {
        let mut limits = SearchLimits::depth(self.depth_limit);
        if let Some(ms) = self.movetime_ms { limits = limits.with_movetime(Duration::from_millis(ms)); }
        limits.max_nodes = self.max_nodes;
        limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = AgentConfig::from_json_str(r#"{ "depth_limit": 7, "seed": 3 }"#).expect("valid");
        assert_eq!(cfg, AgentConfig { depth_limit: 7, seed: Some(3), ..AgentConfig::default() });
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(AgentConfig::from_json_str(r#"{ "depth_limit": 0 }"#), Err(ConfigError::DepthLimit(0))));
        assert!(matches!(AgentConfig::from_json_str(r#"{ "evaluator_weight": 0.5 }"#), Err(ConfigError::EvaluatorWeight(_))));
        assert!(matches!(AgentConfig::from_json_str("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn hand_built_config_is_checked_too() {
        for weight in [0.5, 0.0, f64::NAN, f64::INFINITY] {
            let cfg = AgentConfig { evaluator_weight: weight, ..AgentConfig::default() };
            assert!(matches!(cfg.validate(), Err(ConfigError::EvaluatorWeight(_))), "weight {}", weight);
        }
        let cfg = AgentConfig { depth_limit: 8, evaluator_weight: 2.0, ..AgentConfig::default() };
        assert!(cfg.validate().is_ok());
        assert!(matches!(cfg.heuristic(), Heuristic::Weighted(_)));
    }

    #[test]
    fn limits_follow_config() {
        let cfg = AgentConfig { max_nodes: Some(100), movetime_ms: Some(50), ..AgentConfig::default() };
        let l = cfg.limits();
        assert_eq!(l.depth_limit, 5);
        assert_eq!(l.max_nodes, Some(100));
        assert!(l.deadline.is_some());
    }
}
