use isobot::game::tree::{TreeNode, TreeState};
use isobot::search::alphabeta::SearchLimits;
use isobot::search::deepening::{NoPublish, SearchUpdate};
use isobot::{Agent, AgentConfig, ConfigError, PlayerId, SearchError};
use pretty_assertions::assert_eq;

// Action 1 keeps four squares but leaves the opponent three; action 2 keeps
// one and leaves one. Plain difference prefers 1, weight 2 prefers 2.
fn mobility_tradeoff() -> TreeState {
    let wide = TreeNode::inner(vec![(0, TreeNode::terminal(0.0))])
        .with_locs(1, 2)
        .with_liberties(1, vec![10, 11, 12, 13])
        .with_liberties(2, vec![20, 21, 22]);
    let tight = TreeNode::inner(vec![(0, TreeNode::terminal(0.0))])
        .with_locs(3, 4)
        .with_liberties(3, vec![30])
        .with_liberties(4, vec![40]);
    TreeState::new(TreeNode::inner(vec![(1, wide), (2, tight)]), 6)
}

#[test]
fn evaluator_weight_changes_choice() {
    let s = mobility_tradeoff();
    let base = AgentConfig { depth_limit: 1, ..AgentConfig::default() };
    let mut plain = Agent::from_config(PlayerId::FIRST, base.clone()).expect("config");
    let mut aggressive = Agent::from_config(PlayerId::FIRST, AgentConfig { evaluator_weight: 2.0, ..base }).expect("config");
    assert_eq!(plain.get_action(&s, &mut NoPublish).expect("move"), 1);
    assert_eq!(aggressive.get_action(&s, &mut NoPublish).expect("move"), 2);
}

#[test]
fn publishes_scores_from_the_installed_evaluator() {
    let s = mobility_tradeoff();
    let cfg = AgentConfig { depth_limit: 1, evaluator_weight: 2.0, ..AgentConfig::default() };
    let mut agent = Agent::from_config(PlayerId::FIRST, cfg).expect("config");
    let mut sink: Vec<SearchUpdate<u32>> = Vec::new();
    agent.get_action(&s, &mut sink).expect("move");
    assert_eq!(sink.len(), 1);
    assert_eq!((sink[0].depth, sink[0].action, sink[0].score), (1, 2, -1.0));
}

#[test]
fn invalid_config_is_rejected() {
    let err = Agent::from_config(PlayerId::FIRST, AgentConfig { depth_limit: 0, ..AgentConfig::default() }).err();
    assert!(matches!(err, Some(ConfigError::DepthLimit(0))));
    let err = Agent::from_config(PlayerId::FIRST, AgentConfig { evaluator_weight: f64::NAN, ..AgentConfig::default() }).err();
    assert!(matches!(err, Some(ConfigError::EvaluatorWeight(_))));
}

#[test]
fn caller_limits_override_config() {
    let s = mobility_tradeoff();
    let mut agent = Agent::from_config(PlayerId::FIRST, AgentConfig::default()).expect("config");
    let err = agent.get_action_with_limits(&s, &SearchLimits::depth(3).with_max_nodes(0), &mut NoPublish).unwrap_err();
    assert!(matches!(err, SearchError::NoCompletedDepth));
}

#[test]
fn non_terminal_dead_end_fails() {
    let s = TreeState::new(TreeNode::default().with_locs(1, 2), 12);
    let mut agent = Agent::from_config(PlayerId::SECOND, AgentConfig::default()).expect("config");
    let err = agent.get_action(&s, &mut NoPublish).unwrap_err();
    assert!(matches!(err, SearchError::NoLegalActions { ply: 12 }));
}

