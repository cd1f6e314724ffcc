use isobot::game::tree::{TreeNode, TreeState};
use isobot::search::eval::{mobility, Evaluator, Heuristic, LibertyDifference, WeightedLibertyDifference};
use isobot::PlayerId;

#[test]
fn empty_liberties_count_as_zero() {
    // Own square 4 has no entry at all; opponent at 9 can reach X=1 and Y=2.
    let s = TreeState::new(TreeNode::default().with_locs(4, 9).with_liberties(9, vec![1, 2]), 5);
    assert_eq!(LibertyDifference.score(&s, PlayerId::FIRST).expect("score"), -2.0);
    assert_eq!(WeightedLibertyDifference { weight: 2.0 }.score(&s, PlayerId::FIRST).expect("score"), -4.0);

    let explicit = TreeState::new(TreeNode::default().with_locs(4, 9).with_liberties(4, vec![]).with_liberties(9, vec![1, 2]), 5);
    assert_eq!(LibertyDifference.score(&explicit, PlayerId::FIRST).expect("score"), -2.0);
}

#[test]
fn unplaced_player_has_no_mobility() {
    let s = TreeState::new(TreeNode::default().with_liberties(4, vec![1, 2, 3]), 0);
    assert_eq!(mobility(&s, PlayerId::FIRST).expect("mobility"), 0);
    assert_eq!(Heuristic::default().score(&s, PlayerId::SECOND).expect("score"), 0.0);
}

#[test]
fn weight_one_matches_baseline() {
    let s = TreeState::new(
        TreeNode::default().with_locs(10, 30).with_liberties(10, vec![1, 2, 3, 4]).with_liberties(30, vec![5, 6, 7]),
        8,
    );
    for p in [PlayerId::FIRST, PlayerId::SECOND] {
        let base = LibertyDifference.score(&s, p).expect("score");
        assert_eq!(Heuristic::from_weight(1.0).score(&s, p).expect("score"), base);
        assert_eq!(WeightedLibertyDifference { weight: 1.0 }.score(&s, p).expect("score"), base);
    }
}
