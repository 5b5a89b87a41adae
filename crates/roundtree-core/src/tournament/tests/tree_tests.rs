use crate::tournament::{
    error::TreeError,
    ids::NodeId,
    labels::{MatchLabel, NodeLabel},
    outcome_tree::{OutcomeTree, planned_node_count},
    schedule::Schedule,
};

fn game(raw: &str) -> MatchLabel {
    raw.parse().expect("valid match label")
}

#[test]
fn single_game_builds_root_with_two_leaves() {
    let tree = OutcomeTree::build(&[game("1v2")], 16).expect("tree fits");

    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.leaf_count(), 2);

    let rendered: Vec<String> = tree.labels().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["start", "1v2_W1", "1v2_W2"]);

    let root = tree.root_id();
    assert_eq!(
        tree.children(root),
        (Some(NodeId::from(1)), Some(NodeId::from(2)))
    );
    assert!(tree.is_leaf(NodeId::from(1)));
    assert!(tree.is_leaf(NodeId::from(2)));
}

#[test]
fn each_game_doubles_its_level() {
    let matches = [game("1v4"), game("2v3"), game("1v3")];
    let tree = OutcomeTree::build(&matches, 1024).expect("tree fits");

    assert_eq!(tree.node_count(), 15);
    assert_eq!(planned_node_count(&matches), Some(15));
    assert_eq!(tree.leaf_count(), 8);

    let level_two: Vec<String> = (3..7)
        .map(|i| tree.label(NodeId::from(i)).expect("exists").to_string())
        .collect();
    assert_eq!(level_two, vec!["2v3_W2", "2v3_W3", "2v3_W2", "2v3_W3"]);

    assert_eq!(tree.depth_of(NodeId::from(0)), Ok(0));
    assert_eq!(tree.depth_of(NodeId::from(2)), Ok(1));
    assert_eq!(tree.depth_of(NodeId::from(14)), Ok(3));
}

#[test]
fn repeated_label_reuses_first_position() {
    let matches = [game("1v2"), game("1v2")];
    let tree = OutcomeTree::build(&matches, 16).expect("tree fits");

    // both occurrences sit at position 0, so each adds a single pair
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.leaf_count(), 3);
    assert!(!tree.is_leaf(NodeId::from(1)));
    assert!(tree.is_leaf(NodeId::from(2)));
}

#[test]
fn six_player_schedule_fills_a_perfect_tree() {
    let schedule = Schedule::round_robin(6).expect("valid size");
    let tree = OutcomeTree::build(&schedule.playable(), 1 << 16).expect("tree fits");

    assert_eq!(tree.node_count(), (1 << 16) - 1);
    assert_eq!(tree.leaf_count(), 1 << 15);
    assert_eq!(tree.match_count(), 15);
}

#[test]
fn tree_over_ceiling_fails_fast() {
    let schedule = Schedule::round_robin(8).expect("valid size");
    let err = OutcomeTree::build(&schedule.playable(), 1 << 22).expect_err("too large");

    assert_eq!(
        err,
        TreeError::TooLarge {
            matches: 28,
            max_nodes: 1 << 22
        }
    );
}

#[test]
fn overflowing_node_count_is_reported_as_too_large() {
    let schedule = Schedule::round_robin(20).expect("valid size");
    let playable = schedule.playable();

    assert_eq!(planned_node_count(&playable), None);
    assert!(matches!(
        OutcomeTree::build(&playable, usize::MAX),
        Err(TreeError::TooLarge { .. })
    ));
}

#[test]
fn missing_node_lookup_errors() {
    let tree = OutcomeTree::build(&[game("1v2")], 16).expect("tree fits");

    assert_eq!(
        tree.label(NodeId::from(3)),
        Err(TreeError::MissingNode {
            node_id: NodeId::from(3)
        })
    );
    assert_eq!(tree.children(NodeId::from(1)), (None, None));
    assert_eq!(tree.label(tree.root_id()), Ok(&NodeLabel::Start));
}
