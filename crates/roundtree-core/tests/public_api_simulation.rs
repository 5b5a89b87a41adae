use roundtree_core::{
    Player, ScoreTally, SimulationConfig, SimulationError, Tournament, simulate,
};

#[test]
fn public_two_even_players_split_evenly() {
    let players = vec![Player::new("a", 1500.0), Player::new("b", 1500.0)];

    let report = simulate(&players, 2, &SimulationConfig::default()).expect("run should succeed");

    assert_eq!(report.schedule.flattened().len(), 1);
    assert_eq!(report.node_count, 3);
    assert_eq!(report.raw_path_count(), 2);
    assert_eq!(report.distinct_tally_count(), 2);
    assert_eq!(
        report.distribution.probability_of(&ScoreTally::from(vec![1, 0])),
        Some(0.5)
    );
    assert_eq!(
        report.distribution.probability_of(&ScoreTally::from(vec![0, 1])),
        Some(0.5)
    );
}

#[test]
fn public_rating_gap_favours_stronger_player() {
    let players = vec![Player::new("a", 1500.0), Player::new("b", 1900.0)];

    let report = simulate(&players, 2, &SimulationConfig::default()).expect("run should succeed");
    let underdog = report
        .distribution
        .probability_of(&ScoreTally::from(vec![1, 0]))
        .expect("tally present");

    assert!((underdog - 0.0909090909).abs() < 1e-9);
    assert_eq!(report.distribution.sorted_by_probability()[0].tally.wins(), &[0, 1]);
}

#[test]
fn public_bye_never_reaches_tallies() {
    let players = vec![
        Player::new("a", 1400.0),
        Player::new("b", 1500.0),
        Player::new("c", 1600.0),
    ];

    let report = simulate(&players, 3, &SimulationConfig::default()).expect("run should succeed");

    assert!(report.schedule.has_bye());
    assert!(report.schedule.playable().iter().all(|g| !g.involves_bye()));
    assert!(
        report
            .distribution
            .entries()
            .iter()
            .all(|e| e.tally.player_count() == 3 && e.tally.total() == 3)
    );
    assert!((report.distribution.total_probability() - 1.0).abs() < 1e-9);
}

#[test]
fn public_mismatch_is_an_error_not_a_panic() {
    let mut tournament = Tournament::new(4);
    tournament.add_player(Player::new("solo", 1500.0));

    let err = tournament
        .simulate(&SimulationConfig::default())
        .expect_err("mismatch should fail");

    assert!(matches!(
        err,
        SimulationError::PlayerCountMismatch {
            expected: 4,
            actual: 1
        }
    ));
    assert!(err.to_string().contains("players added: 1"));
}
