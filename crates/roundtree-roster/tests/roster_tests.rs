use roundtree_core::{PlayerId, SimulationConfig, SimulationError};
use roundtree_roster::{RosterBuilder, RosterError, RosterSpec, compile_yaml, load_yaml, save_yaml};

const VALID_ROSTER_YAML: &str = r#"
version: 1
players:
  - name: Adam
    rating: 1493
  - name: Bartek
    rating: 1601
  - name: Cledzban
"#;

#[test]
fn yaml_parse_and_compile_success() {
    let spec: RosterSpec = serde_yaml::from_str(VALID_ROSTER_YAML).expect("valid yaml");
    let roster = spec.compile().expect("compile should succeed");

    assert_eq!(roster.size(), 3);
    assert_eq!(roster.players().len(), 3);
    assert_eq!(roster.players()[2].rating, 1500.0);
    assert_eq!(roster.id_of("Bartek"), Some(PlayerId::from(2)));
    assert_eq!(roster.name_of(PlayerId::from(1)), Some("Adam"));
    assert_eq!(roster.name_of(PlayerId::BYE), None);
}

#[test]
fn validation_fails_for_duplicate_names() {
    let yaml = r#"
players:
  - name: Adam
    rating: 1493
  - name: Adam
    rating: 1601
"#;

    let spec: RosterSpec = serde_yaml::from_str(yaml).expect("valid syntax");
    let err = spec.compile().expect_err("compile should fail");

    assert!(matches!(err, RosterError::DuplicateName { .. }));
}

#[test]
fn validation_fails_for_empty_name_and_tiny_size() {
    let mut builder = RosterBuilder::new();
    builder.add_player("Adam", 1500.0).add_player("  ", 1500.0);
    let err = builder.compile().expect_err("empty name");
    assert!(matches!(err, RosterError::EmptyName { index: 2 }));

    let mut builder = RosterBuilder::new();
    builder.add_player("Adam", 1500.0);
    let err = builder.compile().expect_err("single player");
    assert!(matches!(err, RosterError::InvalidSize { size: 1 }));
}

#[test]
fn builder_rejects_non_finite_rating() {
    let mut builder = RosterBuilder::new();
    builder
        .add_player("Adam", 1500.0)
        .add_player("Bartek", f64::INFINITY);

    let err = builder.build_spec().expect_err("infinite rating");
    assert!(matches!(err, RosterError::InvalidRating { .. }));
}

#[test]
fn size_mismatch_surfaces_from_simulation() {
    let mut builder = RosterBuilder::new();
    builder
        .set_size(4)
        .add_player("Adam", 1493.0)
        .add_player("Bartek", 1601.0)
        .add_player("Cledzban", 966.0);
    let roster = builder.compile().expect("roster itself is valid");

    let err = roster
        .simulate(&SimulationConfig::default())
        .expect_err("three players in a four player tournament");

    assert_eq!(
        err,
        SimulationError::PlayerCountMismatch {
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn roster_simulation_runs_end_to_end() {
    let mut builder = RosterBuilder::new();
    builder
        .add_player("Adam", 1500.0)
        .add_player("Bartek", 1900.0);
    let roster = builder.compile().expect("compile should succeed");

    let report = roster
        .simulate(&SimulationConfig::default())
        .expect("simulation should succeed");

    assert_eq!(report.raw_path_count(), 2);
    assert!((report.distribution.total_probability() - 1.0).abs() < 1e-9);
}

#[test]
fn yaml_save_and_load_round_trip_on_disk() {
    let mut builder = RosterBuilder::new();
    builder
        .add_player("Dagmara", 1558.0)
        .add_player("Edwin", 1249.0);
    let spec = builder.build_spec().expect("valid spec");

    let path = std::env::temp_dir().join(format!("roundtree-roster-{}.yaml", std::process::id()));
    save_yaml(&path, &spec).expect("write should succeed");
    let loaded = load_yaml(&path).expect("read should succeed");
    let roster = compile_yaml(&path).expect("compile should succeed");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.players.len(), 2);
    assert_eq!(loaded.players[1].name, "Edwin");
    assert_eq!(roster.id_of("Edwin"), Some(PlayerId::from(2)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_yaml("definitely/not/here.yaml").expect_err("missing file");
    assert!(matches!(err, RosterError::Io(_)));
}

#[test]
fn loading_invalid_yaml_from_disk_fails_validation() {
    let yaml = r#"
players:
  - name: Adam
    rating: 1493
  - name: Adam
    rating: 1601
"#;
    let path = std::env::temp_dir().join(format!(
        "roundtree-roster-duplicate-{}.yaml",
        std::process::id()
    ));
    std::fs::write(&path, yaml).expect("write should succeed");
    let err = load_yaml(&path).expect_err("duplicate names");
    let _ = std::fs::remove_file(&path);

    assert!(matches!(err, RosterError::DuplicateName { ref name } if name == "Adam"));
}

#[test]
fn saving_invalid_spec_writes_nothing() {
    let spec: RosterSpec = serde_yaml::from_str(
        r#"
players:
  - name: ""
  - name: Bartek
"#,
    )
    .expect("valid yaml");
    let path = std::env::temp_dir().join(format!(
        "roundtree-roster-empty-name-{}.yaml",
        std::process::id()
    ));

    let err = save_yaml(&path, &spec).expect_err("empty name");

    assert!(matches!(err, RosterError::EmptyName { .. }));
    assert!(!path.exists());
}
