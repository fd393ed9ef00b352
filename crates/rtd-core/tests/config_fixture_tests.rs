//! Loading the bundled constraint-set fixtures

use rtd_core::{Config, DepthMode, Operator, RecordKey, TupleVar};
use std::path::{Path, PathBuf};

fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_adult_fixture() {
    let config = Config::load_from_dir(&fixture_dir("adult")).unwrap();

    assert_eq!(config.name, "adult_income");
    assert_eq!(config.dataset.as_deref(), Some("adult"));
    assert_eq!(config.threshold, Some(0.8));
    assert_eq!(config.enumeration.max_depth, 3);
    assert_eq!(config.enumeration.depth_mode, DepthMode::Enforced);

    let target = config.target.as_ref().unwrap();
    assert_eq!(target.key, Some(RecordKey::Integer(2)));
    assert_eq!(target.cell().to_string(), "t1.education");
}

#[test]
fn test_adult_constraints_parse_in_both_predicate_forms() {
    let config = Config::load_from_dir(&fixture_dir("adult")).unwrap();
    let constraints = config.denial_constraints().unwrap();
    assert_eq!(constraints.len(), 8);

    // sequence form
    let first = &constraints[0];
    assert_eq!(first.predicates().len(), 2);
    assert_eq!(first.predicates()[0].op, Operator::Ne);
    assert_eq!(first.to_string(), "not(t1.education != t2.education and t1.education_num == t2.education_num)");

    // whitespace-separated string form
    let wide = &constraints[6];
    assert_eq!(wide.predicates().len(), 5);
    let local: Vec<&str> = wide.attributes_of(&TupleVar::primary()).iter().map(|a| a.as_str()).collect();
    assert_eq!(local, vec!["age", "fnlwgt", "relationship", "sex", "native_country"]);

    assert!(constraints.iter().all(|c| c.spans_two_tuples()));
}

#[test]
fn test_fixture_survives_a_round_trip_through_disk() {
    let loaded = Config::load_from_dir(&fixture_dir("adult")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rtd.yaml");
    std::fs::write(&path, serde_yaml::to_string(&loaded).unwrap()).unwrap();

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(reloaded.name, loaded.name);
    assert_eq!(reloaded.target, loaded.target);
    assert_eq!(
        reloaded.denial_constraints().unwrap(),
        loaded.denial_constraints().unwrap()
    );
}
