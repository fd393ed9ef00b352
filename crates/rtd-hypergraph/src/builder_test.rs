use super::*;
use rtd_core::parse_triples;

fn names(attrs: &[rtd_core::Attribute]) -> Vec<&str> {
    attrs.iter().map(|a| a.as_str()).collect()
}

fn cell_names(cells: &[Cell]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_two_attribute_constraint_yields_two_rules() {
    let constraints = parse_triples(&[&[
        ("t1.education", "==", "t2.education"),
        ("t1.education_num", "!=", "t2.education_num"),
    ]])
    .unwrap();
    let graph = HypergraphBuilder::new(constraints).build().unwrap();

    assert_eq!(graph.rules().len(), 2);
    assert_eq!(names(graph.rules()[0].tail()), vec!["education_num"]);
    assert_eq!(names(graph.rules()[0].head()), vec!["education"]);
    assert_eq!(names(graph.rules()[1].tail()), vec!["education"]);
    assert_eq!(names(graph.rules()[1].head()), vec!["education_num"]);
    assert!(graph.leaves().is_empty());
}

#[test]
fn test_three_attribute_constraint_yields_permutation_rules() {
    let constraints = parse_triples(&[&[
        ("t1.a", "==", "t2.a"),
        ("t1.b", "==", "t2.b"),
        ("t1.c", "!=", "t2.c"),
    ]])
    .unwrap();
    let graph = HypergraphBuilder::new(constraints).build().unwrap();

    let rendered: Vec<String> = graph.rules().iter().map(|r| r.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["{b, c} -> {a}", "{a, c} -> {b}", "{a, b} -> {c}"]
    );
}

#[test]
fn test_single_local_attribute_skipped_but_kept_in_universe() {
    let constraints = parse_triples(&[
        &[("t1.age", "<", "t2.age")],
        &[("t1.sex", "!=", "t2.sex"), ("t1.race", "==", "t2.race")],
    ])
    .unwrap();
    let graph = HypergraphBuilder::new(constraints).build().unwrap();

    assert_eq!(graph.rules().len(), 2);
    assert!(graph.contains("age"));
    assert!(graph.is_leaf("age"));
    assert!(!graph.is_leaf("sex"));
}

#[test]
fn test_only_primary_tuple_var_contributes_rules() {
    // t2.fnlwgt is only referenced on the second tuple
    let constraints = parse_triples(&[&[
        ("t1.age", "==", "t2.age"),
        ("t1.sex", "==", "t2.fnlwgt"),
    ]])
    .unwrap();
    let graph = HypergraphBuilder::new(constraints).build().unwrap();

    assert!(!graph.contains("fnlwgt"));
    assert_eq!(graph.all_attributes().len(), 2);
}

/// Rules as sorted `(tail, head)` name pairs
fn rule_set(graph: &DependencyHypergraph) -> Vec<(Vec<String>, Vec<String>)> {
    let mut rules: Vec<(Vec<String>, Vec<String>)> = graph
        .rules()
        .iter()
        .map(|rule| {
            let mut tail: Vec<String> = rule.tail().iter().map(|a| a.to_string()).collect();
            tail.sort();
            let head = rule.head().iter().map(|a| a.to_string()).collect();
            (tail, head)
        })
        .collect();
    rules.sort();
    rules
}

#[test]
fn test_rules_ignore_predicate_order() {
    let forward = parse_triples(&[&[("t1.a", "==", "t2.a"), ("t2.b", "==", "t2.c")]]).unwrap();
    let reversed = parse_triples(&[&[("t2.b", "==", "t2.c"), ("t1.a", "==", "t2.a")]]).unwrap();

    let forward = HypergraphBuilder::new(forward).build().unwrap();
    let reversed = HypergraphBuilder::new(reversed).build().unwrap();

    assert!(forward.rules().is_empty());
    assert_eq!(rule_set(&forward), rule_set(&reversed));
    assert_eq!(forward.all_attributes(), reversed.all_attributes());
    assert_eq!(forward.all_attributes().len(), 1);
}

#[test]
fn test_rules_ignore_predicate_order_with_several_attributes() {
    let forward = parse_triples(&[&[
        ("t1.age", "<", "t2.age"),
        ("t1.sex", "==", "t2.sex"),
        ("t1.race", "==", "t1.sex"),
    ]])
    .unwrap();
    let reversed = parse_triples(&[&[
        ("t1.race", "==", "t1.sex"),
        ("t1.sex", "==", "t2.sex"),
        ("t1.age", "<", "t2.age"),
    ]])
    .unwrap();

    let forward = HypergraphBuilder::new(forward).build().unwrap();
    let reversed = HypergraphBuilder::new(reversed).build().unwrap();

    assert_eq!(forward.rules().len(), 3);
    assert_eq!(rule_set(&forward), rule_set(&reversed));
}

#[test]
fn test_constraint_without_primary_tuple_var_emits_nothing() {
    let constraints = parse_triples(&[&[("t2.x", "==", "t2.y")]]).unwrap();
    let graph = HypergraphBuilder::new(constraints).build().unwrap();

    assert!(graph.rules().is_empty());
    assert!(graph.all_attributes().is_empty());
}

#[test]
fn test_with_tuple_var_selects_other_tuple() {
    let constraints = parse_triples(&[&[("t2.x", "==", "t2.y")]]).unwrap();
    let builder = HypergraphBuilder::new(constraints).with_tuple_var(TupleVar::new("t2"));
    assert_eq!(builder.tuple_var(), "t2");

    let graph = builder.build().unwrap();
    assert_eq!(graph.rules().len(), 2);
    assert!(graph.contains("x"));
    assert!(graph.contains("y"));
}

#[test]
fn test_partition_boundary_and_internal() {
    let constraints = parse_triples(&[
        &[("t1.age", "==", "t2.age"), ("t1.sex", "!=", "t2.sex")],
        &[("t1.capital_gain", ">", "t1.capital_loss")],
    ])
    .unwrap();
    let partition = HypergraphBuilder::new(constraints).partition();

    assert_eq!(partition.boundary_edges().len(), 1);
    assert_eq!(
        cell_names(&partition.boundary_edges()[0]),
        vec!["t1.age", "t2.age", "t1.sex", "t2.sex"]
    );
    assert_eq!(partition.internal_edges().len(), 1);
    assert_eq!(
        cell_names(&partition.internal_edges()[0]),
        vec!["t1.capital_gain", "t1.capital_loss"]
    );

    assert_eq!(partition.boundary_cells().len(), 4);
    assert!(partition.is_boundary(&Cell::parse("t2.sex").unwrap()));
    assert!(!partition.is_boundary(&Cell::parse("t1.capital_gain").unwrap()));
    assert_eq!(partition.cells().len(), 6);
    assert!(partition.contains(&Cell::parse("t1.capital_loss").unwrap()));
}

#[test]
fn test_builder_from_config() {
    let yaml = r#"
name: from_config
constraints:
  - - [t1.capital_gain, ">", t2.capital_gain]
    - [t1.capital_loss, ">", t2.capital_loss]
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    let builder = HypergraphBuilder::from_config(&config).unwrap();
    assert_eq!(builder.constraints().len(), 1);
    assert_eq!(builder.tuple_var(), "t1");
    assert_eq!(builder.build().unwrap().rules().len(), 2);
}

#[test]
fn test_builder_from_config_uses_target_tuple_var() {
    let yaml = r#"
name: from_config
target:
  attribute: email
  tuple_var: s
constraints:
  - - [s.email, "==", r.email]
    - [s.phone, "!=", r.phone]
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    let builder = HypergraphBuilder::from_config(&config).unwrap();
    assert_eq!(builder.tuple_var(), "s");

    let graph = builder.build().unwrap();
    assert_eq!(graph.rules().len(), 2);
    assert!(graph.contains("email"));
    assert!(graph.contains("phone"));
}

#[test]
fn test_builder_from_config_propagates_malformed_constraint() {
    let yaml = r#"
name: broken
constraints:
  - - [capital_gain, ">", t2.capital_gain]
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    let err = HypergraphBuilder::from_config(&config).unwrap_err();
    assert!(matches!(
        err,
        crate::GraphError::Core(rtd_core::CoreError::MalformedConstraint { .. })
    ));
}
