use super::*;

fn attrs(names: &[&str]) -> Vec<Attribute> {
    names.iter().map(|n| Attribute::new(*n)).collect()
}

fn rule(tail: &[&str], head: &[&str]) -> Rule {
    Rule::new(attrs(tail), attrs(head)).unwrap()
}

/// b, c -> a and c -> b, with d isolated
fn sample_graph() -> DependencyHypergraph {
    DependencyHypergraph::from_rules(
        attrs(&["d"]),
        vec![rule(&["b", "c"], &["a"]), rule(&["c"], &["b"])],
    )
}

#[test]
fn test_universe_includes_rule_members() {
    let graph = sample_graph();
    let names: Vec<&str> = graph.all_attributes().iter().map(|a| a.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
    assert!(graph.contains("c"));
    assert!(!graph.contains("e"));
}

#[test]
fn test_leaves_are_never_heads() {
    let graph = sample_graph();
    let leaves: Vec<&str> = graph.leaves().iter().map(|a| a.as_str()).collect();
    assert_eq!(leaves, vec!["c", "d"]);
    assert!(graph.is_leaf("d"));
    assert!(!graph.is_leaf("a"));
}

#[test]
fn test_head_and_tail_indices() {
    let graph = sample_graph();

    let heads_a: Vec<RuleId> = graph.rules_with_head("a").map(|(id, _)| id).collect();
    assert_eq!(heads_a, vec![RuleId(0)]);

    let tails_c: Vec<RuleId> = graph.rules_with_tail("c").map(|(id, _)| id).collect();
    assert_eq!(tails_c, vec![RuleId(0), RuleId(1)]);

    assert_eq!(graph.rules_with_head("c").count(), 0);
    assert_eq!(graph.rules_with_tail("missing").count(), 0);
}

#[test]
fn test_indices_agree_with_rules() {
    let graph = sample_graph();
    for attribute in graph.all_attributes() {
        for (id, rule) in graph.rules_with_head(attribute) {
            assert!(rule.head_contains(attribute));
            assert_eq!(graph.rule(id), Some(rule));
        }
        for (_, rule) in graph.rules_with_tail(attribute) {
            assert!(rule.tail_contains(attribute));
        }
    }
}

#[test]
fn test_rules_with_ids_in_insertion_order() {
    let graph = sample_graph();
    let ids: Vec<usize> = graph.rules_with_ids().map(|(id, _)| id.index()).collect();
    assert_eq!(ids, vec![0, 1]);
    let (id, rule) = graph.rules_with_ids().nth(1).unwrap();
    assert_eq!(id.to_string(), "r1");
    assert_eq!(rule.to_string(), "{c} -> {b}");
}

#[test]
fn test_require_unknown_attribute() {
    let graph = sample_graph();
    assert_eq!(graph.require("a").unwrap(), "a");
    let err = graph.require("salary").unwrap_err();
    assert!(matches!(err, GraphError::AttributeNotFound { ref attribute } if attribute == "salary"));
}

#[test]
fn test_empty_graph() {
    let graph = DependencyHypergraph::from_rules(Vec::new(), Vec::new());
    assert!(graph.rules().is_empty());
    assert!(graph.leaves().is_empty());
    assert!(graph.rule(RuleId(0)).is_none());
}

#[test]
fn test_to_dot() {
    let graph = sample_graph();
    let dot = graph.to_dot();
    assert!(dot.starts_with("digraph dependencies {"));
    assert!(dot.contains("\"d\" [shape=doublecircle];"));
    assert!(dot.contains("\"r0\" [shape=point];"));
    assert!(dot.contains("\"b\" -> \"r0\" [arrowhead=none];"));
    assert!(dot.contains("\"r0\" -> \"a\";"));
    assert!(dot.trim_end().ends_with('}'));
}
