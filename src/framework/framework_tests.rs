//! Unit tests for framework evaluation, pathways, and the registry.

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_evaluate_matching_single_axiom_is_fully_compatible() {
    let framework = Framework::new("Test", ["Gravity"]);
    let evaluation = framework.evaluate_statement("Gravity");

    assert_eq!(evaluation.truth_percentage, 100.0);
    assert!(evaluation.conflicts.is_empty());
    assert!(evaluation.is_compatible());
}

#[test]
fn test_evaluate_axiom_conflicts_with_every_other_axiom() {
    // Matching one axiom of several still conflicts with the rest; equality
    // is per axiom, not set membership.
    let registry = FrameworkRegistry::new();
    let framework = registry.get("Scientific_Empirical").unwrap();
    let evaluation = framework.evaluate_statement("Gravity");

    assert_eq!(
        evaluation.conflicts,
        vec!["Earth_Orbits_Sun", "Energy_Conservation", "Natural_Selection"]
    );
    assert_eq!(evaluation.truth_percentage, 10.0);
}

#[test]
fn test_evaluate_free_text_conflicts_with_all_axioms() {
    let registry = FrameworkRegistry::new();
    let framework = registry.get("Scientific_Empirical").unwrap();
    let evaluation = framework.evaluate_statement("The earth is flat");

    let axiom_count = framework.axioms().len();
    assert_eq!(evaluation.conflicts.len(), axiom_count);
    assert_eq!(
        evaluation.truth_percentage,
        (100.0 - 30.0 * axiom_count as f64).max(1.05)
    );
    // Four axioms puts the raw score below zero, so the floor applies.
    assert_eq!(evaluation.truth_percentage, 1.05);
}

#[test]
fn test_evaluate_three_axiom_framework_penalty() {
    let registry = FrameworkRegistry::new();
    let framework = registry.get("Historical_Consensus").unwrap();
    let evaluation = framework.evaluate_statement("nonsense");

    assert_eq!(evaluation.conflicts.len(), 3);
    assert_eq!(evaluation.truth_percentage, 10.0);
}

#[test]
fn test_truth_percentage_invariant_bounds() {
    for axioms in [vec!["A"], vec!["A", "B"], vec!["A", "B", "C", "D", "E"]] {
        let framework = Framework::new("Bounds", axioms);
        let evaluation = framework.evaluate_statement("no match");
        assert!(evaluation.truth_percentage >= 1.05);
        assert!(evaluation.truth_percentage <= 100.0);
    }
}

// ============================================================================
// Transformation pathway
// ============================================================================

#[test]
fn test_pathway_without_conflicts_is_fixed_message() {
    let framework = Framework::new("Test", ["Gravity"]);
    let evaluation = framework.evaluate_statement("Gravity");

    assert_eq!(
        framework.transformation_pathway("Gravity", &evaluation),
        "No transformation needed - axiom-compatible"
    );
}

#[test]
fn test_pathway_with_conflicts_interpolates_everything() {
    let registry = FrameworkRegistry::new();
    let framework = registry.get("Ethical_Framework").unwrap();
    let evaluation = framework.evaluate_statement("Lying is fine");
    let pathway = framework.transformation_pathway("Lying is fine", &evaluation);

    assert!(pathway.contains("'Lying is fine'"));
    assert!(pathway.contains("'Ethical_Framework'"));
    for conflict in &evaluation.conflicts {
        assert!(pathway.contains(conflict.as_str()), "missing {}", conflict);
    }
    assert!(pathway.contains("1. Framework Reconciliation"));
    assert!(pathway.contains("4. Axiomogenesis"));
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_contains_builtins() {
    let registry = FrameworkRegistry::new();
    assert_eq!(registry.count(), 3);
    assert_eq!(
        registry.names(),
        vec![
            "Ethical_Framework",
            "Historical_Consensus",
            "Scientific_Empirical"
        ]
    );
}

#[test]
fn test_registry_unknown_name_falls_back_to_default() {
    let registry = FrameworkRegistry::new();
    let framework = registry.get_or_default("No_Such_Framework");
    assert_eq!(framework.name(), DEFAULT_FRAMEWORK);

    assert!(registry.get("No_Such_Framework").is_none());
}

#[test]
fn test_axiom_order_is_preserved() {
    let registry = FrameworkRegistry::new();
    let framework = registry.get("Scientific_Empirical").unwrap();
    assert_eq!(
        framework.axioms(),
        [
            "Earth_Orbits_Sun",
            "Energy_Conservation",
            "Natural_Selection",
            "Gravity"
        ]
    );
}
