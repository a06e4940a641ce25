//! Axiomatic frameworks: rule-based compatibility checks for statements.
//!
//! A framework is a named, fixed, ordered list of axiom identifiers.
//! Evaluation is **literal string matching**: a conflict is any axiom whose
//! identifier is not exactly equal to the statement. Callers must pass axiom
//! identifiers, never free-text claims, when compatibility matters — an
//! arbitrary claim sentence will conflict with every axiom.
//!
//! Evaluation is pure: it returns an [`Evaluation`] value and the framework
//! itself carries no mutable state, so one instance is safely shared across
//! debate cycles.

use serde::{Deserialize, Serialize};

mod builtins;

pub use builtins::{FrameworkRegistry, DEFAULT_FRAMEWORK};

#[cfg(test)]
#[path = "framework_tests.rs"]
mod framework_tests;

/// Truth-percentage penalty per conflicting axiom.
const CONFLICT_PENALTY: f64 = 30.0;
/// Floor for the truth percentage of a conflicted statement.
const TRUTH_FLOOR: f64 = 1.05;

/// A named framework with a fixed ordered axiom list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    name: String,
    axioms: Vec<String>,
}

/// The outcome of evaluating one statement against a framework.
///
/// Invariant: `truth_percentage` is in `[1.05, 100.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// 100.0 when axiom-compatible, else `max(1.05, 100 − 30 × conflicts)`.
    pub truth_percentage: f64,
    /// Every axiom the statement does not literally equal, in axiom order.
    pub conflicts: Vec<String>,
}

impl Evaluation {
    /// Whether the statement matched every axiom (no conflicts).
    pub fn is_compatible(&self) -> bool {
        self.conflicts.is_empty()
    }
}

impl Framework {
    /// Create a framework; the axiom list is fixed from here on.
    pub fn new<I, S>(name: impl Into<String>, axioms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Framework {
            name: name.into(),
            axioms: axioms.into_iter().map(Into::into).collect(),
        }
    }

    /// The framework's name identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed ordered axiom list.
    pub fn axioms(&self) -> &[String] {
        &self.axioms
    }

    /// Evaluate a statement against the axiom list.
    ///
    /// Comparison is literal string equality per axiom. No conflicts yields
    /// 100.0; otherwise the percentage drops 30 points per conflict, floored
    /// at 1.05.
    pub fn evaluate_statement(&self, statement: &str) -> Evaluation {
        let conflicts: Vec<String> = self
            .axioms
            .iter()
            .filter(|axiom| axiom.as_str() != statement)
            .cloned()
            .collect();

        let truth_percentage = if conflicts.is_empty() {
            100.0
        } else {
            (100.0 - CONFLICT_PENALTY * conflicts.len() as f64).max(TRUTH_FLOOR)
        };

        Evaluation {
            truth_percentage,
            conflicts,
        }
    }

    /// Render the remediation narrative for an evaluated statement.
    ///
    /// Takes the [`Evaluation`] explicitly so there is no hidden dependency
    /// on a prior call; pass the evaluation produced for the same statement.
    pub fn transformation_pathway(&self, statement: &str, evaluation: &Evaluation) -> String {
        if evaluation.conflicts.is_empty() {
            return "No transformation needed - axiom-compatible".to_string();
        }

        [
            format!("To integrate '{}' into '{}' framework:", statement, self.name),
            "1. Framework Reconciliation: Resolve conflicts between:".to_string(),
            format!("   - Proposed: {}", statement),
            format!("   - Existing: {}", evaluation.conflicts.join(", ")),
            "2. Constructual Diplomacy: Re-evaluate framework core principles".to_string(),
            "3. Multi-Perspective Integration: Create bridging axioms".to_string(),
            "4. Axiomogenesis: Reweave internal reality to integrate new truth".to_string(),
        ]
        .join("\n")
    }
}
