//! Debate agents: five fixed role perspectives that score a claim.
//!
//! Each role has one scoring function with the uniform signature
//! `(claim, evidence, framework) -> Result<(arguments, raw_confidence)>`.
//! Clamping into `[0.01, 1.0]`, bias application, and the history append
//! happen once in [`DebateAgent::formulate_argument`], not per role.
//!
//! Scoring failures are contained: the agent degrades to a single
//! "Analysis error" argument with confidence 0.1 and never propagates the
//! failure, so a misbehaving agent cannot abort a cycle.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AgentError;
use crate::evidence::{Category, Evidence};
use crate::framework::Framework;


/// Lower clamp bound for agent confidence.
pub const CONFIDENCE_MIN: f64 = 0.01;
/// Upper clamp bound for agent confidence.
pub const CONFIDENCE_MAX: f64 = 1.0;

/// Confidence assigned when a scoring function fails.
const FALLBACK_CONFIDENCE: f64 = 0.1;

/// The five fixed debate roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentRole {
    /// Counts highly reliable sources.
    FactChecker,
    /// Averages reliability of scientific evidence.
    Scientist,
    /// Measures internal consistency of the evidence set.
    Logician,
    /// Measures support among historical evidence.
    Historian,
    /// Defers to the axiomatic framework's verdict.
    AxiomRegulator,
}

impl AgentRole {
    /// Descriptive expertise label for the role.
    pub fn expertise(&self) -> &'static str {
        match self {
            AgentRole::FactChecker => "Evidence Verification",
            AgentRole::Scientist => "Scientific Consensus",
            AgentRole::Logician => "Logical Analysis",
            AgentRole::Historian => "Historical Context",
            AgentRole::AxiomRegulator => "Truth Framework",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentRole::FactChecker => write!(f, "FactChecker"),
            AgentRole::Scientist => write!(f, "Scientist"),
            AgentRole::Logician => write!(f, "Logician"),
            AgentRole::Historian => write!(f, "Historian"),
            AgentRole::AxiomRegulator => write!(f, "AxiomRegulator"),
        }
    }
}

/// One agent instance participating in a debate.
#[derive(Debug, Clone, Serialize)]
pub struct DebateAgent {
    /// The agent's role.
    pub role: AgentRole,
    /// Descriptive expertise label (presentation only).
    pub expertise: &'static str,
    /// Fixed additive bias applied to every raw confidence.
    pub bias_factor: f64,
    /// Arguments from the most recent call, replaced each call.
    pub arguments: Vec<String>,
    /// Clamped confidence from the most recent call.
    pub confidence: f64,
    /// Append-only record of every confidence this instance produced.
    pub confidence_history: Vec<f64>,
}

/// Snapshot of one agent's contribution to one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateRound {
    /// The contributing role.
    pub role: AgentRole,
    /// The arguments it produced.
    pub arguments: Vec<String>,
    /// Its clamped confidence.
    pub confidence: f64,
}

impl DebateAgent {
    /// Create an agent with the given role and bias factor.
    pub fn new(role: AgentRole, bias_factor: f64) -> Self {
        DebateAgent {
            role,
            expertise: role.expertise(),
            bias_factor,
            arguments: Vec::new(),
            confidence: 0.0,
            confidence_history: Vec::new(),
        }
    }

    /// Score the claim, replacing `arguments` and `confidence` and appending
    /// to `confidence_history`.
    ///
    /// Confidence is `clamp(raw + bias_factor, 0.01, 1.0)`. Scoring errors
    /// are contained here and degrade to the fixed fallback.
    pub fn formulate_argument(
        &mut self,
        claim: &str,
        evidence: &[Evidence],
        framework: &Framework,
    ) -> &[String] {
        let (arguments, confidence) = match score_role(self.role, claim, evidence, framework) {
            Ok((arguments, raw)) => (
                arguments,
                (raw + self.bias_factor).clamp(CONFIDENCE_MIN, CONFIDENCE_MAX),
            ),
            Err(e) => {
                warn!(role = %self.role, error = %e, "Agent scoring failed, using fallback");
                (vec!["Analysis error".to_string()], FALLBACK_CONFIDENCE)
            }
        };

        self.arguments = arguments;
        self.confidence = confidence;
        self.confidence_history.push(confidence);
        &self.arguments
    }

    /// Snapshot the agent's latest contribution as a [`DebateRound`].
    pub fn round(&self) -> DebateRound {
        DebateRound {
            role: self.role,
            arguments: self.arguments.clone(),
            confidence: self.confidence,
        }
    }
}

/// Dispatch to the role's scoring function.
fn score_role(
    role: AgentRole,
    claim: &str,
    evidence: &[Evidence],
    framework: &Framework,
) -> Result<(Vec<String>, f64), AgentError> {
    match role {
        AgentRole::FactChecker => score_fact_checker(evidence),
        AgentRole::Scientist => score_scientist(evidence),
        AgentRole::Logician => score_logician(evidence),
        AgentRole::Historian => score_historian(evidence),
        AgentRole::AxiomRegulator => score_axiom_regulator(claim, framework),
    }
}

/// Count sources with reliability above 0.7; cite the first one.
fn score_fact_checker(evidence: &[Evidence]) -> Result<(Vec<String>, f64), AgentError> {
    let verified: Vec<&Evidence> = evidence.iter().filter(|ev| ev.reliability > 0.7).collect();

    let mut argument = format!("Verified {} sources", verified.len());
    if let Some(first) = verified.first() {
        let excerpt: String = first.summary.chars().take(30).collect();
        argument.push_str(&format!(": {} states '{}...'", first.source, excerpt));
    }

    let raw = (verified.len() as f64 * 0.3).min(1.0);
    Ok((vec![argument], raw))
}

/// Mean reliability over the scientific subset.
fn score_scientist(evidence: &[Evidence]) -> Result<(Vec<String>, f64), AgentError> {
    let scientific: Vec<&Evidence> = evidence
        .iter()
        .filter(|ev| ev.category == Category::Scientific)
        .collect();

    if scientific.is_empty() {
        return Ok((vec!["No scientific evidence".to_string()], 0.1));
    }

    let consensus =
        scientific.iter().map(|ev| ev.reliability).sum::<f64>() / scientific.len() as f64;
    let argument = format!(
        "Scientific consensus ({} studies, {:.0}% reliability)",
        scientific.len(),
        consensus * 100.0
    );
    Ok((vec![argument], consensus))
}

/// Consistency against the first record's support direction.
fn score_logician(evidence: &[Evidence]) -> Result<(Vec<String>, f64), AgentError> {
    let Some(first) = evidence.first() else {
        return Ok((vec!["Insufficient data".to_string()], 0.1));
    };

    let contradictions = evidence
        .iter()
        .filter(|ev| ev.supports_claim != first.supports_claim)
        .count();
    let consistency = 1.0 - contradictions as f64 / evidence.len().max(1) as f64;
    let argument = format!("Logical consistency: {:.0}%", consistency * 100.0);
    Ok((vec![argument], consistency))
}

/// Supporting fraction of the historical subset.
fn score_historian(evidence: &[Evidence]) -> Result<(Vec<String>, f64), AgentError> {
    let historical: Vec<&Evidence> = evidence
        .iter()
        .filter(|ev| ev.category == Category::Historical)
        .collect();

    if historical.is_empty() {
        return Ok((vec!["No historical precedent".to_string()], 0.1));
    }

    let support = historical.iter().filter(|ev| ev.supports_claim).count() as f64
        / historical.len() as f64;
    let argument = format!(
        "Historical precedent: {} cases, {:.0}% similar",
        historical.len(),
        support * 100.0
    );
    Ok((vec![argument], support))
}

/// Defer to the framework's literal-equality axiom check.
fn score_axiom_regulator(
    claim: &str,
    framework: &Framework,
) -> Result<(Vec<String>, f64), AgentError> {
    let evaluation = framework.evaluate_statement(claim);

    let mut arguments = vec![format!(
        "Axiomatic Truth: {:.2}% in '{}' framework",
        evaluation.truth_percentage,
        framework.name()
    )];
    if !evaluation.conflicts.is_empty() {
        arguments.push(format!("Conflicts: {}", evaluation.conflicts.join(", ")));
    }

    Ok((arguments, evaluation.truth_percentage / 100.0))
}
