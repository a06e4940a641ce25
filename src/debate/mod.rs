//! Debate orchestration: one cycle of the five-agent debate.
//!
//! A cycle builds a fresh agent roster, collects each agent's round in a
//! fixed order, and blends an evidence-only certainty estimate with the
//! framework's verdict into one truth percentage.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::agents::{AgentRole, DebateAgent, DebateRound};
use crate::evidence::Evidence;
use crate::framework::Framework;


/// Fixed positional weights over the agent roster
/// (FactChecker, Scientist, Logician, Historian, AxiomRegulator).
pub const AGENT_WEIGHTS: [f64; 5] = [0.30, 0.25, 0.20, 0.15, 0.10];

/// Lower clamp bound for certainty and truth percentages.
const TRUTH_MIN: f64 = 0.01;
/// Upper clamp bound for certainty and truth percentages.
const TRUTH_MAX: f64 = 0.99;

/// The outcome of one independent debate cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleOutcome {
    /// Blended truth percentage, clamped to `[0.01, 0.99]`.
    pub truth_percentage: f64,
    /// One round per agent, in roster order.
    pub rounds: Vec<DebateRound>,
    /// The five agent instances, confidence history intact.
    pub agents: Vec<DebateAgent>,
    /// Positional-weight blend of agent confidences. Surfaced for
    /// visualization collaborators; not part of the truth blend.
    pub weighted_confidence: f64,
}

/// Runs single debate cycles.
pub struct DebateOrchestrator;

impl DebateOrchestrator {
    /// Create an orchestrator.
    pub fn new() -> Self {
        DebateOrchestrator
    }

    /// The fixed ordered agent roster with its fixed bias factors.
    pub fn roster() -> Vec<DebateAgent> {
        vec![
            DebateAgent::new(AgentRole::FactChecker, 0.0),
            DebateAgent::new(AgentRole::Scientist, -0.1),
            DebateAgent::new(AgentRole::Logician, 0.0),
            DebateAgent::new(AgentRole::Historian, 0.0),
            DebateAgent::new(AgentRole::AxiomRegulator, 0.0),
        ]
    }

    /// Run one full debate cycle over the given evidence and framework.
    pub fn conduct_debate<R: Rng>(
        &self,
        claim: &str,
        evidence: &[Evidence],
        framework: &Framework,
        rng: &mut R,
    ) -> CycleOutcome {
        let mut agents = Self::roster();

        let mut rounds = Vec::with_capacity(agents.len());
        for agent in &mut agents {
            agent.formulate_argument(claim, evidence, framework);
            rounds.push(agent.round());
        }

        let weighted_confidence = agents
            .iter()
            .zip(AGENT_WEIGHTS)
            .map(|(agent, weight)| agent.confidence * weight)
            .sum();

        let certainty = calculate_certainty(evidence, rng);
        let framework_truth = framework.evaluate_statement(claim).truth_percentage;
        let truth_percentage =
            (0.7 * certainty + 0.3 * (framework_truth / 100.0)).clamp(TRUTH_MIN, TRUTH_MAX);

        debug!(
            claim = %claim,
            certainty = certainty,
            framework_truth = framework_truth,
            truth = truth_percentage,
            "Debate cycle complete"
        );

        CycleOutcome {
            truth_percentage,
            rounds,
            agents,
            weighted_confidence,
        }
    }
}

impl Default for DebateOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evidence-only truth estimate: quality/consensus/consistency blend with a
/// small multiplicative jitter, clamped to `[0.01, 0.99]`.
///
/// Empty evidence yields a uniform draw from `[0.3, 0.6]`.
pub fn calculate_certainty<R: Rng>(evidence: &[Evidence], rng: &mut R) -> f64 {
    let Some(first) = evidence.first() else {
        return rng.gen_range(0.3..0.6);
    };

    let count = evidence.len() as f64;
    let quality = evidence.iter().map(|ev| ev.reliability).sum::<f64>() / count;
    let consensus = evidence.iter().filter(|ev| ev.supports_claim).count() as f64 / count;
    let contradictions = evidence
        .iter()
        .filter(|ev| ev.supports_claim != first.supports_claim)
        .count() as f64;
    let consistency = 1.0 - contradictions / count;

    let certainty = 0.6 * quality + 0.3 * consensus + 0.1 * consistency;
    (certainty * rng.gen_range(0.95..0.99)).clamp(TRUTH_MIN, TRUTH_MAX)
}
