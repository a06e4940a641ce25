//! Cross-cycle aggregation: run N independent debate cycles and map the
//! mean truth percentage to a discrete verdict.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::debate::{CycleOutcome, DebateOrchestrator};
use crate::error::{AppError, AppResult};
use crate::evidence::{analyze_evidence, EvidenceGenerator, EvidenceSummary};
use crate::framework::FrameworkRegistry;


/// Discrete verdict derived from the mean truth percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Mean below 0.05.
    HighlyUnlikely,
    /// Mean in [0.05, 0.25).
    Unlikely,
    /// Mean in [0.25, 0.5).
    PossiblyMisleading,
    /// Mean in [0.5, 0.75).
    LikelyTrue,
    /// Mean at or above 0.75.
    HighlyLikely,
}

impl Verdict {
    /// Map a mean truth percentage to its verdict bucket.
    ///
    /// Ordered thresholds with exclusive upper bounds; boundary values fall
    /// into the next (higher) bucket.
    pub fn from_mean(mean: f64) -> Self {
        if mean < 0.05 {
            Verdict::HighlyUnlikely
        } else if mean < 0.25 {
            Verdict::Unlikely
        } else if mean < 0.5 {
            Verdict::PossiblyMisleading
        } else if mean < 0.75 {
            Verdict::LikelyTrue
        } else {
            Verdict::HighlyLikely
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::HighlyUnlikely => write!(f, "HIGHLY UNLIKELY"),
            Verdict::Unlikely => write!(f, "UNLIKELY"),
            Verdict::PossiblyMisleading => write!(f, "POSSIBLY MISLEADING"),
            Verdict::LikelyTrue => write!(f, "LIKELY TRUE"),
            Verdict::HighlyLikely => write!(f, "HIGHLY LIKELY"),
        }
    }
}

/// The aggregate result of one full analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Unique id of this analysis run.
    pub id: Uuid,
    /// The analyzed claim, verbatim.
    pub claim: String,
    /// Arithmetic mean of the per-cycle truth percentages.
    pub truth_percentage_mean: f64,
    /// Population standard deviation of the per-cycle truth percentages.
    pub truth_percentage_std: f64,
    /// Aggregate counts over the generated evidence.
    pub evidence_summary: EvidenceSummary,
    /// Number of debate cycles run.
    pub cycles: usize,
    /// Number of evidence pages generated.
    pub pages: usize,
    /// Name of the framework consulted.
    pub framework: String,
    /// Discrete verdict for the mean.
    pub verdict: Verdict,
    /// Remediation narrative for the claim under the framework.
    pub transformation_pathway: String,
    /// When the analysis started.
    pub timestamp: DateTime<Utc>,
    /// Wall-clock duration of the analysis.
    pub execution_time_ms: u64,
}

/// Runs complete analyses: evidence synthesis, N debate cycles, aggregation.
pub struct TruthAnalyzer {
    generator: EvidenceGenerator,
    orchestrator: DebateOrchestrator,
    registry: FrameworkRegistry,
    pages: usize,
    cycles: usize,
}

impl TruthAnalyzer {
    /// Create an analyzer; `pages` and `cycles` must be positive.
    pub fn new(pages: usize, cycles: usize) -> AppResult<Self> {
        if pages == 0 {
            return Err(AppError::config("page count must be positive"));
        }
        if cycles == 0 {
            return Err(AppError::config("cycle count must be positive"));
        }
        Ok(TruthAnalyzer {
            generator: EvidenceGenerator::new(),
            orchestrator: DebateOrchestrator::new(),
            registry: FrameworkRegistry::new(),
            pages,
            cycles,
        })
    }

    /// Run a full analysis of `claim` under the named framework.
    ///
    /// Unknown framework names fall back to the default. All randomness is
    /// drawn from `rng`, so a seeded generator makes the run reproducible.
    pub fn analyze<R: Rng>(
        &self,
        claim: &str,
        framework_name: &str,
        rng: &mut R,
    ) -> AppResult<AnalysisResult> {
        self.analyze_detailed(claim, framework_name, rng)
            .map(|(result, _)| result)
    }

    /// Like [`analyze`](Self::analyze), but also returns every per-cycle
    /// outcome (debate rounds and agent snapshots) for downstream
    /// visualization.
    pub fn analyze_detailed<R: Rng>(
        &self,
        claim: &str,
        framework_name: &str,
        rng: &mut R,
    ) -> AppResult<(AnalysisResult, Vec<CycleOutcome>)> {
        let start = Instant::now();
        let timestamp = Utc::now();

        let framework = self.registry.get_or_default(framework_name);
        info!(
            claim = %claim,
            framework = %framework.name(),
            pages = self.pages,
            cycles = self.cycles,
            "Starting truth analysis"
        );

        // Fresh evidence per analysis; discarded afterwards, never cached.
        let evidence = self.generator.search_claim(claim, self.pages, rng);
        let evidence_summary = analyze_evidence(&evidence);
        debug!(
            total = evidence_summary.total,
            support = evidence_summary.support,
            oppose = evidence_summary.oppose,
            "Evidence synthesized"
        );

        let mut outcomes = Vec::with_capacity(self.cycles);
        for cycle in 0..self.cycles {
            let outcome = self
                .orchestrator
                .conduct_debate(claim, &evidence, framework, rng);
            debug!(cycle = cycle, truth = outcome.truth_percentage, "Cycle complete");
            outcomes.push(outcome);
        }

        let truths: Vec<f64> = outcomes.iter().map(|o| o.truth_percentage).collect();
        let truth_percentage_mean = mean(&truths);
        let truth_percentage_std = population_std(&truths, truth_percentage_mean);
        let verdict = Verdict::from_mean(truth_percentage_mean);

        let evaluation = framework.evaluate_statement(claim);
        let transformation_pathway = framework.transformation_pathway(claim, &evaluation);

        let result = AnalysisResult {
            id: Uuid::new_v4(),
            claim: claim.to_string(),
            truth_percentage_mean,
            truth_percentage_std,
            evidence_summary,
            cycles: self.cycles,
            pages: self.pages,
            framework: framework.name().to_string(),
            verdict,
            transformation_pathway,
            timestamp,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            verdict = %result.verdict,
            mean = result.truth_percentage_mean,
            std = result.truth_percentage_std,
            "Analysis complete"
        );

        Ok((result, outcomes))
    }
}

/// Arithmetic mean; 0.0 for an empty slice.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around the given mean.
fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
