//! # Veridict
//!
//! A multi-perspective debate simulator that produces a probabilistic truth
//! score for a natural-language claim. Synthetic evidence is generated for
//! the claim, five role-specific agents score it, a rule-based axiomatic
//! framework is consulted, and many independent cycles are aggregated into
//! a mean, a spread, and a discrete verdict.
//!
//! All evidence is synthetic and all scoring is heuristic over structured
//! evidence fields; there is no retrieval and no semantic claim analysis.
//! Framework checks compare axiom identifiers by **literal string
//! equality** — pass axiom identifiers, not free text, when framework
//! compatibility matters.
//!
//! ## Architecture
//!
//! ```text
//! EvidenceGenerator → DebateOrchestrator (per cycle) → TruthAnalyzer
//!                            ↑
//!        Framework (consulted by AxiomRegulator and the orchestrator)
//! ```
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use veridict::TruthAnalyzer;
//!
//! let analyzer = TruthAnalyzer::new(50, 20)?;
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = analyzer.analyze("Flat Earth?", "Scientific_Empirical", &mut rng)?;
//! println!("{}: {:.2}% ± {:.2}%", result.verdict,
//!     result.truth_percentage_mean * 100.0,
//!     result.truth_percentage_std * 100.0);
//! # Ok::<(), veridict::AppError>(())
//! ```
//!
//! Every stochastic choice is drawn from the caller-supplied [`rand::Rng`],
//! so a fixed seed makes an analysis deterministic end to end.

#![warn(missing_docs)]

/// Debate agents and per-role scoring heuristics.
pub mod agents;
/// Cross-cycle aggregation into verdicts.
pub mod analyzer;
/// Configuration management.
pub mod config;
/// Debate orchestration and certainty estimation.
pub mod debate;
/// Error types and result aliases.
pub mod error;
/// Synthetic evidence generation and summaries.
pub mod evidence;
/// Axiomatic frameworks and their registry.
pub mod framework;

pub use agents::{AgentRole, DebateAgent, DebateRound};
pub use analyzer::{AnalysisResult, TruthAnalyzer, Verdict};
pub use config::Config;
pub use debate::{CycleOutcome, DebateOrchestrator};
pub use error::{AppError, AppResult};
pub use evidence::{Evidence, EvidenceGenerator, EvidenceSummary};
pub use framework::{Evaluation, Framework, FrameworkRegistry};
