//! Synthetic evidence generation and aggregate analysis.
//!
//! The generator never retrieves anything; it either perturbs a small
//! curated seed set (for claims it knows) or fabricates generic records.
//! Every stochastic choice goes through the caller-supplied [`rand::Rng`],
//! so a seeded generator reproduces its output exactly.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;


/// Lower clamp bound for evidence reliability.
pub const RELIABILITY_MIN: f64 = 0.01;
/// Upper clamp bound for evidence reliability.
pub const RELIABILITY_MAX: f64 = 0.99;

/// Fixed ordered synonym table for summary perturbation. The first keyword
/// found in a summary is replaced (all its occurrences, one keyword only).
const SYNONYMS: &[(&str, &[&str])] = &[
    ("show", &["demonstrate", "prove", "confirm"]),
    ("impossible", &["not feasible", "impractical", "unachievable"]),
    ("evidence", &["proof", "data", "findings"]),
    ("ancient", &["historical", "archaic", "prehistoric"]),
];

/// Categories assigned to generic (non-curated) evidence.
const GENERIC_CATEGORIES: [Category; 5] = [
    Category::Scientific,
    Category::Historical,
    Category::News,
    Category::Social,
    Category::Official,
];

/// Source category of an evidence record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Peer-reviewed or institutional science.
    Scientific,
    /// Historical records and archives.
    Historical,
    /// News reporting.
    News,
    /// Social media and forums.
    Social,
    /// Government or official publications.
    Official,
    /// Conspiracy outlets.
    Conspiracy,
    /// Anything else.
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Scientific => write!(f, "scientific"),
            Category::Historical => write!(f, "historical"),
            Category::News => write!(f, "news"),
            Category::Social => write!(f, "social"),
            Category::Official => write!(f, "official"),
            Category::Conspiracy => write!(f, "conspiracy"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// A single synthetic evidence record.
///
/// Immutable once generated; the only mutation is the perturbation pass
/// applied at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Name of the (synthetic) source.
    pub source: String,
    /// One-line summary of what the source says.
    pub summary: String,
    /// Source category.
    pub category: Category,
    /// Reliability in `[0.01, 0.99]`.
    pub reliability: f64,
    /// Whether the record supports the claim under analysis.
    pub supports_claim: bool,
}

impl Evidence {
    /// Create a record, clamping reliability into `[0.01, 0.99]`.
    pub fn new(
        source: impl Into<String>,
        summary: impl Into<String>,
        category: Category,
        reliability: f64,
        supports_claim: bool,
    ) -> Self {
        Evidence {
            source: source.into(),
            summary: summary.into(),
            category,
            reliability: reliability.clamp(RELIABILITY_MIN, RELIABILITY_MAX),
            supports_claim,
        }
    }
}

/// Aggregate counts over a batch of evidence records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSummary {
    /// Total number of records.
    pub total: usize,
    /// Records with category `scientific`.
    pub scientific: usize,
    /// Records with reliability above 0.8.
    pub reliable: usize,
    /// Records with reliability below 0.3.
    pub unreliable: usize,
    /// Records with category `historical`.
    pub historical: usize,
    /// Records with category `conspiracy`.
    pub conspiracy: usize,
    /// Records supporting the claim.
    pub support: usize,
    /// Records opposing the claim.
    pub oppose: usize,
}

/// Pure aggregate counts over evidence. Empty input yields an all-zero
/// summary; there are no error cases.
pub fn analyze_evidence(evidence: &[Evidence]) -> EvidenceSummary {
    EvidenceSummary {
        total: evidence.len(),
        scientific: evidence
            .iter()
            .filter(|ev| ev.category == Category::Scientific)
            .count(),
        reliable: evidence.iter().filter(|ev| ev.reliability > 0.8).count(),
        unreliable: evidence.iter().filter(|ev| ev.reliability < 0.3).count(),
        historical: evidence
            .iter()
            .filter(|ev| ev.category == Category::Historical)
            .count(),
        conspiracy: evidence
            .iter()
            .filter(|ev| ev.category == Category::Conspiracy)
            .count(),
        support: evidence.iter().filter(|ev| ev.supports_claim).count(),
        oppose: evidence.iter().filter(|ev| !ev.supports_claim).count(),
    }
}

/// Synthesizes evidence batches for claims.
///
/// Claims with an entry in the curated seed set get perturbed copies of
/// their seeds; unknown claims get fully generic records.
pub struct EvidenceGenerator {
    seeds: HashMap<&'static str, Vec<Evidence>>,
}

impl EvidenceGenerator {
    /// Create a generator with the built-in curated seed set.
    pub fn new() -> Self {
        EvidenceGenerator {
            seeds: curated_seeds(),
        }
    }

    /// Synthesize `page_count` evidence records for `claim`.
    pub fn search_claim<R: Rng>(
        &self,
        claim: &str,
        page_count: usize,
        rng: &mut R,
    ) -> Vec<Evidence> {
        let key = normalize_claim(claim);

        if let Some(seeds) = self.seeds.get(key.as_str()) {
            debug!(claim = %claim, key = %key, pages = page_count, "Perturbing curated seed set");
            return (0..page_count)
                .map(|_| {
                    // A non-empty seed set is guaranteed by construction.
                    let seed = seeds.choose(rng).unwrap_or(&seeds[0]);
                    perturb(seed, rng)
                })
                .collect();
        }

        debug!(claim = %claim, pages = page_count, "Generating generic synthetic evidence");
        (0..page_count)
            .map(|i| {
                let reliability = triangular(rng, 0.3, 0.95, 0.8);
                let supports = rng.gen::<f64>() < 0.3;
                let category = *GENERIC_CATEGORIES
                    .choose(rng)
                    .unwrap_or(&Category::Scientific);
                Evidence::new(
                    format!("Source {}", i + 1),
                    format!("Evidence point {} about '{}'", i + 1, claim),
                    category,
                    reliability,
                    supports,
                )
            })
            .collect()
    }
}

impl Default for EvidenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a claim into a seed-set lookup key: lowercase, strip `?`, `'`
/// and `,`, spaces to underscores.
fn normalize_claim(claim: &str) -> String {
    claim
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '?' | '\'' | ','))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// One perturbation pass over a sampled seed record: jitter reliability,
/// occasionally flip support, occasionally substitute one keyword.
fn perturb<R: Rng>(seed: &Evidence, rng: &mut R) -> Evidence {
    let mut record = seed.clone();

    record.reliability =
        (record.reliability * rng.gen_range(0.9..1.1)).clamp(RELIABILITY_MIN, RELIABILITY_MAX);

    if rng.gen::<f64>() < 0.15 {
        record.supports_claim = !record.supports_claim;
    }

    if rng.gen::<f64>() < 0.4 {
        // First keyword found wins; one substitution per record, first
        // occurrence only.
        for (keyword, replacements) in SYNONYMS {
            if record.summary.contains(keyword) {
                if let Some(replacement) = replacements.choose(rng) {
                    record.summary = record.summary.replacen(keyword, replacement, 1);
                }
                break;
            }
        }
    }

    record
}

/// Sample a triangular distribution over `[low, high]` with the given mode
/// via inverse transform sampling.
fn triangular<R: Rng>(rng: &mut R, low: f64, high: f64, mode: f64) -> f64 {
    let u: f64 = rng.gen();
    let cut = (mode - low) / (high - low);
    if u < cut {
        low + (u * (high - low) * (mode - low)).sqrt()
    } else {
        high - ((1.0 - u) * (high - low) * (high - mode)).sqrt()
    }
}

/// Curated seed records, keyed by normalized claim.
fn curated_seeds() -> HashMap<&'static str, Vec<Evidence>> {
    HashMap::from([
        (
            "flat_earth",
            vec![
                Evidence::new(
                    "NASA",
                    "Space missions show Earth's spherical shape",
                    Category::Scientific,
                    0.99,
                    false,
                ),
                Evidence::new(
                    "Historical Records",
                    "Earth known to be spherical since ancient times",
                    Category::Historical,
                    0.95,
                    false,
                ),
                Evidence::new(
                    "Conspiracy Site",
                    "NASA images are fabrications",
                    Category::Conspiracy,
                    0.05,
                    true,
                ),
            ],
        ),
        (
            "vaccine_microchips",
            vec![
                Evidence::new(
                    "WHO",
                    "Vaccines contain no microchips",
                    Category::Scientific,
                    0.97,
                    false,
                ),
                Evidence::new(
                    "Tech Journal",
                    "Microchips impossible to inject via vaccines",
                    Category::Scientific,
                    0.96,
                    false,
                ),
                Evidence::new(
                    "Social Media",
                    "Tracking chips admitted by executives",
                    Category::Conspiracy,
                    0.01,
                    true,
                ),
            ],
        ),
        (
            "moon_landing",
            vec![
                Evidence::new(
                    "NASA Archives",
                    "Complete documentation of Apollo missions",
                    Category::Historical,
                    0.98,
                    true,
                ),
                Evidence::new(
                    "Physics Review",
                    "Analysis confirms feasibility of moon landing",
                    Category::Scientific,
                    0.96,
                    true,
                ),
                Evidence::new(
                    "Conspiracy Forum",
                    "Studio lighting visible in photos",
                    Category::Conspiracy,
                    0.02,
                    false,
                ),
            ],
        ),
        (
            "pyramids_aliens",
            vec![
                Evidence::new(
                    "Archaeology Journal",
                    "Evidence shows pyramids built by ancient Egyptians",
                    Category::Historical,
                    0.92,
                    false,
                ),
                Evidence::new(
                    "Alternative History",
                    "Advanced technology required for pyramid construction",
                    Category::Conspiracy,
                    0.15,
                    true,
                ),
            ],
        ),
    ])
}
