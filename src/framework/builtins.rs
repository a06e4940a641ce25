//! Built-in axiomatic frameworks and the lookup registry.

use std::collections::HashMap;

use tracing::warn;

use super::Framework;

/// Name of the framework used when a lookup misses.
pub const DEFAULT_FRAMEWORK: &str = "Scientific_Empirical";

/// Registry of the fixed framework set, looked up by name.
///
/// Unknown names fall back to [`DEFAULT_FRAMEWORK`]; that is a logged
/// fallback, not an error.
pub struct FrameworkRegistry {
    frameworks: HashMap<String, Framework>,
}

impl FrameworkRegistry {
    /// Create a registry holding the built-in frameworks.
    pub fn new() -> Self {
        let mut frameworks = HashMap::new();
        for framework in [
            scientific_empirical(),
            historical_consensus(),
            ethical_framework(),
        ] {
            frameworks.insert(framework.name().to_string(), framework);
        }
        FrameworkRegistry { frameworks }
    }

    /// Look up a framework by exact name.
    pub fn get(&self, name: &str) -> Option<&Framework> {
        self.frameworks.get(name)
    }

    /// Look up a framework, falling back to the default on unknown names.
    pub fn get_or_default(&self, name: &str) -> &Framework {
        self.frameworks.get(name).unwrap_or_else(|| {
            warn!(
                framework = %name,
                fallback = DEFAULT_FRAMEWORK,
                "Unknown framework name, using default"
            );
            &self.frameworks[DEFAULT_FRAMEWORK]
        })
    }

    /// All registered framework names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.frameworks.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered frameworks.
    pub fn count(&self) -> usize {
        self.frameworks.len()
    }
}

impl Default for FrameworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn scientific_empirical() -> Framework {
    Framework::new(
        "Scientific_Empirical",
        [
            "Earth_Orbits_Sun",
            "Energy_Conservation",
            "Natural_Selection",
            "Gravity",
        ],
    )
}

fn historical_consensus() -> Framework {
    Framework::new(
        "Historical_Consensus",
        [
            "Pyramids_Built_by_Egyptians",
            "Moon_Landing_Occurred",
            "Industrial_Revolution_Origin",
        ],
    )
}

fn ethical_framework() -> Framework {
    Framework::new(
        "Ethical_Framework",
        [
            "Truthfulness_Required",
            "Greater_Good_Priority",
            "Individual_Rights",
        ],
    )
}
