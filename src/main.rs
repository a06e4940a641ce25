use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use veridict::analyzer::AnalysisResult;
use veridict::config::{Config, LogFormat};
use veridict::TruthAnalyzer;

/// Multi-perspective debate simulation producing a probabilistic truth score
#[derive(Parser, Debug)]
#[command(name = "veridict", version, about)]
struct Cli {
    /// Claim to analyze
    claim: String,

    /// Number of evidence pages to generate
    #[arg(short, long)]
    pages: Option<usize>,

    /// Number of debate cycles
    #[arg(short, long)]
    cycles: Option<usize>,

    /// Analysis framework (unknown names fall back to the default)
    #[arg(short, long)]
    framework: Option<String>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the result as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags override environment defaults.
    if let Some(pages) = cli.pages {
        config.analysis.pages = pages;
    }
    if let Some(cycles) = cli.cycles {
        config.analysis.cycles = cycles;
    }
    if let Some(framework) = cli.framework {
        config.analysis.framework = framework;
    }
    if let Some(seed) = cli.seed {
        config.analysis.seed = Some(seed);
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    config.validate()?;

    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        claim = %cli.claim,
        "Starting veridict analysis"
    );

    let mut rng = match config.analysis.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let analyzer = TruthAnalyzer::new(config.analysis.pages, config.analysis.cycles)?;
    let result = analyzer.analyze(&cli.claim, &config.analysis.framework, &mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the human-readable analysis report.
fn print_report(result: &AnalysisResult) {
    println!("{}", "=".repeat(60));
    println!("TRUTH ANALYSIS: {}", result.claim);
    println!("Pages: {} | Cycles: {}", result.pages, result.cycles);
    println!("Timestamp: {}", result.timestamp.format("%Y-%m-%d %H:%M:%S"));
    println!("{}", "=".repeat(60));

    let summary = &result.evidence_summary;
    println!("\n=== EVIDENCE ANALYSIS ===");
    println!("Total sources: {}", summary.total);
    println!("Scientific: {}", summary.scientific);
    println!("Reliable sources: {}", summary.reliable);
    println!("Unreliable sources: {}", summary.unreliable);
    println!("Historical: {}", summary.historical);
    println!("Conspiracy: {}", summary.conspiracy);
    println!(
        "Supporting: {} | Opposing: {}",
        summary.support, summary.oppose
    );

    println!("\n{}", "=".repeat(60));
    println!(
        "FINAL VERDICT AFTER {} CYCLES: {}",
        result.cycles, result.verdict
    );
    println!(
        "Average Truth Confidence: {:.4}% ± {:.4}%",
        result.truth_percentage_mean * 100.0,
        result.truth_percentage_std * 100.0
    );
    println!("Evidence Processed: {} pages", result.pages);
    println!("Framework: {}", result.framework);
    println!(
        "Execution Time: {:.2} seconds",
        result.execution_time_ms as f64 / 1000.0
    );
    println!("\n=== TRANSFORMATION PATHWAY ===");
    println!("{}", result.transformation_pathway);
    println!("{}", "=".repeat(60));
}
