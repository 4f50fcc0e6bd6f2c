// Command-line front end for repository analysis.
//
// `analyze` runs the full pipeline including the Gemini narratives, falling
// back to rule-based text without an API key. `score` and `advanced` only
// need GitHub access.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kodegen_repo_insight::{
    AdvancedAnalysis, AnalysisEngine, AppConfig, GitHubClient, GitHubMetricsCollector,
    MetricsSnapshot, MetricsSource, NarrativeOrchestrator, Tier, advanced_analysis,
    compute_dimensions_at, parse_repository_url, score_breakdown,
};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kodegen-repo-insight", version, about = "Score GitHub repositories")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = "REPO_INSIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analysis with generated summary, strengths/weaknesses and roadmap.
    Analyze {
        /// Repository URL, e.g. https://github.com/owner/repo
        url: String,
    },
    /// Score and dimensions only, without text generation.
    Score {
        /// Repository URL, e.g. https://github.com/owner/repo
        url: String,
    },
    /// Security, complexity, performance and code review heuristics.
    Advanced {
        /// Repository URL, e.g. https://github.com/owner/repo
        url: String,

        /// Include the collected metrics in the output.
        #[arg(long)]
        with_metrics: bool,
    },
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let collector = GitHubMetricsCollector::new(GitHubClient::from_env()?);

    match cli.command {
        Commands::Analyze { url } => {
            let (owner, name) = parse_repository_url(&url)?;
            let generator = config.text_generator()?;
            let engine =
                AnalysisEngine::new(NarrativeOrchestrator::new(generator, config.narrative_config()));

            let result = engine
                .analyze_repository(&collector, &owner, &name)
                .await
                .with_context(|| format!("Could not analyze {owner}/{name}"))?;
            print_json(&result, cli.pretty)?;
        }
        Commands::Score { url } => {
            let (owner, name) = parse_repository_url(&url)?;
            let snapshot = collector
                .get_complete_metrics(&owner, &name)
                .await
                .with_context(|| format!("Could not fetch {owner}/{name}"))?;

            let now = chrono::Utc::now();
            let breakdown = score_breakdown(&snapshot, now);
            let score = breakdown.score();
            let tier = Tier::from_score(score);
            info!("{owner}/{name} scored {score} ({tier})");

            #[derive(Serialize)]
            struct ScoreReport<'a> {
                repository: &'a str,
                score: u8,
                tier: Tier,
                breakdown: kodegen_repo_insight::ScoreBreakdown,
                dimensions: Vec<kodegen_repo_insight::DimensionScore>,
            }

            let full_name = snapshot.full_name();
            print_json(
                &ScoreReport {
                    repository: &full_name,
                    score,
                    tier,
                    breakdown,
                    dimensions: compute_dimensions_at(&snapshot, now),
                },
                cli.pretty,
            )?;
        }
        Commands::Advanced { url, with_metrics } => {
            let (owner, name) = parse_repository_url(&url)?;
            let snapshot = collector
                .get_complete_metrics(&owner, &name)
                .await
                .with_context(|| format!("Could not fetch {owner}/{name}"))?;

            let analysis = advanced_analysis(&snapshot);
            info!(
                "{owner}/{name}: {} security findings, complexity {}",
                analysis.vulnerabilities.len(),
                analysis.complexity.score
            );

            #[derive(Serialize)]
            struct AdvancedReport {
                #[serde(skip_serializing_if = "Option::is_none")]
                metrics: Option<MetricsSnapshot>,
                analysis: AdvancedAnalysis,
            }

            print_json(
                &AdvancedReport {
                    metrics: with_metrics.then_some(snapshot),
                    analysis,
                },
                cli.pretty,
            )?;
        }
    }
    Ok(())
}
