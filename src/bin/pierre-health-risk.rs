// ABOUTME: Command-line entry point for running preventive health risk assessments
// ABOUTME: Reads a JSON health profile, prints the JSON report, and probes LLM backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Assess a profile file and pretty-print the report
//! pierre-health-risk assess --profile profile.json --pretty
//!
//! # Read the profile from stdin without contacting any LLM backend
//! cat profile.json | pierre-health-risk assess --profile - --offline
//!
//! # Check which narrative backends are reachable
//! pierre-health-risk check-llm
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use pierre_health_risk::{
    assessment::HealthAssessmentService,
    config::HealthRiskConfig,
    llm::FallbackChatProvider,
    logging::LoggingConfig,
    narrative::LlmNarrativeAdapter,
    HealthProfile,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "pierre-health-risk",
    about = "Pierre preventive health risk assessment",
    long_about = "Scores diabetes, cardiovascular, and body composition risk, lists due cancer screenings, and drafts a personalized plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Assess a health profile and print the JSON report
    Assess {
        /// Profile JSON file, or `-` for stdin
        #[arg(long, short = 'p')]
        profile: PathBuf,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,

        /// Skip the narrative backend and use the fallback plan
        #[arg(long)]
        offline: bool,
    },
    /// Run a health check against every configured narrative backend
    CheckLlm,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = HealthRiskConfig::from_env()?;
    info!("{}", config.summary());

    match cli.command {
        Command::Assess {
            profile,
            pretty,
            offline,
        } => assess(&config, &profile, pretty, offline).await,
        Command::CheckLlm => check_llm(&config).await,
    }
}

fn read_profile(path: &Path) -> Result<HealthProfile> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    let profile: HealthProfile = serde_json::from_str(&raw)?;
    Ok(profile)
}

fn build_service(config: &HealthRiskConfig, offline: bool) -> HealthAssessmentService {
    if offline {
        return HealthAssessmentService::offline();
    }
    match FallbackChatProvider::from_config(&config.llm) {
        Ok(chain) => {
            let adapter = LlmNarrativeAdapter::new(Arc::new(chain), &config.narrative);
            HealthAssessmentService::new(Arc::new(adapter), &config.narrative)
        }
        Err(e) => {
            warn!(error = %e, "No narrative backend available, running offline");
            HealthAssessmentService::offline()
        }
    }
}

async fn assess(config: &HealthRiskConfig, path: &Path, pretty: bool, offline: bool) -> Result<()> {
    let profile = read_profile(path)?;
    let service = build_service(config, offline);
    let report = service.assess_validated(&profile).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

async fn check_llm(config: &HealthRiskConfig) -> Result<()> {
    let chain = FallbackChatProvider::from_config(&config.llm)?;
    let mut reachable = 0_usize;

    for provider in chain.providers() {
        let status = match provider.health_check().await {
            Ok(true) => {
                reachable += 1;
                "ok".to_owned()
            }
            Ok(false) => "unhealthy".to_owned(),
            Err(e) => format!("error: {e}"),
        };
        println!(
            "{:<16} {:<28} {status}",
            provider.display_name(),
            provider.default_model()
        );
    }

    if reachable == 0 {
        bail!("No narrative backend is reachable");
    }
    Ok(())
}
