use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use astromatch::cli::Commands;
use astromatch::{
    ChartRequest, CompatibilityResult, Container, ContainerConfig, DomainError, NatalChart,
    Provider, UserProfile,
};

#[derive(Parser)]
#[command(name = "astromatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.astromatch")]
    data_dir: String,

    #[arg(long, global = true, value_enum, default_value_t = Provider::Gemini)]
    provider: Provider,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let data_dir = expand_tilde(&cli.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let container = Container::new(ContainerConfig {
        data_dir,
        provider: cli.provider,
    })?;
    let profiles = container.profile_repository();

    match cli.command {
        Commands::Chart {
            name,
            date,
            time,
            location,
            bio,
        } => {
            let request = ChartRequest::new(name, date, time, location);
            let chart = container.natal_chart_use_case()?.execute(&request).await?;

            let mut profile = UserProfile::new(request, chart);
            if let Some(bio) = bio {
                profile = profile.with_bio(bio);
            }
            profiles.save(&profile).await?;
            info!("Saved profile {} in {}", profile.id(), container.data_dir());
            print_chart(profile.name(), profile.chart());
        }

        Commands::Recalc => {
            let profile = require_profile(profiles.load().await?)?;
            let chart = container
                .natal_chart_use_case()?
                .execute(profile.birth())
                .await?;
            let profile = profile.with_chart(chart);
            profiles.save(&profile).await?;
            print_chart(profile.name(), profile.chart());
        }

        Commands::Show { json } => {
            let profile = require_profile(profiles.load().await?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                let birth = profile.birth();
                println!(
                    "Born {} at {} in {}",
                    birth.birth_date, birth.birth_time, birth.birth_location
                );
                if !profile.bio().is_empty() {
                    println!("Bio: {}", profile.bio());
                }
                print_chart(profile.name(), profile.chart());
            }
        }

        Commands::Compat { candidate } => {
            let profile = require_profile(profiles.load().await?)?;
            let candidate = read_candidate(&candidate)?;
            let result = container
                .compatibility_use_case()?
                .execute(profile.subject(), candidate.subject())
                .await?;
            print_compatibility(profile.name(), candidate.name(), &result);
        }

        Commands::Icebreaker { candidate } => {
            let profile = require_profile(profiles.load().await?)?;
            let candidate = read_candidate(&candidate)?;
            let line = container
                .icebreaker_use_case()?
                .execute(profile.subject(), candidate.subject())
                .await;
            println!("{line}");
        }

        Commands::Forecast { date } => {
            let profile = require_profile(profiles.load().await?)?;
            let as_of = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };
            let entries = container
                .forecast_use_case()?
                .execute(profile.subject(), as_of)
                .await;

            if entries.is_empty() {
                println!("No forecast available right now.");
            } else {
                println!("Forecast for {} from {as_of}:\n", profile.name());
                for (i, entry) in entries.iter().enumerate() {
                    println!("{}. {} ({}) [{}]", i + 1, entry.event, entry.date, entry.kind);
                    println!("   Vibe: {}", entry.vibe);
                    println!("   {}", entry.influence);
                    println!();
                }
            }
        }

        Commands::Reset => {
            profiles.clear().await?;
            println!("Profile cleared.");
        }
    }

    Ok(())
}

fn require_profile(profile: Option<UserProfile>) -> Result<UserProfile, DomainError> {
    profile.ok_or_else(|| {
        DomainError::not_found("no stored profile; run `astromatch chart` first")
    })
}

fn read_candidate(path: &Path) -> Result<UserProfile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading candidate profile {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing candidate profile {}", path.display()))
}

fn parse_date(text: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| DomainError::invalid_input(format!("date '{text}' is not YYYY-MM-DD: {e}")))
}

fn print_chart(name: &str, chart: &NatalChart) {
    println!(
        "{name}: Sun {} ({}) / Moon {} / Rising {}\n",
        chart.sun_sign,
        chart.sun_sign.element(),
        chart.moon_sign,
        chart.rising_sign
    );
    println!("{}\n", chart.summary);
    for position in &chart.positions {
        let dignity = position
            .dignity
            .map(|d| format!(" [{d}]"))
            .unwrap_or_default();
        println!("  {}{dignity}", position.display_line());
    }
    if !chart.aspects.is_empty() {
        println!("\nAspects:");
        for aspect in &chart.aspects {
            println!(
                "  {} {} {} (orb {:.1}°)",
                aspect.planet1, aspect.aspect_type, aspect.planet2, aspect.orb
            );
        }
    }
    println!("\n{}", chart.synthesis);
}

fn print_compatibility(a: &str, b: &str, result: &CompatibilityResult) {
    println!(
        "{a} x {b}: {}% ({})\n",
        result.percent(),
        result.connection_type
    );
    println!("{}\n", result.summary);
    for pro in &result.pros {
        println!("  + {pro}");
    }
    for con in &result.cons {
        println!("  - {con}");
    }
    for highlight in result.highlights() {
        println!("\n{} [{}]\n  {}", highlight.title, highlight.vibe, highlight.description);
    }
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn provider_flag_accepts_mock() {
        let cli = Cli::try_parse_from(["astromatch", "--provider", "mock", "reset"]).unwrap();
        assert_eq!(cli.provider, Provider::Mock);
    }

    #[test]
    fn chart_requires_birth_data() {
        let res = Cli::try_parse_from(["astromatch", "chart", "--name", "Luna"]);
        assert!(res.is_err(), "chart without date/time/location should be rejected");
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("2026-10-19").is_ok());
        assert!(parse_date("19/10/2026").is_err());
    }

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/astro"), "/tmp/astro");
    }
}
