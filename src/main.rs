use anyhow::Result;
use bountyscope::{
    aggregator::aggregate,
    cache::Cache,
    classifier::category_for_cwe,
    config::Config,
    feed::{FileFeed, InstallLookup, VulnerabilityFeed, WordfenceFeed},
    output::{format_report_to_string, print_report, OutputFormat},
    schedule::RewardSchedule,
};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

/// Exit codes for CI integration
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
    pub const NOT_FOUND: u8 = 2;
}

#[derive(Parser)]
#[command(name = "bountyscope")]
#[command(
    author,
    version,
    about = "Estimate bug-bounty payouts for WordPress vulnerability researchers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate total bounty for a researcher's disclosures
    Estimate {
        /// Researcher name, exactly as credited in the feed
        researcher: String,

        /// Path to the reward schedule text file
        #[arg(short, long)]
        schedule: Option<PathBuf>,

        /// Read records from a local JSON file instead of the live feed
        #[arg(long)]
        feed: Option<PathBuf>,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Write the report as JSON to a file
        #[arg(short, long)]
        output: Option<String>,

        /// Skip the active-install-count lookup (installs count as 0)
        #[arg(long)]
        no_install_lookup: bool,

        /// Clear cached install counts before running
        #[arg(long)]
        clear_cache: bool,
    },

    /// List the CWE to reward-category mappings
    Categories,

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Clear the install-count cache
    ClearCache,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Estimate {
            researcher,
            schedule,
            feed,
            format,
            output,
            no_install_lookup,
            clear_cache,
        } => {
            if clear_cache {
                let cache = Cache::new();
                cache.clear()?;
            }

            let format_str = format.unwrap_or(config.default_format.clone());
            let install_lookup = !no_install_lookup && config.install_lookup;

            run_estimate(
                &researcher,
                schedule.or(config.schedule_path.clone()),
                feed,
                format_str,
                output,
                install_lookup,
                config.cache_ttl_hours,
            )
            .await
        }
        Commands::Categories => {
            list_categories();
            Ok(exit_codes::SUCCESS)
        }
        Commands::Config { init, path } => {
            handle_config(init, path)?;
            Ok(exit_codes::SUCCESS)
        }
        Commands::ClearCache => {
            let cache = Cache::new();
            cache.clear()?;
            println!("Cache cleared.");
            Ok(exit_codes::SUCCESS)
        }
    }
}

async fn run_estimate(
    researcher: &str,
    schedule_path: Option<PathBuf>,
    feed_path: Option<PathBuf>,
    format: String,
    output_file: Option<String>,
    install_lookup: bool,
    cache_ttl_hours: u64,
) -> Result<u8> {
    let format = OutputFormat::from_str(&format).map_err(|e| anyhow::anyhow!(e))?;
    let is_interactive = format == OutputFormat::Table && output_file.is_none();

    // Empty when no path is configured: every match then yields 0
    let schedule = match schedule_path {
        Some(path) => RewardSchedule::load(&path),
        None => {
            tracing::warn!("no reward schedule configured; all bounties will be 0");
            RewardSchedule::default()
        }
    };

    let feed: Box<dyn VulnerabilityFeed> = match feed_path {
        Some(path) => Box::new(FileFeed::new(path)),
        None => Box::new(WordfenceFeed::new()),
    };

    let fetch_progress = spinner(
        is_interactive,
        format!("Fetching disclosures from {}...", feed.name()),
    );
    let mut records = feed.fetch(researcher).await?;
    if let Some(pb) = fetch_progress {
        pb.finish_with_message(format!("Found {} disclosures", records.len()));
    }

    if install_lookup {
        let lookup_progress = spinner(is_interactive, "Resolving install counts...".to_string());
        let lookup = InstallLookup::with_cache(Cache::with_ttl_hours(cache_ttl_hours));
        records = lookup.resolve(records).await?;
        if let Some(pb) = lookup_progress {
            pb.finish_with_message(format!("{} disclosures with install data", records.len()));
        }
    }

    let report = aggregate(&records, &schedule, Some(researcher));

    if let Some(path) = output_file {
        let json = format_report_to_string(&report)?;
        std::fs::write(&path, json)?;
        if is_interactive {
            println!("Report written to: {}", path);
        }
    } else {
        print_report(&report, format)?;
    }

    // Empty report means the name never appeared in the feed, distinct
    // from appearing with a total of 0
    if report.is_empty() {
        eprintln!("Researcher '{}' not found in the feed.", researcher);
        return Ok(exit_codes::NOT_FOUND);
    }

    Ok(exit_codes::SUCCESS)
}

fn spinner(is_interactive: bool, message: String) -> Option<ProgressBar> {
    if !is_interactive {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    Some(pb)
}

fn list_categories() {
    println!("CWE to reward-category mappings:");
    println!();

    let mut rows: Vec<(u32, &str)> = (1..=1400)
        .filter_map(|id| category_for_cwe(id).map(|category| (id, category)))
        .collect();
    rows.sort_by_key(|&(id, _)| id);

    for (id, category) in rows {
        println!("  CWE-{:<6} {}", id, category);
    }
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    // Show current config
    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'bountyscope config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
