//! League CLI
//!
//! Loads a league file, runs one engine operation, prints the outcome and
//! saves the file back when the operation changed it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use league_core::{
    load_league, save_backup, save_league, Analytics, LeagueConfig, LeagueHandle, MatchEngine,
    MatchResult, PlayerEfficiency, PlayerQuery, TeamReport, TransferMarket, TransferRecord,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "Football league valuations, match simulation and analytics", long_about = None)]
struct Cli {
    /// League data file (JSON with `teams` and `players`)
    #[arg(long, default_value = "data.json")]
    data: PathBuf,

    /// Optional YAML file overriding engine constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a player's market value
    Value {
        player: String,
    },

    /// Move a player to another team
    Transfer {
        player: String,
        team: String,
    },

    /// Simulate a fixture and credit its scorers
    Simulate {
        home: String,
        away: String,

        /// Seed for a reproducible result
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Per-90 efficiency metrics for a player
    Efficiency {
        player: String,
    },

    /// Team summary report
    Report {
        team: String,
    },

    /// Filter players
    Search {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        min_rating: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => LeagueConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => LeagueConfig::default(),
    };

    let state = load_league(&cli.data)
        .with_context(|| format!("Failed to load league: {}", cli.data.display()))?;
    let league = LeagueHandle::new(state);

    match cli.command {
        Commands::Value { player } => {
            let name = league.read().player(&player)?.name.clone();
            let market = TransferMarket::with_config(league, config.valuation);
            let value = market.player_value(&name)?;
            println!("Estimated value of {}: €{}", name, group_thousands(value));
        }

        Commands::Transfer { player, team } => {
            let mut market = TransferMarket::with_config(league.clone(), config.valuation);
            let record = market.transfer_player(&player, &team)?;
            print_transfer(&record);
            persist(&cli.data, &league)?;
        }

        Commands::Simulate { home, away, seed } => {
            let mut engine = match seed {
                Some(seed) => MatchEngine::with_seed(league.clone(), seed),
                None => MatchEngine::new(league.clone()),
            }
            .with_config(config.simulation);
            let result = engine.simulate_match(&home, &away)?;
            print_match(&result);
            persist(&cli.data, &league)?;
        }

        Commands::Efficiency { player } => {
            let efficiency = Analytics::new(league).calculate_player_efficiency(&player)?;
            print_efficiency(&player, &efficiency);
        }

        Commands::Report { team } => {
            let report = Analytics::new(league).generate_team_report(&team)?;
            print_report(&report);
        }

        Commands::Search { name, team, position, min_rating } => {
            let query = PlayerQuery { name, team, position, min_rating };
            let repo = league.read();
            let results = repo.search_players(&query);
            println!("\nSearch Results:");
            for player in &results {
                println!("\n{} ({})", player.name, player.team);
                println!("Position: {}", player.position);
                println!("Rating: {}", player.rating);
            }
            if results.is_empty() {
                println!("No players matched.");
            }
        }
    }

    Ok(())
}

/// Save the league, falling back to the backup file if the main write fails.
fn persist(path: &Path, league: &LeagueHandle) -> Result<()> {
    let state = league.snapshot();
    if let Err(e) = save_league(path, &state) {
        tracing::warn!("Saving {} failed: {}", path.display(), e);
        let backup = save_backup(path, &state).context("Failed to write backup")?;
        println!("Data backed up to '{}'", backup.display());
        return Err(e).with_context(|| format!("Failed to save league: {}", path.display()));
    }
    Ok(())
}

fn print_transfer(record: &TransferRecord) {
    println!("\nTransfer completed:");
    println!("{} transferred from {} to {}", record.player, record.from_team, record.to_team);
    println!("Transfer fee: €{}", group_thousands(record.fee));
}

fn print_match(result: &MatchResult) {
    println!("\nMatch Result: {}", result.scoreline());
    println!("\nMatch Events:");
    for event in result.goals() {
        println!("{}", event.describe());
    }
}

fn print_efficiency(player: &str, eff: &PlayerEfficiency) {
    println!("\nEfficiency Analysis for {}:", player);
    println!("Goals per 90 minutes: {:.2}", eff.goals_per_90);
    println!("Assists per 90 minutes: {:.2}", eff.assists_per_90);
    println!("Total goal contributions: {}", eff.goal_contributions);
    println!("Shot conversion rate: {:.1}%", eff.shots_conversion);
}

fn print_report(report: &TeamReport) {
    println!("\nTeam Report for {}:", report.team_name);
    println!("{}", "═".repeat(40));
    println!("League Position: {}", report.league_position);
    println!("Points: {}", report.points);
    println!(
        "\nTop Scorer: {} ({} goals)",
        report.top_scorer.name, report.top_scorer.stats.goals
    );
    println!(
        "Top Assister: {} ({} assists)",
        report.top_assister.name, report.top_assister.stats.assists
    );
    println!("Average Squad Age: {:.1} years", report.squad_age_average);
    println!("Average Squad Rating: {:.1}", report.squad_rating_average);
}

/// 168500000 -> "168,500,000"
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}
