//! Command line front end: load a roster, enumerate every outcome, print the distribution.

mod report;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use roundtree_core::{SimulationConfig, SimulationEvent, simulate_with_hook};
use roundtree_roster::compile_yaml;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "roundtree")]
#[command(version, about = "Exact outcome distribution of a rated round-robin", long_about = None)]
struct Cli {
    /// Roster YAML listing players and ratings
    roster: PathBuf,

    /// Simulation config YAML (defaults to the bundled config)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Override the outcome tree node ceiling
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// How many of the most likely tallies to print
    #[arg(long, short = 't', default_value_t = 10)]
    top: usize,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_yaml_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SimulationConfig::from_default_yaml().context("loading bundled config")?,
        };
        if let Some(max_nodes) = self.max_nodes {
            config.max_nodes = max_nodes;
        }
        Ok(config)
    }
}

fn log_event(event: &SimulationEvent) {
    match event {
        SimulationEvent::ScheduleGenerated {
            rounds,
            playable_matches,
            ..
        } => log::info!(
            "{:<32}{} rounds, {} games",
            "generated schedule",
            rounds,
            playable_matches
        ),
        SimulationEvent::TreeBuilt { nodes, leaves } => log::info!(
            "{:<32}{} nodes, {} leaves",
            "built outcome tree",
            nodes,
            leaves
        ),
        SimulationEvent::Aggregated {
            distinct_tallies,
            total_probability,
            ..
        } => log::info!(
            "{:<32}{} tallies, mass {:.12}",
            "aggregated",
            distinct_tallies,
            total_probability
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = cli.simulation_config()?;
    let roster = compile_yaml(&cli.roster)
        .with_context(|| format!("loading roster {}", cli.roster.display()))?;

    let report = simulate_with_hook(roster.players(), roster.size(), &config, log_event)?;

    match cli.format {
        OutputFormat::Table => {
            report::write_table(&mut io::stdout().lock(), &roster, &report, cli.top)?
        }
        OutputFormat::Json => println!("{}", report.snapshot().to_json()?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtree_core::PlayerId;
    use roundtree_roster::RosterBuilder;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["roundtree", "players.yaml"]).expect("valid args");

        assert_eq!(cli.roster, PathBuf::from("players.yaml"));
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.top, 10);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "roundtree",
            "players.yaml",
            "--format",
            "json",
            "--max-nodes",
            "4096",
            "-vv",
        ])
        .expect("valid args");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        let config = cli.simulation_config().expect("bundled config loads");
        assert_eq!(config.max_nodes, 4096);
    }

    #[test]
    fn roster_is_required() {
        assert!(Cli::try_parse_from(["roundtree"]).is_err());
    }

    #[test]
    fn table_lists_names_and_tallies() {
        let mut builder = RosterBuilder::new();
        builder
            .add_player("Adam", 1500.0)
            .add_player("Bartek", 1900.0)
            .add_player("Cledzban", 966.0);
        let roster = builder.compile().expect("valid roster");
        let report = roster
            .simulate(&SimulationConfig::default())
            .expect("simulation succeeds");

        let mut out = Vec::new();
        report::write_table(&mut out, &roster, &report, 3).expect("write to vec");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.contains("Adam v BYE"));
        assert!(text.contains("distinct tallies"));
        assert!(text.contains("probability"));
        assert!(text.contains("Bartek v Cledzban"));
        assert_eq!(roster.name_of(PlayerId::from(3)), Some("Cledzban"));
    }
}
