use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use deckforge::cards::OfflineImages;
use deckforge::config::{Config, DashboardConfig, DEFAULT_DATA_PATH};
use deckforge::dashboard::Dashboard;
use deckforge::error::DfResult;
use deckforge::sideboard::SuggestionTable;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = DEFAULT_DATA_PATH)]
    data: String,

    /// JSON file with params, tags and an optional suggestion table
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Predicted winrate over row order
    Trend(cmd::trend::TrendArgs),
    /// Per-opponent averages, top and bottom matchups
    Matchups(cmd::matchups::MatchupsArgs),
    /// Trait scores, weak traits and sideboard suggestions
    Traits(cmd::traits::TraitsArgs),
    /// What-if trait scores from hand-entered matchup winrates
    Simulate(cmd::simulate::SimulateArgs),
    /// Raw table contents
    Data(cmd::data::DataArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Self::Trend(a) => &a.config,
            Self::Matchups(a) => &a.config,
            Self::Traits(a) => &a.config,
            Self::Simulate(a) => &a.config,
            Self::Data(a) => &a.config,
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> DfResult<()> {
    let (config, suggestions) = resolve_config(&cli, matches)?;

    // The simulator only borrows Adaptability from the dataset, so it runs without one.
    let dash = match cli.command {
        Commands::Simulate(_) => Dashboard::load_or_empty(&cli.data, config, suggestions)?,
        _ => Dashboard::load(&cli.data, config, suggestions)?,
    };
    dash.report_warnings();

    let images = OfflineImages;
    match cli.command {
        Commands::Trend(args) => cmd::trend::run(args, &dash, cli.json),
        Commands::Matchups(args) => cmd::matchups::run(args, &dash, cli.json),
        Commands::Traits(args) => cmd::traits::run(args, &dash, &images, cli.json),
        Commands::Simulate(args) => cmd::simulate::run(args, &dash, &images, cli.json),
        Commands::Data(args) => cmd::data::run(args, &dash, cli.json),
    }
}

/// File config is the base; flags typed on the command line win.
fn resolve_config(cli: &Cli, matches: &ArgMatches) -> DfResult<(Config, SuggestionTable)> {
    let cli_config = cli.command.config();

    let Some(path) = &cli.config_file else {
        return Ok((cli_config.clone(), SuggestionTable::default()));
    };

    info!("⚖️  Loading config from: {}", path);
    let file = DashboardConfig::load_from_file(path)?;
    let suggestions = file.suggestion_table()?;
    let mut config = Config {
        params: file.params,
        tags: file.tags,
    };

    match matches.subcommand() {
        Some((_, sub_matches)) => config.merge_from_cli(cli_config, sub_matches),
        None => warn!("⚠️  No subcommand matches; command-line overrides ignored."),
    }

    Ok((config, suggestions))
}
