//! insort: insertion sort limitation tests.

use drills_cli::colors::{gray, red, status_label};
use drills_cli::config::DrillsConfig;
use drills_cli::prompt::Prompter;
use drills_cli::render::OutputFormat;
use drills_cli::{logging, sort_cmd, CliError};
use drills_core::scenario::Scenario;

use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(
    name = "insort",
    version,
    about = "Shows where insertion sort struggles, one canned scenario at a time"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random datasets (overrides drills.toml)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Load settings from this file instead of searching for drills.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log scenario progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Random data at a small and a large size
    Scalability,
    /// Unordered vs ordered five-element sets
    Ordering,
    /// Shifts needed to insert one element into a sorted run
    Shifts,
    /// Random vs nearly-sorted datasets
    Random,
    /// Every scenario, in menu order
    All,
    /// Interactive menu (the default)
    Menu,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", red("error:"), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let file_config = match &cli.config {
        Some(path) => DrillsConfig::load_from(path)?,
        None => DrillsConfig::load(),
    };
    let scenarios = file_config.scenario_config();
    let seed = cli.seed.or(file_config.sort.seed);
    let mut rng = sort_cmd::make_rng(seed);
    let stdout = io::stdout();

    let selected = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Scalability => vec![Scenario::Scalability],
        Commands::Ordering => vec![Scenario::Ordering],
        Commands::Shifts => vec![Scenario::Shifts],
        Commands::Random => vec![Scenario::RandomDatasets],
        Commands::All => Scenario::ALL.to_vec(),
        Commands::Menu => {
            let stdin = io::stdin().lock();
            let mut prompter = match cli.format {
                OutputFormat::Text => Prompter::new(stdin, stdout.lock()),
                OutputFormat::Json => Prompter::quiet(stdin, stdout.lock()),
            };
            sort_cmd::run_menu_session(&mut prompter, &scenarios, &mut rng, cli.format)?;
            prompter.output().flush()?;
            return Ok(());
        }
    };

    if cli.format == OutputFormat::Text {
        if let Some(seed) = seed {
            eprintln!("{} {}", status_label("Seeded"), gray(&seed.to_string()));
        }
    }
    let mut out = stdout.lock();
    sort_cmd::run_all(&selected, &scenarios, &mut rng, cli.format, &mut out)?;
    out.flush()?;
    Ok(())
}
