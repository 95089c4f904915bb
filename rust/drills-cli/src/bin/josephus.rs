//! josephus: last-one-standing simulation with fixed and alternating steps.

use drills_cli::colors::red;
use drills_cli::config::DrillsConfig;
use drills_cli::josephus_cmd::{self, JosephusArgs};
use drills_cli::prompt::Prompter;
use drills_cli::render::OutputFormat;
use drills_cli::{logging, CliError};

use clap::Parser as ClapParser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(
    name = "josephus",
    version,
    about = "Josephus elimination with a fixed k and with k alternating between k1 and k2",
    long_about = "Plays the Josephus game twice on the same circle: once with a fixed step \
                  k, once with k1 on odd rounds and k2 on even rounds.\n\n\
                  Any value not given as a flag is read from stdin."
)]
struct Cli {
    /// Number of people in the circle
    #[arg(long, allow_negative_numbers = true)]
    people: Option<i64>,

    /// Step count for the fixed game
    #[arg(long, allow_negative_numbers = true)]
    k: Option<i64>,

    /// Step count for odd rounds of the alternating game
    #[arg(long, allow_negative_numbers = true)]
    k1: Option<i64>,

    /// Step count for even rounds of the alternating game
    #[arg(long, allow_negative_numbers = true)]
    k2: Option<i64>,

    /// Largest accepted circle (overrides drills.toml)
    #[arg(long)]
    max_people: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Load settings from this file instead of searching for drills.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log each round to stderr
    #[arg(short, long)]
    verbose: bool,
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
    let max_people = cli.max_people.unwrap_or(file_config.josephus.max_people);
    let args = JosephusArgs {
        people: cli.people,
        k: cli.k,
        k1: cli.k1,
        k2: cli.k2,
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut prompter = match cli.format {
        OutputFormat::Text => Prompter::new(stdin, stdout),
        OutputFormat::Json => Prompter::quiet(stdin, stdout),
    };
    let report = josephus_cmd::run(&args, max_people, cli.format, &mut prompter)?;
    prompter.output().flush()?;

    tracing::debug!(
        fixed_winner = report.fixed.winner,
        alternating_winner = report.alternating.winner,
        "josephus finished"
    );
    Ok(())
}
