//! `insort` command driver.

use crate::error::CliError;
use crate::menu::run_menu;
use crate::prompt::Prompter;
use crate::render::{write_report, write_report_list, OutputFormat};
use drills_core::scenario::{self, Scenario, ScenarioConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};

/// Seeded RNG when `seed` is given, OS-entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run one scenario and render its report.
pub fn run_scenario<R: Rng + ?Sized, W: Write>(
    scenario: Scenario,
    config: &ScenarioConfig,
    rng: &mut R,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let report = scenario::run(scenario, config, rng)?;
    write_report(out, &report, format)
}

/// Run several scenarios in order, stopping at the first failure.
///
/// JSON output is a single array holding every report.
pub fn run_all<R: Rng + ?Sized, W: Write>(
    scenarios: &[Scenario],
    config: &ScenarioConfig,
    rng: &mut R,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        let reports = scenarios
            .iter()
            .map(|&scenario| scenario::run(scenario, config, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        return write_report_list(out, &reports);
    }
    for &scenario in scenarios {
        run_scenario(scenario, config, rng, format, out)?;
    }
    Ok(())
}

/// Drive the interactive menu.
///
/// Text output renders each report as soon as it is chosen. JSON output
/// expects a quiet prompter and writes every chosen report as one array
/// once the menu exits.
pub fn run_menu_session<I: BufRead, W: Write, R: Rng + ?Sized>(
    prompter: &mut Prompter<I, W>,
    config: &ScenarioConfig,
    rng: &mut R,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => run_menu(prompter, |scenario, out| {
            run_scenario(scenario, config, &mut *rng, format, out)
        }),
        OutputFormat::Json => {
            let mut reports = Vec::new();
            run_menu(prompter, |scenario, _out| {
                reports.push(scenario::run(scenario, config, &mut *rng)?);
                Ok(())
            })?;
            write_report_list(prompter.output(), &reports)
        }
    }
}
