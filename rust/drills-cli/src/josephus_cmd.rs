//! `josephus` command driver.
//!
//! Reads the circle size and step counts (from flags, or prompting for any
//! that are missing), then plays the fixed and the alternating game.

use crate::error::CliError;
use crate::prompt::Prompter;
use crate::render::{write_josephus, JosephusReport, OutputFormat};
use drills_core::josephus::{check_people, solve, StepRule};
use std::io::{BufRead, Write};

/// Values supplied on the command line; `None` means "ask".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JosephusArgs {
    pub people: Option<i64>,
    pub k: Option<i64>,
    pub k1: Option<i64>,
    pub k2: Option<i64>,
}

fn value_or_ask<R: BufRead, W: Write>(
    given: Option<i64>,
    prompter: &mut Prompter<R, W>,
    prompt: &str,
    field: &'static str,
) -> Result<i64, CliError> {
    match given {
        Some(v) => Ok(v),
        None => prompter.ask_i64(prompt, field),
    }
}

pub fn run<R: BufRead, W: Write>(
    args: &JosephusArgs,
    max_people: usize,
    format: OutputFormat,
    prompter: &mut Prompter<R, W>,
) -> Result<JosephusReport, CliError> {
    let raw = value_or_ask(
        args.people,
        prompter,
        "Enter number of people: ",
        "number of people",
    )?;
    // Size is rejected before any step count is asked for.
    let people = check_people(raw, max_people)?;

    if args.k.is_none() {
        prompter.say("\n=== FIXED Josephus ===\n")?;
    }
    let k = value_or_ask(args.k, prompter, "Enter value for fixed k: ", "k")?;

    if args.k1.is_none() || args.k2.is_none() {
        prompter.say("\n=== DYNAMIC Josephus ===\n")?;
    }
    let k1 = value_or_ask(
        args.k1,
        prompter,
        "Enter value for k1 (used in ODD rounds): ",
        "k1",
    )?;
    let k2 = value_or_ask(
        args.k2,
        prompter,
        "Enter value for k2 (used in EVEN rounds): ",
        "k2",
    )?;

    let fixed_rule = StepRule::fixed(k);
    let alternating_rule = StepRule::alternating(k1, k2);
    fixed_rule.validate()?;
    alternating_rule.validate()?;

    tracing::debug!(people, k, k1, k2, "playing josephus");
    let report = JosephusReport {
        fixed: solve(people, fixed_rule, max_people)?,
        alternating: solve(people, alternating_rule, max_people)?,
    };
    write_josephus(prompter.output(), &report, format)?;
    Ok(report)
}
