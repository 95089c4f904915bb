//! Human-readable and JSON rendering of drill results.

use crate::error::CliError;
use clap::ValueEnum;
use drills_core::dataset::DatasetKind;
use drills_core::josephus::{Outcome, StepRule};
use drills_core::scenario::{
    OrderingReport, RandomDatasetsReport, ScalabilityReport, ScenarioReport, ShiftsReport,
};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `{10, 20, 30}`
pub fn format_set(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

// ── Sort scenarios ──────────────────────────────────────────────────

/// Several scenario reports as one pretty-printed JSON array.
pub fn write_report_list<W: Write>(
    out: &mut W,
    reports: &[ScenarioReport],
) -> Result<(), CliError> {
    write_json(out, reports)
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &ScenarioReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(out, report);
    }

    let scenario = report.scenario();
    writeln!(out, "{}:", scenario.title())?;
    match report {
        ScenarioReport::Scalability(r) => scalability_text(out, r)?,
        ScenarioReport::Ordering(r) => ordering_text(out, r)?,
        ScenarioReport::Shifts(r) => shifts_text(out, r)?,
        ScenarioReport::RandomDatasets(r) => random_text(out, r)?,
    }
    writeln!(out)?;
    writeln!(out, "Explanation:")?;
    for line in scenario.explanation() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    Ok(())
}

fn scalability_text<W: Write>(out: &mut W, r: &ScalabilityReport) -> std::io::Result<()> {
    for run in &r.runs {
        writeln!(
            out,
            "Sorting {} elements took {:.6} seconds with {} shifts.",
            run.len,
            run.elapsed.as_secs_f64(),
            run.shifts
        )?;
    }
    Ok(())
}

fn ordering_text<W: Write>(out: &mut W, r: &OrderingReport) -> std::io::Result<()> {
    writeln!(out, "Unordered set: {}", format_set(&r.unordered.input))?;
    writeln!(out, "Ordered set: {}", format_set(&r.ordered.input))?;
    for (label, labeled) in [("unordered", &r.unordered), ("ordered", &r.ordered)] {
        writeln!(
            out,
            "Sorting {} set took {:.6} seconds with {} shifts.",
            label,
            labeled.run.elapsed.as_secs_f64(),
            labeled.run.shifts
        )?;
    }
    Ok(())
}

fn shifts_text<W: Write>(out: &mut W, r: &ShiftsReport) -> std::io::Result<()> {
    writeln!(
        out,
        "Sorted array before inserting new element: {}",
        format_set(&r.before)
    )?;
    writeln!(
        out,
        "Sorted array after inserting {}: {}",
        r.inserted,
        format_set(&r.after)
    )?;
    writeln!(
        out,
        "Number of shifts when inserting {}: {} shifts.",
        r.inserted, r.shifts
    )
}

fn random_text<W: Write>(out: &mut W, r: &RandomDatasetsReport) -> std::io::Result<()> {
    for d in &r.runs {
        let label = match d.kind {
            DatasetKind::NearlySorted => "Almost sorted",
            DatasetKind::Random => "Random",
            DatasetKind::Ascending => "Ascending",
            DatasetKind::Descending => "Descending",
        };
        writeln!(
            out,
            "{} {}-element dataset shifts: {}",
            label, d.run.len, d.run.shifts
        )?;
    }
    Ok(())
}

// ── Josephus ────────────────────────────────────────────────────────

/// Both games played by the `josephus` driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JosephusReport {
    pub fixed: Outcome,
    pub alternating: Outcome,
}

pub fn write_josephus<W: Write>(
    out: &mut W,
    report: &JosephusReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Text => {
            outcome_text(out, &report.fixed)?;
            outcome_text(out, &report.alternating)?;
            Ok(())
        }
    }
}

/// Round-by-round log followed by the winner line.
pub fn outcome_text<W: Write>(out: &mut W, outcome: &Outcome) -> std::io::Result<()> {
    match outcome.rule {
        StepRule::Fixed { k } => {
            writeln!(out, "\n===| Standard Josephus (Fixed k = {}) |===", k)?;
            for e in &outcome.eliminations {
                writeln!(
                    out,
                    "ROUND {}: Eliminated person at position {}",
                    e.round, e.position
                )?;
            }
            writeln!(
                out,
                "\n>> Winner using fixed k = {} is Person {}",
                k, outcome.winner
            )
        }
        StepRule::Alternating { odd, even } => {
            writeln!(
                out,
                "\n===| Dynamic Josephus (k alternates {} and {}) |===",
                odd, even
            )?;
            for e in &outcome.eliminations {
                writeln!(
                    out,
                    "ROUND {}: Eliminated person at position {} (k = {})",
                    e.round, e.position, e.step
                )?;
            }
            writeln!(
                out,
                "\n>> Winner using dynamic k ({}/{}) is Person {}",
                odd, even, outcome.winner
            )
        }
    }
}
