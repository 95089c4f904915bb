//! Drills Benchmark Runner
//!
//! Standalone binary that times the counting insertion sort against the
//! standard library sorts, and the Josephus solver at several circle sizes,
//! with text/JSON/CSV output and peak memory tracking.
//!
//! Usage: `drills-bench [text|json|csv] [iterations]`

use drills_core::dataset::{generate, DatasetKind, DEFAULT_MAX_VALUE};
use drills_core::josephus::{solve, StepRule};
use drills_core::DrillError;
use drills_core::sort::{InsertionSorter, Sorter, StdSorter, StdUnstableSorter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::time::{Duration, Instant};

const SEED: u64 = 0x5eed;

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub name: String,
    pub dataset: String,
    pub len: usize,
    pub duration_ms: f64,
    pub elements_per_sec: f64,
    /// Shifts per run for counting sorters, rounds for Josephus.
    pub work: u64,
    pub peak_rss_kb: Option<u64>,
    pub iterations: u32,
}

/// Read a `kB` field from /proc/self/status on Linux.
fn proc_status_kb(keys: &[&str]) -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        status
            .lines()
            .find(|line| keys.iter().any(|k| line.starts_with(k)))
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|v| v.parse::<u64>().ok())
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = keys;
        None
    }
}

/// Peak RSS, or `None` off Linux.
pub fn peak_rss_kb() -> Option<u64> {
    proc_status_kb(&["VmHWM:", "VmPeak:"])
}

/// Time `iterations` sorts of fresh copies of `input`.
fn bench_sorter(sorter: &dyn Sorter, input: &[i32], iterations: u32) -> (Duration, u64) {
    let mut total = Duration::ZERO;
    let mut work = 0;
    for _ in 0..iterations {
        let mut data = input.to_vec();
        let start = Instant::now();
        work = std::hint::black_box(sorter.sort(&mut data));
        total += start.elapsed();
    }
    (total, work)
}

fn bench_josephus(
    people: usize,
    rule: StepRule,
    iterations: u32,
) -> Result<(Duration, u64), DrillError> {
    let mut total = Duration::ZERO;
    let mut rounds = 0;
    for _ in 0..iterations {
        let start = Instant::now();
        let outcome = solve(people, rule, people)?;
        rounds = std::hint::black_box(outcome.rounds()) as u64;
        total += start.elapsed();
    }
    Ok((total, rounds))
}

fn to_result(
    name: &str,
    dataset: &str,
    len: usize,
    (total, work): (Duration, u64),
    iterations: u32,
) -> BenchResult {
    let avg = total.as_secs_f64() / f64::from(iterations.max(1));
    BenchResult {
        name: name.to_string(),
        dataset: dataset.to_string(),
        len,
        duration_ms: avg * 1000.0,
        elements_per_sec: if avg > 0.0 { len as f64 / avg } else { 0.0 },
        work,
        peak_rss_kb: peak_rss_kb(),
        iterations,
    }
}

fn print_csv_header() {
    println!("name,dataset,len,duration_ms,elements_per_sec,work,peak_rss_kb,iterations");
}

fn print_csv_row(r: &BenchResult) {
    println!(
        "{},{},{},{:.3},{:.0},{},{},{}",
        r.name,
        r.dataset,
        r.len,
        r.duration_ms,
        r.elements_per_sec,
        r.work,
        r.peak_rss_kb.map_or("N/A".to_string(), |v| v.to_string()),
        r.iterations,
    );
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let output_format = args.get(1).map(|s| s.as_str()).unwrap_or("text");
    let iterations: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);

    let mut rng = StdRng::seed_from_u64(SEED);
    let sorters: [&dyn Sorter; 3] = [&InsertionSorter, &StdSorter, &StdUnstableSorter];
    let kinds = [
        DatasetKind::Random,
        DatasetKind::NearlySorted,
        DatasetKind::Descending,
    ];

    let mut results: Vec<BenchResult> = Vec::new();

    for len in [100usize, 1_000, 5_000] {
        for kind in kinds {
            let input = match generate(kind, len, DEFAULT_MAX_VALUE, &mut rng) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("Warning: cannot generate {} data: {}", kind.label(), e);
                    continue;
                }
            };
            for sorter in sorters {
                let timing = bench_sorter(sorter, &input, iterations);
                results.push(to_result(sorter.name(), kind.label(), len, timing, iterations));
            }
        }
    }

    for people in [100usize, 1_000, 10_000] {
        for (label, rule) in [
            ("fixed k=3", StepRule::fixed(3)),
            ("alternating 2/7", StepRule::alternating(2, 7)),
        ] {
            match bench_josephus(people, rule, iterations) {
                Ok(timing) => {
                    results.push(to_result("josephus", label, people, timing, iterations))
                }
                Err(e) => eprintln!("Warning: cannot play josephus {}: {}", label, e),
            }
        }
    }

    match output_format {
        "csv" => {
            print_csv_header();
            for r in &results {
                print_csv_row(r);
            }
        }
        "json" => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: cannot encode results: {}", e);
                std::process::exit(1);
            }
        },
        _ => {
            println!("Drills Benchmarks");
            println!("=================");
            println!();
            for r in &results {
                println!(
                    "[{}/{} n={}] {:.3}ms avg ({} iters) | {:.0} elem/s | work {} | RSS: {}",
                    r.name,
                    r.dataset,
                    r.len,
                    r.duration_ms,
                    r.iterations,
                    r.elements_per_sec,
                    r.work,
                    r.peak_rss_kb
                        .map_or("N/A".to_string(), |v| format!("{}kB", v)),
                );
            }
        }
    }
}
