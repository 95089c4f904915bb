//! Canned insertion-sort demonstrations.
//!
//! Each [`Scenario`] has its own config struct and report type. Running a
//! scenario never prints anything; rendering is left to the caller.

use crate::dataset::{generate, DatasetKind, DEFAULT_MAX_VALUE};
use crate::error::DrillError;
use crate::sort::{insertion_sort, timed_sort, SortRun};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Random data at a small and a large size, to show quadratic growth.
    Scalability,
    /// A shuffled five-element set against the same values in order.
    Ordering,
    /// Shifts needed to insert one element into a sorted run.
    Shifts,
    /// Random against nearly-sorted data at a couple of sizes.
    RandomDatasets,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Scalability,
        Scenario::Ordering,
        Scenario::Shifts,
        Scenario::RandomDatasets,
    ];

    /// Map a 1-based menu number to its scenario.
    pub fn from_menu(choice: u32) -> Option<Self> {
        let idx = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Scenario::Scalability => "Test Scalability (Time Complexity)",
            Scenario::Ordering => "Test Limited Parallelism",
            Scenario::Shifts => "Test High Number of Shifts (Insert New Element)",
            Scenario::RandomDatasets => "Test Random Dataset",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Scalability => "Testing Scalability",
            Scenario::Ordering => "Testing Limited Parallelism",
            Scenario::Shifts => "Testing High Number of Shifts",
            Scenario::RandomDatasets => "Testing Random Dataset",
        }
    }

    pub fn explanation(&self) -> [&'static str; 2] {
        match self {
            Scenario::Scalability => [
                "Notice the drastic increase in execution time due to O(n²) complexity.",
                "As dataset size grows, Insertion Sort becomes increasingly inefficient.",
            ],
            Scenario::Ordering => [
                "Insertion Sort works sequentially, causing high shifts in unordered data.",
                "Sorted input has minimal shifts, but parallel optimization is still lacking.",
            ],
            Scenario::Shifts => [
                "Inserting a new element causes multiple elements to shift positions.",
                "For larger datasets, this results in excessive memory operations.",
            ],
            Scenario::RandomDatasets => [
                "Random datasets require many shifts, while nearly sorted datasets are more efficient.",
                "The larger the dataset, the more Insertion Sort struggles.",
            ],
        }
    }
}

// ── Configs ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalabilityConfig {
    pub sizes: Vec<usize>,
    pub max_value: i32,
}

impl Default for ScalabilityConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 100_000],
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingConfig {
    pub unordered: Vec<i32>,
    pub ordered: Vec<i32>,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            unordered: vec![30, 20, 50, 40, 10],
            ordered: vec![10, 20, 30, 40, 50],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftsConfig {
    /// Already-sorted run the new element is appended to.
    pub sorted: Vec<i32>,
    pub inserted: i32,
}

impl Default for ShiftsConfig {
    fn default() -> Self {
        Self {
            sorted: vec![10, 20, 30, 40, 50],
            inserted: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomDatasetsConfig {
    pub sizes: Vec<usize>,
    pub max_value: i32,
}

impl Default for RandomDatasetsConfig {
    fn default() -> Self {
        Self {
            sizes: vec![5, 20],
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub scalability: ScalabilityConfig,
    pub ordering: OrderingConfig,
    pub shifts: ShiftsConfig,
    pub random_datasets: RandomDatasetsConfig,
}

// ── Reports ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalabilityReport {
    pub runs: Vec<SortRun>,
}

/// A fixed input and what sorting it cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledRun {
    pub input: Vec<i32>,
    pub run: SortRun,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderingReport {
    pub unordered: LabeledRun,
    pub ordered: LabeledRun,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftsReport {
    pub before: Vec<i32>,
    pub inserted: i32,
    pub after: Vec<i32>,
    pub shifts: u64,
    /// Re-sorting the original run, for contrast.
    pub baseline: SortRun,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRun {
    pub kind: DatasetKind,
    pub run: SortRun,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomDatasetsReport {
    pub runs: Vec<DatasetRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum ScenarioReport {
    Scalability(ScalabilityReport),
    Ordering(OrderingReport),
    Shifts(ShiftsReport),
    RandomDatasets(RandomDatasetsReport),
}

impl ScenarioReport {
    pub fn scenario(&self) -> Scenario {
        match self {
            ScenarioReport::Scalability(_) => Scenario::Scalability,
            ScenarioReport::Ordering(_) => Scenario::Ordering,
            ScenarioReport::Shifts(_) => Scenario::Shifts,
            ScenarioReport::RandomDatasets(_) => Scenario::RandomDatasets,
        }
    }
}

// ── Running ─────────────────────────────────────────────────────────

/// Run one scenario with its slice of `config`.
pub fn run<R: Rng + ?Sized>(
    scenario: Scenario,
    config: &ScenarioConfig,
    rng: &mut R,
) -> Result<ScenarioReport, DrillError> {
    tracing::debug!(?scenario, "running scenario");
    let report = match scenario {
        Scenario::Scalability => ScenarioReport::Scalability(scalability(&config.scalability, rng)?),
        Scenario::Ordering => ScenarioReport::Ordering(ordering(&config.ordering)),
        Scenario::Shifts => ScenarioReport::Shifts(shifts(&config.shifts)),
        Scenario::RandomDatasets => {
            ScenarioReport::RandomDatasets(random_datasets(&config.random_datasets, rng)?)
        }
    };
    Ok(report)
}

pub fn scalability<R: Rng + ?Sized>(
    config: &ScalabilityConfig,
    rng: &mut R,
) -> Result<ScalabilityReport, DrillError> {
    let mut runs = Vec::with_capacity(config.sizes.len());
    for &len in &config.sizes {
        let mut data = generate(DatasetKind::Random, len, config.max_value, rng)?;
        runs.push(timed_sort(&mut data));
    }
    Ok(ScalabilityReport { runs })
}

pub fn ordering(config: &OrderingConfig) -> OrderingReport {
    let labeled = |input: &[i32]| {
        let mut data = input.to_vec();
        LabeledRun {
            input: input.to_vec(),
            run: timed_sort(&mut data),
        }
    };
    OrderingReport {
        unordered: labeled(&config.unordered),
        ordered: labeled(&config.ordered),
    }
}

pub fn shifts(config: &ShiftsConfig) -> ShiftsReport {
    let mut resorted = config.sorted.clone();
    let baseline = timed_sort(&mut resorted);

    let mut after = config.sorted.clone();
    after.push(config.inserted);
    let shifts = insertion_sort(&mut after);

    ShiftsReport {
        before: config.sorted.clone(),
        inserted: config.inserted,
        after,
        shifts,
        baseline,
    }
}

pub fn random_datasets<R: Rng + ?Sized>(
    config: &RandomDatasetsConfig,
    rng: &mut R,
) -> Result<RandomDatasetsReport, DrillError> {
    let mut runs = Vec::with_capacity(config.sizes.len() * 2);
    for &len in &config.sizes {
        for kind in [DatasetKind::Random, DatasetKind::NearlySorted] {
            let mut data = generate(kind, len, config.max_value, rng)?;
            runs.push(DatasetRun {
                kind,
                run: timed_sort(&mut data),
            });
        }
    }
    Ok(RandomDatasetsReport { runs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn menu_numbers_map_to_scenarios() {
        assert_eq!(Scenario::from_menu(1), Some(Scenario::Scalability));
        assert_eq!(Scenario::from_menu(4), Some(Scenario::RandomDatasets));
        assert_eq!(Scenario::from_menu(0), None);
        assert_eq!(Scenario::from_menu(5), None);
    }

    #[test]
    fn ordering_counts_inversions() {
        let report = ordering(&OrderingConfig::default());
        assert_eq!(report.unordered.run.shifts, 6);
        assert_eq!(report.ordered.run.shifts, 0);
        assert_eq!(report.unordered.input, vec![30, 20, 50, 40, 10]);
    }

    #[test]
    fn inserting_25_shifts_three() {
        let report = shifts(&ShiftsConfig::default());
        assert_eq!(report.shifts, 3);
        assert_eq!(report.after, vec![10, 20, 25, 30, 40, 50]);
        assert_eq!(report.baseline.shifts, 0);
    }

    #[test]
    fn random_datasets_pairs_each_size() {
        let mut rng = StdRng::seed_from_u64(3);
        let report = random_datasets(&RandomDatasetsConfig::default(), &mut rng).unwrap();
        let shape: Vec<(DatasetKind, usize)> =
            report.runs.iter().map(|r| (r.kind, r.run.len)).collect();
        assert_eq!(
            shape,
            vec![
                (DatasetKind::Random, 5),
                (DatasetKind::NearlySorted, 5),
                (DatasetKind::Random, 20),
                (DatasetKind::NearlySorted, 20),
            ]
        );
    }

    #[test]
    fn scalability_uses_configured_sizes() {
        let config = ScalabilityConfig {
            sizes: vec![10, 50],
            max_value: 100,
        };
        let mut rng = StdRng::seed_from_u64(4);
        let report = scalability(&config, &mut rng).unwrap();
        let lens: Vec<usize> = report.runs.iter().map(|r| r.len).collect();
        assert_eq!(lens, vec![10, 50]);
        assert!(report.runs.iter().all(|r| r.shifts <= (r.len * r.len) as u64));
    }

    #[test]
    fn run_dispatches_and_tags_report() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut config = ScenarioConfig::default();
        config.scalability.sizes = vec![8];
        for scenario in Scenario::ALL {
            let report = run(scenario, &config, &mut rng).unwrap();
            assert_eq!(report.scenario(), scenario);
        }
    }

    #[test]
    fn bad_value_range_fails_fast() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut config = ScenarioConfig::default();
        config.random_datasets.max_value = -5;
        let err = run(Scenario::RandomDatasets, &config, &mut rng).unwrap_err();
        assert_eq!(err, DrillError::EmptyValueRange { max_value: -5 });
    }

    #[test]
    fn report_json_is_tagged() {
        let report = ScenarioReport::Shifts(shifts(&ShiftsConfig::default()));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["scenario"], "shifts");
        assert_eq!(json["shifts"], 3);
    }
}
