//! Insertion sort with shift accounting.
//!
//! The interesting number here is not the sorted output but how much work
//! it took to get there: every time an element moves one slot to the right
//! to make room for the key being inserted, that is one *shift*. For a
//! sequence of length `n` the count ranges from `0` (already sorted) to
//! `n(n-1)/2` (strictly descending), and always equals the number of
//! inversions in the input.

use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};

/// Sort `seq` ascending in place and return the number of shifts performed.
///
/// Elements are moved, not swapped: the key is held aside while larger
/// predecessors slide right, then written once into the gap. The strict `>`
/// comparison keeps equal elements in their original order.
///
/// ```
/// use drills_core::sort::insertion_sort;
///
/// let mut data = [10, 20, 30, 40, 50, 25];
/// assert_eq!(insertion_sort(&mut data), 3);
/// assert_eq!(data, [10, 20, 25, 30, 40, 50]);
/// ```
pub fn insertion_sort(seq: &mut [i32]) -> u64 {
    let mut shifts = 0u64;
    for i in 1..seq.len() {
        let key = seq[i];
        let mut j = i;
        while j > 0 && seq[j - 1] > key {
            seq[j] = seq[j - 1];
            j -= 1;
            shifts += 1;
        }
        seq[j] = key;
    }
    shifts
}

/// Outcome of one timed sort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SortRun {
    pub len: usize,
    pub shifts: u64,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Run [`insertion_sort`] on `seq`, measuring wall-clock time around the call.
pub fn timed_sort(seq: &mut [i32]) -> SortRun {
    timed_with(&InsertionSorter, seq)
}

/// Run any [`Sorter`] on `seq`, measuring wall-clock time around the call.
pub fn timed_with<S: Sorter + ?Sized>(sorter: &S, seq: &mut [i32]) -> SortRun {
    let start = Instant::now();
    let shifts = sorter.sort(seq);
    let elapsed = start.elapsed();
    tracing::debug!(
        sorter = sorter.name(),
        len = seq.len(),
        shifts,
        elapsed_us = elapsed.as_micros() as u64,
        "sorted"
    );
    SortRun {
        len: seq.len(),
        shifts,
        elapsed,
    }
}

// ── Sorters ─────────────────────────────────────────────────────────

/// A sorting routine that can report its shift count.
///
/// Sorters that do not track element moves return `0`.
pub trait Sorter {
    fn name(&self) -> &'static str;
    fn sort(&self, data: &mut [i32]) -> u64;
}

/// The shift-counting insertion sort.
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn sort(&self, data: &mut [i32]) -> u64 {
        insertion_sort(data)
    }
}

/// Standard library stable sort, for comparison.
pub struct StdSorter;

impl Sorter for StdSorter {
    fn name(&self) -> &'static str {
        "std"
    }

    fn sort(&self, data: &mut [i32]) -> u64 {
        data.sort();
        0
    }
}

/// Standard library unstable sort, for comparison.
pub struct StdUnstableSorter;

impl Sorter for StdUnstableSorter {
    fn name(&self) -> &'static str {
        "std_unstable"
    }

    fn sort(&self, data: &mut [i32]) -> u64 {
        data.sort_unstable();
        0
    }
}
