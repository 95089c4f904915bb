//! Input generators for the sort drills.

use crate::error::DrillError;
use crate::sort::insertion_sort;
use rand::Rng;
use serde::Serialize;

/// Upper bound (exclusive) for generated values unless configured otherwise.
pub const DEFAULT_MAX_VALUE: i32 = 10_000;

/// Shape of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Uniform values in `0..max_value`.
    Random,
    /// Random values whose first half has already been insertion-sorted.
    NearlySorted,
    /// `0, 1, 2, ...`
    Ascending,
    /// `n-1, n-2, ..., 0`
    Descending,
}

impl DatasetKind {
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Random => "random",
            DatasetKind::NearlySorted => "nearly sorted",
            DatasetKind::Ascending => "ascending",
            DatasetKind::Descending => "descending",
        }
    }
}

/// Generate `len` values of the given shape.
///
/// `max_value` bounds the random kinds and must be positive.
pub fn generate<R: Rng + ?Sized>(
    kind: DatasetKind,
    len: usize,
    max_value: i32,
    rng: &mut R,
) -> Result<Vec<i32>, DrillError> {
    let data = match kind {
        DatasetKind::Random => random_values(len, max_value, rng)?,
        DatasetKind::NearlySorted => {
            let mut data = random_values(len, max_value, rng)?;
            insertion_sort(&mut data[..len / 2]);
            data
        }
        DatasetKind::Ascending => (0..len).map(clamp_index).collect(),
        DatasetKind::Descending => (0..len).rev().map(clamp_index).collect(),
    };
    Ok(data)
}

fn random_values<R: Rng + ?Sized>(
    len: usize,
    max_value: i32,
    rng: &mut R,
) -> Result<Vec<i32>, DrillError> {
    if max_value <= 0 {
        return Err(DrillError::EmptyValueRange { max_value });
    }
    Ok((0..len).map(|_| rng.gen_range(0..max_value)).collect())
}

fn clamp_index(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let data = generate(DatasetKind::Random, 500, 100, &mut rng).unwrap();
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|v| (0..100).contains(v)));
    }

    #[test]
    fn nearly_sorted_has_sorted_first_half() {
        let mut rng = StdRng::seed_from_u64(2);
        let data = generate(DatasetKind::NearlySorted, 21, DEFAULT_MAX_VALUE, &mut rng).unwrap();
        assert!(data[..10].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn same_seed_same_data() {
        let a = generate(DatasetKind::Random, 32, 1000, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate(DatasetKind::Random, 32, 1000, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn monotone_kinds() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate(DatasetKind::Ascending, 4, 1, &mut rng).unwrap(),
            vec![0, 1, 2, 3]
        );
        assert_eq!(
            generate(DatasetKind::Descending, 4, 1, &mut rng).unwrap(),
            vec![3, 2, 1, 0]
        );
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(DatasetKind::Random, 3, 0, &mut rng).unwrap_err();
        assert_eq!(err, DrillError::EmptyValueRange { max_value: 0 });
    }
}
