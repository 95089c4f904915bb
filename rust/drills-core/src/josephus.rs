//! Josephus elimination.
//!
//! People stand at positions `1..=n` around a circle. Each round, starting
//! from the current cursor, live people are counted off; the k-th one counted
//! is eliminated and counting resumes at the next live person. The last one
//! standing wins.
//!
//! The step count is either fixed for the whole game or alternates by round
//! parity (`k1` on odd rounds, `k2` on even rounds), see [`StepRule`].
//!
//! ```
//! use drills_core::josephus::{solve, StepRule, DEFAULT_MAX_PEOPLE};
//!
//! let outcome = solve(5, StepRule::fixed(2), DEFAULT_MAX_PEOPLE).unwrap();
//! let order: Vec<usize> = outcome.eliminations.iter().map(|e| e.position).collect();
//! assert_eq!(order, [2, 4, 1, 5]);
//! assert_eq!(outcome.winner, 3);
//! ```

use crate::circle::Circle;
use crate::error::DrillError;
use serde::Serialize;
use std::iter::FusedIterator;

/// Largest circle accepted unless the caller configures otherwise.
pub const DEFAULT_MAX_PEOPLE: usize = 1000;

/// Smallest circle with a meaningful elimination sequence.
pub const MIN_PEOPLE: usize = 2;

// ── Step rules ──────────────────────────────────────────────────────

/// How many live people are counted in a given round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepRule {
    /// The same `k` every round.
    Fixed { k: i64 },
    /// `odd` on rounds 1, 3, 5, ...; `even` on rounds 2, 4, 6, ...
    Alternating { odd: i64, even: i64 },
}

impl StepRule {
    pub fn fixed(k: i64) -> Self {
        StepRule::Fixed { k }
    }

    pub fn alternating(k1: i64, k2: i64) -> Self {
        StepRule::Alternating { odd: k1, even: k2 }
    }

    /// Step count for a 1-based `round`.
    pub fn step_for(&self, round: usize) -> i64 {
        match *self {
            StepRule::Fixed { k } => k,
            StepRule::Alternating { odd, even } => {
                if round % 2 == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }

    /// Reject rules with a non-positive step.
    pub fn validate(&self) -> Result<(), DrillError> {
        match *self {
            StepRule::Fixed { k } => check_step("k", k),
            StepRule::Alternating { odd, even } => {
                check_step("k1", odd)?;
                check_step("k2", even)
            }
        }
    }
}

fn check_step(name: &'static str, value: i64) -> Result<(), DrillError> {
    if value <= 0 {
        return Err(DrillError::InvalidStepCount { name, value });
    }
    Ok(())
}

/// Validate a raw circle size (as typed by a user) against `[2, max_people]`.
pub fn check_people(n: i64, max_people: usize) -> Result<usize, DrillError> {
    match usize::try_from(n) {
        Ok(people) if (MIN_PEOPLE..=max_people).contains(&people) => Ok(people),
        _ => Err(DrillError::InvalidInputSize {
            n: i128::from(n),
            max: max_people,
        }),
    }
}

fn check_circle(people: usize, max_people: usize) -> Result<(), DrillError> {
    if !(MIN_PEOPLE..=max_people).contains(&people) {
        return Err(DrillError::InvalidInputSize {
            n: people as i128,
            max: max_people,
        });
    }
    Ok(())
}

// ── Simulation ──────────────────────────────────────────────────────

/// One round's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Elimination {
    pub round: usize,
    /// 1-based position of the eliminated person.
    pub position: usize,
    /// The step count used this round.
    pub step: u64,
}

/// A game in progress. Yields one [`Elimination`] per round and is
/// exhausted after exactly `n - 1` rounds.
#[derive(Debug, Clone)]
pub struct Simulation {
    circle: Circle,
    rule: StepRule,
    cursor: usize,
    round: usize,
}

impl Simulation {
    /// Validate the parameters and set up a fresh circle of `people`.
    pub fn new(people: usize, rule: StepRule, max_people: usize) -> Result<Self, DrillError> {
        check_circle(people, max_people)?;
        rule.validate()?;
        Ok(Self {
            circle: Circle::new(people),
            rule,
            cursor: 0,
            round: 1,
        })
    }

    pub fn rule(&self) -> StepRule {
        self.rule
    }

    pub fn people(&self) -> usize {
        self.circle.len()
    }

    /// The round the next call to `next()` will play.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn remaining(&self) -> usize {
        self.circle.remaining()
    }

    pub fn is_finished(&self) -> bool {
        self.circle.remaining() <= 1
    }

    /// 1-based position of the survivor once the game is over.
    pub fn winner(&self) -> Option<usize> {
        // The cursor always rests on a live position, and at the end there
        // is only one.
        self.is_finished().then_some(self.cursor + 1)
    }
}

impl Iterator for Simulation {
    type Item = Elimination;

    fn next(&mut self) -> Option<Elimination> {
        if self.is_finished() {
            return None;
        }
        let step = self.rule.step_for(self.round).unsigned_abs();
        // Counting starts on the cursor, so the victim is `step - 1` live hops
        // away; whole laps around the circle change nothing.
        let hops = (step - 1) % self.circle.remaining() as u64;
        let victim = self.circle.advance(self.cursor, hops as usize);
        self.cursor = self.circle.remove(victim);

        let event = Elimination {
            round: self.round,
            position: victim + 1,
            step,
        };
        tracing::trace!(
            round = event.round,
            position = event.position,
            step,
            remaining = self.circle.remaining(),
            "eliminated"
        );
        self.round += 1;
        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.circle.remaining().saturating_sub(1);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Simulation {}

impl FusedIterator for Simulation {}

// ── Outcome ─────────────────────────────────────────────────────────

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub people: usize,
    pub rule: StepRule,
    pub eliminations: Vec<Elimination>,
    /// 1-based position of the survivor.
    pub winner: usize,
}

impl Outcome {
    pub fn rounds(&self) -> usize {
        self.eliminations.len()
    }
}

/// Play a whole game and collect every round.
pub fn solve(people: usize, rule: StepRule, max_people: usize) -> Result<Outcome, DrillError> {
    let mut sim = Simulation::new(people, rule, max_people)?;
    let eliminations: Vec<Elimination> = sim.by_ref().collect();
    let winner = sim.cursor + 1;
    tracing::debug!(people, rounds = eliminations.len(), winner, "josephus finished");
    Ok(Outcome {
        people,
        rule,
        eliminations,
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct liveness-array scan: count live slots from the cursor one
    /// position at a time.
    fn scan_reference(n: usize, rule: StepRule) -> (Vec<usize>, usize) {
        let mut alive = vec![true; n];
        let mut remaining = n;
        let mut index = 0;
        let mut round = 1;
        let mut order = Vec::new();
        while remaining > 1 {
            let k = rule.step_for(round);
            let mut count = 0;
            loop {
                if alive[index] {
                    count += 1;
                }
                if count == k {
                    break;
                }
                index = (index + 1) % n;
            }
            alive[index] = false;
            remaining -= 1;
            order.push(index + 1);
            loop {
                index = (index + 1) % n;
                if alive[index] {
                    break;
                }
            }
            round += 1;
        }
        let winner = alive.iter().position(|a| *a).map(|p| p + 1).unwrap_or(0);
        (order, winner)
    }

    fn positions(outcome: &Outcome) -> Vec<usize> {
        outcome.eliminations.iter().map(|e| e.position).collect()
    }

    #[test]
    fn five_people_step_two() {
        let outcome = solve(5, StepRule::fixed(2), DEFAULT_MAX_PEOPLE).unwrap();
        assert_eq!(positions(&outcome), vec![2, 4, 1, 5]);
        assert_eq!(outcome.winner, 3);
        let rounds: Vec<usize> = outcome.eliminations.iter().map(|e| e.round).collect();
        assert_eq!(rounds, vec![1, 2, 3, 4]);
    }

    #[test]
    fn step_one_eliminates_in_order() {
        let outcome = solve(6, StepRule::fixed(1), DEFAULT_MAX_PEOPLE).unwrap();
        assert_eq!(positions(&outcome), vec![1, 2, 3, 4, 5]);
        assert_eq!(outcome.winner, 6);
    }

    #[test]
    fn step_larger_than_circle_wraps() {
        // 3 people, k = 7: counting 1,2,3,1,2,3,1 lands on position 1.
        let outcome = solve(3, StepRule::fixed(7), DEFAULT_MAX_PEOPLE).unwrap();
        assert_eq!(outcome.eliminations[0].position, 1);
        let (order, winner) = scan_reference(3, StepRule::fixed(7));
        assert_eq!(positions(&outcome), order);
        assert_eq!(outcome.winner, winner);
    }

    #[test]
    fn alternating_uses_round_parity() {
        let outcome = solve(6, StepRule::alternating(2, 3), DEFAULT_MAX_PEOPLE).unwrap();
        let steps: Vec<u64> = outcome.eliminations.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![2, 3, 2, 3, 2]);
        let (order, winner) = scan_reference(6, StepRule::alternating(2, 3));
        assert_eq!(positions(&outcome), order);
        assert_eq!(outcome.winner, winner);
    }

    #[test]
    fn alternating_with_equal_steps_matches_fixed() {
        for n in 2..40 {
            for k in 1..8 {
                let fixed = solve(n, StepRule::fixed(k), DEFAULT_MAX_PEOPLE).unwrap();
                let alt = solve(n, StepRule::alternating(k, k), DEFAULT_MAX_PEOPLE).unwrap();
                assert_eq!(positions(&fixed), positions(&alt), "n={} k={}", n, k);
                assert_eq!(fixed.winner, alt.winner);
            }
        }
    }

    #[test]
    fn matches_liveness_scan() {
        for n in 2..30 {
            for k1 in 1..9 {
                for k2 in [1, 2, 5, 13] {
                    let rule = StepRule::alternating(k1, k2);
                    let outcome = solve(n, rule, DEFAULT_MAX_PEOPLE).unwrap();
                    let (order, winner) = scan_reference(n, rule);
                    assert_eq!(positions(&outcome), order, "n={} rule={:?}", n, rule);
                    assert_eq!(outcome.winner, winner);
                }
            }
        }
    }

    #[test]
    fn fixed_step_matches_closed_form() {
        for k in 1..10i64 {
            let mut survivor = 0usize;
            for n in 2..80usize {
                survivor = (survivor + k as usize) % n;
                let outcome = solve(n, StepRule::fixed(k), DEFAULT_MAX_PEOPLE).unwrap();
                assert_eq!(outcome.winner, survivor + 1, "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn always_n_minus_one_rounds() {
        for n in [2usize, 3, 10, 257, 1000] {
            let outcome = solve(n, StepRule::alternating(3, 11), DEFAULT_MAX_PEOPLE).unwrap();
            assert_eq!(outcome.rounds(), n - 1);
            assert!((1..=n).contains(&outcome.winner));

            let mut seen = outcome.eliminations.iter().map(|e| e.position).collect::<Vec<_>>();
            seen.push(outcome.winner);
            seen.sort_unstable();
            assert_eq!(seen, (1..=n).collect::<Vec<_>>(), "each position leaves once");
        }
    }

    #[test]
    fn rejects_bad_circle_sizes() {
        for n in [0usize, 1, 1001] {
            let err = solve(n, StepRule::fixed(2), DEFAULT_MAX_PEOPLE).unwrap_err();
            assert!(matches!(err, DrillError::InvalidInputSize { max: 1000, .. }));
        }
        assert_eq!(
            check_people(-4, 10),
            Err(DrillError::InvalidInputSize { n: -4, max: 10 })
        );
        assert_eq!(check_people(10, 10), Ok(10));
    }

    #[test]
    fn oversized_circle_reports_its_size() {
        let err = Simulation::new(usize::MAX, StepRule::fixed(2), 10).unwrap_err();
        assert_eq!(
            err,
            DrillError::InvalidInputSize {
                n: usize::MAX as i128,
                max: 10
            }
        );
    }

    #[test]
    fn configurable_upper_bound() {
        let outcome = solve(5000, StepRule::fixed(3), 10_000).unwrap();
        assert_eq!(outcome.rounds(), 4999);
    }

    #[test]
    fn rejects_non_positive_steps() {
        assert_eq!(
            solve(5, StepRule::fixed(0), DEFAULT_MAX_PEOPLE).unwrap_err(),
            DrillError::InvalidStepCount { name: "k", value: 0 }
        );
        assert_eq!(
            solve(5, StepRule::alternating(-1, 2), DEFAULT_MAX_PEOPLE).unwrap_err(),
            DrillError::InvalidStepCount { name: "k1", value: -1 }
        );
        assert_eq!(
            solve(5, StepRule::alternating(2, 0), DEFAULT_MAX_PEOPLE).unwrap_err(),
            DrillError::InvalidStepCount { name: "k2", value: 0 }
        );
    }

    #[test]
    fn size_checked_before_steps() {
        let err = solve(1, StepRule::fixed(0), DEFAULT_MAX_PEOPLE).unwrap_err();
        assert!(matches!(err, DrillError::InvalidInputSize { .. }));
    }

    #[test]
    fn simulation_streams_rounds() {
        let mut sim = Simulation::new(4, StepRule::fixed(2), DEFAULT_MAX_PEOPLE).unwrap();
        assert_eq!(sim.len(), 3);
        assert_eq!(sim.winner(), None);
        let first = sim.next().unwrap();
        assert_eq!(first.position, 2);
        assert_eq!(sim.round(), 2);
        assert_eq!(sim.remaining(), 3);
        let rest: Vec<Elimination> = sim.by_ref().collect();
        assert_eq!(rest.len(), 2);
        assert!(sim.is_finished());
        assert_eq!(sim.next(), None);
        assert_eq!(sim.winner(), Some(1));
    }

    #[test]
    fn outcome_serializes_rule_kind() {
        let outcome = solve(3, StepRule::alternating(1, 2), DEFAULT_MAX_PEOPLE).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["rule"]["kind"], "alternating");
        assert_eq!(json["rule"]["odd"], 1);
        assert_eq!(json["eliminations"].as_array().unwrap().len(), 2);
    }
}
