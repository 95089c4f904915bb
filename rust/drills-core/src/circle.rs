//! A circle of positions that supports cheap removal.
//!
//! Positions are `0..n` in fixed cyclic order. Live positions are threaded
//! through `next`/`prev` links so walking to the k-th live neighbour never
//! touches eliminated slots, and removal is O(1).

#[derive(Debug, Clone)]
pub struct Circle {
    next: Vec<usize>,
    prev: Vec<usize>,
    alive: Vec<bool>,
    remaining: usize,
}

impl Circle {
    /// A circle of `n` live positions.
    pub fn new(n: usize) -> Self {
        let next = (0..n).map(|i| (i + 1) % n).collect();
        let prev = (0..n).map(|i| (i + n - 1) % n).collect();
        Self {
            next,
            prev,
            alive: vec![true; n],
            remaining: n,
        }
    }

    /// Total number of positions, live or not.
    pub fn len(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Number of live positions.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_alive(&self, pos: usize) -> bool {
        self.alive.get(pos).copied().unwrap_or(false)
    }

    /// Walk `hops` live positions forward from the live position `from`.
    pub fn advance(&self, from: usize, hops: usize) -> usize {
        debug_assert!(self.is_alive(from));
        let mut at = from;
        for _ in 0..hops {
            at = self.next[at];
        }
        at
    }

    /// Eliminate the live position `pos` and return the live position that
    /// follows it in cyclic order.
    ///
    /// Must not be called on the last live position.
    pub fn remove(&mut self, pos: usize) -> usize {
        debug_assert!(self.is_alive(pos));
        debug_assert!(self.remaining > 1);
        let (before, after) = (self.prev[pos], self.next[pos]);
        self.next[before] = after;
        self.prev[after] = before;
        self.alive[pos] = false;
        self.remaining -= 1;
        after
    }

    /// Live positions in ascending order.
    pub fn survivors(&self) -> impl Iterator<Item = usize> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_circle_is_fully_alive() {
        let circle = Circle::new(4);
        assert_eq!(circle.len(), 4);
        assert_eq!(circle.remaining(), 4);
        assert_eq!(circle.survivors().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert!(!circle.is_alive(4));
    }

    #[test]
    fn advance_wraps_around() {
        let circle = Circle::new(3);
        assert_eq!(circle.advance(0, 0), 0);
        assert_eq!(circle.advance(1, 1), 2);
        assert_eq!(circle.advance(2, 1), 0);
        assert_eq!(circle.advance(0, 7), 1);
    }

    #[test]
    fn removal_skips_dead_positions() {
        let mut circle = Circle::new(5);
        assert_eq!(circle.remove(1), 2);
        assert_eq!(circle.remove(2), 3);
        assert_eq!(circle.advance(0, 1), 3);
        assert_eq!(circle.remove(4), 0);
        assert_eq!(circle.remaining(), 2);
        assert_eq!(circle.survivors().collect::<Vec<_>>(), vec![0, 3]);
        assert!(!circle.is_alive(1));
    }

    #[test]
    fn last_pair_links_to_itself() {
        let mut circle = Circle::new(2);
        assert_eq!(circle.remove(0), 1);
        assert_eq!(circle.advance(1, 5), 1);
    }
}
