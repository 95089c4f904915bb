//! Drills core library.
//!
//! Two small algorithmic cores and the scaffolding that exercises them:
//!
//! - [`sort`]: insertion sort that reports how many element shifts it made.
//! - [`josephus`]: the Josephus elimination game under a fixed or
//!   alternating step count, driven over a [`circle::Circle`].
//! - [`dataset`] and [`scenario`]: the canned demonstrations the `insort`
//!   driver runs.

pub mod circle;
pub mod dataset;
pub mod error;
pub mod josephus;
pub mod scenario;
pub mod sort;

pub use error::DrillError;
