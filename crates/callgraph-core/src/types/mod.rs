//! Collection aliases shared across the analysis crates.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet};
