//! Weighted resampling module
//!
//! Turns groups of compressed batches into a fixed number of records each,
//! truncating or cycling as needed, and writes every group into one array
//! file.
//!
//! # Overview
//!
//! - `WeightedGroup` - compressed batches paired with a target count
//! - `parse_weighted_groups` - validate a loosely typed `[[batches, weight], ...]` plan
//! - `resample` / `ResampleIter` - the truncate-or-cycle rule
//! - `materialize_weighted_groups` - decode, resample and write

mod sampler;
mod types;

pub use sampler::{
    materialize_weighted_groups, materialize_weighted_groups_with_config, resample,
    resampled_len, ResampleIter,
};
pub use types::{parse_weighted_groups, WeightedGroup};
