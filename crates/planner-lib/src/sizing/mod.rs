//! Shard count decision
//!
//! This module provides:
//! - Unit-suffixed size parsing normalized to GiB
//! - Volume sampling over the most recent indices
//! - The shard sizer that picks a strategy and returns a count

mod sampler;
mod size;
mod sizer;


pub use sampler::{average_daily_volume, sum_recent_volumes};
pub use size::{normalize, ByteSize, SizeUnit};
pub use sizer::{shards_for_daily_volume, ShardSizer, GIB_PER_SHARD_PER_DAY};
