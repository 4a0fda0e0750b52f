// src/types.rs
// Type aliases shared by the analysis and plotting modules

use crate::channel_names::Channel;

/// Trailing-mean output. `None` where fewer than the minimum periods were available.
pub type SmoothedSeries = Vec<Option<f64>>;

/// Smoothed series tagged with the channel it came from.
pub type ChannelSeries = (Channel, SmoothedSeries);
