//! Footprint events — the append-only narrative log shown beside the
//! animation.

use serde::{Deserialize, Serialize};

use crate::enums::FootprintCategory;
use crate::types::SimTime;

/// One narrative log entry. Append-only for a run; cleared on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footprint {
    pub category: FootprintCategory,
    pub message: String,
    /// Tick at which the entry was recorded.
    pub tick: u64,
    /// Display timestamp derived from simulated time, so replays with
    /// the same seed produce identical logs.
    pub timestamp: String,
}

impl Footprint {
    pub fn new(category: FootprintCategory, message: impl Into<String>, time: &SimTime) -> Self {
        Self {
            category,
            message: message.into(),
            tick: time.tick,
            timestamp: format!("T+{:06.1}s", time.elapsed_secs),
        }
    }
}
