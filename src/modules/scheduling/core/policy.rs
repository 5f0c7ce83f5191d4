use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::shared::core::timezone::resolve_zone;

pub const DEFAULT_CLOCK_IN_EARLY_ALLOWANCE_MINUTES: u32 = 5;

/// Per-organization overtime thresholds and clock-in tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgPolicy {
    pub org_id: String,
    /// IANA zone name, e.g. `America/New_York`.
    pub timezone: String,
    /// Hours per local day before daily overtime accrues.
    pub daily_otc_threshold: u32,
    /// Hours per week before weekly overtime accrues.
    pub weekly_otc_threshold: u32,
    pub clock_in_early_allowance_minutes: u32,
}

impl OrgPolicy {
    pub fn zone(&self) -> Tz {
        resolve_zone(&self.timezone)
    }

    /// An unset (zero) allowance means the default five minutes.
    pub fn effective_early_allowance_minutes(&self) -> u32 {
        match self.clock_in_early_allowance_minutes {
            0 => DEFAULT_CLOCK_IN_EARLY_ALLOWANCE_MINUTES,
            minutes => minutes,
        }
    }
}
