//! Display precision for formatted times

use serde::{Deserialize, Serialize};

/// Number of decimal places shown on the seconds component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// One decimal place (`1:05.4`), used by tables and summaries
    Tenths,
    /// Two decimal places (`1:05.42`), used by time entry and best times
    Hundredths,
}

impl Precision {
    /// Decimal places rendered after the point.
    pub const fn decimals(&self) -> usize {
        match self {
            Precision::Tenths => 1,
            Precision::Hundredths => 2,
        }
    }

    /// Number of display units per second (10 or 100).
    pub const fn units_per_second(&self) -> u64 {
        match self {
            Precision::Tenths => 10,
            Precision::Hundredths => 100,
        }
    }
}
