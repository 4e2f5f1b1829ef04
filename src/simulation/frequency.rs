//! Compounding frequency

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often interest is credited to the balance within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum CompoundingFrequency {
    #[default]
    Yearly,
    Quarterly,
    Monthly,
}

impl CompoundingFrequency {
    /// All frequencies, least to most frequent
    pub const ALL: [CompoundingFrequency; 3] = [
        CompoundingFrequency::Yearly,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
    ];

    /// Number of compounding periods per year (`n` in the future value formula)
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Yearly => 1,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
        }
    }

    /// Parse a frequency label such as "Quarterly".
    ///
    /// Matching ignores case and surrounding whitespace. Anything unrecognised
    /// falls back to `Yearly`; the fallback is logged, not rejected.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "yearly" => CompoundingFrequency::Yearly,
            "quarterly" => CompoundingFrequency::Quarterly,
            "monthly" => CompoundingFrequency::Monthly,
            _ => {
                log::warn!("Unknown compounding frequency {:?}, defaulting to Yearly", label);
                CompoundingFrequency::Yearly
            }
        }
    }

    /// Map a periods-per-year count back to a frequency, with the same
    /// Yearly fallback as [`from_label`](Self::from_label)
    pub fn from_periods(periods_per_year: u32) -> Self {
        match periods_per_year {
            1 => CompoundingFrequency::Yearly,
            4 => CompoundingFrequency::Quarterly,
            12 => CompoundingFrequency::Monthly,
            other => {
                log::warn!("Unsupported compounding periods per year {}, defaulting to Yearly", other);
                CompoundingFrequency::Yearly
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompoundingFrequency::Yearly => "Yearly",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
