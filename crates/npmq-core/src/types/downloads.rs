//! Download statistics period and result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed reporting periods supported by the downloads endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DownloadPeriod {
    LastDay,
    LastWeek,
    #[default]
    LastMonth,
}

impl DownloadPeriod {
    /// The path segment used in the downloads endpoint URL
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadPeriod::LastDay => "last-day",
            DownloadPeriod::LastWeek => "last-week",
            DownloadPeriod::LastMonth => "last-month",
        }
    }
}

impl std::str::FromStr for DownloadPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-day" => Ok(DownloadPeriod::LastDay),
            "last-week" => Ok(DownloadPeriod::LastWeek),
            "last-month" => Ok(DownloadPeriod::LastMonth),
            other => Err(format!(
                "invalid period '{other}', expected last-day, last-week or last-month"
            )),
        }
    }
}

impl std::fmt::Display for DownloadPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time download count for one package over one period.
///
/// Matches the downloads endpoint response shape exactly, so the lookup
/// reshape for this operation is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadStats {
    /// Total downloads over the period
    pub downloads: u64,
    /// First day of the period
    pub start: NaiveDate,
    /// Last day of the period
    pub end: NaiveDate,
    /// Package name as echoed by the endpoint
    pub package: String,
}
