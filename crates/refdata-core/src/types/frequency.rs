//! Payment frequency of a fixed leg.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Payment frequency on the fixed leg of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentFrequency {
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Annual payments (1 per year)
    Annual,
}

impl PaymentFrequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::SemiAnnual => 2,
            PaymentFrequency::Annual => 1,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentFrequency::Quarterly => "Quarterly",
            PaymentFrequency::SemiAnnual => "Semi-Annual",
            PaymentFrequency::Annual => "Annual",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PaymentFrequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "quarterly" => Ok(PaymentFrequency::Quarterly),
            "semiannual" => Ok(PaymentFrequency::SemiAnnual),
            "annual" => Ok(PaymentFrequency::Annual),
            _ => Err(CoreError::unknown_code("payment frequency", s)),
        }
    }
}
