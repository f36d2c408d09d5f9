//! Enumerated attributes shared by product types.
//!
//! Every enum has a `Display` label matching how the attribute is quoted
//! on a term sheet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of security identifier a bond id is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondIdType {
    /// CUSIP, primarily US and Canada
    Cusip,
    /// ISIN, primarily Europe
    Isin,
}

impl fmt::Display for BondIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondIdType::Cusip => write!(f, "CUSIP"),
            BondIdType::Isin => write!(f, "ISIN"),
        }
    }
}

/// Index on the floating leg of a swap or floating rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatingIndex {
    /// London Interbank Offered Rate
    Libor,
    /// Euro Interbank Offered Rate
    Euribor,
}

impl fmt::Display for FloatingIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatingIndex::Libor => write!(f, "LIBOR"),
            FloatingIndex::Euribor => write!(f, "EURIBOR"),
        }
    }
}

/// Reset tenor of a floating index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexTenor {
    /// 1 month
    M1,
    /// 3 months
    M3,
    /// 6 months
    M6,
    /// 12 months
    M12,
}

impl IndexTenor {
    /// Returns the tenor length in months.
    #[must_use]
    pub fn months(&self) -> u32 {
        match self {
            IndexTenor::M1 => 1,
            IndexTenor::M3 => 3,
            IndexTenor::M6 => 6,
            IndexTenor::M12 => 12,
        }
    }
}

impl fmt::Display for IndexTenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.months())
    }
}

/// Swap type by start convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapType {
    /// Spot starting, quoted as "Standard"
    Spot,
    /// Forward starting
    Forward,
    /// IMM dated
    Imm,
    /// Market agreed coupon
    Mac,
    /// Floating vs floating
    Basis,
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SwapType::Spot => "Standard",
            SwapType::Forward => "Forward",
            SwapType::Imm => "IMM",
            SwapType::Mac => "MAC",
            SwapType::Basis => "Basis",
        };
        write!(f, "{name}")
    }
}

/// Structural shape of a swap trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapLegType {
    /// Single leg
    Outright,
    /// Two-leg spread
    Curve,
    /// Three-leg butterfly
    Fly,
}

impl SwapLegType {
    /// Returns the number of legs.
    #[must_use]
    pub fn leg_count(&self) -> u32 {
        match self {
            SwapLegType::Outright => 1,
            SwapLegType::Curve => 2,
            SwapLegType::Fly => 3,
        }
    }
}

impl fmt::Display for SwapLegType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SwapLegType::Outright => "Outright",
            SwapLegType::Curve => "Curve",
            SwapLegType::Fly => "Fly",
        };
        write!(f, "{name}")
    }
}

/// Settlement method of a futures contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMethod {
    /// Cash settled
    Cash,
    /// Physical delivery of the underlying
    Physical,
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryMethod::Cash => write!(f, "Cash"),
            DeliveryMethod::Physical => write!(f, "Physical"),
        }
    }
}
