//! Interest rate swap.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use refdata_core::{Currency, Date, DayCountConvention, PaymentFrequency};

use crate::conventions::{FloatingIndex, IndexTenor, SwapLegType, SwapType};
use crate::product::{Instrument, ProductType};

/// Economic terms of a swap, supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapTerms {
    /// Day count convention on the fixed leg
    pub fixed_leg_day_count: DayCountConvention,
    /// Day count convention on the floating leg
    pub floating_leg_day_count: DayCountConvention,
    /// Payment frequency on the fixed leg
    pub fixed_leg_payment_frequency: PaymentFrequency,
    /// Index on the floating leg
    pub floating_index: FloatingIndex,
    /// Reset tenor of the floating index
    pub floating_index_tenor: IndexTenor,
    /// Date the swap starts accruing
    pub effective_date: Date,
    /// Date the swap ends
    pub termination_date: Date,
    /// Currency of both legs
    pub currency: Currency,
    /// Quoted term in whole years
    pub term_years: i32,
    /// Start convention
    pub swap_type: SwapType,
    /// Number of legs in the trade
    pub swap_leg_type: SwapLegType,
}

/// An interest rate swap.
///
/// The termination date is not checked against the effective date; use
/// [`has_valid_schedule`](Self::has_valid_schedule) to test it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRateSwap {
    id: String,
    #[serde(flatten)]
    terms: SwapTerms,
}

impl InterestRateSwap {
    /// Creates a new swap.
    pub fn new(id: impl Into<String>, terms: SwapTerms) -> Self {
        Self {
            id: id.into(),
            terms,
        }
    }

    /// Returns all economic terms.
    #[must_use]
    pub fn terms(&self) -> &SwapTerms {
        &self.terms
    }

    /// Returns the fixed leg day count convention.
    #[must_use]
    pub fn fixed_leg_day_count(&self) -> DayCountConvention {
        self.terms.fixed_leg_day_count
    }

    /// Returns the floating leg day count convention.
    #[must_use]
    pub fn floating_leg_day_count(&self) -> DayCountConvention {
        self.terms.floating_leg_day_count
    }

    /// Returns the fixed leg payment frequency.
    #[must_use]
    pub fn fixed_leg_payment_frequency(&self) -> PaymentFrequency {
        self.terms.fixed_leg_payment_frequency
    }

    /// Returns the floating leg index.
    #[must_use]
    pub fn floating_index(&self) -> FloatingIndex {
        self.terms.floating_index
    }

    /// Returns the floating leg index tenor.
    #[must_use]
    pub fn floating_index_tenor(&self) -> IndexTenor {
        self.terms.floating_index_tenor
    }

    /// Returns the effective date.
    #[must_use]
    pub fn effective_date(&self) -> Date {
        self.terms.effective_date
    }

    /// Returns the termination date.
    #[must_use]
    pub fn termination_date(&self) -> Date {
        self.terms.termination_date
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.terms.currency
    }

    /// Returns the term in years.
    #[must_use]
    pub fn term_years(&self) -> i32 {
        self.terms.term_years
    }

    /// Returns the swap type.
    #[must_use]
    pub fn swap_type(&self) -> SwapType {
        self.terms.swap_type
    }

    /// Returns the swap leg type.
    #[must_use]
    pub fn swap_leg_type(&self) -> SwapLegType {
        self.terms.swap_leg_type
    }

    /// True if the termination date is on or after the effective date.
    #[must_use]
    pub fn has_valid_schedule(&self) -> bool {
        self.terms.termination_date >= self.terms.effective_date
    }

    /// Year fraction from effective to termination under the fixed leg
    /// day count. Negative for an inverted schedule.
    #[must_use]
    pub fn fixed_leg_year_fraction(&self) -> Decimal {
        self.terms
            .fixed_leg_day_count
            .year_fraction(self.terms.effective_date, self.terms.termination_date)
    }
}

impl Instrument for InterestRateSwap {
    fn id(&self) -> &str {
        &self.id
    }

    fn product_type(&self) -> ProductType {
        ProductType::Swap
    }
}

impl fmt::Display for InterestRateSwap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.terms;
        write!(
            f,
            "fixedDayCount:{} floatingDayCount:{} paymentFreq:{} {}{} effective:{} termination:{} {} {}yrs {} {}",
            t.fixed_leg_day_count,
            t.floating_leg_day_count,
            t.fixed_leg_payment_frequency,
            t.floating_index_tenor,
            t.floating_index,
            t.effective_date,
            t.termination_date,
            t.currency,
            t.term_years,
            t.swap_type,
            t.swap_leg_type,
        )
    }
}
