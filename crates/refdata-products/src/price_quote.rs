//! Fractional price quotes.
//!
//! Treasury bond futures quote in 32nds: "158-15" is 158 + 15/32, and a
//! trailing "+" adds half a 32nd ("158-15+" = 158 + 15/32 + 1/64).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{ProductError, ProductResult};

/// Converts a handle and a count of 32nds to a decimal price.
///
/// # Errors
///
/// Returns `ProductError::InvalidPriceQuote` if `thirty_seconds` > 31.
pub fn from_thirty_seconds(handle: u32, thirty_seconds: u32, plus: bool) -> ProductResult<Decimal> {
    if thirty_seconds > 31 {
        return Err(ProductError::invalid_price_quote(
            format!("{handle}-{thirty_seconds}"),
            format!("32nds value must be 0-31, got {thirty_seconds}"),
        ));
    }

    let frac = Decimal::from(thirty_seconds) / Decimal::from(32);
    let plus_adj = if plus {
        Decimal::ONE / Decimal::from(64)
    } else {
        Decimal::ZERO
    };

    Ok(Decimal::from(handle) + frac + plus_adj)
}

/// Parses a quote in 32nds notation ("99-16" or "99-16+").
///
/// ```rust
/// use refdata_products::price_quote::parse_thirty_seconds;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_thirty_seconds("99-16").unwrap(), Decimal::new(995, 1));
/// assert_eq!(parse_thirty_seconds("99-16+").unwrap(), Decimal::new(99515625, 6));
/// ```
///
/// # Errors
///
/// Returns `ProductError::InvalidPriceQuote` for anything that is not
/// `handle-32nds[+]`.
pub fn parse_thirty_seconds(quote: &str) -> ProductResult<Decimal> {
    let trimmed = quote.trim();
    let plus = trimmed.ends_with('+');
    let body = trimmed.trim_end_matches('+');

    let (handle, ticks) = body.split_once('-').ok_or_else(|| {
        ProductError::invalid_price_quote(quote, "expected 'handle-32nds'")
    })?;

    let handle: u32 = handle
        .parse()
        .map_err(|_| ProductError::invalid_price_quote(quote, "invalid handle"))?;
    let thirty_seconds: u32 = ticks
        .parse()
        .map_err(|_| ProductError::invalid_price_quote(quote, "invalid 32nds value"))?;

    from_thirty_seconds(handle, thirty_seconds, plus)
        .map_err(|_| ProductError::invalid_price_quote(quote, "32nds value must be 0-31"))
}

/// Formats a decimal price in 32nds notation, rounding to the nearest 64th.
#[must_use]
pub fn format_thirty_seconds(price: Decimal) -> String {
    let handle = price.trunc();
    let sixty_fourths = ((price - handle) * Decimal::from(64))
        .round()
        .to_u32()
        .unwrap_or(0);

    // Rounding up to a full point carries into the handle
    let (handle, sixty_fourths) = if sixty_fourths >= 64 {
        (handle + Decimal::ONE, 0)
    } else {
        (handle, sixty_fourths)
    };

    let plus = if sixty_fourths % 2 == 1 { "+" } else { "" };
    format!("{handle}-{:02}{plus}", sixty_fourths / 2)
}
