//! Security identifiers with check-digit validation.
//!
//! Bond ids are plain strings in the product model; these types validate
//! them on request.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::IdentifierError;

// =============================================================================
// CUSIP
// =============================================================================

/// CUSIP identifier.
///
/// 9 alphanumeric characters: 6 for the issuer, 2 for the issue, and a
/// check digit.
///
/// ```
/// use refdata_products::identifiers::Cusip;
///
/// let cusip = Cusip::new("912828M56").unwrap();
/// assert_eq!(cusip.issuer(), "912828");
/// assert_eq!(cusip.issue(), "M5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cusip(String);

impl Cusip {
    /// Creates a new validated CUSIP.
    pub fn new(value: &str) -> Result<Self, IdentifierError> {
        Self::validate(value)?;
        Ok(Self(value.to_uppercase()))
    }

    /// Validates a CUSIP string.
    pub fn validate(value: &str) -> Result<(), IdentifierError> {
        if value.len() != 9 {
            return Err(IdentifierError::InvalidLength {
                id_type: "CUSIP",
                expected: 9,
                actual: value.len(),
            });
        }

        for (i, c) in value.chars().enumerate() {
            if !c.is_ascii_alphanumeric() {
                return Err(IdentifierError::InvalidCharacter {
                    id_type: "CUSIP",
                    ch: c,
                    position: i,
                });
            }
        }

        let upper = value.to_uppercase();
        let expected = Self::calculate_check_digit(&upper[..8]);
        if expected != upper.chars().nth(8) {
            return Err(IdentifierError::InvalidCheckDigit {
                id_type: "CUSIP",
                value: value.to_string(),
            });
        }

        Ok(())
    }

    /// Calculates the check digit for the first 8 characters.
    ///
    /// Modulus 10 "double-add-double": letters map to 10..35, every second
    /// value is doubled, and the digits of each value are summed.
    #[must_use]
    pub fn calculate_check_digit(first_eight: &str) -> Option<char> {
        if first_eight.len() != 8 {
            return None;
        }

        let mut sum = 0;
        for (i, c) in first_eight.to_uppercase().chars().enumerate() {
            let mut v = alphanumeric_value(c)?;
            if i % 2 == 1 {
                v *= 2;
            }
            sum += v / 10 + v % 10;
        }

        char::from_digit((10 - sum % 10) % 10, 10)
    }

    /// Returns the issuer code (first 6 characters).
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.0[0..6]
    }

    /// Returns the issue code (characters 7-8).
    #[must_use]
    pub fn issue(&self) -> &str {
        &self.0[6..8]
    }

    /// Returns the full CUSIP string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cusip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ISIN
// =============================================================================

/// ISIN identifier (ISO 6166).
///
/// 2-letter country code, 9 alphanumeric characters and a Luhn check digit.
///
/// ```
/// use refdata_products::identifiers::{Cusip, Isin};
///
/// let cusip = Cusip::new("037833100").unwrap();
/// let isin = Isin::from_cusip(&cusip, "US").unwrap();
/// assert_eq!(isin.as_str(), "US0378331005");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Isin(String);

impl Isin {
    /// Creates a new validated ISIN.
    pub fn new(value: &str) -> Result<Self, IdentifierError> {
        Self::validate(value)?;
        Ok(Self(value.to_uppercase()))
    }

    /// Validates an ISIN string.
    pub fn validate(value: &str) -> Result<(), IdentifierError> {
        if value.len() != 12 {
            return Err(IdentifierError::InvalidLength {
                id_type: "ISIN",
                expected: 12,
                actual: value.len(),
            });
        }

        let upper = value.to_uppercase();
        let chars: Vec<char> = upper.chars().collect();

        if !chars[0].is_ascii_uppercase() || !chars[1].is_ascii_uppercase() {
            return Err(IdentifierError::InvalidFormat {
                id_type: "ISIN",
                reason: "Country code must be two letters".to_string(),
            });
        }

        for (i, &c) in chars.iter().enumerate().skip(2) {
            if !c.is_ascii_alphanumeric() {
                return Err(IdentifierError::InvalidCharacter {
                    id_type: "ISIN",
                    ch: c,
                    position: i,
                });
            }
        }

        if Self::calculate_check_digit(&upper[..11]) != chars.get(11).copied() {
            return Err(IdentifierError::InvalidCheckDigit {
                id_type: "ISIN",
                value: value.to_string(),
            });
        }

        Ok(())
    }

    /// Builds an ISIN from a CUSIP and a 2-letter country code.
    pub fn from_cusip(cusip: &Cusip, country: &str) -> Result<Self, IdentifierError> {
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(IdentifierError::InvalidFormat {
                id_type: "ISIN",
                reason: "Country code must be exactly 2 uppercase letters".to_string(),
            });
        }

        let base = format!("{}{}", country, cusip.as_str());
        let check =
            Self::calculate_check_digit(&base).ok_or_else(|| IdentifierError::InvalidFormat {
                id_type: "ISIN",
                reason: "Failed to calculate check digit".to_string(),
            })?;

        Self::new(&format!("{base}{check}"))
    }

    /// Calculates the Luhn check digit over the first 11 characters, with
    /// letters expanded to two digits (A=10 .. Z=35).
    fn calculate_check_digit(first_eleven: &str) -> Option<char> {
        let mut digits = Vec::with_capacity(22);
        for c in first_eleven.chars() {
            let v = alphanumeric_value(c)?;
            if v >= 10 {
                digits.push(v / 10);
            }
            digits.push(v % 10);
        }

        // Rightmost digit of the payload is doubled
        let sum: u32 = digits
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &d)| {
                if i % 2 == 0 {
                    let doubled = d * 2;
                    doubled / 10 + doubled % 10
                } else {
                    d
                }
            })
            .sum();

        char::from_digit((10 - sum % 10) % 10, 10)
    }

    /// Returns the country code.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.0[0..2]
    }

    /// Returns the national security identifier (characters 3-11).
    #[must_use]
    pub fn nsin(&self) -> &str {
        &self.0[2..11]
    }

    /// Returns the full ISIN string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn alphanumeric_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        c.to_digit(10)
    } else if c.is_ascii_uppercase() {
        Some(c as u32 - 'A' as u32 + 10)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cusips() {
        assert!(Cusip::new("912828M56").is_ok());
        assert!(Cusip::new("912828TW0").is_ok());
        assert!(Cusip::new("037833100").is_ok());
    }

    #[test]
    fn test_cusip_lowercase_normalised() {
        let cusip = Cusip::new("912828tw0").unwrap();
        assert_eq!(cusip.as_str(), "912828TW0");
    }

    #[test]
    fn test_invalid_cusips() {
        assert!(matches!(
            Cusip::validate("91282"),
            Err(IdentifierError::InvalidLength { actual: 5, .. })
        ));
        assert!(matches!(
            Cusip::validate("912828-56"),
            Err(IdentifierError::InvalidCharacter { ch: '-', position: 6, .. })
        ));
        assert!(matches!(
            Cusip::validate("912828M55"),
            Err(IdentifierError::InvalidCheckDigit { .. })
        ));
    }

    #[test]
    fn test_cusip_check_digit() {
        assert_eq!(Cusip::calculate_check_digit("912828M5"), Some('6'));
        assert_eq!(Cusip::calculate_check_digit("03783310"), Some('0'));
        assert_eq!(Cusip::calculate_check_digit("0378331"), None);
    }

    #[test]
    fn test_valid_isins() {
        let isin = Isin::new("US0378331005").unwrap();
        assert_eq!(isin.country_code(), "US");
        assert_eq!(isin.nsin(), "037833100");
        assert!(Isin::new("US912828Z229").is_ok());
    }

    #[test]
    fn test_invalid_isins() {
        assert!(matches!(
            Isin::validate("US03783310"),
            Err(IdentifierError::InvalidLength { .. })
        ));
        assert!(matches!(
            Isin::validate("120378331005"),
            Err(IdentifierError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Isin::validate("US0378331006"),
            Err(IdentifierError::InvalidCheckDigit { .. })
        ));
    }

    #[test]
    fn test_isin_from_cusip() {
        let cusip = Cusip::new("912828M56").unwrap();
        let isin = Isin::from_cusip(&cusip, "US").unwrap();
        assert_eq!(isin.nsin(), "912828M56");
        assert!(Isin::from_cusip(&cusip, "us").is_err());
    }
}
