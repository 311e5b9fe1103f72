// Copyright 2018-2021 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The GTIN value type and the standalone check digit functions.
//!
//! A [`Gtin`] can be built from three kinds of input, in this order of precedence:
//!
//! * a full GTIN, including its check digit, which is validated,
//! * a "raw" GTIN, without its check digit, which is computed,
//! * nothing at all, which yields the all-zero GTIN-14.
//!
//! The length of a GTIN is inferred from textual input and defaults to 14 for numeric input.

mod check_digit;
mod error;
mod input;

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::gcp::{PrefixTable, GCP_PREFIXES};

pub use check_digit::{
    append_check_digit, calculate_check_digit, has_valid_check_digit, validate_check_digit,
};
use check_digit::{compute, split_check_digit, to_char};
pub use error::{CheckDigitError, GcpFormatError, GtinError, InvalidValueError, LengthError};
pub use input::GtinInput;
use input::significant;

/// Length used when none is given and none can be inferred from the input
pub const DEFAULT_LENGTH: usize = 14;

/// Width of the form used to locate the indicator digit and the company prefix
const GTIN_14: usize = 14;

/// A Global Trade Item Number.
///
/// The value is immutable. Two GTINs are equal when their canonical strings are equal, so a
/// GTIN-12 and a GTIN-14 carrying the same number are different values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Gtin {
    // Significant digits preceding the check digit; "0" for zero
    raw: String,
    length: usize,
    check_digit: u8,
}

impl Gtin {
    /// Parses a GTIN which includes its check digit.
    ///
    /// Non-digit characters in text are discarded. When `length` is given it takes precedence
    /// over the number of digits supplied and the value is re-padded to it.
    ///
    /// # Arguments
    ///
    /// * `gtin` - The GTIN, including the check digit
    /// * `length` - The total length of the GTIN, including the check digit
    pub fn new<T: Into<GtinInput>>(gtin: T, length: Option<usize>) -> Result<Self, GtinError> {
        let input = gtin.into();
        let digits = input.digits()?;
        let length = match length {
            Some(length) => length,
            None if input.is_numeric() => DEFAULT_LENGTH,
            None => digits.len(),
        };

        let (body, asserted) = split_check_digit(&digits);
        let gtin = Self::from_digits(body, length)?;
        if gtin.check_digit() != asserted {
            return Err(GtinError::CheckDigit(CheckDigitError::new(
                input.to_string(),
                asserted,
                gtin.check_digit(),
            )));
        }
        Ok(gtin)
    }

    /// Builds a GTIN from its digits *without* the check digit, which is then computed.
    ///
    /// When no `length` is given it is the number of digits in `raw` plus one for text, and 14
    /// for numbers.
    pub fn from_raw<T: Into<GtinInput>>(raw: T, length: Option<usize>) -> Result<Self, GtinError> {
        let input = raw.into();
        let digits = input.digits()?;
        let length = match length {
            Some(length) => length,
            None if input.is_numeric() => DEFAULT_LENGTH,
            None => digits.len() + 1,
        };
        Self::from_digits(&digits, length)
    }

    /// Returns the all-zero GTIN of the given length.
    pub fn zero(length: usize) -> Result<Self, GtinError> {
        Self::from_digits("0", length)
    }

    fn from_digits(digits: &str, length: usize) -> Result<Self, GtinError> {
        let raw = significant(digits);
        // a zero value needs no room besides the check digit
        let required = if raw == "0" { 1 } else { raw.len() + 1 };
        if length < required {
            return Err(GtinError::Length(LengthError::new(length, required)));
        }

        Ok(Gtin {
            raw: raw.to_string(),
            length,
            check_digit: compute(raw),
        })
    }

    /// Returns the same number re-rendered at a different length.
    pub fn with_length(&self, length: usize) -> Result<Self, GtinError> {
        Self::from_digits(&self.raw, length)
    }

    /// Total number of digits in the canonical form, including the check digit.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The value without its check digit, without leading zeros.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn check_digit(&self) -> char {
        to_char(self.check_digit)
    }

    /// The first digit of the GTIN-14 form of this GTIN.
    ///
    /// "0" indicates a base unit, "1" through "8" a packaging level and "9" a variable measure
    /// trade item.
    pub fn indicator_digit(&self) -> Result<String, GtinError> {
        Ok(self.gtin_14()?[..1].to_string())
    }

    /// The GS1 Company Prefix, resolved against the bundled prefix table.
    ///
    /// GTINs in ranges without company prefixes, such as restricted circulation numbers, have an
    /// empty GCP.
    pub fn gcp(&self) -> Result<String, GtinError> {
        Ok(self.parts()?.gcp)
    }

    /// The digits following the GS1 Company Prefix and preceding the check digit.
    pub fn item_reference(&self) -> Result<String, GtinError> {
        Ok(self.parts()?.item_reference)
    }

    /// Splits this GTIN into its indicator digit, GCP, item reference and check digit.
    pub fn parts(&self) -> Result<GtinParts, GtinError> {
        self.parts_with(&GCP_PREFIXES)
    }

    /// Splits this GTIN using the given prefix table to resolve the GCP length.
    pub fn parts_with(&self, table: &PrefixTable) -> Result<GtinParts, GtinError> {
        let gtin_14 = self.gtin_14()?;
        let segment = &gtin_14[1..GTIN_14 - 1];
        let gcp_length = table.gcp_length(segment)?;

        Ok(GtinParts {
            indicator_digit: gtin_14[..1].to_string(),
            gcp: segment[..gcp_length].to_string(),
            item_reference: segment[gcp_length..].to_string(),
            check_digit: self.check_digit().to_string(),
        })
    }

    /// The canonical form left-padded, or stripped of leading zeros, to 14 digits.
    fn gtin_14(&self) -> Result<String, GtinError> {
        let canonical = self.to_string();
        if canonical.len() <= GTIN_14 {
            return Ok(format!("{:0>width$}", canonical, width = GTIN_14));
        }

        let excess = canonical.len() - GTIN_14;
        if canonical[..excess].bytes().all(|byte| byte == b'0') {
            Ok(canonical[excess..].to_string())
        } else {
            Err(GtinError::Length(LengthError::new(
                GTIN_14,
                significant(&canonical).len(),
            )))
        }
    }
}

impl Default for Gtin {
    fn default() -> Self {
        Gtin {
            raw: "0".to_string(),
            length: DEFAULT_LENGTH,
            check_digit: 0,
        }
    }
}

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.length > 1 {
            write!(f, "{:0>width$}", self.raw, width = self.length - 1)?;
        }
        write!(f, "{}", self.check_digit())
    }
}

impl fmt::Debug for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Gtin({:?})", self.to_string())
    }
}

impl FromStr for Gtin {
    type Err = GtinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gtin::new(s, None)
    }
}

impl TryFrom<&Gtin> for u64 {
    type Error = GtinError;

    fn try_from(gtin: &Gtin) -> Result<Self, Self::Error> {
        let canonical = gtin.to_string();
        canonical.parse().map_err(|_| {
            GtinError::InvalidValue(InvalidValueError::new(
                canonical,
                "the GTIN does not fit into a 64-bit integer".to_string(),
            ))
        })
    }
}

impl TryFrom<&Gtin> for u128 {
    type Error = GtinError;

    fn try_from(gtin: &Gtin) -> Result<Self, Self::Error> {
        let canonical = gtin.to_string();
        canonical.parse().map_err(|_| {
            GtinError::InvalidValue(InvalidValueError::new(
                canonical,
                "the GTIN does not fit into a 128-bit integer".to_string(),
            ))
        })
    }
}

impl From<&Gtin> for f64 {
    fn from(gtin: &Gtin) -> Self {
        // a string of ASCII digits always parses as a float
        gtin.to_string().parse().unwrap_or(f64::INFINITY)
    }
}

impl Serialize for Gtin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Gtin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let gtin = String::deserialize(deserializer)?;
        gtin.parse().map_err(de::Error::custom)
    }
}

/// The fields of a GTIN, in the order they appear in its GTIN-14 form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GtinParts {
    pub indicator_digit: String,
    pub gcp: String,
    pub item_reference: String,
    pub check_digit: String,
}

impl GtinParts {
    pub fn into_tuple(self) -> (String, String, String, String) {
        (
            self.indicator_digit,
            self.gcp,
            self.item_reference,
            self.check_digit,
        )
    }
}

impl IntoIterator for GtinParts {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        vec![
            self.indicator_digit,
            self.gcp,
            self.item_reference,
            self.check_digit,
        ]
        .into_iter()
    }
}

/// Builder for a [`Gtin`], accepting any combination of the construction inputs.
///
/// A full GTIN takes precedence over a raw one; without either the all-zero GTIN is built.
///
/// ```
/// use gtin_sdk::GtinBuilder;
///
/// let gtin = GtinBuilder::new()
///     .with_raw(7447010150u64)
///     .with_length(12)
///     .build()
///     .unwrap();
/// assert_eq!(gtin.to_string(), "074470101505");
/// ```
#[derive(Default, Clone)]
pub struct GtinBuilder {
    gtin: Option<GtinInput>,
    raw: Option<GtinInput>,
    length: Option<usize>,
}

impl GtinBuilder {
    pub fn new() -> Self {
        GtinBuilder::default()
    }

    pub fn with_gtin<T: Into<GtinInput>>(mut self, value: T) -> Self {
        self.gtin = Some(value.into());
        self
    }

    pub fn with_raw<T: Into<GtinInput>>(mut self, value: T) -> Self {
        self.raw = Some(value.into());
        self
    }

    pub fn with_length(mut self, value: usize) -> Self {
        self.length = Some(value);
        self
    }

    pub fn build(self) -> Result<Gtin, GtinError> {
        match (self.gtin, self.raw) {
            (Some(gtin), _) => Gtin::new(gtin, self.length),
            (None, Some(raw)) => Gtin::from_raw(raw, self.length),
            (None, None) => Gtin::zero(self.length.unwrap_or(DEFAULT_LENGTH)),
        }
    }
}
