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

//! Errors returned while constructing, validating or decomposing a GTIN.

use std::error;
use std::fmt;

/// An error returned when a value supplied as a GTIN cannot be interpreted as a non-negative
/// number.
///
/// This covers strings which contain no digits at all, negative numbers, and numeric results
/// which overflow the requested integer type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValueError {
    value: String,
    message: String,
}

impl InvalidValueError {
    /// Constructs a new `InvalidValueError` for the offending value and the reason it was
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtin_sdk::gtin::InvalidValueError;
    ///
    /// let err = InvalidValueError::new("abc".to_string(), "no digits found".to_string());
    /// assert_eq!(format!("{}", err), "\"abc\" is not a valid GTIN: no digits found");
    /// ```
    pub fn new(value: String, message: String) -> Self {
        Self { value, message }
    }

    /// Returns the value which was rejected.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the reason the value was rejected.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl error::Error for InvalidValueError {}

impl fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} is not a valid GTIN: {}", self.value, self.message)
    }
}

/// An error returned when a GTIN does not fit into the requested length.
///
/// `required` is the smallest length able to hold the significant digits of the value plus the
/// check digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthError {
    length: usize,
    required: usize,
}

impl LengthError {
    pub fn new(length: usize, required: usize) -> Self {
        Self { length, required }
    }

    /// Returns the length which was requested.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the minimum length the value requires.
    pub fn required(&self) -> usize {
        self.required
    }
}

impl error::Error for LengthError {}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a GTIN length of {} is too short, at least {} digits are required",
            self.length, self.required
        )
    }
}

/// An error returned when the trailing digit of a GTIN is not the check digit computed for the
/// preceding digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDigitError {
    gtin: String,
    asserted: char,
    correct: char,
}

impl CheckDigitError {
    /// Constructs a new `CheckDigitError`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtin_sdk::gtin::CheckDigitError;
    ///
    /// let err = CheckDigitError::new("02345678901281".to_string(), '1', '9');
    /// assert_eq!(
    ///     format!("{}", err),
    ///     "GTIN \"02345678901281\" has an invalid check digit (\"1\"), \
    ///      the correct check digit would be \"9\""
    /// );
    /// ```
    pub fn new(gtin: String, asserted: char, correct: char) -> Self {
        Self {
            gtin,
            asserted,
            correct,
        }
    }

    /// Returns the GTIN as it was supplied, including its asserted check digit.
    pub fn gtin(&self) -> &str {
        &self.gtin
    }

    /// Returns the check digit carried by the supplied GTIN.
    pub fn asserted(&self) -> char {
        self.asserted
    }

    /// Returns the check digit computed for the supplied GTIN.
    pub fn correct(&self) -> char {
        self.correct
    }
}

impl error::Error for CheckDigitError {}

impl fmt::Display for CheckDigitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "GTIN \"{}\" has an invalid check digit (\"{}\"), the correct check digit would be \"{}\"",
            self.gtin, self.asserted, self.correct
        )
    }
}

/// An error returned when no entry of a prefix table matches the digits following the indicator
/// digit.
///
/// This points at an incomplete prefix table rather than at a problem with the GTIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcpFormatError {
    segment: String,
}

impl GcpFormatError {
    pub fn new(segment: String) -> Self {
        Self { segment }
    }

    /// Returns the 12-digit segment for which no prefix was found.
    pub fn segment(&self) -> &str {
        &self.segment
    }
}

impl error::Error for GcpFormatError {}

impl fmt::Display for GcpFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "no GS1 Company Prefix length is known for \"{}\"",
            self.segment
        )
    }
}

/// An error that can occur in the handling of a GTIN
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GtinError {
    InvalidValue(InvalidValueError),
    Length(LengthError),
    CheckDigit(CheckDigitError),
    GcpFormat(GcpFormatError),
}

impl error::Error for GtinError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GtinError::InvalidValue(err) => Some(err),
            GtinError::Length(err) => Some(err),
            GtinError::CheckDigit(err) => Some(err),
            GtinError::GcpFormat(err) => Some(err),
        }
    }
}

impl fmt::Display for GtinError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GtinError::InvalidValue(err) => err.fmt(f),
            GtinError::Length(err) => err.fmt(f),
            GtinError::CheckDigit(err) => err.fmt(f),
            GtinError::GcpFormat(err) => err.fmt(f),
        }
    }
}

impl From<InvalidValueError> for GtinError {
    fn from(err: InvalidValueError) -> Self {
        GtinError::InvalidValue(err)
    }
}

impl From<LengthError> for GtinError {
    fn from(err: LengthError) -> Self {
        GtinError::Length(err)
    }
}

impl From<CheckDigitError> for GtinError {
    fn from(err: CheckDigitError) -> Self {
        GtinError::CheckDigit(err)
    }
}

impl From<GcpFormatError> for GtinError {
    fn from(err: GcpFormatError) -> Self {
        GtinError::GcpFormat(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error;

    /// Tests that a `LengthError` reports both the requested and the required length.
    #[test]
    fn test_length_display() {
        let err = LengthError::new(12, 14);
        assert_eq!(
            format!("{}", err),
            "a GTIN length of 12 is too short, at least 14 digits are required"
        );
    }

    /// Tests that a `GcpFormatError` names the segment which could not be resolved.
    #[test]
    fn test_gcp_format_display() {
        let err = GcpFormatError::new("234567890128".to_string());
        assert_eq!(
            format!("{}", err),
            "no GS1 Company Prefix length is known for \"234567890128\""
        );
    }

    /// Tests that `GtinError` displays the wrapped error unchanged and exposes it as its source.
    #[test]
    fn test_gtin_error_passes_through() {
        let inner = CheckDigitError::new("02345678901281".to_string(), '1', '9');
        let err = GtinError::from(inner.clone());
        assert_eq!(format!("{}", err), format!("{}", inner));
        assert!(err.source().is_some());
    }
}
