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

/* GS1 mod-10 check digit (https://www.gs1.org/services/how-calculate-check-digit-manually).
Digits are weighted 3, 1, 3, ... starting from the rightmost digit preceding the check digit,
so leading zeros never change the result. */

use super::error::{CheckDigitError, GtinError, InvalidValueError};
use super::input::GtinInput;

/// Computes the check digit for a string of ASCII decimal digits.
///
/// An empty string has a check digit of 0.
pub(crate) fn compute(digits: &str) -> u8 {
    let sum: u64 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(index, byte)| {
            let digit = u64::from(byte - b'0');
            if index % 2 == 0 {
                digit * 3
            } else {
                digit
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

pub(crate) fn to_char(digit: u8) -> char {
    char::from(b'0' + digit)
}

/// Splits a non-empty digit string into the digits preceding the check digit and the check
/// digit itself.
pub(crate) fn split_check_digit(digits: &str) -> (&str, char) {
    let (body, check) = digits.split_at(digits.len() - 1);
    (body, check.chars().next().unwrap_or('0'))
}

/// Returns the check digit for a GTIN supplied *without* its check digit.
///
/// Text yields the digit as text, numbers yield it as a number.
///
/// # Examples
///
/// ```
/// use gtin_sdk::{calculate_check_digit, GtinInput};
///
/// assert_eq!(
///     calculate_check_digit("02345678901289").unwrap(),
///     GtinInput::Text("4".to_string())
/// );
/// assert_eq!(calculate_check_digit(7447010150u64).unwrap(), GtinInput::Numeric(5));
/// ```
pub fn calculate_check_digit<T: Into<GtinInput>>(unchecked: T) -> Result<GtinInput, GtinError> {
    let input = unchecked.into();
    let check_digit = compute(&input.digits()?);
    Ok(match input {
        GtinInput::Text(_) => GtinInput::Text(to_char(check_digit).to_string()),
        GtinInput::Numeric(_) => GtinInput::Numeric(i128::from(check_digit)),
    })
}

/// Returns a GTIN supplied *without* its check digit with the check digit appended.
///
/// Formatting characters are removed from text. Numbers are shifted one decimal place and the
/// check digit added; a result which does not fit into an `i128` is rejected.
pub fn append_check_digit<T: Into<GtinInput>>(unchecked: T) -> Result<GtinInput, GtinError> {
    let input = unchecked.into();
    let mut digits = input.digits()?;
    let check_digit = compute(&digits);

    match input {
        GtinInput::Text(_) => {
            digits.push(to_char(check_digit));
            Ok(GtinInput::Text(digits))
        }
        GtinInput::Numeric(value) => value
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(i128::from(check_digit)))
            .map(GtinInput::Numeric)
            .ok_or_else(|| {
                GtinError::InvalidValue(InvalidValueError::new(
                    value.to_string(),
                    "appending a check digit overflows the numeric range".to_string(),
                ))
            }),
    }
}

/// Returns `true` if the trailing digit of a GTIN is its correct check digit.
///
/// Input which cannot be read as a GTIN at all is reported as `false`. A single digit is only
/// valid when it is `0`, since there are no preceding digits to weigh.
pub fn has_valid_check_digit<T: Into<GtinInput>>(checked: T) -> bool {
    validate_check_digit(checked).is_ok()
}

/// Verifies the trailing digit of a GTIN against the check digit computed for the preceding
/// digits.
pub fn validate_check_digit<T: Into<GtinInput>>(checked: T) -> Result<(), GtinError> {
    let input = checked.into();
    let digits = input.digits()?;
    let (body, asserted) = split_check_digit(&digits);
    let correct = to_char(compute(body));

    if asserted == correct {
        Ok(())
    } else {
        Err(GtinError::CheckDigit(CheckDigitError::new(
            input.to_string(),
            asserted,
            correct,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Tests the check digit of a set of GTINs which cover every possible check digit.
    #[test]
    fn test_compute() {
        let cases = [
            ("890123456789", 0),
            ("10101", 1),
            ("567898901234", 2),
            ("82957399425", 3),
            ("5936663101", 4),
            ("15059928976", 5),
            ("901234567890", 6),
            ("36013101", 7),
            ("123456789012", 8),
            ("208957399425", 9),
        ];
        for (digits, expected) in cases.iter() {
            assert_eq!(compute(digits), *expected, "check digit of {}", digits);
        }
    }

    /// Tests that leading zeros do not change the check digit and that no digits at all yield 0.
    #[test]
    fn test_compute_padding() {
        assert_eq!(compute("0978289450809"), compute("978289450809"));
        assert_eq!(compute(""), 0);
        assert_eq!(compute("0000000000000"), 0);
    }

    /// Tests that the check digit is returned in the family of the input.
    #[test]
    fn test_calculate_check_digit() {
        assert_eq!(
            calculate_check_digit("02345678901289").unwrap(),
            GtinInput::Text("4".to_string())
        );
        assert_eq!(
            calculate_check_digit(890123456789u64).unwrap(),
            GtinInput::Numeric(0)
        );
        assert!(calculate_check_digit("no digits").is_err());
        assert!(calculate_check_digit(-12i32).is_err());
    }

    /// Tests that the check digit is concatenated to text and combined positionally with
    /// numbers.
    #[test]
    fn test_append_check_digit() {
        assert_eq!(
            append_check_digit("0-400010-161360").unwrap(),
            GtinInput::Text("04000101613600".to_string())
        );
        assert_eq!(
            append_check_digit(7447010150u64).unwrap(),
            GtinInput::Numeric(74470101505)
        );
        assert!(append_check_digit(i128::MAX).is_err());
    }

    /// Tests that an invalid check digit is reported with the asserted and the correct digit.
    #[test]
    fn test_validate_check_digit() {
        assert!(validate_check_digit("02345678901289").is_ok());
        assert!(validate_check_digit("9781981855728").is_ok());
        assert!(validate_check_digit(10012345678902u64).is_ok());

        match validate_check_digit("02345678901281") {
            Err(GtinError::CheckDigit(err)) => {
                assert_eq!(err.gtin(), "02345678901281");
                assert_eq!(err.asserted(), '1');
                assert_eq!(err.correct(), '9');
            }
            other => panic!("expected a check digit error, got {:?}", other),
        }

        match validate_check_digit("") {
            Err(GtinError::InvalidValue(_)) => (),
            other => panic!("expected an invalid value error, got {:?}", other),
        }
    }

    /// Tests the single digit boundary: only "0" carries a valid check digit.
    #[test]
    fn test_has_valid_check_digit_single_digit() {
        assert!(has_valid_check_digit("0"));
        for digit in 1..10u8 {
            assert!(!has_valid_check_digit(digit.to_string()));
        }
    }

    /// Tests that malformed input is reported as invalid rather than as an error.
    #[test]
    fn test_has_valid_check_digit_malformed() {
        assert!(!has_valid_check_digit("--"));
        assert!(!has_valid_check_digit(-10i64));
        assert!(has_valid_check_digit("0-4000101-6136-00"));
        assert!(!has_valid_check_digit("688955434584"));
    }

    proptest! {
        /// Appending a check digit always yields a GTIN with a valid check digit.
        #[test]
        fn appended_check_digit_is_valid(digits in "[0-9]{1,30}") {
            let checked = append_check_digit(digits.as_str()).unwrap();
            prop_assert!(has_valid_check_digit(checked));
        }

        /// Changing a single digit of a valid GTIN always invalidates its check digit.
        #[test]
        fn single_digit_changes_are_detected(
            digits in "[0-9]{7,13}",
            position in 0usize..13,
            delta in 1u8..10,
        ) {
            let mut checked = match append_check_digit(digits.as_str()).unwrap() {
                GtinInput::Text(text) => text.into_bytes(),
                GtinInput::Numeric(_) => unreachable!(),
            };
            let position = position % checked.len();
            checked[position] = b'0' + (checked[position] - b'0' + delta) % 10;
            let checked = String::from_utf8(checked).unwrap();
            prop_assert!(!has_valid_check_digit(checked));
        }
    }
}
