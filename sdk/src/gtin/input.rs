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

use std::fmt;

use super::error::InvalidValueError;

/// A GTIN, or part of one, as supplied by a caller.
///
/// Text may carry formatting characters such as hyphens and spaces; they are discarded during
/// normalization. The free functions in this module return the same variant they were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GtinInput {
    Text(String),
    Numeric(i128),
}

impl GtinInput {
    /// Reduces the input to its decimal digits.
    ///
    /// Text keeps its leading zeros, since they are significant for length inference. Numbers are
    /// rendered without padding. Only ASCII digits are accepted; text holding digits of another
    /// script is rejected instead of having them discarded.
    pub(crate) fn digits(&self) -> Result<String, InvalidValueError> {
        match self {
            GtinInput::Text(text) => {
                let foreign = text.chars().find(|c| c.is_numeric() && !c.is_ascii_digit());
                if let Some(numeral) = foreign {
                    return Err(InvalidValueError::new(
                        text.clone(),
                        format!("{:?} is not an ASCII digit", numeral),
                    ));
                }
                let digits: String = text.chars().filter(char::is_ascii_digit).collect();
                if digits.is_empty() {
                    return Err(InvalidValueError::new(
                        text.clone(),
                        "a GTIN should contain one or more numeric digits".to_string(),
                    ));
                }
                Ok(digits)
            }
            GtinInput::Numeric(value) if *value < 0 => Err(InvalidValueError::new(
                value.to_string(),
                "a GTIN cannot be negative".to_string(),
            )),
            GtinInput::Numeric(value) => Ok(value.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, GtinInput::Numeric(_))
    }
}

impl fmt::Display for GtinInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GtinInput::Text(text) => f.write_str(text),
            GtinInput::Numeric(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for GtinInput {
    fn from(text: &str) -> Self {
        GtinInput::Text(text.to_string())
    }
}

impl From<String> for GtinInput {
    fn from(text: String) -> Self {
        GtinInput::Text(text)
    }
}

impl From<&String> for GtinInput {
    fn from(text: &String) -> Self {
        GtinInput::Text(text.clone())
    }
}

macro_rules! numeric_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for GtinInput {
                fn from(value: $ty) -> Self {
                    GtinInput::Numeric(i128::from(value))
                }
            }
        )*
    };
}

numeric_input!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

/// Strips leading zeros, leaving "0" for an all-zero string.
pub(crate) fn significant(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}
