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

use gtin_sdk::{
    append_check_digit, calculate_check_digit, has_valid_check_digit, validate_check_digit, Gtin,
};

use crate::error::CliError;

pub fn do_calculate_check_digit(gtin: &str) -> Result<(), CliError> {
    println!("{}", calculate_check_digit(gtin)?);
    Ok(())
}

/**
 * Prints a GTIN with its check digit appended
 *
 * gtin - GTIN without the check digit
 * length - Length of the GTIN to print, padded with leading zeros; when absent the digits of
 *          `gtin` are kept as they are
 */
pub fn do_append_check_digit(gtin: &str, length: Option<usize>) -> Result<(), CliError> {
    let checked = match length {
        Some(length) => Gtin::from_raw(gtin, Some(length))?.to_string(),
        None => append_check_digit(gtin)?.to_string(),
    };
    println!("{}", checked);
    Ok(())
}

pub fn do_validate_check_digit(gtin: &str) -> Result<(), CliError> {
    validate_check_digit(gtin)?;
    debug!("The check digit of {} is valid", gtin);
    Ok(())
}

pub fn do_has_valid_check_digit(gtin: &str) -> Result<(), CliError> {
    if has_valid_check_digit(gtin) {
        println!("YES");
    } else {
        println!("NO");
    }
    Ok(())
}
