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

use std::error::Error;
use std::fmt;

use flexi_logger::FlexiLoggerError;
use gtin_sdk::gcp::PrefixListError;
use gtin_sdk::GtinError;

#[derive(Debug)]
pub enum CliError {
    LoggingInitializationError(Box<FlexiLoggerError>),

    UserError(String),

    GtinError(GtinError),

    PrefixListError(PrefixListError),
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::LoggingInitializationError(err) => Some(err.as_ref()),
            CliError::UserError(_) => None,
            CliError::GtinError(err) => Some(err),
            CliError::PrefixListError(err) => Some(err),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CliError::UserError(ref err) => write!(f, "Error: {}", err),
            CliError::GtinError(ref err) => write!(f, "Invalid GTIN: {}", err),
            CliError::PrefixListError(ref err) => write!(f, "PrefixListError: {}", err),
            CliError::LoggingInitializationError(ref err) => {
                write!(f, "LoggingInitializationError: {}", err)
            }
        }
    }
}

impl From<FlexiLoggerError> for CliError {
    fn from(err: FlexiLoggerError) -> Self {
        CliError::LoggingInitializationError(Box::new(err))
    }
}

impl From<GtinError> for CliError {
    fn from(err: GtinError) -> Self {
        CliError::GtinError(err)
    }
}

impl From<PrefixListError> for CliError {
    fn from(err: PrefixListError) -> Self {
        CliError::PrefixListError(err)
    }
}
