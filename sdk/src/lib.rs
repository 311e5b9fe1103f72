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

//! Parsing, validation and normalization of GS1 Global Trade Item Numbers.
//!
//! A GTIN (also known as a UPC, EAN, JAN or ISBN) is represented by the immutable [`Gtin`]
//! value type. Check digits may also be handled without constructing a value, through the free
//! functions in [`gtin`], and the GS1 Company Prefix of a GTIN is resolved against the
//! [`gcp::PrefixTable`] bundled with this crate.
//!
//! ```
//! use gtin_sdk::Gtin;
//!
//! let gtin = Gtin::from_raw("0400010161360", None).unwrap();
//! assert_eq!(gtin.to_string(), "04000101613600");
//! assert_eq!(gtin.gcp().unwrap(), "4000101");
//! ```

extern crate serde;
#[cfg(feature = "gcp-prefix-list")]
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

pub mod gcp;
pub mod gtin;

pub use crate::gcp::get_gcp;
pub use crate::gtin::{
    append_check_digit, calculate_check_digit, has_valid_check_digit, validate_check_digit, Gtin,
    GtinBuilder, GtinError, GtinInput, GtinParts,
};
