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

use gtin_sdk::gcp::{get_gcp, get_gcp_with, PrefixTable};

use crate::error::CliError;

/**
 * Prints the GS1 Company Prefix of a GTIN
 *
 * gtin - GTIN including the check digit
 * prefix_list - Path to a GCP Prefix Format List XML file to resolve the prefix length with,
 *               instead of the bundled prefix table
 */
pub fn do_get_gcp(gtin: &str, prefix_list: Option<&str>) -> Result<(), CliError> {
    let gcp = match prefix_list {
        Some(path) => {
            let table = PrefixTable::from_xml_file(path)?;
            debug!("Using {} GCP prefixes from {}", table.len(), path);
            get_gcp_with(gtin, &table)?
        }
        None => get_gcp(gtin)?,
    };
    println!("{}", gcp);
    Ok(())
}
