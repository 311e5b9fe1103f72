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

//! Reads the GS1 GCP Prefix Format List XML document.
//!
//! The document has the form:
//!
//! ```xml
//! <GCPPrefixFormatList date="2021-06-01T00:00:00">
//!     <entry prefix="0810" gcpLength="9"/>
//!     ...
//! </GCPPrefixFormatList>
//! ```

use std::fs;
use std::path::Path;

use quick_xml::de::from_str;

use super::{PrefixListError, PrefixTable};

#[derive(Debug, Deserialize, PartialEq)]
/// Struct used for serde deserialization of the prefix list root element
struct GcpPrefixFormatList {
    #[serde(default)]
    date: Option<String>,
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Entry {
    prefix: String,
    #[serde(rename = "gcpLength")]
    gcp_length: String,
}

impl PrefixTable {
    /// Builds a table from the text of a GCP Prefix Format List.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtin_sdk::gcp::PrefixTable;
    ///
    /// let table = PrefixTable::from_xml_str(
    ///     r#"<GCPPrefixFormatList date="2021-06-01">
    ///         <entry prefix="0" gcpLength="7"/>
    ///         <entry prefix="081" gcpLength="9"/>
    ///     </GCPPrefixFormatList>"#,
    /// )
    /// .unwrap();
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.date(), Some("2021-06-01"));
    /// ```
    pub fn from_xml_str(xml: &str) -> Result<Self, PrefixListError> {
        let list: GcpPrefixFormatList = from_str(xml)?;

        let entries = list
            .entries
            .into_iter()
            .map(|entry| {
                let gcp_length = entry.gcp_length.trim().parse::<usize>().map_err(|_| {
                    PrefixListError::InvalidEntry {
                        prefix: entry.prefix.clone(),
                        message: format!("{:?} is not a valid GCP length", entry.gcp_length),
                    }
                })?;
                Ok((entry.prefix.trim().to_string(), gcp_length))
            })
            .collect::<Result<Vec<_>, PrefixListError>>()?;

        let mut table = PrefixTable::from_entries(entries)?;
        table.date = list.date;

        debug!(
            "Read {} GCP prefixes from a prefix format list dated {}",
            table.len(),
            table.date().unwrap_or("(unknown)")
        );
        Ok(table)
    }

    /// Builds a table from a GCP Prefix Format List stored at `path`.
    pub fn from_xml_file<P: AsRef<Path>>(path: P) -> Result<Self, PrefixListError> {
        let xml = fs::read_to_string(path.as_ref())?;
        debug!("Reading GCP prefix list from {}", path.as_ref().display());
        Self::from_xml_str(&xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use crate::gcp::get_gcp_with;

    fn test_file_path() -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("src/gcp/test_files/gcp_prefix_format_list.xml");
        path
    }

    /// Test that a well-formed prefix list file is read with all of its entries and its date
    #[test]
    fn test_from_xml_file() {
        let table = PrefixTable::from_xml_file(test_file_path()).unwrap();

        assert_eq!(table.len(), 9);
        assert_eq!(table.date(), Some("2021-06-01T00:00:00"));
        assert_eq!(table.gcp_length("033210000000").unwrap(), 6);
        assert_eq!(table.gcp_length("081000000000").unwrap(), 9);
        assert_eq!(
            get_gcp_with("00811068011972", &table).unwrap(),
            "081106801"
        );
    }

    /// Test that a prefix list without a date still yields a table
    #[test]
    fn test_from_xml_str_without_date() {
        let table =
            PrefixTable::from_xml_str(r#"<GCPPrefixFormatList><entry prefix="4" gcpLength="7"/></GCPPrefixFormatList>"#)
                .unwrap();
        assert_eq!(table.date(), None);
        assert_eq!(table.gcp_length("400010161360").unwrap(), 7);
    }

    /// Test that a non-numeric GCP length is reported against its prefix
    #[test]
    fn test_invalid_gcp_length() {
        let result = PrefixTable::from_xml_str(
            r#"<GCPPrefixFormatList><entry prefix="4" gcpLength="seven"/></GCPPrefixFormatList>"#,
        );
        match result {
            Err(PrefixListError::InvalidEntry { prefix, .. }) => assert_eq!(prefix, "4"),
            other => panic!("expected an invalid entry error, got {:?}", other),
        }
    }

    /// Test that malformed XML is rejected
    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            PrefixTable::from_xml_str("<GCPPrefixFormatList><entry prefix="),
            Err(PrefixListError::Xml(_))
        ));
    }

    /// Test that a missing file is reported as an I/O error
    #[test]
    fn test_missing_file() {
        assert!(matches!(
            PrefixTable::from_xml_file("does/not/exist.xml"),
            Err(PrefixListError::Io(_))
        ));
    }
}
