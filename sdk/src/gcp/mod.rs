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

//! Provides GS1 Company Prefix (GCP) resolution.
//!
//! The length of a GCP depends on its leading digits. GS1 publishes the lengths in the "GCP
//! Prefix Format List", a mapping from digit prefixes to GCP lengths. The length for a GTIN is
//! that of the longest prefix matching the twelve digits which follow the indicator digit of its
//! GTIN-14 form.
//!
//! A partial copy of the list is bundled as [`GCP_PREFIXES`]; GTINs outside of its entries fail
//! to resolve with a [`GcpFormatError`]. With the `gcp-prefix-list` feature, a local copy of the
//! complete XML document can be read into a [`PrefixTable`] instead.

mod error;
mod prefixes;
#[cfg(feature = "gcp-prefix-list")]
mod xml;

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::gtin::{GcpFormatError, Gtin, GtinError, GtinInput};

pub use error::PrefixListError;

/// Maximum number of digits in a prefix, the width of the segment following the indicator digit
pub const MAX_PREFIX_LENGTH: usize = 12;

/// The prefix table bundled with this library
pub static GCP_PREFIXES: PrefixTable = PrefixTable {
    entries: Cow::Borrowed(prefixes::ENTRIES),
    date: None,
};

/// A GCP prefix and the length of the company prefixes starting with it.
///
/// A length of 0 marks a range without company prefixes, such as restricted circulation numbers
/// and coupons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixEntry {
    prefix: Cow<'static, str>,
    gcp_length: usize,
}

impl PrefixEntry {
    pub(crate) const fn bundled(prefix: &'static str, gcp_length: usize) -> Self {
        PrefixEntry {
            prefix: Cow::Borrowed(prefix),
            gcp_length,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn gcp_length(&self) -> usize {
        self.gcp_length
    }
}

/// An immutable mapping from GCP prefixes to GCP lengths, ordered by prefix.
#[derive(Debug, Clone)]
pub struct PrefixTable {
    entries: Cow<'static, [PrefixEntry]>,
    date: Option<String>,
}

impl PrefixTable {
    /// Builds a table from `(prefix, gcp_length)` pairs.
    ///
    /// Every prefix must consist of 1 to 12 ASCII digits and every length must be at most 12.
    /// When a prefix occurs more than once, its last length is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtin_sdk::gcp::PrefixTable;
    ///
    /// let table = PrefixTable::from_entries(vec![("0", 7), ("081", 9)]).unwrap();
    /// assert_eq!(table.gcp_length("081106801197").unwrap(), 9);
    /// assert_eq!(table.gcp_length("004133370464").unwrap(), 7);
    /// assert!(table.gcp_length("400010161360").is_err());
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Result<Self, PrefixListError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut sorted = BTreeMap::new();
        for (prefix, gcp_length) in entries {
            let prefix = prefix.into();
            validate_entry(&prefix, gcp_length)?;
            sorted.insert(prefix, gcp_length);
        }

        Ok(PrefixTable {
            entries: Cow::Owned(
                sorted
                    .into_iter()
                    .map(|(prefix, gcp_length)| PrefixEntry {
                        prefix: Cow::Owned(prefix),
                        gcp_length,
                    })
                    .collect(),
            ),
            date: None,
        })
    }

    /// Returns the GCP length for the digits following the indicator digit of a GTIN-14.
    ///
    /// The entry with the longest prefix of `segment` decides; shorter matching prefixes are
    /// ignored.
    pub fn gcp_length(&self, segment: &str) -> Result<usize, GcpFormatError> {
        let longest = segment.len().min(MAX_PREFIX_LENGTH);
        for end in (1..=longest).rev() {
            let prefix = &segment[..end];
            if let Ok(index) = self
                .entries
                .binary_search_by(|entry| entry.prefix().cmp(prefix))
            {
                let gcp_length = self.entries[index].gcp_length;
                trace!("Resolved GCP length {} for {} ({})", gcp_length, segment, prefix);
                return Ok(gcp_length);
            }
        }
        Err(GcpFormatError::new(segment.to_string()))
    }

    /// Returns the date of the GCP Prefix Format List this table was read from, if known.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrefixEntry> {
        self.entries.iter()
    }
}

fn validate_entry(prefix: &str, gcp_length: usize) -> Result<(), PrefixListError> {
    if prefix.is_empty() || prefix.len() > MAX_PREFIX_LENGTH {
        return Err(PrefixListError::InvalidEntry {
            prefix: prefix.to_string(),
            message: format!("a prefix must have 1 to {} digits", MAX_PREFIX_LENGTH),
        });
    }
    if !prefix.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(PrefixListError::InvalidEntry {
            prefix: prefix.to_string(),
            message: "a prefix may only contain digits".to_string(),
        });
    }
    if gcp_length > MAX_PREFIX_LENGTH {
        return Err(PrefixListError::InvalidEntry {
            prefix: prefix.to_string(),
            message: format!(
                "a GCP length of {} exceeds {} digits",
                gcp_length, MAX_PREFIX_LENGTH
            ),
        });
    }
    Ok(())
}

/// Returns the GS1 Company Prefix of a GTIN supplied *with* its check digit.
///
/// The check digit is validated. Leading zeros of the GCP are preserved.
///
/// # Examples
///
/// ```
/// use gtin_sdk::get_gcp;
///
/// assert_eq!(get_gcp("00041333704647").unwrap(), "0041333");
/// assert_eq!(get_gcp(41333704647u64).unwrap(), "0041333");
/// ```
pub fn get_gcp<T: Into<GtinInput>>(checked: T) -> Result<String, GtinError> {
    get_gcp_with(checked, &GCP_PREFIXES)
}

/// Returns the GS1 Company Prefix of a GTIN, resolved against the given prefix table.
pub fn get_gcp_with<T: Into<GtinInput>>(
    checked: T,
    table: &PrefixTable,
) -> Result<String, GtinError> {
    Ok(Gtin::new(checked, None)?.parts_with(table)?.gcp)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    /// Tests that the bundled entries are sorted, unique and valid, which the lookup relies on.
    #[test]
    fn test_bundled_entries_are_ordered_and_valid() {
        for pair in prefixes::ENTRIES.windows(2) {
            assert!(
                pair[0].prefix() < pair[1].prefix(),
                "{} must precede {}",
                pair[0].prefix(),
                pair[1].prefix()
            );
        }
        for entry in prefixes::ENTRIES {
            assert!(validate_entry(entry.prefix(), entry.gcp_length()).is_ok());
        }
    }

    /// Tests that the bundled table marks restricted circulation ranges and resolves nothing
    /// outside of its entries.
    #[test]
    fn test_bundled_table_coverage() {
        assert_eq!(GCP_PREFIXES.gcp_length("234567890128").unwrap(), 0);
        assert_eq!(GCP_PREFIXES.gcp_length("023456789012").unwrap(), 0);
        assert_eq!(GCP_PREFIXES.gcp_length("081000012345").unwrap(), 9);
        assert!(GCP_PREFIXES.gcp_length("134567890128").is_err());
        assert!(GCP_PREFIXES.gcp_length("590123412345").is_err());
    }

    /// Tests that a GTIN without a known company prefix is not given one.
    #[test]
    fn test_get_gcp_unknown_prefix() {
        match get_gcp("01345678901280") {
            Err(GtinError::GcpFormat(err)) => assert_eq!(err.segment(), "134567890128"),
            other => panic!("expected a GCP format error, got {:?}", other),
        }
    }

    /// Tests that the longest matching prefix decides the GCP length.
    #[test]
    fn test_longest_prefix_wins() {
        let table =
            PrefixTable::from_entries(vec![("0", 6), ("08", 7), ("081", 9), ("0811", 8)]).unwrap();
        assert_eq!(table.gcp_length("081106801197").unwrap(), 8);
        assert_eq!(table.gcp_length("081206801197").unwrap(), 9);
        assert_eq!(table.gcp_length("082206801197").unwrap(), 7);
        assert_eq!(table.gcp_length("012206801197").unwrap(), 6);
    }

    /// Tests that a segment without any matching prefix is reported as a GCP format error.
    #[test]
    fn test_missing_prefix() {
        let table = PrefixTable::from_entries(vec![("0", 7)]).unwrap();
        let err = table.gcp_length("234567890128").unwrap_err();
        assert_eq!(err.segment(), "234567890128");

        match get_gcp_with("02345678901289", &table) {
            Err(GtinError::GcpFormat(_)) => (),
            other => panic!("expected a GCP format error, got {:?}", other),
        }
    }

    /// Tests that invalid prefixes and lengths are rejected and that the last duplicate wins.
    #[test]
    fn test_from_entries() {
        assert!(PrefixTable::from_entries(vec![("", 7)]).is_err());
        assert!(PrefixTable::from_entries(vec![("0a", 7)]).is_err());
        assert!(PrefixTable::from_entries(vec![("0123456789012", 7)]).is_err());
        assert!(PrefixTable::from_entries(vec![("0", 13)]).is_err());

        let table = PrefixTable::from_entries(vec![("1", 7), ("0", 6), ("1", 8)]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.iter().map(PrefixEntry::prefix).collect::<Vec<_>>(),
            vec!["0", "1"]
        );
        assert_eq!(table.gcp_length("100000000000").unwrap(), 8);
        assert_eq!(table.date(), None);
    }

    /// Tests GCP lookup from GTINs supplied with their check digit.
    #[test]
    fn test_get_gcp() {
        assert_eq!(get_gcp("00041333704647").unwrap(), "0041333");
        assert_eq!(get_gcp("0-4000101-6136-00").unwrap(), "4000101");
        assert_eq!(get_gcp("02345678901289").unwrap(), "");
        assert!(matches!(
            get_gcp("00041333704648"),
            Err(GtinError::CheckDigit(_))
        ));
    }
}
