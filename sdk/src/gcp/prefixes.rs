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

/* Entries of the GS1 GCP Prefix Format List
(https://www.gs1.org/docs/gcp_length/gcpprefixformatlist.xml) for a small set of known company
prefixes, plus the restricted circulation ranges. This is not the complete list: segments no
entry covers do not resolve, and the complete list is read with the `gcp-prefix-list` feature.
Entries must stay sorted by prefix. A GCP length of 0 marks a range without company prefixes. */

use super::PrefixEntry;

pub(super) const ENTRIES: &[PrefixEntry] = &[
    // GS1 US, UPC company prefixes
    PrefixEntry::bundled("00", 7),
    PrefixEntry::bundled("01887", 10),
    // restricted circulation within a company, UPC prefix 2
    PrefixEntry::bundled("02", 0),
    PrefixEntry::bundled("03321", 6),
    PrefixEntry::bundled("081", 9),
    PrefixEntry::bundled("0810000", 9),
    // restricted circulation within a geographic region, GS1 prefixes 20 to 29
    PrefixEntry::bundled("2", 0),
    // GS1 Germany
    PrefixEntry::bundled("4000101", 7),
];
