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

/// An error that can occur while building a prefix table
#[derive(Debug)]
pub enum PrefixListError {
    /// An entry carries a malformed prefix or GCP length
    InvalidEntry { prefix: String, message: String },
    #[cfg(feature = "gcp-prefix-list")]
    Io(std::io::Error),
    #[cfg(feature = "gcp-prefix-list")]
    Xml(quick_xml::DeError),
}

impl Error for PrefixListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PrefixListError::InvalidEntry { .. } => None,
            #[cfg(feature = "gcp-prefix-list")]
            PrefixListError::Io(err) => Some(err),
            #[cfg(feature = "gcp-prefix-list")]
            PrefixListError::Xml(err) => Some(err),
        }
    }
}

impl fmt::Display for PrefixListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrefixListError::InvalidEntry { prefix, message } => {
                write!(f, "invalid GCP prefix entry {:?}: {}", prefix, message)
            }
            #[cfg(feature = "gcp-prefix-list")]
            PrefixListError::Io(err) => write!(f, "unable to read GCP prefix list: {}", err),
            #[cfg(feature = "gcp-prefix-list")]
            PrefixListError::Xml(err) => write!(f, "unable to parse GCP prefix list: {}", err),
        }
    }
}

#[cfg(feature = "gcp-prefix-list")]
impl From<std::io::Error> for PrefixListError {
    fn from(err: std::io::Error) -> Self {
        PrefixListError::Io(err)
    }
}

#[cfg(feature = "gcp-prefix-list")]
impl From<quick_xml::DeError> for PrefixListError {
    fn from(err: quick_xml::DeError) -> Self {
        PrefixListError::Xml(err)
    }
}
