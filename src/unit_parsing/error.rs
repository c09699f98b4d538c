// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnitParseError {
    #[error(
        "Successfully parsed a frequency unit, but could not parse the numerical component of '{0}'"
    )]
    GotFreqUnitButCantParse(String),

    #[error("'{0}' has the form of a timestamp, but is not a valid date and time")]
    InvalidTimestamp(String),

    #[error("Could not parse '{input}' as a {unit_type}")]
    Unknown {
        input: String,
        unit_type: &'static str,
    },
}
