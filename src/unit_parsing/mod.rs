// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse strings into plain numbers or some quantity with a unit.
//!
//! The dynamic-spectrum frequency axis is in MHz; everything parsed here is
//! convertible to that unit or fails loudly.

mod error;

pub use error::UnitParseError;

use hifitime::Epoch;
use regex::Regex;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, EnumString, IntoStaticStr)]
#[allow(non_camel_case_types)]
pub enum FreqFormat {
    /// Hertz
    Hz,

    /// kiloHertz
    kHz,

    /// megaHertz
    MHz,

    NoUnit,
}

impl FreqFormat {
    /// Scale a value in this unit to the frequency-axis unit \[MHz\]. A naked
    /// number is taken to already be in MHz.
    pub fn to_mhz(self, value: f64) -> f64 {
        match self {
            FreqFormat::Hz => value / 1e6,
            FreqFormat::kHz => value / 1e3,
            FreqFormat::MHz | FreqFormat::NoUnit => value,
        }
    }
}

/// Parse a string that may have a unit of frequency attached to it.
pub fn parse_freq(s: &str) -> Result<(f64, FreqFormat), UnitParseError> {
    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.trim().parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, FreqFormat::NoUnit));
    };

    // That didn't work; let's search over our supported formats.
    for freq_format in FreqFormat::iter().filter(|&ff| ff != FreqFormat::NoUnit) {
        let freq_format_str: &'static str = freq_format.into();
        let suffix = s
            .trim()
            .trim_start_matches(|c| char::is_numeric(c) || c == '.')
            .trim();
        if suffix.to_uppercase() == freq_format_str.to_uppercase() {
            let prefix = s.trim().trim_end_matches(char::is_alphabetic).trim();
            let number: f64 = match prefix.parse() {
                Ok(n) => n,
                Err(_) => return Err(UnitParseError::GotFreqUnitButCantParse(s.to_string())),
            };
            return Ok((number, freq_format));
        }
    }

    // If we made it this far, we don't know how to parse the string.
    Err(UnitParseError::Unknown {
        input: s.to_string(),
        unit_type: "frequency",
    })
}

lazy_static::lazy_static! {
    // Both the compact capture-file form (20170910_070804) and an ISO-ish
    // form (2017-09-10T07:08:04, with 'T' or a space) are accepted.
    static ref RE_COMPACT_TIMESTAMP: Regex =
        Regex::new(r"^(\d{4})(\d{2})(\d{2})_(\d{2})(\d{2})(\d{2})$").unwrap();
    static ref RE_ISO_TIMESTAMP: Regex =
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[T ](\d{2}):(\d{2}):(\d{2})$").unwrap();
}

/// Parse a timestamp string into a UTC [Epoch]. Sub-second precision is not
/// supported; BST data is sampled at whole seconds.
pub fn parse_epoch(s: &str) -> Result<Epoch, UnitParseError> {
    let s = s.trim();
    let caps = RE_COMPACT_TIMESTAMP
        .captures(s)
        .or_else(|| RE_ISO_TIMESTAMP.captures(s))
        .ok_or_else(|| UnitParseError::Unknown {
            input: s.to_string(),
            unit_type: "timestamp",
        })?;

    // The regexes guarantee the digit groups parse.
    let field = |i: usize| caps.get(i).unwrap().as_str();
    Epoch::maybe_from_gregorian_utc(
        field(1).parse().unwrap(),
        field(2).parse().unwrap(),
        field(3).parse().unwrap(),
        field(4).parse().unwrap(),
        field(5).parse().unwrap(),
        field(6).parse().unwrap(),
        0,
    )
    .map_err(|_| UnitParseError::InvalidTimestamp(s.to_string()))
}
