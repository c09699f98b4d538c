// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read beamlet statistics ("BST") capture files.
//!
//! A BST file has no header; it is a raw sequence of little-endian f64
//! beamlet powers, written beamlet-fastest at one-second cadence. The
//! capture start time is encoded in the first 15 characters of the file
//! name as `YYYYMMDD_HHMMSS`. The per-sample byte width is not stored and
//! must be inferred from the file length.

mod error;

pub use error::BstReadError;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use hifitime::{Duration, Epoch};
use ndarray::prelude::*;
use regex::Regex;

use crate::constants::{BEAMLET_BITS, BST_SAMPLE_INTERVAL_S, MODE_357_BEAMLETS};
use crate::subband::mode_357_frequencies;

lazy_static::lazy_static! {
    // Capture files must not be renamed; the start time only lives in the
    // file name (e.g. 20170910_070804_bst_00X.dat).
    static ref RE_BST_TIMESTAMP: Regex =
        Regex::new(r"^(\d{4})(\d{2})(\d{2})_(\d{2})(\d{2})(\d{2})").unwrap();
}

/// A decoded BST capture.
#[derive(Debug, Clone)]
pub struct BstData {
    /// Beamlet powers with shape (beamlet, time).
    pub data: Array2<f64>,

    /// One timestamp per time sample, at one-second cadence from the
    /// filename-encoded start time.
    pub times: Vec<Epoch>,

    /// The centre frequency of each beamlet \[MHz\].
    pub freqs: Vec<f64>,
}

/// Read a mode-357 BST capture file.
///
/// The whole file is read in one go; the handle is closed before any
/// decoding happens. Trailing samples that do not complete a full time
/// sample across all beamlets are discarded, not an error: captures
/// interrupted mid-write are still usable.
pub fn read_bst_data(file: &Path) -> Result<BstData, BstReadError> {
    let file_str = file.display().to_string();

    let raw = {
        let mut bin_file = BufReader::new(File::open(file)?);
        let mut buf = vec![];
        bin_file.read_to_end(&mut buf)?;
        buf
    };

    let num_samples = raw.len() / 8;
    if num_samples == 0 {
        return Err(BstReadError::Empty { file: file_str });
    }

    // The per-sample byte width of the original capture, inferred by
    // comparing the byte length against the f64 sample count.
    let byte_width = raw.len() as f64 / num_samples as f64;
    let num_beamlets = BEAMLET_BITS / byte_width;
    if num_beamlets <= 0.0 || (num_beamlets - num_beamlets.round()).abs() > 1e-9 {
        return Err(BstReadError::UninferableBitMode {
            file: file_str,
            byte_width,
        });
    }
    let num_beamlets = num_beamlets.round() as usize;
    if num_beamlets != MODE_357_BEAMLETS {
        return Err(BstReadError::UnsupportedBeamletCount {
            file: file_str,
            num_beamlets,
        });
    }

    // Truncate to a whole number of time samples.
    let num_times = num_samples / num_beamlets;
    let usable_samples = num_times * num_beamlets;
    let mut samples = vec![0.0; usable_samples];
    LittleEndian::read_f64_into(&raw[..usable_samples * 8], &mut samples);

    // The file is beamlet-fastest; transpose to (beamlet, time).
    let data = Array2::from_shape_vec((num_times, num_beamlets), samples)?
        .reversed_axes()
        .as_standard_layout()
        .into_owned();

    let start = parse_start_time(file)?;
    let times = (0..num_times)
        .map(|i| start + Duration::from_seconds(i as f64 * BST_SAMPLE_INTERVAL_S))
        .collect();

    Ok(BstData {
        data,
        times,
        freqs: mode_357_frequencies().to_vec(),
    })
}

/// Parse the capture start time from the leading `YYYYMMDD_HHMMSS` of a BST
/// file's base name.
fn parse_start_time(file: &Path) -> Result<Epoch, BstReadError> {
    let file_str = file.display().to_string();
    let base_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| BstReadError::NoTimestamp {
            file: file_str.clone(),
        })?;
    let caps = RE_BST_TIMESTAMP
        .captures(base_name)
        .ok_or_else(|| BstReadError::NoTimestamp {
            file: file_str.clone(),
        })?;

    // The regex guarantees the digit groups parse.
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
    .map_err(|_| BstReadError::BadTimestamp {
        file: file_str,
        timestamp: caps.get(0).unwrap().as_str().to_string(),
    })
}
