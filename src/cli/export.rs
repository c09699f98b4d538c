// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Decode a BST capture, apply the requested transforms and write CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::{debug, info};

use super::BstError;
use crate::bst::read_bst_data;
use crate::dynspec::DynamicSpectrum;
use crate::unit_parsing::{parse_epoch, parse_freq};

pub(super) struct ExportParams {
    pub(super) file: PathBuf,
    pub(super) output: PathBuf,
    pub(super) start: Option<String>,
    pub(super) end: Option<String>,
    pub(super) freq_start: Option<String>,
    pub(super) freq_end: Option<String>,
    pub(super) background_sub1: bool,
    pub(super) percentile: f64,
    pub(super) background_sub2: bool,
}

pub(super) fn export(params: ExportParams) -> Result<(), BstError> {
    let bst = read_bst_data(&params.file)?;
    let mut spectrum = DynamicSpectrum::from(bst);
    debug!(
        "Decoded {}: {:?}",
        params.file.display(),
        spectrum.data().dim()
    );

    if params.start.is_some() || params.end.is_some() {
        // Missing bounds default to the capture's own limits.
        if let (Some(&first), Some(&last)) = (spectrum.times().first(), spectrum.times().last()) {
            let start = match params.start.as_deref() {
                Some(s) => parse_epoch(s)?,
                None => first,
            };
            let end = match params.end.as_deref() {
                Some(s) => parse_epoch(s)?,
                None => last,
            };
            spectrum = spectrum.crop_time(start, end);
            debug!("After time crop: {:?}", spectrum.data().dim());
        }
    }

    if params.freq_start.is_some() || params.freq_end.is_some() {
        let start_mhz = match params.freq_start.as_deref() {
            Some(s) => {
                let (value, unit) = parse_freq(s)?;
                unit.to_mhz(value)
            }
            None => f64::NEG_INFINITY,
        };
        let end_mhz = match params.freq_end.as_deref() {
            Some(s) => {
                let (value, unit) = parse_freq(s)?;
                unit.to_mhz(value)
            }
            None => f64::INFINITY,
        };
        spectrum = spectrum.crop_freq(start_mhz, end_mhz);
        debug!("After frequency crop: {:?}", spectrum.data().dim());
    }

    if params.background_sub1 {
        spectrum = spectrum.background_sub1(params.percentile)?;
    } else if params.background_sub2 {
        spectrum = spectrum.background_sub2()?;
    }

    write_csv(&spectrum, &params.output)?;
    info!("Wrote {}", params.output.display());
    Ok(())
}

/// One row per time sample, one column per channel, with the channel centre
/// frequencies \[MHz\] in the header.
fn write_csv(spectrum: &DynamicSpectrum, output: &PathBuf) -> Result<(), std::io::Error> {
    let mut out = BufWriter::new(File::create(output)?);

    write!(out, "time")?;
    for freq in spectrum.freqs() {
        write!(out, ",{}", freq)?;
    }
    writeln!(out)?;

    let data = spectrum.data();
    for (i, time) in spectrum.times().iter().enumerate() {
        write!(out, "{}", time)?;
        for channel in 0..data.nrows() {
            write!(out, ",{}", data[[channel, i]])?;
        }
        writeln!(out)?;
    }

    out.flush()
}
