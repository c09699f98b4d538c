// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dynamic-spectrum container.
//!
//! [DynamicSpectrum] wraps a (frequency, time) intensity grid together with
//! its axes. Transforms never mutate; each one builds a new instance from
//! explicit fields, so chains of crops and background subtractions cannot
//! alias each other's data.

mod error;

pub use error::BackgroundError;

use hifitime::Epoch;
use ndarray::prelude::*;

use crate::bst::BstData;
use crate::unit_parsing::{parse_epoch, parse_freq, UnitParseError};

/// A dynamic spectrum: intensity over (frequency, time).
#[derive(Debug, Clone)]
pub struct DynamicSpectrum {
    /// Intensity with shape (frequency, time).
    data: Array2<f64>,

    /// One timestamp per grid column.
    times: Vec<Epoch>,

    /// One centre frequency per grid row \[MHz\].
    freqs: Vec<f64>,
}

impl From<BstData> for DynamicSpectrum {
    fn from(bst: BstData) -> DynamicSpectrum {
        DynamicSpectrum::new(bst.data, bst.times, bst.freqs)
    }
}

impl DynamicSpectrum {
    /// Wrap a grid and its axes. `data` must have shape
    /// (`freqs.len()`, `times.len()`).
    pub fn new(data: Array2<f64>, times: Vec<Epoch>, freqs: Vec<f64>) -> DynamicSpectrum {
        debug_assert_eq!(data.nrows(), freqs.len());
        debug_assert_eq!(data.ncols(), times.len());
        DynamicSpectrum { data, times, freqs }
    }

    pub fn data(&self) -> ArrayView2<f64> {
        self.data.view()
    }

    pub fn times(&self) -> &[Epoch] {
        &self.times
    }

    /// Centre frequencies \[MHz\].
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    /// Normalise against the quietest times in the observation.
    ///
    /// The grid is taken to log10 (zero powers map to 0 rather than -inf),
    /// then each time column's standard deviation across frequency is
    /// computed. Columns whose deviation is below the given percentile of
    /// the nonzero deviations are presumed burst-free; their per-frequency
    /// mean forms the background spectrum, and every column is divided by
    /// it element-wise.
    ///
    /// `percentile` must lie in (0, 100]. If no column qualifies, the
    /// background is undefined and an error is returned.
    pub fn background_sub1(&self, percentile: f64) -> Result<DynamicSpectrum, BackgroundError> {
        if !(0.0..=100.0).contains(&percentile) || percentile == 0.0 {
            return Err(BackgroundError::InvalidPercentile { got: percentile });
        }

        let mut data = log10_or_zero(&self.data);

        let stds = data.std_axis(Axis(0), 0.0);
        let nonzero_stds: Vec<f64> = stds.iter().copied().filter(|&s| s != 0.0).collect();
        if nonzero_stds.is_empty() {
            return Err(BackgroundError::NoQuietColumns);
        }
        let threshold = percentile_of(nonzero_stds, percentile);

        let quiet: Vec<usize> = stds
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s != 0.0 && s < threshold)
            .map(|(i, _)| i)
            .collect();
        if quiet.is_empty() {
            return Err(BackgroundError::NoQuietColumns);
        }

        // `quiet` is non-empty, so the mean along time exists.
        let background = data
            .select(Axis(1), &quiet)
            .mean_axis(Axis(1))
            .expect("at least one quiet column");

        for (mut row, &bg) in data.axis_iter_mut(Axis(0)).zip(background.iter()) {
            row.mapv_inplace(|v| v / bg);
        }

        Ok(DynamicSpectrum {
            data,
            times: self.times.clone(),
            freqs: self.freqs.clone(),
        })
    }

    /// Normalise each frequency channel by its own mean.
    ///
    /// The grid is taken to log10 (zero powers map to 0 rather than -inf),
    /// then each row is divided by its mean. A channel whose log-domain
    /// mean is zero cannot be normalised and produces an error.
    pub fn background_sub2(&self) -> Result<DynamicSpectrum, BackgroundError> {
        let mut data = log10_or_zero(&self.data);

        for (channel, mut row) in data.axis_iter_mut(Axis(0)).enumerate() {
            match row.mean() {
                Some(mean) if mean != 0.0 => row.mapv_inplace(|v| v / mean),
                _ => return Err(BackgroundError::ZeroMeanChannel { channel }),
            }
        }

        Ok(DynamicSpectrum {
            data,
            times: self.times.clone(),
            freqs: self.freqs.clone(),
        })
    }

    /// Keep only the times in the inclusive range [`start`, `end`] and their
    /// grid columns. An empty selection is not an error; the result simply
    /// has no columns.
    pub fn crop_time(&self, start: Epoch, end: Epoch) -> DynamicSpectrum {
        let keep: Vec<usize> = self
            .times
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t >= start && t <= end)
            .map(|(i, _)| i)
            .collect();

        DynamicSpectrum {
            data: self.data.select(Axis(1), &keep),
            times: keep.iter().map(|&i| self.times[i]).collect(),
            freqs: self.freqs.clone(),
        }
    }

    /// [crop_time](Self::crop_time) with timestamp strings (compact
    /// `YYYYMMDD_HHMMSS` or ISO `YYYY-MM-DDTHH:MM:SS`).
    pub fn crop_time_str(&self, start: &str, end: &str) -> Result<DynamicSpectrum, UnitParseError> {
        Ok(self.crop_time(parse_epoch(start)?, parse_epoch(end)?))
    }

    /// Keep only the channels whose centre frequency lies in the inclusive
    /// range [`start_mhz`, `end_mhz`] and their grid rows. An empty
    /// selection is not an error; the result simply has no rows.
    pub fn crop_freq(&self, start_mhz: f64, end_mhz: f64) -> DynamicSpectrum {
        let keep: Vec<usize> = self
            .freqs
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f >= start_mhz && f <= end_mhz)
            .map(|(i, _)| i)
            .collect();

        DynamicSpectrum {
            data: self.data.select(Axis(0), &keep),
            times: self.times.clone(),
            freqs: keep.iter().map(|&i| self.freqs[i]).collect(),
        }
    }

    /// [crop_freq](Self::crop_freq) with unit-tagged frequency strings
    /// (e.g. `"45MHz"`, `"8500 kHz"`; naked numbers are taken as MHz).
    pub fn crop_freq_str(&self, start: &str, end: &str) -> Result<DynamicSpectrum, UnitParseError> {
        let (start, start_unit) = parse_freq(start)?;
        let (end, end_unit) = parse_freq(end)?;
        Ok(self.crop_freq(start_unit.to_mhz(start), end_unit.to_mhz(end)))
    }
}

/// Element-wise log10, with zeros mapping to 0 instead of -inf. Negative
/// powers don't occur in BST data; if present they propagate as NaN, as
/// they would through any other statistic.
fn log10_or_zero(data: &Array2<f64>) -> Array2<f64> {
    data.mapv(|v| {
        let l = v.log10();
        if l == f64::NEG_INFINITY {
            0.0
        } else {
            l
        }
    })
}

/// The `p`-th percentile (0 < p <= 100) of `values`, with linear
/// interpolation between ranks.
fn percentile_of(mut values: Vec<f64>, p: f64) -> f64 {
    values.sort_by(f64::total_cmp);
    let rank = p / 100.0 * (values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let frac = rank - lo as f64;
    if lo + 1 < values.len() {
        values[lo] + frac * (values[lo + 1] - values[lo])
    } else {
        values[lo]
    }
}
