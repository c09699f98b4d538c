// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with background subtraction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackgroundError {
    #[error("The percentile must be in (0, 100], but {got} was given")]
    InvalidPercentile { got: f64 },

    #[error("No time column has a standard deviation below the requested percentile; the background spectrum would be undefined")]
    NoQuietColumns,

    #[error("Frequency channel {channel} has a zero mean in the log domain and cannot be normalised")]
    ZeroMeanChannel { channel: usize },
}
