// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with reading BST capture files.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BstReadError {
    #[error("{file} contains no samples")]
    Empty { file: String },

    #[error("When reading {file}, the inferred per-sample byte width {byte_width} does not give a whole number of beamlets; the file is corrupt or not a BST capture")]
    UninferableBitMode { file: String, byte_width: f64 },

    #[error("{file} contains {num_beamlets} beamlets; only mode-357 captures (488 beamlets) are supported")]
    UnsupportedBeamletCount { file: String, num_beamlets: usize },

    #[error("The base name of {file} does not start with a YYYYMMDD_HHMMSS timestamp")]
    NoTimestamp { file: String },

    #[error("When reading {file}, '{timestamp}' is not a valid date and time")]
    BadTimestamp { file: String, timestamp: String },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
