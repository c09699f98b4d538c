// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Dynamic-spectrum tools for I-LOFAR beamlet statistics (BST) data.

BST capture files are decoded into a (frequency, time) intensity grid with
derived time and frequency axes; the [DynamicSpectrum] container then offers
background subtraction and cropping, each producing a new instance.
 */

pub mod bst;
pub mod cli;
pub mod constants;
pub mod dynspec;
pub mod subband;
pub mod unit_parsing;

// Re-exports.
pub use bst::{read_bst_data, BstData};
pub use cli::BstError;
pub use dynspec::DynamicSpectrum;
pub use subband::{mode_357_frequencies, subband_to_freq};
