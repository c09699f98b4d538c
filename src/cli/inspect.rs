// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Print high-level information on BST capture files.

use std::path::PathBuf;

use itertools::{Itertools, MinMaxResult};
use log::info;

use super::BstError;
use crate::bst::read_bst_data;

pub(super) fn inspect(files: &[PathBuf]) -> Result<(), BstError> {
    for file in files {
        let bst = read_bst_data(file)?;
        let (num_channels, num_times) = bst.data.dim();

        info!("{}:", file.display());
        info!(
            "  {} channels x {} time samples",
            num_channels, num_times
        );

        match (bst.times.first(), bst.times.last()) {
            (Some(first), Some(last)) => info!("  time span: {} to {}", first, last),
            _ => info!("  time span: empty (truncated capture)"),
        }

        // Mode 357 is three contiguous bands, one per Nyquist zone.
        for (zone, band) in [
            &bst.freqs[..200],
            &bst.freqs[200..400],
            &bst.freqs[400..],
        ]
        .iter()
        .enumerate()
        {
            info!(
                "  zone {}: {:.3} to {:.3} MHz ({} channels)",
                zone + 1,
                band.first().unwrap(),
                band.last().unwrap(),
                band.len()
            );
        }

        match bst.data.iter().minmax() {
            MinMaxResult::MinMax(min, max) => {
                info!("  intensity range: {:.6e} to {:.6e}", min, max)
            }
            MinMaxResult::OneElement(only) => info!("  intensity: {:.6e}", only),
            MinMaxResult::NoElements => (),
        }
    }

    Ok(())
}
