// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Subband-to-frequency conversion.
//!
//! A station subband selection is a set of subband indices (0..512) plus a
//! Nyquist zone; together they determine the observed sky frequencies. Mode
//! 357 tiles three fixed selections over zones 1, 2 and 3 to cover roughly
//! 10--240 MHz with 488 beamlets.

use crate::constants::{SAMPLE_CLOCK_MHZ, SUBBANDS_PER_ZONE};

/// Convert subband indices in a given Nyquist zone to centre frequencies
/// \[MHz\]. Ordering and length of the input are preserved.
pub fn subband_to_freq<I>(subbands: I, nyquist_zone: u8) -> Vec<f64>
where
    I: IntoIterator<Item = u16>,
{
    subbands
        .into_iter()
        .map(|sb| {
            (f64::from(nyquist_zone) - 1.0 + f64::from(sb) / f64::from(SUBBANDS_PER_ZONE))
                * (SAMPLE_CLOCK_MHZ / 2.0)
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref MODE_357_FREQS_MHZ: Vec<f64> = {
        let mut freqs = subband_to_freq((54..=452).step_by(2), 1);
        freqs.extend(subband_to_freq((54..=452).step_by(2), 2));
        freqs.extend(subband_to_freq((54..=228).step_by(2), 3));
        freqs
    };
}

/// The fixed mode-357 frequency axis \[MHz\], one entry per beamlet.
pub fn mode_357_frequencies() -> &'static [f64] {
    &MODE_357_FREQS_MHZ
}
