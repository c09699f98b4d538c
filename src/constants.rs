// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All frequency work is done in MHz and double precision throughout.
 */

/// The station sample clock \[MHz\]. One subband is `clock / 2 / 512` wide.
pub const SAMPLE_CLOCK_MHZ: f64 = 200.0;

/// The number of subbands per Nyquist zone.
pub const SUBBANDS_PER_ZONE: u16 = 512;

/// The station backend serialises 244 beamlets at 16 bits; lower bit depths
/// trade sample width for beamlet count, so a capture's beamlet count is
/// this product divided by its per-sample byte width.
pub const BEAMLET_BITS: f64 = 244.0 * 16.0;

/// The number of beamlets in an rcu357_1beam ("mode 357") capture:
/// 200 + 200 + 88 subbands over Nyquist zones 1, 2 and 3.
pub const MODE_357_BEAMLETS: usize = 488;

/// The time between consecutive BST samples \[seconds\].
pub const BST_SAMPLE_INTERVAL_S: f64 = 1.0;
