// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use byteorder::{LittleEndian, WriteBytesExt};
use criterion::*;
use hifitime::{Duration, Epoch};
use ndarray::Array2;

use ilofar_bst::constants::MODE_357_BEAMLETS;
use ilofar_bst::{mode_357_frequencies, read_bst_data, DynamicSpectrum};

/// An hour-long synthetic capture. The spectral contrast grows slowly over
/// time so that the column standard deviations are all distinct and the
/// quiet-time selection has a meaningful distribution to rank.
fn synthetic_spectrum() -> DynamicSpectrum {
    let num_times = 3600;
    let data = Array2::from_shape_fn((MODE_357_BEAMLETS, num_times), |(b, t)| {
        (10.0 * (b + 1) as f64).powf(1.0 + t as f64 / 1e5)
    });
    let start = Epoch::from_gregorian_utc(2017, 9, 10, 7, 8, 4, 0);
    let times = (0..num_times)
        .map(|i| start + Duration::from_seconds(i as f64))
        .collect();
    DynamicSpectrum::new(data, times, mode_357_frequencies().to_vec())
}

fn bst_decoding(c: &mut Criterion) {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("20170910_070804_bst_00X.dat");
    let num_times = 3600;
    let mut bytes = Vec::with_capacity(num_times * MODE_357_BEAMLETS * 8);
    for t in 0..num_times {
        for b in 0..MODE_357_BEAMLETS {
            bytes
                .write_f64::<LittleEndian>(10.0 * (b + 1) as f64 + (t % 7) as f64)
                .unwrap();
        }
    }
    std::fs::write(&path, bytes).unwrap();

    c.bench_function("decode hour-long capture", |b| {
        b.iter(|| read_bst_data(&path).unwrap())
    });
}

fn background_subtraction(c: &mut Criterion) {
    let spectrum = synthetic_spectrum();

    c.bench_function("background_sub1", |b| {
        b.iter(|| spectrum.background_sub1(1.0).unwrap())
    });
    c.bench_function("background_sub2", |b| {
        b.iter(|| spectrum.background_sub2().unwrap())
    });
}

criterion_group!(benches, bst_decoding, background_subtraction);
criterion_main!(benches);
