// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use crate::*;

#[test]
fn export_writes_full_grid_as_csv() {
    let tmp = TempDir::new().unwrap();
    let file = write_synthetic_bst(tmp.path(), "20170910_070804_bst_00X.dat", 10);
    let out = tmp.path().join("out.csv");

    let result = ilofar_bst()
        .arg("export")
        .arg(&file)
        .arg("--output")
        .arg(&out)
        .ok();
    assert!(result.is_ok(), "{:?}", result);

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    // Header plus one row per time sample.
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("time,10.546875,"), "{}", lines[0]);
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), BEAMLETS + 1);
    }
    assert!(lines[1].starts_with("2017-09-10T07:08:04"), "{}", lines[1]);
}

#[test]
fn export_crops_and_subtracts_background() {
    let tmp = TempDir::new().unwrap();
    let file = write_synthetic_bst(tmp.path(), "20170910_070804_bst_00X.dat", 10);
    let out = tmp.path().join("out.csv");

    let result = ilofar_bst()
        .arg("export")
        .arg(&file)
        .arg("--output")
        .arg(&out)
        .arg("--start")
        .arg("2017-09-10T07:08:06")
        .arg("--end")
        .arg("2017-09-10T07:08:09")
        .arg("--freq-start")
        .arg("100MHz")
        .arg("--freq-end")
        .arg("200MHz")
        .arg("--background-sub2")
        .ok();
    assert!(result.is_ok(), "{:?}", result);

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    // 4 time samples survive the crop.
    assert_eq!(lines.len(), 5);
    // Only the 200 zone-2 channels lie between 100 and 200 MHz.
    assert_eq!(lines[0].split(',').count(), 201);
}

#[test]
fn export_rejects_conflicting_backgrounds() {
    let tmp = TempDir::new().unwrap();
    let file = write_synthetic_bst(tmp.path(), "20170910_070804_bst_00X.dat", 4);
    let out = tmp.path().join("out.csv");

    let result = ilofar_bst()
        .arg("export")
        .arg(&file)
        .arg("--output")
        .arg(&out)
        .arg("--background-sub1")
        .arg("--background-sub2")
        .ok();
    assert!(result.is_err());
}

#[test]
fn export_empty_crop_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let file = write_synthetic_bst(tmp.path(), "20170910_070804_bst_00X.dat", 4);
    let out = tmp.path().join("out.csv");

    let result = ilofar_bst()
        .arg("export")
        .arg(&file)
        .arg("--output")
        .arg(&out)
        .arg("--freq-start")
        .arg("300MHz")
        .arg("--freq-end")
        .arg("400MHz")
        .ok();
    assert!(result.is_ok(), "{:?}", result);

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    // No channels survive: the header is bare and rows carry only times.
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "time");
    assert_eq!(lines[1].split(',').count(), 1);
}
