// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use crate::*;

#[test]
fn inspect_prints_capture_summary() {
    let tmp = TempDir::new().unwrap();
    let file = write_synthetic_bst(tmp.path(), "20170910_070804_bst_00X.dat", 10);

    let result = ilofar_bst().arg("inspect").arg(&file).ok();
    assert!(result.is_ok(), "{:?}", result);
    let (stdout, _) = get_cmd_output(result);

    assert!(stdout.contains("488 channels x 10 time samples"), "{stdout}");
    assert!(stdout.contains("2017-09-10T07:08:04"), "{stdout}");
    assert!(stdout.contains("2017-09-10T07:08:13"), "{stdout}");
    assert!(stdout.contains("zone 3"), "{stdout}");
}

#[test]
fn inspect_handles_multiple_files() {
    let tmp = TempDir::new().unwrap();
    let file1 = write_synthetic_bst(tmp.path(), "20170910_070804_bst_00X.dat", 3);
    let file2 = write_synthetic_bst(tmp.path(), "20170911_080000_bst_00X.dat", 5);

    let result = ilofar_bst().arg("inspect").arg(&file1).arg(&file2).ok();
    assert!(result.is_ok(), "{:?}", result);
    let (stdout, _) = get_cmd_output(result);

    assert!(stdout.contains("488 channels x 3 time samples"), "{stdout}");
    assert!(stdout.contains("488 channels x 5 time samples"), "{stdout}");
}

#[test]
fn inspect_missing_file_fails() {
    let result = ilofar_bst()
        .arg("inspect")
        .arg("/does/not/exist/20170910_070804_bst_00X.dat")
        .ok();
    assert!(result.is_err());
    let (_, stderr) = get_cmd_output(result);
    assert!(stderr.contains("Error"), "{stderr}");
}
