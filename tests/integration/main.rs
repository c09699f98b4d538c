// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod export;
mod inspect;

use std::{
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};
use byteorder::{LittleEndian, WriteBytesExt};

const BEAMLETS: usize = 488;

fn ilofar_bst() -> Command {
    Command::cargo_bin("ilofar_bst").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// Write a synthetic mode-357 capture under `dir`. Values are positive and
/// vary over both axes so that background subtraction has something to do.
fn write_synthetic_bst(dir: &Path, name: &str, num_times: usize) -> PathBuf {
    let path = dir.join(name);
    let mut bytes = Vec::with_capacity(num_times * BEAMLETS * 8);
    for t in 0..num_times {
        for b in 0..BEAMLETS {
            let value = 10.0 * (b + 1) as f64 + (t % 3) as f64;
            bytes.write_f64::<LittleEndian>(value).unwrap();
        }
    }
    std::fs::write(&path, bytes).unwrap();
    path
}
