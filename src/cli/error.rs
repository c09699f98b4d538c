// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all BST-tool errors. This should be the *only* error enum
//! that is publicly visible.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BstError {
    #[error("{0}")]
    Read(#[from] crate::bst::BstReadError),

    #[error("{0}")]
    Background(#[from] crate::dynspec::BackgroundError),

    #[error("{0}")]
    Unit(#[from] crate::unit_parsing::UnitParseError),

    #[error("{0}")]
    IO(#[from] std::io::Error),
}
