// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong when carving.
//!
//! Every variant is an invalid argument: the engine does no I/O and
//! has no transient failures, so nothing here is worth retrying.  All
//! of them are raised before the engine mutates anything.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    #[fail(display = "cannot carve an image with no pixels")]
    EmptyImage,

    #[fail(
        display = "pixel ({}, {}) is outside a {}x{} image",
        x, y, width, height
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[fail(
        display = "seam has {} entries but must cross {} pixels",
        found, expected
    )]
    SeamLength { expected: usize, found: usize },

    #[fail(
        display = "seam entry {} is {}, outside the range 0..{}",
        index, value, limit
    )]
    SeamOutOfRange { index: usize, value: u32, limit: u32 },

    #[fail(display = "seam entries {} and {} are not adjacent", _0, _1)]
    SeamNotAdjacent(usize, usize),

    #[fail(display = "cannot remove a seam from a dimension of {} pixel", size)]
    CannotShrink { size: u32 },

    #[fail(
        display = "cannot carve to an empty {}x{} target",
        new_width, new_height
    )]
    EmptyTarget { new_width: u32, new_height: u32 },

    #[fail(
        display = "seam carving cannot upscale a {}x{} image to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },
}
