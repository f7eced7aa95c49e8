// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional maps
//!
//! A dense, addressable field of values: the pixel store, the energy
//! cache and the shortest-path scratch space are all one of these.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// Defines the basic map: an addressable two-dimensional field
/// containing one of several possible objects during processing: an
/// RGB triple for the pixel store, an `f64` for the energy cache, or a
/// distance + back pointer for the seam digraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    values: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to the content type's
    /// default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            values: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a map by asking `f` for the value of every `(x, y)`,
    /// visited row by row.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        TwoDimensionalMap {
            width,
            height,
            values: iproduct!(0..height, 0..width)
                .map(|(y, x)| f(x, y))
                .collect(),
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the buffer
    /// is not exactly `width * height` long.
    pub fn from_raw(width: u32, height: u32, values: Vec<P>) -> Option<Self> {
        if values.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            values,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The raw row-major contents.
    pub fn values(&self) -> &[P] {
        &self.values
    }

    /// Bounds-checked read.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.values[self.get_index(x, y)])
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Returns the map flipped along its diagonal: the width becomes
    /// the height, and the value at `(x, y)` moves to `(y, x)`.
    pub fn transpose(&self) -> Self {
        TwoDimensionalMap::from_fn(self.height, self.width, |x, y| self[(y, x)])
    }

    /// Returns a map one column narrower, built by dropping the entry
    /// at `seam[y]` from every row `y` and closing the gap leftward.
    ///
    /// The caller must have validated the seam: one in-range column per
    /// row, and a map at least one column wide.
    pub fn without_vertical_seam(&self, seam: &[u32]) -> Self {
        debug_assert_eq!(seam.len(), self.height as usize);
        let width = self.width as usize;
        let mut values = Vec::with_capacity((width - 1) * self.height as usize);
        for (row, &split) in self.values.chunks(width).zip(seam) {
            let split = split as usize;
            values.extend_from_slice(&row[..split]);
            values.extend_from_slice(&row[split + 1..]);
        }
        TwoDimensionalMap {
            width: self.width - 1,
            height: self.height,
            values,
        }
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.values[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.values[index]
    }
}
