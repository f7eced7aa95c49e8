// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual gradient of its four neighbors:
//! the color distance between its left and right neighbors, and
//! between its upper and lower ones.
//!
//! ```text
//!       |Δx|² = (Δrx)² + (Δgx)² + (Δbx)²
//!       |Δy|² = (Δry)² + (Δgy)² + (Δby)²
//!      e(x,y) = √(|Δx|² + |Δy|²)
//! ```
//!
//! Because a pixel's energy reads only those four neighbors, removing
//! a seam disturbs the energy of at most the two pixels either side of
//! each removed one.  The carver relies on that to repair its cache
//! instead of recomputing it.

use crate::error::CarveError;
use crate::pixelpairs::{gradient_of_pair, Rgb8};
use crate::twodmap::TwoDimensionalMap;

/// The energy pinned to every pixel on the edge of the image.  Border
/// pixels have no neighbor on one side, and making them expensive
/// keeps seams off the true edge.
pub const BORDER_ENERGY: f64 = 1000.0;

/// The dual-gradient energy of the pixel at `(x, y)`.
pub fn dual_gradient(pixels: &TwoDimensionalMap<Rgb8>, x: u32, y: u32) -> Result<f64, CarveError> {
    let (width, height) = pixels.dimensions();
    if x >= width || y >= height {
        return Err(CarveError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(energy_at(pixels, x, y))
}

// Callers guarantee (x, y) is in bounds; the border test guarantees
// the neighbors are.
pub(crate) fn energy_at(pixels: &TwoDimensionalMap<Rgb8>, x: u32, y: u32) -> f64 {
    let (width, height) = pixels.dimensions();
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BORDER_ENERGY;
    }

    let dx2 = gradient_of_pair(&pixels[(x + 1, y)], &pixels[(x - 1, y)]);
    let dy2 = gradient_of_pair(&pixels[(x, y + 1)], &pixels[(x, y - 1)]);
    (dx2 + dy2).sqrt()
}

/// Compute the energy of every pixel in a pixel map.
pub fn calculate_energy(pixels: &TwoDimensionalMap<Rgb8>) -> TwoDimensionalMap<f64> {
    let (width, height) = pixels.dimensions();
    TwoDimensionalMap::from_fn(width, height, |x, y| energy_at(pixels, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    // The classic 3x4 example, row by row.
    const PIXELS: [Rgb8; 12] = [
        [255, 101, 51],
        [255, 101, 153],
        [255, 101, 255],
        [255, 153, 51],
        [255, 153, 153],
        [255, 153, 255],
        [255, 203, 51],
        [255, 204, 153],
        [255, 205, 255],
        [255, 255, 51],
        [255, 255, 153],
        [255, 255, 255],
    ];

    fn sample() -> TwoDimensionalMap<Rgb8> {
        TwoDimensionalMap::from_raw(3, 4, PIXELS.to_vec()).unwrap()
    }

    #[test]
    fn interior_pixels_use_the_dual_gradient() {
        let pixels = sample();
        // Δx² = 204², Δy² = 103²
        assert_eq!(dual_gradient(&pixels, 1, 1).unwrap(), 52225f64.sqrt());
        // Δx² = 2² + 204², Δy² = 102²
        assert_eq!(dual_gradient(&pixels, 1, 2).unwrap(), 52024f64.sqrt());
    }

    #[test]
    fn border_pixels_are_pinned() {
        let energy = calculate_energy(&sample());
        for (x, y) in iproduct!(0..3, 0..4) {
            if x == 1 && (y == 1 || y == 2) {
                continue;
            }
            assert_eq!(energy[(x, y)], BORDER_ENERGY, "({}, {})", x, y);
        }
    }

    #[test]
    fn two_by_two_is_all_border() {
        let pixels = TwoDimensionalMap::from_fn(2, 2, |x, y| [x as u8 * 90, y as u8 * 40, 7]);
        let energy = calculate_energy(&pixels);
        assert!(energy.values().iter().all(|e| *e == BORDER_ENERGY));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let pixels = sample();
        assert_eq!(
            dual_gradient(&pixels, 3, 0),
            Err(CarveError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 4
            })
        );
        assert!(dual_gradient(&pixels, 0, 4).is_err());
    }

    #[test]
    fn channel_order_does_not_matter() {
        let pixels = sample();
        let swizzled = TwoDimensionalMap::from_fn(3, 4, |x, y| {
            let [r, g, b] = pixels[(x, y)];
            [b, r, g]
        });
        assert_eq!(calculate_energy(&pixels), calculate_energy(&swizzled));
    }

    #[test]
    fn identical_neighbors_mean_zero_energy() {
        // The center's own color never enters its energy.
        let pixels = TwoDimensionalMap::from_fn(3, 3, |x, y| {
            if (x, y) == (1, 1) {
                [255, 0, 0]
            } else {
                [10, 10, 10]
            }
        });
        assert_eq!(dual_gradient(&pixels, 1, 1).unwrap(), 0.0);
    }
}
