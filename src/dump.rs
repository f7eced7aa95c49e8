// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as a grayscale picture, brightest where the
//! energy is highest.  Handy for seeing where seams will go.

use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, ImageBuffer, Luma};

pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.values().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(width, height, |x, y| {
        if factor <= 0.0 {
            return Luma([0]);
        }
        let scaled = (energy[(x, y)] * 255.0 / factor).round();
        Luma([scaled.max(0.0).min(255.0) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightest_pixel_is_the_most_energetic() {
        let energy = TwoDimensionalMap::from_raw(2, 2, vec![0.0, 250.0, 500.0, 1000.0]).unwrap();
        let image = energy_to_image(&energy);
        assert_eq!(image.into_raw(), vec![0, 64, 128, 255]);
    }

    #[test]
    fn flat_zero_map_is_black() {
        let energy: TwoDimensionalMap<f64> = TwoDimensionalMap::new(3, 1);
        assert_eq!(energy_to_image(&energy).into_raw(), vec![0, 0, 0]);
    }
}
