// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient across a pixel pair
//!
//! Given the two pixels on either side of a candidate, the gradient
//! between them is the squared distance between the colors that make
//! them up, channel by channel.

use image::{Pixel, Primitive};
use num_traits::{cast, Unsigned};

/// One 8-bit-per-channel RGB sample, as stored in the pixel map.
pub type Rgb8 = [u8; 3];

/// Pixel -> Rgb8
///
/// Reduce any pixel with unsigned integer subpixels to an 8-bit RGB
/// triple.  Alpha is dropped; wider subpixels are rescaled so that
/// their maximum maps to 255.  Signed and floating-point subpixels
/// have no such maximum and are not accepted.
pub fn rgb8_of<P, S>(pixel: &P) -> Rgb8
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + Unsigned + 'static,
{
    let max: f64 = cast(S::max_value()).unwrap_or(255.0);
    let rgb = pixel.to_rgb();
    let mut out = [0u8; 3];
    for (o, c) in out.iter_mut().zip(rgb.channels()) {
        let c: f64 = cast(*c).unwrap_or(0.0);
        *o = (c * 255.0 / max).round() as u8;
    }
    out
}

/// (Pixel, Pixel) -> squared gradient
///
/// Maps the difference between each channel, squares it, and sums
/// the lot:
///
/// ```text
/// |Δ|² = (Δr)² + (Δg)² + (Δb)²
/// ```
#[inline]
pub fn gradient_of_pair(p1: &Rgb8, p2: &Rgb8) -> f64 {
    p1.iter()
        .zip(p2)
        .map(|(c1, c2)| {
            let d = f64::from(*c1) - f64::from(*c2);
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, Rgba};

    #[test]
    fn eight_bit_pixels_pass_through() {
        assert_eq!(rgb8_of(&Rgb([1u8, 128, 255])), [1, 128, 255]);
        assert_eq!(rgb8_of(&Rgba([9u8, 8, 7, 0])), [9, 8, 7]);
        assert_eq!(rgb8_of(&Luma([42u8])), [42, 42, 42]);
    }

    #[test]
    fn sixteen_bit_pixels_are_rescaled() {
        assert_eq!(rgb8_of(&Rgb([0u16, 65535, 257 * 100])), [0, 255, 100]);
    }

    #[test]
    fn thirty_two_bit_pixels_are_rescaled() {
        assert_eq!(rgb8_of(&Luma([u32::max_value()])), [255, 255, 255]);
        assert_eq!(rgb8_of(&Luma([0u32])), [0, 0, 0]);
    }

    #[test]
    fn channel_gradient_is_exact_across_the_full_range() {
        assert_eq!(gradient_of_pair(&[0, 0, 0], &[255, 255, 255]), 3.0 * 65025.0);
    }

    #[test]
    fn identical_pixels_have_no_gradient() {
        assert_eq!(gradient_of_pair(&[12, 200, 7], &[12, 200, 7]), 0.0);
    }

    #[test]
    fn channels_contribute_independently() {
        // (255 - 255)² + (205 - 203)² + (255 - 51)²
        assert_eq!(gradient_of_pair(&[255, 205, 255], &[255, 203, 51]), 41620.0);
        assert_eq!(gradient_of_pair(&[255, 203, 51], &[255, 205, 255]), 41620.0);
    }
}
