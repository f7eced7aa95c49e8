// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - The engine
//!
//! The carver copies an image once, computes the energy of every
//! pixel once, and from then on keeps both maps current as seams are
//! removed, one at a time.  Horizontal work is done by turning both
//! maps on their side and running the vertical algorithm.

use crate::cq;
use crate::dump::energy_to_image;
use crate::energy::{calculate_energy, energy_at};
use crate::error::CarveError;
use crate::pixelpairs::{rgb8_of, Rgb8};
use crate::seamfinder::{energy_to_vertical_seam, validate_seam};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use num_traits::Unsigned;
use tracing::{debug, trace};

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the code what I'm doing.  And I
// like that.

#[derive(PartialEq, Copy, Clone, Debug)]
enum Orientation {
    Upright,
    Transposed,
}

impl Orientation {
    fn turn(self) -> Self {
        cq!(
            self == Orientation::Upright,
            Orientation::Transposed,
            Orientation::Upright
        )
    }
}

#[derive(PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        cq!(self == Carve::Width, Carve::Height, Carve::Width)
    }
}

/// A struct for holding the image being carved, and the energy of
/// every pixel in it.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    pixels: TwoDimensionalMap<Rgb8>,
    energy: TwoDimensionalMap<f64>,
    orientation: Orientation,
}

impl SeamCarver {
    /// Creates a new SeamCarver holding a copy of the image.  The
    /// image itself is never touched again.  Subpixels must be
    /// unsigned integers; they are rescaled to 8 bits per channel.
    pub fn new<I, P, S>(image: &I) -> Result<Self, CarveError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + Unsigned + 'static,
    {
        let (width, height) = image.dimensions();
        SeamCarver::from_pixels(TwoDimensionalMap::from_fn(width, height, |x, y| {
            rgb8_of(&image.get_pixel(x, y))
        }))
    }

    /// Creates a new SeamCarver that takes ownership of a pixel map.
    pub fn from_pixels(pixels: TwoDimensionalMap<Rgb8>) -> Result<Self, CarveError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage);
        }
        let energy = calculate_energy(&pixels);
        debug!(width, height, "energy map computed");
        Ok(SeamCarver {
            pixels,
            energy,
            orientation: Orientation::Upright,
        })
    }

    /// Width of the current picture.
    pub fn width(&self) -> u32 {
        match self.orientation {
            Orientation::Upright => self.pixels.width(),
            Orientation::Transposed => self.pixels.height(),
        }
    }

    /// Height of the current picture.
    pub fn height(&self) -> u32 {
        match self.orientation {
            Orientation::Upright => self.pixels.height(),
            Orientation::Transposed => self.pixels.width(),
        }
    }

    /// The cached energy of the pixel at column `x`, row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64, CarveError> {
        let (gx, gy) = cq!(self.orientation == Orientation::Upright, (x, y), (y, x));
        self.energy.get(gx, gy).ok_or(CarveError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    /// The column of each row, top to bottom, of the cheapest vertical
    /// seam.
    pub fn find_vertical_seam(&self) -> Vec<u32> {
        let seam = energy_to_vertical_seam(&self.energy);
        trace!(?seam, "vertical seam");
        seam
    }

    /// The row of each column, left to right, of the cheapest
    /// horizontal seam.  The energy map is flipped on its side and
    /// handed to the vertical finder; the flipped copy is discarded.
    pub fn find_horizontal_seam(&self) -> Vec<u32> {
        let seam = energy_to_vertical_seam(&self.energy.transpose());
        trace!(?seam, "horizontal seam");
        seam
    }

    /// Remove a top-to-bottom seam, one pixel per row.  The seam must
    /// have an entry for every row, each one in range and within one
    /// column of the entry above it, and the picture must be at least
    /// two pixels wide.  Nothing changes if any of that is not true.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        let (width, height) = self.pixels.dimensions();
        if width <= 1 {
            return Err(CarveError::CannotShrink { size: width });
        }
        validate_seam(seam, height, width)?;

        self.pixels = self.pixels.without_vertical_seam(seam);
        self.energy = self.energy.without_vertical_seam(seam);
        self.repair_energy(seam);
        trace!(width = width - 1, height, "seam removed");
        Ok(())
    }

    /// Remove a left-to-right seam, one pixel per column.  The same
    /// rules apply as for vertical seams, with rows and columns
    /// exchanged.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        let (width, height) = self.pixels.dimensions();
        if height <= 1 {
            return Err(CarveError::CannotShrink { size: height });
        }
        validate_seam(seam, width, height)?;

        self.transpose();
        let removed = self.remove_vertical_seam(seam);
        self.transpose();
        removed
    }

    /// Shrink the picture to `new_width` x `new_height`, one seam at a
    /// time.  While both dimensions are too large, vertical and
    /// horizontal seams are taken in turn.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<(), CarveError> {
        let (width, height) = (self.width(), self.height());
        if new_width > width || new_height > height {
            return Err(CarveError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::EmptyTarget {
                new_width,
                new_height,
            });
        }

        debug!(width, height, new_width, new_height, "carving");
        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Carve::Width)?;
        }
        while self.height() > new_height {
            self.carve_once(Carve::Height)?;
        }
        Ok(())
    }

    /// A fresh copy of the current picture.
    pub fn picture(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| Rgb(self.pixels[(x, y)]))
    }

    /// The current energy map as a grayscale picture.
    pub fn energy_picture(&self) -> GrayImage {
        energy_to_image(&self.energy)
    }

    fn carve_once(&mut self, direction: Carve) -> Result<(), CarveError> {
        match direction {
            Carve::Width => {
                let seam = self.find_vertical_seam();
                self.remove_vertical_seam(&seam)
            }
            Carve::Height => {
                let seam = self.find_horizontal_seam();
                self.remove_horizontal_seam(&seam)
            }
        }
    }

    fn transpose(&mut self) {
        self.pixels = self.pixels.transpose();
        self.energy = self.energy.transpose();
        self.orientation = self.orientation.turn();
    }

    // Only the pixels either side of a removed one have a new
    // neighbor.  `seam` holds pre-removal columns, so a split equal to
    // the new width was the old last column.
    fn repair_energy(&mut self, seam: &[u32]) {
        let width = self.pixels.width();
        for (y, &split) in (0..).zip(seam) {
            if split == width {
                self.recompute(split - 1, y);
            } else if split == 0 {
                self.recompute(0, y);
            } else {
                self.recompute(split - 1, y);
                self.recompute(split, y);
            }
        }
    }

    fn recompute(&mut self, x: u32, y: u32) {
        self.energy[(x, y)] = energy_at(&self.pixels, x, y);
    }
}
