// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking.
//!
//! `SeamCarver` holds a copy of an image and its dual-gradient energy
//! map, and removes one connected, pixel-wide seam of least energy at
//! a time, vertically or horizontally.

pub mod dump;
pub mod energy;
pub mod error;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;
mod ternary;

pub use energy::{calculate_energy, dual_gradient, BORDER_ENERGY};
pub use error::CarveError;
pub use seamcarver::SeamCarver;
pub use seamfinder::energy_to_vertical_seam;
pub use twodmap::TwoDimensionalMap;
