// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam through an energy map.
//!
//! The map is treated as a digraph that is never built: an implicit
//! source sits above the top row, an implicit sink below the bottom
//! one, and every pixel has an edge to each of the (up to) three
//! pixels touching it in the row below, weighted by the energy of the
//! pixel it points to.  Visiting the rows in order is a topological
//! sort of that graph, so one relaxation sweep gives shortest paths.

use crate::cq;
use crate::error::CarveError;
use crate::twodmap::TwoDimensionalMap;

#[derive(Debug, Copy, Clone)]
pub(crate) struct DistanceAndEdge {
    pub dist_to: f64,
    pub edge_to: u32,
}

impl Default for DistanceAndEdge {
    fn default() -> Self {
        DistanceAndEdge {
            dist_to: f64::INFINITY,
            edge_to: 0,
        }
    }
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
///
/// Ties go to the lowest column, both at the bottom row and when
/// choosing a parent.
pub fn energy_to_vertical_seam(energy: &TwoDimensionalMap<f64>) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut target: TwoDimensionalMap<DistanceAndEdge> = TwoDimensionalMap::new(width, height);

    // The top row draws straight from the source.
    for x in 0..width {
        target[(x, 0)].dist_to = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // Push every pixel's distance down onto the three children below
    // it, keeping the first parent that offers the best distance.
    for y in 0..(height - 1) {
        for x in 0..width {
            let from = target[(x, y)].dist_to;
            for child in cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1) {
                let candidate = from + energy[(child, y + 1)];
                let slot = &mut target[(child, y + 1)];
                if candidate < slot.dist_to {
                    *slot = DistanceAndEdge {
                        dist_to: candidate,
                        edge_to: x,
                    };
                }
            }
        }
    }

    // Relax the sink: the first bottom-row pixel with the least
    // distance wins.
    let mut seam_col = 0;
    for x in 1..width {
        if target[(x, height - 1)].dist_to < target[(seam_col, height - 1)].dist_to {
            seam_col = x;
        }
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].edge_to;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Check that `seam` crosses exactly `length` pixels, that every entry
/// lies in `0..limit`, and that consecutive entries are neighbors.
pub fn validate_seam(seam: &[u32], length: u32, limit: u32) -> Result<(), CarveError> {
    if seam.len() != length as usize {
        return Err(CarveError::SeamLength {
            expected: length as usize,
            found: seam.len(),
        });
    }
    if let Some((index, &value)) = seam.iter().enumerate().find(|(_, v)| **v >= limit) {
        return Err(CarveError::SeamOutOfRange {
            index,
            value,
            limit,
        });
    }
    match seam
        .windows(2)
        .position(|pair| cq!(pair[0] > pair[1], pair[0] - pair[1], pair[1] - pair[0]) > 1)
    {
        Some(index) => Err(CarveError::SeamNotAdjacent(index, index + 1)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_DATA: [f64; 20] = [
        9., 9., 0., 9., 9., //
        9., 1., 9., 8., 9., //
        9., 9., 9., 9., 0., //
        9., 9., 9., 0., 9., //
    ];

    fn energies() -> TwoDimensionalMap<f64> {
        TwoDimensionalMap::from_raw(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        assert_eq!(energy_to_vertical_seam(&energies()), [2, 3, 4, 3]);
    }

    #[test]
    fn horizontal_seam_through_the_transpose() {
        let seam = energy_to_vertical_seam(&energies().transpose());
        assert_eq!(seam, [0, 1, 0, 1, 2]);
    }

    #[test]
    fn ties_go_to_the_lowest_column() {
        let flat = TwoDimensionalMap::from_fn(4, 3, |_, _| 5.0);
        assert_eq!(energy_to_vertical_seam(&flat), [0, 0, 0]);
    }

    #[test]
    fn single_column_and_single_row() {
        let column = TwoDimensionalMap::from_fn(1, 3, |_, _| 1000.0);
        assert_eq!(energy_to_vertical_seam(&column), [0, 0, 0]);
        let row = TwoDimensionalMap::from_raw(3, 1, vec![4.0, 2.0, 3.0]).unwrap();
        assert_eq!(energy_to_vertical_seam(&row), [1]);
    }

    #[test]
    fn found_seams_are_connected() {
        let map = TwoDimensionalMap::from_fn(7, 9, |x, y| ((x * 31 + y * 17) % 13) as f64);
        let seam = energy_to_vertical_seam(&map);
        assert_eq!(validate_seam(&seam, 9, 7), Ok(()));
    }

    #[test]
    fn seam_validation() {
        assert_eq!(validate_seam(&[1, 2, 1], 3, 3), Ok(()));
        assert_eq!(
            validate_seam(&[1, 2], 3, 3),
            Err(CarveError::SeamLength {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            validate_seam(&[1, 2, 3], 3, 3),
            Err(CarveError::SeamOutOfRange {
                index: 2,
                value: 3,
                limit: 3
            })
        );
        assert_eq!(
            validate_seam(&[0, 2, 2], 3, 3),
            Err(CarveError::SeamNotAdjacent(0, 1))
        );
    }
}
