//! Square spin lattice with periodic boundaries.

use crate::error::{IsingError, Result};
use rand::Rng;

/// N×N grid of ±1 spins, stored row-major.
///
/// The side length is fixed at construction and every cell always holds
/// exactly +1 or -1; the only mutation is [`Lattice::flip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    size:  usize,
    spins: Vec<i8>,
}

impl Lattice {
    /// Random lattice: each spin independently ±1 with probability 1/2,
    /// drawn from a caller‑supplied RNG (preferred for reproducibility).
    pub fn random_with(rng: &mut impl Rng, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(IsingError::InvalidSize(size));
        }
        let spins = (0..size * size)
            .map(|_| if rng.gen_bool(0.5) { 1 } else { -1 })
            .collect();
        Ok(Self { size, spins })
    }

    /// Convenience wrapper that uses `thread_rng`.
    pub fn random(size: usize) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::random_with(&mut rng, size)
    }

    /// All spins up (ground state for J > 0).
    pub fn ordered(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(IsingError::InvalidSize(size));
        }
        Ok(Self { size, spins: vec![1; size * size] })
    }

    /// Build from explicit rows, checking shape and spin values.
    pub fn from_rows(rows: &[Vec<i8>]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(IsingError::InvalidSize(size));
        }
        let mut spins = Vec::with_capacity(size * size);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(IsingError::NotSquare { row, len: cells.len(), expected: size });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value != 1 && value != -1 {
                    return Err(IsingError::InvalidSpin { row, col, value });
                }
                spins.push(value);
            }
        }
        Ok(Self { size, spins })
    }

    /// Side length N.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of sites N².
    #[inline(always)]
    pub fn n_sites(&self) -> usize {
        self.spins.len()
    }

    #[inline(always)]
    fn index(&self, i: usize, j: usize) -> usize {
        i * self.size + j
    }

    /// Spin at row `i`, column `j`. Panics when out of range.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> i8 {
        self.spins[self.index(i, j)]
    }

    /// Negate the spin at (i, j).
    #[inline(always)]
    pub fn flip(&mut self, i: usize, j: usize) {
        let idx = self.index(i, j);
        self.spins[idx] = -self.spins[idx];
    }

    /// Sum of the four nearest neighbours of (i, j), indices taken mod N.
    ///
    /// Both the energy and the Metropolis ΔE go through this, so they agree
    /// on the neighbour convention.
    #[inline]
    pub fn neighbor_sum(&self, i: usize, j: usize) -> i32 {
        let n = self.size;
        let up    = (i + n - 1) % n;
        let down  = (i + 1) % n;
        let left  = (j + n - 1) % n;
        let right = (j + 1) % n;
        self.get(down, j) as i32
            + self.get(i, right) as i32
            + self.get(up, j) as i32
            + self.get(i, left) as i32
    }

    /// Flat row-major view of the spins.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[i8]> + '_ {
        self.spins.chunks(self.size)
    }

    /// Iterate `(i, j, spin)` over every site.
    pub fn sites(&self) -> impl Iterator<Item = (usize, usize, i8)> + '_ {
        let n = self.size;
        self.spins.iter().enumerate().map(move |(k, &s)| (k / n, k % n, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_sum_wraps_corners() {
        let mut lat = Lattice::ordered(3).unwrap();
        lat.flip(2, 0);
        lat.flip(0, 2);
        // (0,0) sees (2,0) above and (0,2) to the left through the boundary.
        assert_eq!(lat.neighbor_sum(0, 0), 0);
        assert_eq!(lat.neighbor_sum(1, 1), 4);
    }

    #[test]
    fn single_site_is_its_own_neighbour() {
        let lat = Lattice::ordered(1).unwrap();
        assert_eq!(lat.neighbor_sum(0, 0), 4);
    }
}
