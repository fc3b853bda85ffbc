//! Single-spin-flip Metropolis updates.

use crate::lattice::Lattice;
use rand::Rng;

/// Returned by [`metropolis_step`], lets the driver track acceptance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepInfo {
    pub attempts: usize,
    pub accepted: usize,
}

impl SweepInfo {
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }
}

impl std::ops::AddAssign for SweepInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.attempts += rhs.attempts;
        self.accepted += rhs.accepted;
    }
}

/// Energy change from flipping (i, j): ΔE = 2 J S (neighbour sum).
#[inline]
pub fn delta_energy(lattice: &Lattice, i: usize, j: usize, coupling: f64) -> f64 {
    let s = lattice.get(i, j) as f64;
    2.0 * coupling * s * lattice.neighbor_sum(i, j) as f64
}

/// Metropolis criterion. Downhill moves are always taken without touching
/// the RNG; otherwise a fresh uniform [0, 1) draw is compared to exp(-βΔE).
#[inline]
pub fn accept_flip(delta_e: f64, beta: f64, rng: &mut impl Rng) -> bool {
    delta_e < 0.0 || rng.gen::<f64>() < (-beta * delta_e).exp()
}

/// One sweep: N² trial flips at uniformly random sites, chosen with
/// replacement, applied in place.
///
/// `beta` must be finite and non-negative.
pub fn metropolis_step(
    lattice: &mut Lattice,
    beta: f64,
    coupling: f64,
    rng: &mut impl Rng,
) -> SweepInfo {
    let n = lattice.size();
    let attempts = lattice.n_sites();
    let mut accepted = 0;

    for _ in 0..attempts {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        let delta_e = delta_energy(lattice, i, j, coupling);
        if accept_flip(delta_e, beta, rng) {
            lattice.flip(i, j);
            accepted += 1;
        }
    }

    SweepInfo { attempts, accepted }
}
