// observables.rs - Energy and magnetization of a spin lattice

use crate::lattice::Lattice;

/// Total interaction energy with periodic boundaries.
///
/// E = -J Σ S(i,j)·(sum of four neighbours) / 2, the halving removing the
/// double count of every bond.
pub fn energy(lattice: &Lattice, coupling: f64) -> f64 {
    let bond_sum: i64 = lattice
        .sites()
        .map(|(i, j, s)| s as i64 * lattice.neighbor_sum(i, j) as i64)
        .sum();
    -coupling * bond_sum as f64 / 2.0
}

/// Total magnetization Σ S(i,j).
pub fn magnetization(lattice: &Lattice) -> i64 {
    lattice.spins().iter().map(|&s| s as i64).sum()
}

/// E / N²
pub fn energy_per_site(lattice: &Lattice, coupling: f64) -> f64 {
    energy(lattice, coupling) / lattice.n_sites() as f64
}

/// M / N²
pub fn magnetization_per_site(lattice: &Lattice) -> f64 {
    magnetization(lattice) as f64 / lattice.n_sites() as f64
}

/// One measurement of the lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observables {
    pub energy:        f64,
    pub magnetization: i64,
}

impl Observables {
    /// Measure all observables from current lattice state
    pub fn measure(lattice: &Lattice, coupling: f64) -> Self {
        Self {
            energy:        energy(lattice, coupling),
            magnetization: magnetization(lattice),
        }
    }
}

/// Energy and magnetization recorded after equilibration.
#[derive(Debug, Default, Clone)]
pub struct SampleSeries {
    energies:       Vec<f64>,
    magnetizations: Vec<f64>,
}

impl SampleSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            energies:       Vec::with_capacity(n),
            magnetizations: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, obs: Observables) {
        self.energies.push(obs.energy);
        self.magnetizations.push(obs.magnetization as f64);
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// Mean total energy, `None` when nothing was recorded.
    pub fn mean_energy(&self) -> Option<f64> {
        mean(&self.energies)
    }

    /// Mean total (signed) magnetization, `None` when nothing was recorded.
    pub fn mean_magnetization(&self) -> Option<f64> {
        mean(&self.magnetizations)
    }
}

fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        None
    } else {
        Some(xs.iter().sum::<f64>() / xs.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_mean() {
        let series = SampleSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.mean_energy(), None);
        assert_eq!(series.mean_magnetization(), None);
    }

    #[test]
    fn series_means() {
        let mut series = SampleSeries::with_capacity(2);
        series.push(Observables { energy: -4.0, magnetization: 2 });
        series.push(Observables { energy: -2.0, magnetization: -4 });
        assert_eq!(series.len(), 2);
        assert_eq!(series.mean_energy(), Some(-3.0));
        assert_eq!(series.mean_magnetization(), Some(-1.0));
    }
}
