//! Metropolis Monte Carlo for the 2D Ising model on a periodic square
//! lattice, plus rendering of snapshots, phase curves and dynamics.

pub mod config;
pub mod error;
pub mod lattice;
pub mod metropolis;
pub mod observables;
pub mod output;
pub mod phase;
pub mod simulation;
pub mod utils;
pub mod visualize;

pub use config::{linspace, PhaseSweepConfig, SimConfig};
pub use error::{IsingError, Result};
pub use lattice::Lattice;
pub use metropolis::{accept_flip, delta_energy, metropolis_step, SweepInfo};
pub use observables::{energy, magnetization, Observables};
pub use phase::{phase_transition, PhaseCurve, PhasePoint};
pub use simulation::{run_simulation, RunResult, Simulation};

/// Random N×N lattice of ±1 spins from the given RNG.
pub fn initial_lattice(size: usize, rng: &mut impl rand::Rng) -> Result<Lattice> {
    Lattice::random_with(rng, size)
}

/// Exact critical temperature of the square-lattice model (J = k_B = 1):
/// T_c = 2 / ln(1 + √2) ≈ 2.269.
pub fn critical_temperature() -> f64 {
    2.0 / (1.0 + 2.0_f64.sqrt()).ln()
}
