//! Simulation Runner: sweeps, equilibration cutoff and averages.

use crate::config::SimConfig;
use crate::error::{IsingError, Result};
use crate::lattice::Lattice;
use crate::metropolis::{metropolis_step, SweepInfo};
use crate::observables::{Observables, SampleSeries};
use rand::Rng;
use tracing::info;

/// Outcome of one run at fixed temperature.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Mean total energy over recorded sweeps.
    pub mean_energy: f64,
    /// Mean signed magnetization divided by N².
    pub mean_magnetization_per_site: f64,
    /// Lattice after the last sweep.
    pub lattice: Lattice,
    /// Accepted / attempted flips over all sweeps, equilibration included.
    pub acceptance_rate: f64,
    pub n_samples: usize,
}

impl RunResult {
    pub fn energy_per_site(&self) -> f64 {
        self.mean_energy / self.lattice.n_sites() as f64
    }
}

/// Lattice plus everything needed to keep sweeping it.
///
/// Owns its RNG so frame callbacks (animation) only see the lattice.
#[derive(Debug, Clone)]
pub struct Simulation<R: Rng> {
    lattice:  Lattice,
    beta:     f64,
    coupling: f64,
    rng:      R,
    sweeps:   usize,
    totals:   SweepInfo,
}

impl<R: Rng> Simulation<R> {
    /// Fresh random lattice at temperature `temperature`.
    pub fn new(size: usize, temperature: f64, coupling: f64, mut rng: R) -> Result<Self> {
        let lattice = Lattice::random_with(&mut rng, size)?;
        Self::from_lattice(lattice, temperature, coupling, rng)
    }

    /// Continue from an existing configuration.
    pub fn from_lattice(lattice: Lattice, temperature: f64, coupling: f64, rng: R) -> Result<Self> {
        if !(temperature.is_finite() && temperature > 0.0) {
            return Err(IsingError::InvalidTemperature(temperature));
        }
        if !coupling.is_finite() {
            return Err(IsingError::InvalidCoupling(coupling));
        }
        Ok(Self {
            lattice,
            beta: 1.0 / temperature,
            coupling,
            rng,
            sweeps: 0,
            totals: SweepInfo::default(),
        })
    }

    /// One Metropolis sweep.
    pub fn sweep(&mut self) -> SweepInfo {
        let info = metropolis_step(&mut self.lattice, self.beta, self.coupling, &mut self.rng);
        self.sweeps += 1;
        self.totals += info;
        info
    }

    /// Sweep `frames` times, handing the lattice to `on_frame` after each.
    pub fn run_frames<F>(&mut self, frames: usize, mut on_frame: F) -> Result<()>
    where
        F: FnMut(usize, &Lattice) -> Result<()>,
    {
        for frame in 0..frames {
            self.sweep();
            on_frame(frame, &self.lattice)?;
        }
        Ok(())
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    pub fn observables(&self) -> Observables {
        Observables::measure(&self.lattice, self.coupling)
    }

    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    pub fn acceptance_rate(&self) -> f64 {
        self.totals.acceptance_rate()
    }
}

/// Run `steps` sweeps on a new lattice and average the observables of
/// every sweep with index ≥ `equil`.
///
/// The configuration is validated first; `equil >= steps` is reported as
/// [`IsingError::NoSamples`] rather than producing a NaN mean.
pub fn run_simulation(config: &SimConfig, rng: &mut impl Rng) -> Result<RunResult> {
    config.validate()?;
    info!(
        size = config.size,
        temperature = config.temperature,
        steps = config.steps,
        equil = config.equil,
        "starting run"
    );

    let mut sim = Simulation::new(config.size, config.temperature, config.coupling, rng)?;
    let mut series = SampleSeries::with_capacity(config.n_samples());

    for step in 0..config.steps {
        sim.sweep();
        if step >= config.equil {
            series.push(sim.observables());
        }
    }

    let no_samples = || IsingError::NoSamples { steps: config.steps, equil: config.equil };
    let mean_energy = series.mean_energy().ok_or_else(no_samples)?;
    let mean_magnetization = series.mean_magnetization().ok_or_else(no_samples)?;
    let acceptance_rate = sim.acceptance_rate();
    let lattice = sim.into_lattice();
    let n_sites = lattice.n_sites() as f64;

    Ok(RunResult {
        mean_energy,
        mean_magnetization_per_site: mean_magnetization / n_sites,
        lattice,
        acceptance_rate,
        n_samples: series.len(),
    })
}
