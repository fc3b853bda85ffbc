//! Run parameters (single source of truth for defaults).

use crate::error::{IsingError, Result};

/// Parameters of one Simulation Runner call.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub size:        usize,
    pub temperature: f64,
    pub steps:       usize,
    pub equil:       usize,
    pub coupling:    f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size:        50,
            temperature: 2.5,
            steps:       1000,
            equil:       200,
            coupling:    1.0,
        }
    }
}

impl SimConfig {
    pub fn new(size: usize, temperature: f64, steps: usize, equil: usize) -> Self {
        Self { size, temperature, steps, equil, ..Self::default() }
    }

    pub fn with_coupling(mut self, coupling: f64) -> Self {
        self.coupling = coupling;
        self
    }

    /// Reject anything that would make the run meaningless: empty lattice,
    /// T ≤ 0 (β undefined), non-finite J, or no post-equilibration samples.
    pub fn validate(&self) -> Result<()> {
        validate_common(self.size, self.steps, self.equil, self.coupling)?;
        validate_temperature(self.temperature)
    }

    /// β = 1/T
    pub fn beta(&self) -> f64 {
        1.0 / self.temperature
    }

    /// Number of sweeps that get recorded.
    pub fn n_samples(&self) -> usize {
        self.steps.saturating_sub(self.equil)
    }
}

/// Parameters of a Phase Sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSweepConfig {
    pub size:          usize,
    pub temperatures:  Vec<f64>,
    pub steps:         usize,
    pub equil:         usize,
    pub coupling:      f64,
    pub seed:          u64,
    pub show_progress: bool,
}

impl Default for PhaseSweepConfig {
    fn default() -> Self {
        Self {
            size:          30,
            temperatures:  linspace(1.5, 3.5, 10),
            steps:         2000,
            equil:         500,
            coupling:      1.0,
            seed:          0,
            show_progress: false,
        }
    }
}

impl PhaseSweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.temperatures.is_empty() {
            return Err(IsingError::EmptyTemperatures);
        }
        validate_common(self.size, self.steps, self.equil, self.coupling)?;
        self.temperatures.iter().try_for_each(|&t| validate_temperature(t))
    }

    /// Runner configuration for one temperature of the sweep.
    pub fn at(&self, temperature: f64) -> SimConfig {
        SimConfig {
            size: self.size,
            temperature,
            steps: self.steps,
            equil: self.equil,
            coupling: self.coupling,
        }
    }
}

fn validate_common(size: usize, steps: usize, equil: usize, coupling: f64) -> Result<()> {
    if size == 0 {
        return Err(IsingError::InvalidSize(size));
    }
    if !coupling.is_finite() {
        return Err(IsingError::InvalidCoupling(coupling));
    }
    if equil >= steps {
        return Err(IsingError::NoSamples { steps, equil });
    }
    Ok(())
}

fn validate_temperature(t: f64) -> Result<()> {
    if t.is_finite() && t > 0.0 {
        Ok(())
    } else {
        Err(IsingError::InvalidTemperature(t))
    }
}

/// `n` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_endpoints() {
        let t = linspace(1.5, 3.5, 10);
        assert_eq!(t.len(), 10);
        assert_relative_eq!(t[0], 1.5);
        assert_relative_eq!(t[9], 3.5, epsilon = 1e-12);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
    }

    #[test]
    fn zero_temperature_rejected() {
        let cfg = SimConfig::new(10, 0.0, 100, 10);
        assert!(matches!(cfg.validate(), Err(IsingError::InvalidTemperature(_))));
        let cfg = SimConfig::new(10, -1.0, 100, 10);
        assert!(matches!(cfg.validate(), Err(IsingError::InvalidTemperature(_))));
    }

    #[test]
    fn equil_must_leave_samples() {
        let cfg = SimConfig::new(10, 2.0, 100, 100);
        assert!(matches!(
            cfg.validate(),
            Err(IsingError::NoSamples { steps: 100, equil: 100 })
        ));
        assert_eq!(cfg.n_samples(), 0);
    }

    #[test]
    fn phase_config_checks_every_temperature() {
        let cfg = PhaseSweepConfig {
            temperatures: vec![1.0, f64::NAN],
            ..PhaseSweepConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(IsingError::InvalidTemperature(_))));

        let cfg = PhaseSweepConfig { temperatures: vec![], ..PhaseSweepConfig::default() };
        assert!(matches!(cfg.validate(), Err(IsingError::EmptyTemperatures)));
    }
}
