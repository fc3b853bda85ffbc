//! Phase Sweep: independent runs across a temperature grid.

use crate::config::PhaseSweepConfig;
use crate::error::Result;
use crate::simulation::run_simulation;
use crate::utils::rng::task_rng;
use csv::WriterBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Aligned (T, ⟨|m|⟩, ⟨E⟩/N²) sequences in input temperature order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseCurve {
    pub temperatures:       Vec<f64>,
    pub abs_magnetization:  Vec<f64>,
    pub energy_per_site:    Vec<f64>,
}

/// One row of the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasePoint {
    pub temperature:       f64,
    pub abs_magnetization: f64,
    pub energy_per_site:   f64,
}

impl PhaseCurve {
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = PhasePoint> + '_ {
        self.temperatures
            .iter()
            .zip(&self.abs_magnetization)
            .zip(&self.energy_per_site)
            .map(|((&temperature, &abs_magnetization), &energy_per_site)| PhasePoint {
                temperature,
                abs_magnetization,
                energy_per_site,
            })
    }

    /// Write the curve as CSV with a header row.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_path(path)?;
        wtr.write_record(["temperature", "abs_magnetization_per_site", "energy_per_site"])?;
        for p in self.points() {
            wtr.write_record(&[
                p.temperature.to_string(),
                p.abs_magnetization.to_string(),
                p.energy_per_site.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl FromIterator<PhasePoint> for PhaseCurve {
    fn from_iter<I: IntoIterator<Item = PhasePoint>>(iter: I) -> Self {
        let mut curve = PhaseCurve::default();
        for p in iter {
            curve.temperatures.push(p.temperature);
            curve.abs_magnetization.push(p.abs_magnetization);
            curve.energy_per_site.push(p.energy_per_site);
        }
        curve
    }
}

/// Run the Simulation Runner once per temperature, each on a fresh lattice
/// with its own RNG, and collect |m| per site and E per site.
///
/// Temperatures run in parallel; the RNG for index `k` is derived from
/// `(config.seed, k)`, so the curve is the same for any thread count.
pub fn phase_transition(config: &PhaseSweepConfig) -> Result<PhaseCurve> {
    config.validate()?;
    info!(
        size = config.size,
        n_temps = config.temperatures.len(),
        steps = config.steps,
        equil = config.equil,
        "starting phase sweep"
    );

    let bar = if config.show_progress {
        let bar = ProgressBar::new(config.temperatures.len() as u64);
        if let Ok(style) =
            ProgressStyle::with_template(" {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]")
        {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let points = config
        .temperatures
        .par_iter()
        .enumerate()
        .map(|(idx, &temperature)| {
            let mut rng = task_rng(config.seed, idx);
            let run = run_simulation(&config.at(temperature), &mut rng)?;
            let point = PhasePoint {
                temperature,
                abs_magnetization: run.mean_magnetization_per_site.abs(),
                energy_per_site: run.energy_per_site(),
            };
            debug!(
                temperature,
                abs_m = point.abs_magnetization,
                e = point.energy_per_site,
                acceptance = run.acceptance_rate,
                "temperature done"
            );
            bar.inc(1);
            Ok(point)
        })
        .collect::<Result<Vec<_>>>()?;
    bar.finish_and_clear();

    Ok(points.into_iter().collect())
}
