//! Rendering of snapshots, the phase curve and spin dynamics (plotters).

use crate::error::{IsingError, Result};
use crate::lattice::Lattice;
use crate::phase::PhaseCurve;
use crate::simulation::Simulation;
use plotters::coord::Shift;
use plotters::prelude::*;
use rand::Rng;
use std::path::Path;
use tracing::info;

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

const SPIN_DOWN: RGBColor = RGBColor(59, 76, 192);
const SPIN_UP: RGBColor = RGBColor(180, 4, 38);

/// Cool–warm colour map: -1 -> blue, +1 -> red.
pub fn spin_color(spin: i8) -> RGBColor {
    if spin > 0 {
        SPIN_UP
    } else {
        SPIN_DOWN
    }
}

/// Row 0 is drawn at the top, as in an image.
fn draw_cells(area: &DrawingArea<BitMapBackend<'_>, Shift>, lattice: &Lattice) -> DrawResult {
    let n = lattice.size() as f64;
    let (w, h) = area.dim_in_pixel();
    let cell_w = w as f64 / n;
    let cell_h = h as f64 / n;

    for (i, j, spin) in lattice.sites() {
        let x0 = (j as f64 * cell_w) as i32;
        let y0 = (i as f64 * cell_h) as i32;
        let x1 = ((j + 1) as f64 * cell_w) as i32;
        let y1 = ((i + 1) as f64 * cell_h) as i32;
        area.draw(&Rectangle::new([(x0, y0), (x1, y1)], spin_color(spin).filled()))?;
    }
    Ok(())
}

fn snapshot_png(lattice: &Lattice, title: &str, path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, (600, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let (header, body) = root.split_vertically(40);
    header.titled(title, ("sans-serif", 22))?;
    let body = body.margin(0, 20, 20, 20);
    draw_cells(&body, lattice)?;
    root.present()?;
    Ok(())
}

/// Save the spin configuration as a PNG (blue = -1, red = +1).
pub fn save_snapshot(lattice: &Lattice, title: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    snapshot_png(lattice, title, path).map_err(IsingError::plot)?;
    info!("snapshot saved to {}", path.display());
    Ok(())
}

fn phase_png(curve: &PhaseCurve, path: &Path) -> DrawResult {
    let (mut t_min, mut t_max) = curve
        .temperatures
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| (lo.min(t), hi.max(t)));
    if t_max <= t_min {
        t_min -= 0.5;
        t_max += 0.5;
    }

    let root = BitMapBackend::new(path, (720, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("2D Ising Model Phase Transition", ("sans-serif", 22))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(t_min..t_max, 0.0..1.05)?;

    chart
        .configure_mesh()
        .x_desc("Temperature (T)")
        .y_desc("Magnetization per site")
        .draw()?;

    let series: Vec<(f64, f64)> = curve.points().map(|p| (p.temperature, p.abs_magnetization)).collect();
    chart
        .draw_series(LineSeries::new(series.iter().copied(), &BLUE))?
        .label("|M| per site")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart.draw_series(series.iter().map(|&p| Circle::new(p, 4, BLUE.filled())))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Line plot of |m| per site against temperature.
pub fn save_phase_curve(curve: &PhaseCurve, path: impl AsRef<Path>) -> Result<()> {
    if curve.is_empty() {
        return Err(IsingError::EmptyTemperatures);
    }
    let path = path.as_ref();
    phase_png(curve, path).map_err(IsingError::plot)?;
    info!("phase curve saved to {}", path.display());
    Ok(())
}

fn dynamics_gif<R: Rng>(sim: &mut Simulation<R>, frames: usize, path: &Path, fps: u32) -> DrawResult {
    let delay_ms = 1000 / fps.max(1);
    let root = BitMapBackend::gif(path, (500, 500), delay_ms)?.into_drawing_area();
    sim.run_frames(frames, |_, lattice| {
        root.fill(&WHITE).map_err(IsingError::plot)?;
        draw_cells(&root, lattice).map_err(IsingError::plot)?;
        root.present().map_err(IsingError::plot)
    })?;
    Ok(())
}

/// Animated GIF of successive sweeps, one frame per sweep at `fps`.
pub fn animate_dynamics<R: Rng>(
    sim: &mut Simulation<R>,
    frames: usize,
    path: impl AsRef<Path>,
    fps: u32,
) -> Result<()> {
    let path = path.as_ref();
    dynamics_gif(sim, frames, path, fps).map_err(IsingError::plot)?;
    info!("animation saved to {}", path.display());
    Ok(())
}
