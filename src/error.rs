//! Error types for the Ising simulator.
//!
//! Every failure here is a configuration or output problem; nothing is
//! transient, so callers surface these immediately instead of retrying.

use thiserror::Error;

/// Main error type for lattice construction, simulation runs and output.
#[derive(Error, Debug)]
pub enum IsingError {
    /// Lattice side length must be at least one.
    #[error("lattice size must be positive, got {0}")]
    InvalidSize(usize),

    /// Temperature must be finite and strictly positive (β = 1/T).
    #[error("temperature must be finite and > 0, got {0}")]
    InvalidTemperature(f64),

    /// Coupling constant must be finite.
    #[error("coupling constant must be finite, got {0}")]
    InvalidCoupling(f64),

    /// The equilibration cutoff leaves no sweeps to sample.
    #[error("equilibration cutoff {equil} leaves no samples out of {steps} steps")]
    NoSamples { steps: usize, equil: usize },

    /// Explicit spin data contained something other than ±1.
    #[error("spin at ({row}, {col}) is {value}, expected +1 or -1")]
    InvalidSpin { row: usize, col: usize, value: i8 },

    /// Explicit spin data was not an N×N grid.
    #[error("spin rows do not form a square grid (row {row} has {len} cells, expected {expected})")]
    NotSquare { row: usize, len: usize, expected: usize },

    /// Phase sweep called with an empty temperature list.
    #[error("phase sweep needs at least one temperature")]
    EmptyTemperatures,

    /// Plotting backend failure.
    #[error("plot error: {0}")]
    Plot(String),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, IsingError>;

impl IsingError {
    /// Wraps any drawing-backend error.
    #[must_use]
    pub fn plot<E: std::fmt::Display>(err: E) -> Self {
        Self::Plot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IsingError::NoSamples { steps: 100, equil: 100 };
        assert_eq!(
            err.to_string(),
            "equilibration cutoff 100 leaves no samples out of 100 steps"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: IsingError = io_err.into();
        assert!(matches!(err, IsingError::Io(_)));
    }

    #[test]
    fn test_plot_wraps_message() {
        let err = IsingError::plot("backend closed");
        assert!(err.to_string().contains("backend closed"));
    }
}
