//! Metropolis acceptance rule and sweeps.

use approx::assert_relative_eq;
use ising::{accept_flip, delta_energy, energy, metropolis_step, Lattice};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_downhill_moves_always_accepted() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xDEADBEEF);
    for beta in [0.0, 0.5, 10.0, 1e6] {
        for _ in 0..10_000 {
            assert!(accept_flip(-8.0, beta, &mut rng));
            assert!(accept_flip(-4.0, beta, &mut rng));
        }
    }
}

#[test]
fn test_uphill_acceptance_rate_matches_boltzmann_factor() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let n_trials = 100_000;

    for (delta_e, beta) in [(4.0, 0.5), (8.0, 0.25), (4.0, 0.1)] {
        let accepted = (0..n_trials)
            .filter(|_| accept_flip(delta_e, beta, &mut rng))
            .count();
        let rate = accepted as f64 / n_trials as f64;
        let expected = (-beta * delta_e).exp();

        // σ ≤ 0.0016 for 1e5 Bernoulli trials; allow ~6σ.
        assert!(
            (rate - expected).abs() < 0.01,
            "ΔE={delta_e}, β={beta}: rate {rate:.4} vs exp(-βΔE) {expected:.4}"
        );
    }
}

#[test]
fn test_delta_energy_matches_full_recomputation() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let mut lat = Lattice::random_with(&mut rng, 6).unwrap();

    for (i, j) in [(0, 0), (5, 5), (2, 4), (0, 5)] {
        let predicted = delta_energy(&lat, i, j, 1.3);
        let before = energy(&lat, 1.3);
        lat.flip(i, j);
        let after = energy(&lat, 1.3);
        assert_relative_eq!(after - before, predicted, epsilon = 1e-12);
    }
}

#[test]
fn test_sweep_attempts_n_squared_flips() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let mut lat = Lattice::random_with(&mut rng, 7).unwrap();
    let info = metropolis_step(&mut lat, 0.4, 1.0, &mut rng);

    assert_eq!(info.attempts, 49);
    assert!(info.accepted <= info.attempts);
}

#[test]
fn test_infinite_temperature_accepts_everything() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let mut lat = Lattice::random_with(&mut rng, 5).unwrap();
    let info = metropolis_step(&mut lat, 0.0, 1.0, &mut rng);

    assert_eq!(info.accepted, info.attempts);
    assert_relative_eq!(info.acceptance_rate(), 1.0);
}

#[test]
fn test_ground_state_is_frozen_at_low_temperature() {
    // Every flip from the ordered state costs 8J; at β = 50, exp(-400) is far below the RNG resolution.
    let mut rng = ChaCha20Rng::seed_from_u64(13);
    let mut lat = Lattice::ordered(8).unwrap();
    for _ in 0..20 {
        let info = metropolis_step(&mut lat, 50.0, 1.0, &mut rng);
        assert_eq!(info.accepted, 0);
    }
    assert_eq!(lat, Lattice::ordered(8).unwrap());
}

#[test]
fn test_sweep_keeps_spins_valid() {
    let mut rng = ChaCha20Rng::seed_from_u64(14);
    let mut lat = Lattice::random_with(&mut rng, 10).unwrap();
    for _ in 0..50 {
        metropolis_step(&mut lat, 0.44, 1.0, &mut rng);
        assert!(lat.spins().iter().all(|&s| s == 1 || s == -1));
    }
}
