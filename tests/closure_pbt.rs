use ising::{magnetization, metropolis_step, Lattice};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_spins_stay_plus_minus_one(
        size in 1usize..10,
        seed in any::<u64>(),
        temperature in 0.1f64..10.0,
        sweeps in 0usize..15
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut lat = Lattice::random_with(&mut rng, size).unwrap();
        prop_assert!(lat.spins().iter().all(|&s| s == 1 || s == -1));

        for _ in 0..sweeps {
            metropolis_step(&mut lat, 1.0 / temperature, 1.0, &mut rng);
        }

        prop_assert_eq!(lat.size(), size);
        prop_assert!(lat.spins().iter().all(|&s| s == 1 || s == -1));
        let manual: i64 = lat.spins().iter().map(|&s| s as i64).sum();
        prop_assert_eq!(magnetization(&lat), manual);
    }
}
