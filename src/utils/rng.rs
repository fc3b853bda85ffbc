use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// SplitMix64 finalizer: decorrelates nearby seeds.
fn mix(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Deterministic RNG for one independent task (e.g. one temperature of a
/// phase sweep). Same `(master, task_id)` always gives the same stream,
/// whichever thread runs the task.
pub fn task_rng(master: u64, task_id: usize) -> ChaCha20Rng {
    let x = master ^ (task_id as u64).wrapping_mul(0x9E3779B97F4A7C15);
    ChaCha20Rng::seed_from_u64(mix(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_task_same_stream() {
        let a: Vec<u32> = task_rng(7, 3).sample_iter(rand::distributions::Standard).take(8).collect();
        let b: Vec<u32> = task_rng(7, 3).sample_iter(rand::distributions::Standard).take(8).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn neighbouring_tasks_differ() {
        let a: u64 = task_rng(7, 0).gen();
        let b: u64 = task_rng(7, 1).gen();
        assert_ne!(a, b);
    }
}
