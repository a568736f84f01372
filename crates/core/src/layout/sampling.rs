//! Deterministic draw helpers over the generator's single ChaCha stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::types::Vec3;

/// Uniform f32 in `[0, 1)` from the top 24 bits of one `next_u32` draw.
pub(super) fn unit_f32(rng: &mut ChaCha8Rng) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

pub(super) fn uniform_f32(rng: &mut ChaCha8Rng, min_value: f32, max_value: f32) -> f32 {
    min_value + (max_value - min_value) * unit_f32(rng)
}

pub(super) fn uniform_index(rng: &mut ChaCha8Rng, bound: usize) -> usize {
    debug_assert!(bound > 0);
    (rng.next_u64() % bound as u64) as usize
}

/// Horizontal unit direction used when two rooms coincide and no push
/// direction can be derived from their positions. Draws x and z in
/// `[-1, 1]`; a degenerate draw falls back to the +x axis.
pub(super) fn fallback_push_direction(rng: &mut ChaCha8Rng) -> Vec3 {
    let x = uniform_f32(rng, -1.0, 1.0);
    let z = uniform_f32(rng, -1.0, 1.0);
    let direction = Vec3::new(x, 0.0, z);
    if direction.length_squared() < 1e-6 {
        Vec3::new(1.0, 0.0, 0.0)
    } else {
        direction.normalized()
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn uniform_f32_stays_inside_requested_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let value = uniform_f32(&mut rng, -3.0, 5.0);
            assert!((-3.0..5.0).contains(&value));
        }
    }

    #[test]
    fn uniform_index_stays_inside_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(uniform_index(&mut rng, 4) < 4);
        }
    }

    #[test]
    fn draws_replay_identically_for_equal_seeds() {
        let mut left = ChaCha8Rng::seed_from_u64(99);
        let mut right = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(unit_f32(&mut left), unit_f32(&mut right));
        }
    }

    #[test]
    fn fallback_direction_is_horizontal_and_unit_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let direction = fallback_push_direction(&mut rng);
            assert_eq!(direction.y, 0.0);
            assert!((direction.length() - 1.0).abs() < 1e-5);
        }
    }
}
