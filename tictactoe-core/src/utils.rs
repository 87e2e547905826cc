//! Small helpers shared across the engine

use rand::seq::SliceRandom;
use rand::Rng;

/// Check whether every element equals the first (true for an empty slice)
pub fn are_all_the_same<T: PartialEq>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] == pair[1])
}

/// Uniformly pick one element, `None` when `items` is empty
pub fn random_pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_is_all_the_same() {
        let empty: [u8; 0] = [];
        assert!(are_all_the_same(&empty));
    }

    #[test]
    fn test_all_the_same() {
        assert!(are_all_the_same(&[3, 3, 3]));
        assert!(!are_all_the_same(&[3, 1, 2]));
        assert!(are_all_the_same(&["a", "a", "a"]));
        assert!(!are_all_the_same(&["a", "b", "c"]));
        assert!(!are_all_the_same(&[Some(1), None]));
    }

    #[test]
    fn test_random_pick() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let empty: [u8; 0] = [];
        assert_eq!(random_pick(&empty, &mut rng), None);
        assert_eq!(random_pick(&[1], &mut rng), Some(&1));

        let items = [1, 2, 3, 4, 5];
        for _ in 0..50 {
            let picked = random_pick(&items, &mut rng).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_random_pick_deterministic() {
        let items: Vec<u32> = (0..100).collect();
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(random_pick(&items, &mut rng1), random_pick(&items, &mut rng2));
        }
    }
}
