use super::records::ContactRecord;
use rand::Rng;

/// Durstenfeld's Fisher-Yates: every permutation equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle the due contacts and keep the names of the first `max`.
pub fn select<R: Rng + ?Sized>(
    mut due: Vec<&ContactRecord>,
    max: usize,
    rng: &mut R,
) -> Vec<String> {
    shuffle(&mut due, rng);
    due.into_iter()
        .take(max)
        .map(|contact| contact.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn contacts(n: usize) -> Vec<ContactRecord> {
        (0..n)
            .map(|i| ContactRecord {
                name: format!("Contact {}", i),
                category: "A".to_string(),
                last_contacted: None,
                last_selected: None,
            })
            .collect()
    }

    #[test]
    fn test_selection_size_is_min_of_max_and_due() {
        let mut rng = StdRng::seed_from_u64(7);
        for due_count in 0..8 {
            let pool = contacts(due_count);
            for max in 0..10 {
                let picked = select(pool.iter().collect(), max, &mut rng);
                assert_eq!(picked.len(), max.min(due_count), "due={} max={}", due_count, max);
            }
        }
    }

    #[test]
    fn test_selected_names_are_distinct_and_from_pool() {
        let pool = contacts(10);
        let names: HashSet<_> = pool.iter().map(|c| c.name.clone()).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let picked = select(pool.iter().collect(), 3, &mut rng);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 3);
        assert!(picked.iter().all(|n| names.contains(n)));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut StdRng::seed_from_u64(1));
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_trivial_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());
        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // 6 permutations of 3 items, 60k draws -> ~10k each, sd ~91.
        let mut rng = StdRng::seed_from_u64(2022);
        let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
        for _ in 0..60_000 {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            assert!((9_500..=10_500).contains(&count), "{:?} drawn {} times", perm, count);
        }
    }
}
