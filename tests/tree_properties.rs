//! Randomized ordering checks for the productivity tree
//!
//! Builds trees from seeded random key sequences (many duplicates), deletes
//! entries in random order, and checks that the in-order listing stays
//! sorted and holds exactly the surviving entries.

use coauthor::{OrderedIndex, ProductivityTree, TreeEntry};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SEEDS: [u64; 4] = [7, 42, 1337, 2024];

fn random_entries(rng: &mut StdRng, count: usize) -> Vec<TreeEntry> {
    (0..count)
        .map(|i| {
            let name = format!("author-{}", i);
            TreeEntry::new(rng.gen_range(0..12), name.as_str().into(), name)
        })
        .collect()
}

fn assert_sorted(tree: &ProductivityTree) {
    let keys: Vec<u32> = tree.in_order().iter().map(|e| e.key).collect();
    assert!(
        keys.windows(2).all(|w| w[0] <= w[1]),
        "in-order keys not sorted: {:?}",
        keys
    );
}

#[test]
fn test_insertion_yields_sorted_traversal() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let entries = random_entries(&mut rng, 200);

        let tree = ProductivityTree::from_entries(entries.clone());

        assert_eq!(tree.len(), 200);
        assert_sorted(&tree);

        let mut expected: Vec<u32> = entries.iter().map(|e| e.key).collect();
        expected.sort_unstable();
        let actual: Vec<u32> = tree.in_order().iter().map(|e| e.key).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_equal_keys_keep_insertion_order() {
    let mut rng = StdRng::seed_from_u64(99);
    let entries = random_entries(&mut rng, 100);
    let tree = ProductivityTree::from_entries(entries.clone());

    // A stable sort by key reproduces the tree's tie order
    let mut expected = entries;
    expected.sort_by_key(|e| e.key);
    let expected: Vec<&str> = expected.iter().map(|e| e.identity.as_str()).collect();
    let actual: Vec<&str> = tree.in_order().iter().map(|e| e.identity.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_random_deletions_preserve_order() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let entries = random_entries(&mut rng, 120);
        let mut tree = ProductivityTree::from_entries(entries.clone());

        let mut victims = entries.clone();
        victims.shuffle(&mut rng);

        for (deleted, victim) in victims.iter().enumerate() {
            let removed = tree
                .delete(&victim.identity)
                .unwrap_or_else(|| panic!("seed {}: {} missing", seed, victim.identity));

            assert_eq!(removed, *victim);
            assert_eq!(tree.len(), entries.len() - deleted - 1);
            assert!(!tree.contains(&victim.identity));
            assert_sorted(&tree);
        }

        assert!(tree.is_empty());
    }
}

#[test]
fn test_deleting_twice_is_a_miss() {
    let mut rng = StdRng::seed_from_u64(5);
    let entries = random_entries(&mut rng, 30);
    let mut tree = ProductivityTree::from_entries(entries.clone());

    let target = &entries[entries.len() / 2].identity;
    assert!(tree.delete(target).is_some());
    assert!(tree.delete(target).is_none());
    assert_eq!(tree.len(), 29);
}
