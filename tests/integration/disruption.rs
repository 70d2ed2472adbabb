//! Integration test: minimal disruption.
//!
//! Adding a node only moves keys to it; removing a node only moves the
//! keys it owned. Every other key keeps its owner.

use rendezvous_integration_tests::{engines, owners, random_keys, random_nodes};
use rendezvous_placement::{HashAlgorithm, Rendezvous, migrations};

#[test]
fn test_add_node_only_moves_keys_to_it() {
    let nodes = random_nodes(10, 1);
    let keys = random_keys(5000, 2);

    for (alg, engine) in engines(&nodes) {
        let before = owners(&engine, &keys);
        engine.add_nodes(["newcomer"]);
        let after = owners(&engine, &keys);

        let mut moved = 0;
        for (i, (b, a)) in before.iter().zip(&after).enumerate() {
            if b != a {
                moved += 1;
                assert_eq!(a, "newcomer", "{alg}: key {i} moved from {b} to {a}");
            }
        }
        assert!(moved > 0, "{alg}: no key moved to the new node");
    }
}

#[test]
fn test_remove_node_only_its_keys_redistribute() {
    let nodes = random_nodes(10, 3);
    let keys = random_keys(5000, 4);
    let victim = nodes[4].clone();

    for (alg, engine) in engines(&nodes) {
        let before = owners(&engine, &keys);
        assert_eq!(engine.remove_nodes([&victim]), 1);
        let after = owners(&engine, &keys);

        for (i, (b, a)) in before.iter().zip(&after).enumerate() {
            if *b == victim {
                assert_ne!(a, &victim, "{alg}: key {i} still on removed node");
            } else {
                assert_eq!(b, a, "{alg}: key {i} on {b} moved to {a}");
            }
        }
    }
}

#[test]
fn test_add_then_remove_restores_placement() {
    let nodes = random_nodes(6, 5);
    let keys = random_keys(2000, 6);
    let engine = Rendezvous::with_algorithm(HashAlgorithm::Blake3, nodes.iter().cloned());

    let before = owners(&engine, &keys);
    engine.add_nodes(["temp-1", "temp-2"]);
    engine.remove_nodes(["temp-1", "temp-2"]);
    assert_eq!(owners(&engine, &keys), before);
}

#[test]
fn test_migrations_agree_with_owner_diff() {
    let nodes = random_nodes(5, 7);
    let keys = random_keys(3000, 8);

    let old = Rendezvous::with_algorithm(HashAlgorithm::Sha256, nodes.iter().cloned());
    let new = Rendezvous::with_algorithm(HashAlgorithm::Sha256, nodes.iter().cloned());
    new.add_nodes(["extra"]);

    let before = owners(&old, &keys);
    let after = owners(&new, &keys);
    let expected = before.iter().zip(&after).filter(|(b, a)| b != a).count();

    let moved = migrations(&old, &new, &keys);
    assert_eq!(moved.len(), expected);
    assert!(moved.iter().all(|m| m.to == "extra"));
}

#[test]
fn test_fraction_moved_is_roughly_one_over_n() {
    let nodes = random_nodes(4, 9);
    let keys = random_keys(10_000, 10);
    let engine = Rendezvous::with_algorithm(HashAlgorithm::Sha256, nodes.iter().cloned());

    let before = owners(&engine, &keys);
    engine.add_nodes(["fifth"]);
    let after = owners(&engine, &keys);

    let moved = before.iter().zip(&after).filter(|(b, a)| b != a).count();
    // ~1/5 should move.
    let ratio = moved as f64 / keys.len() as f64;
    assert!(
        (0.05..=0.45).contains(&ratio),
        "unexpected share of keys moved: {moved}/{} ({ratio:.2})",
        keys.len()
    );
}
