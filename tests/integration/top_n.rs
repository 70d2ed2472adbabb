//! Integration test: top-N selection against the full ranking.

use std::collections::HashSet;

use rendezvous_integration_tests::{engines, random_keys, random_nodes};

#[test]
fn test_top_n_is_prefix_of_full_ranking() {
    let nodes = random_nodes(12, 11);
    let keys = random_keys(300, 12);

    for (alg, engine) in engines(&nodes) {
        for key in &keys {
            let ranked: Vec<String> = engine.rank(key).into_iter().map(|s| s.node).collect();
            for n in 1..nodes.len() {
                assert_eq!(
                    engine.get_n_top(n, key),
                    ranked[..n].to_vec(),
                    "{alg}: n={n}"
                );
            }
        }
    }
}

#[test]
fn test_top_n_distinct_members_best_first() {
    let nodes = random_nodes(8, 13);
    let members: HashSet<&String> = nodes.iter().collect();

    for (alg, engine) in engines(&nodes) {
        for key in random_keys(200, 14) {
            let top = engine.get_n_top(5, &key);
            assert_eq!(top.len(), 5, "{alg}");

            let unique: HashSet<&String> = top.iter().collect();
            assert_eq!(unique.len(), 5, "{alg}: duplicate in {top:?}");
            assert!(unique.is_subset(&members), "{alg}: unknown node in {top:?}");

            assert_eq!(top[0], engine.get_score(&key).node, "{alg}");

            let ranked = engine.rank(&key);
            let scores: Vec<u64> = top
                .iter()
                .map(|n| ranked.iter().find(|s| &s.node == n).map(|s| s.score).unwrap())
                .collect();
            assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{alg}: {scores:?}");
        }
    }
}

#[test]
fn test_degenerate_n_returns_every_node() {
    let nodes = random_nodes(8, 15);
    for (_, engine) in engines(&nodes) {
        assert_eq!(engine.get_n_top(0, b"key"), nodes);
        assert_eq!(engine.get_n_top(8, b"key"), nodes);
        assert_eq!(engine.get_n_top(100, b"key"), nodes);
    }
}
