//! End-to-end properties of the draw pipeline.

use draw_core::{canonicalize, DrawService};
use proptest::prelude::*;

fn arb_roster() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9]{1,12}", 1..24)
}

fn arb_signal() -> impl Strategy<Value = String> {
    // Printable ASCII with no whitespace, so the signal survives trimming
    prop::string::string_regex("[!-~]{1,16}").unwrap()
}

proptest! {
    #[test]
    fn proptest_two_runs_agree(names in arb_roster(), signal in arb_signal()) {
        let service = DrawService::new();
        let a = service.run_draw(names.clone(), &signal, 3).unwrap();
        let b = service.run_draw(names, &signal, 3).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn proptest_input_order_is_irrelevant(names in arb_roster(), signal in arb_signal()) {
        let service = DrawService::new();
        let mut scrambled = names.clone();
        scrambled.reverse();

        let a = service.run_draw(names, &signal, 3).unwrap();
        let b = service.run_draw(scrambled, &signal, 3).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn proptest_ranking_is_a_permutation(names in arb_roster(), signal in arb_signal()) {
        let outcome = DrawService::new()
            .run_draw(names.clone(), &signal, 3)
            .unwrap();

        let mut ranked = outcome.ranking.clone();
        ranked.sort_unstable();
        prop_assert_eq!(ranked, canonicalize(names).unwrap());
    }

    #[test]
    fn proptest_winner_count_is_clamped(
        names in arb_roster(),
        signal in arb_signal(),
        count in 1usize..64,
    ) {
        let outcome = DrawService::new()
            .run_draw(names, &signal, count)
            .unwrap();

        prop_assert_eq!(outcome.winners.len(), count.min(outcome.total_count));
        prop_assert_eq!(&outcome.winners[..], &outcome.ranking[..outcome.winners.len()]);
    }
}

/// The pinned reference scenario from the README; any change to the wire
/// format or shuffle algorithm must show up here.
#[test]
fn reference_draw_end_to_end() {
    let roster: Vec<String> = [
        "Alice", "Bob", "Charlie", "Dave", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let outcome = DrawService::new().run_draw(roster, "43", 3).unwrap();

    assert_eq!(
        outcome.list_commitment,
        "c6d71cb4696a432ea43d412e6ff7815a5ef523bc362a5edb623f128bd381bcf5"
    );
    assert_eq!(
        outcome.digest,
        "e53a09dd7c759e066e2cdac0e96b6c3c04db487cb7266eb76c2973cd01ddf2d0"
    );
    assert_eq!(
        outcome.ranking,
        vec!["Eve", "Grace", "Ivan", "Frank", "Heidi", "Charlie", "Judy", "Alice", "Bob", "Dave"]
    );
    assert_eq!(outcome.winners, vec!["Eve", "Grace", "Ivan"]);
}

#[test]
fn different_signals_disagree() {
    let roster: Vec<String> = ["Alice", "Bob", "Charlie", "Dave", "Eve"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let service = DrawService::new();
    let a = service.run_draw(roster.clone(), "Signal A", 5).unwrap();
    let b = service.run_draw(roster, "Signal B", 5).unwrap();

    assert_ne!(a.digest, b.digest);
    assert_ne!(a.ranking, b.ranking);
}
