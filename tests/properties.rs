//! Property tests over random catalogs, orders, and moves.

use std::collections::BTreeMap;

use proptest::prelude::*;
use zenpair::*;

/// Catalog of `dims.len()` images with ids `0..n`, plus that order.
fn build(dims: &[(u32, u32)]) -> (BTreeMap<ImageId, Image>, Vec<ImageId>) {
    let mut catalog = BTreeMap::new();
    let mut order = Vec::with_capacity(dims.len());
    for (i, &(w, h)) in dims.iter().enumerate() {
        let img = Image::new(i as u64, w, h);
        catalog.insert(img.id, img);
        order.push(img.id);
    }
    (catalog, order)
}

fn dims() -> impl Strategy<Value = Vec<(u32, u32)>> {
    // Bias towards the two real-world shapes plus near-square boundary cases.
    let shape = prop_oneof![
        Just((1920u32, 1080u32)),
        Just((1080u32, 1920u32)),
        Just((110u32, 100u32)),
        Just((111u32, 100u32)),
        (1u32..5000, 1u32..5000),
    ];
    prop::collection::vec(shape, 0..40)
}

fn display() -> impl Strategy<Value = DisplayOrientation> {
    prop_oneof![
        Just(DisplayOrientation::Portrait),
        Just(DisplayOrientation::Landscape)
    ]
}

proptest! {
    #[test]
    fn conservation(dims in dims(), display in display()) {
        let (catalog, order) = build(&dims);
        let images = resolve(&order, &catalog);
        let seq = compute_sequence(&images, display);
        prop_assert_eq!(seq.flatten(), order.clone());
        prop_assert!(seq.matches_order(&order));
        prop_assert_eq!(seq.image_count(), order.len());
    }

    #[test]
    fn pairs_are_well_formed(dims in dims(), display in display()) {
        let (catalog, order) = build(&dims);
        let seq = Sequencer::new().compute_ids(&order, &catalog, display);
        for entry in &seq {
            match entry {
                PairingEntry::Pair(ids) => {
                    for id in ids {
                        prop_assert_eq!(catalog[id].orientation(), display.pairable());
                    }
                }
                PairingEntry::Single(_) => {
                    prop_assert_eq!(entry.image_count(), 1);
                }
            }
        }
        prop_assert_eq!(seq.check(&catalog, display), Ok(()));
    }

    #[test]
    fn singles_never_have_an_adjacent_pairable_partner(dims in dims(), display in display()) {
        // Greedy invariant: a pairable single is never directly followed by
        // another pairable single.
        let (catalog, order) = build(&dims);
        let seq = Sequencer::new().compute_ids(&order, &catalog, display);
        let pairable_single = |e: &PairingEntry| match e {
            PairingEntry::Single(id) => catalog[id].orientation() == display.pairable(),
            PairingEntry::Pair(_) => false,
        };
        for w in seq.entries().windows(2) {
            prop_assert!(!(pairable_single(&w[0]) && pairable_single(&w[1])));
        }
    }

    #[test]
    fn sequencing_is_idempotent(dims in dims(), display in display()) {
        let (catalog, order) = build(&dims);
        let images = resolve(&order, &catalog);
        prop_assert_eq!(compute_sequence(&images, display), compute_sequence(&images, display));
    }

    #[test]
    fn verdict_matches_pair_counts(
        dims in dims().prop_filter("need an image", |d| !d.is_empty()),
        display in display(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (catalog, order) = build(&dims);
        let mv = Move::new(a.index(order.len()), b.index(order.len()));
        let verdict = validate_move(mv, &order, &catalog, display).unwrap();

        let before = compute_sequence(&resolve(&order, &catalog), display).pair_count();
        let candidate = mv.apply(&order).unwrap();
        let after = compute_sequence(&resolve(&candidate, &catalog), display).pair_count();

        prop_assert!(verdict.is_valid);
        prop_assert_eq!(verdict.pair_loss, before.saturating_sub(after));
        prop_assert_eq!(verdict.breaks_pairing, before > after);
        prop_assert_eq!(verdict.warning.is_none(), before == after);
        prop_assert_eq!(verdict, validate_move(mv, &order, &catalog, display).unwrap());
    }

    #[test]
    fn noop_moves_are_neutral(
        dims in dims().prop_filter("need an image", |d| !d.is_empty()),
        display in display(),
        i in any::<prop::sample::Index>(),
    ) {
        let (catalog, order) = build(&dims);
        let i = i.index(order.len());
        let verdict = validate_move(Move::new(i, i), &order, &catalog, display).unwrap();
        prop_assert_eq!(verdict.pair_loss, 0);
        prop_assert!(verdict.warning.is_none());
    }

    #[test]
    fn recommendation_is_a_fixed_point(dims in dims(), display in display()) {
        let (catalog, order) = build(&dims);
        let first = optimal_order(&order, &catalog, display);
        prop_assert_eq!(&first, &order);
        prop_assert_eq!(optimal_order(&first, &catalog, display), first);
    }
}
