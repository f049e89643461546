//! Property-based tests for the set algebra and the count cache.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use proptest::prelude::*;

use crate::bitset::BitSet;

const LENGTH: usize = 150;

#[derive(Debug, Clone, Copy)]
enum Op {
    Set(usize),
    Clear(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..LENGTH).prop_map(Op::Set),
        (0..LENGTH).prop_map(Op::Clear),
    ]
}

fn indices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..LENGTH, 0..80)
}

proptest! {
    #[test]
    fn recount_matches_membership(ops in prop::collection::vec(op(), 0..200)) {
        let mut set = BitSet::new(LENGTH);
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Set(index) => {
                    set.set(index);
                    model.insert(index);
                }
                Op::Clear(index) => {
                    set.clear(index);
                    model.remove(&index);
                }
            }
        }

        let members = (0..set.size()).filter(|&index| index < LENGTH && set.get(index)).count();
        prop_assert_eq!(set.recount(), members);
        prop_assert_eq!(set.recount(), model.len());
        prop_assert_eq!(set.to_vec(), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn repeated_set_keeps_cache_clean(bits in indices(), index in 0..LENGTH) {
        let mut once = BitSet::from_indices(LENGTH, bits.iter().copied());
        once.set(index);
        let count = once.recount();

        let mut twice = once.clone();
        twice.set(index);
        prop_assert!(!twice.is_dirty());
        prop_assert_eq!(twice.cached_count(), Some(count));
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn to_vec_round_trips(bits in indices()) {
        let set = BitSet::from_indices(LENGTH, bits);
        let members = set.to_vec();
        prop_assert!(members.windows(2).all(|pair| pair[0] < pair[1]));

        let rebuilt = BitSet::from_indices(LENGTH, members.iter().copied());
        prop_assert!(rebuilt.equals(&set));
    }

    #[test]
    fn subtract_is_intersect_with_complement(a in indices(), b in indices()) {
        let a = BitSet::from_indices(LENGTH, a);
        let b = BitSet::from_indices(LENGTH, b);

        let mut lhs = a.clone();
        lhs.subtract(&b);

        let mut complement = b.clone();
        complement.negate();
        let mut rhs = a.clone();
        rhs.intersect(&complement);

        prop_assert_eq!(lhs.words(), rhs.words());
    }

    #[test]
    fn contains_iff_union_is_identity(a in indices(), b in indices()) {
        let a = BitSet::from_indices(LENGTH, a);
        let b = BitSet::from_indices(LENGTH, b);

        let mut merged = a.clone();
        merged.union(&b.clone());
        prop_assert_eq!(a.contains(&b), merged.equals(&a));
    }

    #[test]
    fn bulk_ops_match_model(a in indices(), b in indices()) {
        let model_a: BTreeSet<usize> = a.iter().copied().collect();
        let model_b: BTreeSet<usize> = b.iter().copied().collect();
        let a = BitSet::from_indices(LENGTH, a);
        let b = BitSet::from_indices(LENGTH, b);

        let mut union = a.clone();
        union.union(&b);
        prop_assert_eq!(union.to_vec(), model_a.union(&model_b).copied().collect::<Vec<_>>());
        prop_assert_eq!(union.recount(), model_a.union(&model_b).count());

        let mut intersection = a.clone();
        intersection.intersect(&b);
        prop_assert_eq!(
            intersection.to_vec(),
            model_a.intersection(&model_b).copied().collect::<Vec<_>>()
        );

        let mut difference = a.clone();
        difference.subtract(&b);
        prop_assert_eq!(
            difference.to_vec(),
            model_a.difference(&model_b).copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn double_negate_is_identity(bits in indices()) {
        let set = BitSet::from_indices(LENGTH, bits);
        let mut negated = set.clone();
        negated.negate();
        prop_assert_eq!(negated.recount() + set.to_vec().len(), LENGTH);
        negated.negate();
        prop_assert_eq!(negated, set);
    }
}
