use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use stable_partition::{PartitionExt, SparseVec, partition};

fn sparse_source() -> impl Strategy<Value = SparseVec<i16>> {
    vec(option::of(any::<i16>()), 0..96).prop_map(|slots| slots.into_iter().collect())
}

proptest! {
    #[test]
    fn sides_are_the_ordered_filters(source in sparse_source(), modulus in 1i16..7) {
        let p = source.partition(|v, _, _| v % modulus == 0);

        let selected: Vec<i16> = source.values().copied().filter(|v| v % modulus == 0).collect();
        let rejected: Vec<i16> = source.values().copied().filter(|v| v % modulus != 0).collect();

        prop_assert_eq!(p.selected(), selected.as_slice());
        prop_assert_eq!(p.rejected(), rejected.as_slice());
    }

    #[test]
    fn every_present_index_lands_on_exactly_one_side(source in sparse_source()) {
        let mut visited = Vec::new();
        let p = source.partition(|_, index, _| {
            visited.push(index);
            index % 2 == 0
        });

        let present: Vec<usize> = source.iter().map(|(index, _)| index).collect();
        prop_assert_eq!(visited, present);
        prop_assert_eq!(p.len(), source.present_count());
    }

    #[test]
    fn always_true_keeps_everything_selected(values in vec(any::<i32>(), 0..64)) {
        let p = partition(values.as_slice(), |v, _, _| *v >= 0);
        let again = p.selected().partition(|_, _, _| true);

        prop_assert_eq!(again.selected(), p.selected());
        prop_assert!(again.rejected().is_empty());
    }

    #[test]
    fn dense_sources_match_iterator_partition(values in vec(any::<u8>(), 0..64)) {
        let p = values.partition(|v, _, _| v.is_ascii_digit());
        let (digits, rest): (Vec<u8>, Vec<u8>) =
            values.iter().copied().partition(|v| v.is_ascii_digit());

        prop_assert_eq!(p.into_parts(), (digits, rest));
    }
}

#[test]
fn empty_source_yields_two_empty_sides() {
    let p = partition(&[] as &[u8], |_, _, _| true);
    assert_eq!(p.partitions(), (&[][..], &[][..]));
}
