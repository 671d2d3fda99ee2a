use treesort::{tree_sort, tree_sort_owned};

use std::collections::HashMap;

/// Counts how many times each value occurs.
fn multiset<T>(xs: &[T]) -> HashMap<&T, usize>
where
    T: std::hash::Hash + Eq,
{
    let mut counts = HashMap::new();
    for x in xs {
        *counts.entry(x).or_insert(0) += 1;
    }
    counts
}

quickcheck::quickcheck! {
    fn is_idempotent(xs: Vec<i32>) -> bool {
        let once = tree_sort(&xs);
        tree_sort(&once) == once
    }
}

quickcheck::quickcheck! {
    fn is_a_permutation(xs: Vec<i8>) -> bool {
        multiset(&tree_sort(&xs)) == multiset(&xs)
    }
}

quickcheck::quickcheck! {
    fn is_non_decreasing(xs: Vec<i32>) -> bool {
        tree_sort(&xs).windows(2).all(|pair| pair[0] <= pair[1])
    }
}

quickcheck::quickcheck! {
    fn matches_std_stable_sort(xs: Vec<(u8, u8)>) -> bool {
        // Sorting on the first field only exposes the order of duplicates.
        #[derive(Clone, Debug)]
        struct ByKey(u8, u8);
        impl PartialEq for ByKey {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for ByKey {}
        impl PartialOrd for ByKey {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for ByKey {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let keyed: Vec<ByKey> = xs.iter().map(|&(k, tag)| ByKey(k, tag)).collect();
        let mut expected = keyed.clone();
        expected.sort();

        let sorted = tree_sort(&keyed);
        sorted.iter().map(|b| (b.0, b.1)).eq(expected.iter().map(|b| (b.0, b.1)))
    }
}

quickcheck::quickcheck! {
    fn leaves_input_untouched(xs: Vec<i32>) -> bool {
        let before = xs.clone();
        let _sorted = tree_sort(&xs);
        xs == before
    }
}

quickcheck::quickcheck! {
    fn owned_and_borrowed_agree(xs: Vec<String>) -> bool {
        tree_sort(&xs) == tree_sort_owned(xs)
    }
}

#[test]
fn empty_input() {
    assert_eq!(tree_sort::<i32>(&[]), Vec::<i32>::new());
}

#[test]
fn single_element() {
    assert_eq!(tree_sort(&["only"]), vec!["only"]);
}

#[test]
fn duplicates_are_grouped() {
    assert_eq!(tree_sort(&[3, 1, 3, 2, 3]), vec![1, 2, 3, 3, 3]);
}

#[test]
fn literal_scenario() {
    assert_eq!(
        tree_sort(&[2, 4, 3, 1, 9, 7, 8]),
        vec![1, 2, 3, 4, 7, 8, 9]
    );
}
