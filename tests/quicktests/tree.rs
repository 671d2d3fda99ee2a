use treesort::Tree;

use std::collections::HashSet;

quickcheck::quickcheck! {
    fn len_counts_every_insert(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        tree.len() == xs.len() && tree.iter().len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn inorder_matches_iter(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let mut visited = Vec::new();
        tree.inorder(|v| visited.push(*v));

        visited.iter().eq(tree.iter())
    }
}

quickcheck::quickcheck! {
    fn interleaved_inserts_stay_sorted(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let first_walk_sorted = tree.iter().zip(tree.iter().skip(1)).all(|(a, b)| a <= b);

        tree.extend(ys.iter().copied());
        let mut expected: Vec<_> = xs.into_iter().chain(ys).collect();
        expected.sort();

        first_walk_sorted && tree.into_sorted_vec() == expected
    }
}

quickcheck::quickcheck! {
    fn distinct_values_have_no_duplicates(xs: HashSet<i32>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let sorted = tree.to_sorted_vec();

        sorted.windows(2).all(|pair| pair[0] < pair[1]) && sorted.len() == xs.len()
    }
}

#[test]
fn sorted_input_is_a_degenerate_chain() {
    let mut tree = Tree::new();
    for x in [1, 2, 3, 4, 5] {
        tree.insert(x);
    }

    assert_eq!(tree.height(), 5);
    assert_eq!(tree.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn reverse_sorted_input_is_a_degenerate_chain() {
    let tree: Tree<_> = [5, 4, 3, 2, 1].into_iter().collect();
    assert_eq!(tree.height(), 5);
}

#[test]
fn balanced_insertion_order_stays_shallow() {
    let tree: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    assert_eq!(tree.height(), 3);
}

#[test]
fn borrowing_into_iter() {
    let tree: Tree<_> = [2, 1].into_iter().collect();
    let mut seen = Vec::new();
    for v in &tree {
        seen.push(*v);
    }
    assert_eq!(seen, vec![1, 2]);
}
