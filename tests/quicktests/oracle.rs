//! Expected shapes computed from the insertion sequence alone, without building a tree.

/// The depth a tree built from `xs` should have. The first element is the root; the rest is split
/// into the values sent left (strictly less) and right (everything else) and each side is
/// measured the same way.
pub fn expected_depth<T: Ord + Clone>(xs: &[T]) -> usize {
    match xs.split_first() {
        None => 0,
        Some((root, rest)) => {
            let (left, right) = partition(root, rest);
            expected_depth(&left).max(expected_depth(&right)) + 1
        }
    }
}

/// The balance a tree built from `xs` should have: the depth of the left partition of the first
/// element minus the depth of its right partition.
pub fn expected_balance<T: Ord + Clone>(xs: &[T]) -> isize {
    match xs.split_first() {
        None => 0,
        Some((root, rest)) => {
            let (left, right) = partition(root, rest);
            expected_depth(&left) as isize - expected_depth(&right) as isize
        }
    }
}

/// Splits `rest` around `root`, keeping insertion order within each side. The values are cloned
/// so every level of the recursion works on the same element type.
fn partition<T: Ord + Clone>(root: &T, rest: &[T]) -> (Vec<T>, Vec<T>) {
    rest.iter().cloned().partition(|x| x < root)
}
