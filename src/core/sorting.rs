/// Returns the permutation that sorts `values` ascending.
///
/// `values[argsort(values)[0]]` is the smallest element. Non-finite values
/// order according to [`f64::total_cmp`], so the permutation is well defined
/// for any input; callers that need finite data validate it separately.
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    order
}

/// Returns a new ascending-sorted copy of `values`. The input is untouched.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    argsort(values).into_iter().map(|i| values[i]).collect()
}

/// Sorts `values` ascending, returning the sorted copy together with the
/// permutation mapping sorted positions back to original indices.
pub fn sorted_with_permutation(values: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let order = argsort(values);
    let sorted = order.iter().map(|&i| values[i]).collect();
    (sorted, order)
}
