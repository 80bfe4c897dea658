//! Brute-force enumerations used as reference orderings in tests.

/// Lists the `k`-permutations of `seed` in lexicographic seed-position order.
pub(crate) fn permutations<T: Clone>(seed: &[T], k: usize) -> Vec<Vec<T>> {
    fn walk<T: Clone>(
        seed: &[T],
        k: usize,
        used: &mut [bool],
        current: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in 0..seed.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(seed[i].clone());
            walk(seed, k, used, current, out);
            current.pop();
            used[i] = false;
        }
    }

    let mut out = Vec::new();
    walk(seed, k, &mut vec![false; seed.len()], &mut Vec::new(), &mut out);
    out
}

/// Lists the `k`-combinations of `seed` in lexicographic seed-position order.
pub(crate) fn combinations<T: Clone>(seed: &[T], k: usize) -> Vec<Vec<T>> {
    fn walk<T: Clone>(
        seed: &[T],
        k: usize,
        start: usize,
        current: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..seed.len() {
            current.push(seed[i].clone());
            walk(seed, k, i + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    walk(seed, k, 0, &mut Vec::new(), &mut out);
    out
}

/// Returns `true` if `item` appears in `seed` in order, not necessarily contiguously.
pub(crate) fn is_subsequence<T: PartialEq>(item: &[T], seed: &[T]) -> bool {
    let mut rest = seed.iter();
    item.iter().all(|x| rest.any(|e| e == x))
}
