//! Near-duplicate detection for headlines. Different outlets republish the
//! same wire story with reworded titles, so link-equality dedup alone is not
//! enough.

/// Similarity ratio in [0.0, 1.0] between two strings: `2*M / T`, where `M`
/// is the total length of matching blocks found by greedy
/// longest-common-substring recursion and `T` is the sum of both lengths.
/// This is the classic sequence-matcher ratio, computed over characters so
/// Korean text is compared per syllable block.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matching_len(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matched as f64 / total as f64
}

/// Total length of matching blocks in `a[alo..ahi]` vs `b[blo..bhi]`: find
/// the longest common substring, then recurse on the pieces to its left and
/// right. Earliest match wins ties, matching the reference behavior.
fn matching_len(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_len = 0;
    for i in alo..ahi {
        for j in blo..bhi {
            let mut k = 0;
            while i + k < ahi && j + k < bhi && a[i + k] == b[j + k] {
                k += 1;
            }
            if k > best_len {
                best_i = i;
                best_j = j;
                best_len = k;
            }
        }
    }
    if best_len == 0 {
        return 0;
    }
    matching_len(a, b, alo, best_i, blo, best_j)
        + best_len
        + matching_len(a, b, best_i + best_len, ahi, best_j + best_len, bhi)
}

/// True when the candidate reads like a reworded copy of any accepted title,
/// i.e. some pairwise ratio is strictly greater than the threshold. O(n) scan
/// per candidate; fine at the tens-to-hundreds scale one run produces.
pub fn is_duplicate<S: AsRef<str>>(candidate: &str, accepted: &[S], threshold: f64) -> bool {
    accepted
        .iter()
        .any(|title| similarity(candidate, title.as_ref()) > threshold)
}
