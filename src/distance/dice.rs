//! Dice's coefficient over character bigrams.

use ahash::AHashMap;

/// Calculate Dice's coefficient between two strings.
///
/// Twice the number of shared character bigrams divided by the total bigram
/// count of both strings: 1.0 means identical bigram multisets, 0.0 means no
/// shared bigrams. Each target bigram can satisfy at most one source bigram,
/// so repeated bigrams are matched as a multiset, not a set.
///
/// A string shorter than two characters has no bigrams and yields 0.0.
pub fn dice_coefficient(source: &str, target: &str) -> f64 {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    if source_chars.len() < 2 || target_chars.len() < 2 {
        return 0.0;
    }

    let source_bigrams = source_chars.len() - 1;
    let target_bigrams = target_chars.len() - 1;

    // Multiset pool of target bigrams; each entry is consumed at most once.
    let mut pool: AHashMap<(char, char), usize> = AHashMap::with_capacity(target_bigrams);
    for window in target_chars.windows(2) {
        *pool.entry((window[0], window[1])).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for window in source_chars.windows(2) {
        if let Some(count) = pool.get_mut(&(window[0], window[1]))
            && *count > 0
        {
            *count -= 1;
            intersection += 1;
        }
    }

    (2.0 * intersection as f64) / (source_bigrams + target_bigrams) as f64
}
