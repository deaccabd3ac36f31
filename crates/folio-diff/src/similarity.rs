//! Edit-distance based text similarity.
//!
//! Both functions operate on UTF-16 code units with no normalization: case,
//! accents and whitespace all count, and a character outside the Basic
//! Multilingual Plane (most emoji) is two units wide.

/// Two texts whose similarity is strictly above this value are considered
/// the same block, possibly edited.
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Levenshtein edit distance between `a` and `b`.
///
/// Insertion, deletion and substitution each cost 1. Only two rows of the
/// dynamic-programming table are kept.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();

    // Keep the shorter sequence along the row.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / max_len`.
///
/// Two empty strings are identical and score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = utf16_len(a).max(utf16_len(b));
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
