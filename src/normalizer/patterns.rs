// Single-pass scans for the duplicated-character shapes left behind by text extraction.
// Shared by the normalizer (repair) and the classifier (noise filters).

/// True when the whole token is one or more adjacent pairs of identical characters,
/// e.g. `"wwoorrddss"`. Odd-length and empty tokens never qualify.
pub fn is_doubled_pairs(token: &str) -> bool {
    let mut chars = token.chars();
    let mut pairs = 0usize;

    loop {
        match (chars.next(), chars.next()) {
            (None, _) => return pairs > 0,
            (Some(first), Some(second)) if first == second => pairs += 1,
            _ => return false,
        }
    }
}

/// Collapse every two-character group to its first character.
/// Only meaningful for tokens accepted by [`is_doubled_pairs`].
pub fn collapse_pairs(token: &str) -> String {
    token.chars().step_by(2).collect()
}

/// True when the word is made only of runs of a single character repeated
/// three or more times, e.g. `"aaabbbccc"` or `"zzzz"`.
pub fn is_stylized_duplicate(word: &str) -> bool {
    let mut chars = word.chars().peekable();
    let mut runs = 0usize;

    while let Some(ch) = chars.next() {
        let mut run_len = 1usize;
        while chars.peek() == Some(&ch) {
            chars.next();
            run_len += 1;
        }
        if run_len < 3 {
            return false;
        }
        runs += 1;
    }

    runs > 0
}
