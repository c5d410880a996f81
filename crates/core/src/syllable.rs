//! Heuristic per-word syllable estimation.
//!
//! This is a crude vowel-run count, not a dictionary lookup: each run of
//! vowels (`a e i o u y`) counts one syllable, a trailing `e` is discounted,
//! and every non-empty word counts at least one syllable.

const VOWELS: &str = "aeiouy";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Estimates the syllable count of a word. Returns 0 only for the empty
/// string; every non-empty word counts at least 1.
pub fn count_syllables(word: &str) -> u32 {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return 0;
    }

    let mut count: i32 = 0;
    if is_vowel(chars[0]) {
        count += 1;
    }
    for i in 1..chars.len() {
        if is_vowel(chars[i]) && !is_vowel(chars[i - 1]) {
            count += 1;
        }
    }
    if chars[chars.len() - 1] == 'e' {
        count -= 1;
    }

    count.max(1) as u32
}

/// A complex word is one estimated at more than two syllables.
pub fn is_complex(word: &str) -> bool {
    count_syllables(word) > 2
}
