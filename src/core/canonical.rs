use crate::domain::model::Key;

/// Maps a word to its anagram key: lowercase every character, then sort by code point.
///
/// Lowercasing uses Unicode's default (locale-independent) mapping, so a single
/// character may expand to several (`'İ'` becomes `"i\u{307}"`).
pub fn canonicalize(word: &str) -> Key {
    let mut chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    chars.sort_unstable();
    Key::from_sorted(chars.into_iter().collect())
}
