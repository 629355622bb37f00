use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A non-blank, trimmed input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Trims `line` and returns `None` when nothing is left.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grouping key: the word lowercased with its characters sorted by code point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(String);

impl Key {
    pub(crate) fn from_sorted(sorted: String) -> Self {
        Self(sorted)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    key: Key,
    words: Vec<Word>,
}

impl Group {
    fn new(key: Key) -> Self {
        Self {
            key,
            words: Vec::new(),
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Insertion-ordered mapping from [`Key`] to [`Group`].
///
/// Groups are stored in the order their key was first seen; `index` maps a
/// key to its slot in `groups`.
#[derive(Debug, Default, Clone)]
pub struct AnagramGroups {
    groups: Vec<Group>,
    index: HashMap<Key, usize>,
}

impl AnagramGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `word` to the group for `key`, creating the group on first use.
    pub fn insert(&mut self, key: Key, word: Word) {
        let groups = &mut self.groups;
        let slot = *self.index.entry(key).or_insert_with_key(|key| {
            groups.push(Group::new(key.clone()));
            groups.len() - 1
        });
        self.groups[slot].words.push(word);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of words across all groups.
    pub fn word_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

impl<'a> IntoIterator for &'a AnagramGroups {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Key {
        Key::from_sorted(s.to_string())
    }

    #[test]
    fn test_word_parse_trims_and_skips_blank() {
        assert_eq!(Word::parse("  listen\t").unwrap().as_str(), "listen");
        assert!(Word::parse("").is_none());
        assert!(Word::parse("   \t ").is_none());
    }

    #[test]
    fn test_insert_creates_group_once_and_appends() {
        let mut groups = AnagramGroups::new();
        groups.insert(key("eilnst"), Word::parse("listen").unwrap());
        groups.insert(key("eggloo"), Word::parse("google").unwrap());
        groups.insert(key("eilnst"), Word::parse("enlist").unwrap());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.word_count(), 3);

        let first = groups.iter().next().unwrap();
        assert_eq!(first.key(), &key("eilnst"));
        let words: Vec<&str> = first.words().iter().map(Word::as_str).collect();
        assert_eq!(words, vec!["listen", "enlist"]);

        let order: Vec<&str> = groups.iter().map(|g| g.key().as_str()).collect();
        assert_eq!(order, vec!["eilnst", "eggloo"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut groups = AnagramGroups::new();
        groups.insert(key("abt"), Word::parse("bat").unwrap());
        groups.insert(key("abt"), Word::parse("bat").unwrap());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.iter().next().unwrap().len(), 2);
    }
}
