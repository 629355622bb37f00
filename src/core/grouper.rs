use crate::core::canonical::canonicalize;
use crate::domain::model::{AnagramGroups, Word};

/// Buckets `words` by anagram key, keeping input order within each group and
/// first-seen order across groups.
pub fn group_words<I>(words: I) -> AnagramGroups
where
    I: IntoIterator<Item = Word>,
{
    let mut groups = AnagramGroups::new();
    for word in words {
        let key = canonicalize(word.as_str());
        groups.insert(key, word);
    }
    groups
}

/// Same as [`group_words`] but starting from raw lines; blank lines are skipped.
pub fn group_lines<I, S>(lines: I) -> AnagramGroups
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    group_words(lines.into_iter().filter_map(|line| Word::parse(line.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(groups: &AnagramGroups) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|g| g.words().iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let groups = group_lines(["listen", "enlist", "google", "inlets", "banana"]);
        assert_eq!(
            rendered(&groups),
            vec![
                vec!["listen", "enlist", "inlets"],
                vec!["google"],
                vec!["banana"],
            ]
        );
    }

    #[test]
    fn test_case_insensitive_grouping_preserves_casing() {
        let groups = group_lines(["Listen", "silent"]);
        assert_eq!(groups.len(), 1);
        let group = groups.iter().next().unwrap();
        assert_eq!(group.key().as_str(), "eilnst");
        assert_eq!(rendered(&groups), vec![vec!["Listen", "silent"]]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let groups = group_lines(["", "   ", "\t"]);
        assert!(groups.is_empty());

        let groups = group_lines(["", "  tab  ", " ", "bat"]);
        assert_eq!(groups.word_count(), 2);
        assert_eq!(rendered(&groups), vec![vec!["tab", "bat"]]);
    }

    #[test]
    fn test_every_word_lands_in_exactly_one_group() {
        let lines = [
            "stop", "pots", "", "tops", "opts", "cat", " act ", "dog", "god", "Spot", "x", "stop",
        ];
        let groups = group_lines(lines);
        let non_blank = lines.iter().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(groups.word_count(), non_blank);

        for group in &groups {
            assert!(!group.is_empty());
            for word in group.words() {
                assert_eq!(&canonicalize(word.as_str()), group.key());
                let holders = groups
                    .iter()
                    .filter(|g| g.words().contains(word))
                    .count();
                assert_eq!(holders, 1);
            }
        }

        assert_eq!(
            rendered(&groups)[0],
            vec!["stop", "pots", "tops", "opts", "Spot", "stop"]
        );
    }

    #[test]
    fn test_empty_input() {
        let groups = group_words(Vec::new());
        assert!(groups.is_empty());
        assert_eq!(groups.word_count(), 0);
    }
}
