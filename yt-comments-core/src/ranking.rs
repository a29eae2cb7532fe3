use {
    std::collections::HashMap,
    serde::Serialize,
    crate::tagging::{CategorySet, TaggedToken},
};

pub const DEFAULT_TOP_K: usize = 20;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
}

/// Words ordered by descending count. Equal counts keep the order in which
/// the words were first seen.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries.iter().find(|entry| entry.word == word).map(|entry| entry.count)
    }

    pub fn max_count(&self) -> u64 {
        self.entries.first().map(|entry| entry.count).unwrap_or(0)
    }

    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.word.as_str()).collect()
    }
}

pub fn rank(tokens: &[TaggedToken], allowed: &CategorySet, top_k: usize) -> FrequencyTable {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u64)> = Vec::new();

    for token in tokens.iter().filter(|token| allowed.contains(token.category)) {
        let word = token.word.as_str();
        match positions.get(word) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable, so first-seen order survives among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_k);

    FrequencyTable {
        entries: counts.into_iter()
            .map(|(word, count)| FrequencyEntry {
                word: word.to_owned(),
                count,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::tagging::GrammaticalCategory::{self, *},
    };

    fn tokens(words: &[(&str, GrammaticalCategory)]) -> Vec<TaggedToken> {
        words.iter().map(|(word, category)| TaggedToken::new(*word, *category)).collect()
    }

    #[test]
    fn drops_words_outside_allowed_categories() {
        let tagged = tokens(&[
            ("cat", Noun),
            ("runs", Verb),
            ("fast", Adjective),
            ("runs", Verb),
            ("jumps", Verb),
            ("jumps", Noun),
        ]);

        let table = rank(&tagged, &CategorySet::default(), DEFAULT_TOP_K);

        assert_eq!(table.get("runs"), None);
        assert_eq!(table.get("cat"), Some(1));
        assert_eq!(table.get("fast"), Some(1));
        // counted only for its noun occurrence
        assert_eq!(table.get("jumps"), Some(1));
    }

    #[test]
    fn keeps_top_twenty_with_first_seen_tie_order() {
        let mut tagged = Vec::new();
        for _ in 0..5 {
            tagged.push(TaggedToken::new("cat", Noun));
        }
        for i in 0..18 {
            tagged.push(TaggedToken::new(format!("word{}", i), Noun));
        }
        for _ in 0..5 {
            tagged.push(TaggedToken::new("dog", Noun));
        }
        for _ in 0..3 {
            tagged.push(TaggedToken::new("bird", Adjective));
        }

        let table = rank(&tagged, &CategorySet::default(), DEFAULT_TOP_K);

        assert_eq!(table.len(), 20);
        assert_eq!(&table.words()[..5], &["cat", "dog", "bird", "word0", "word1"]);
        assert_eq!(table.get("word16"), Some(1));
        assert_eq!(table.get("word17"), None);
        assert!(table.entries().windows(2).all(|pair| pair[0].count >= pair[1].count));
    }

    #[test]
    fn counting_is_case_sensitive() {
        let tagged = tokens(&[("Dogs", Noun), ("dogs", Noun), ("dogs", Noun)]);
        let table = rank(&tagged, &CategorySet::default(), DEFAULT_TOP_K);

        assert_eq!(table.words(), vec!["dogs", "Dogs"]);
        assert_eq!(table.get("Dogs"), Some(1));
    }

    #[test]
    fn verbs_can_be_allowed_explicitly() {
        let tagged = tokens(&[("runs", Verb), ("cat", Noun), ("runs", Verb)]);
        let allowed = CategorySet::default().with(Verb);

        let table = rank(&tagged, &allowed, DEFAULT_TOP_K);

        assert_eq!(table.words(), vec!["runs", "cat"]);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = rank(&[], &CategorySet::default(), DEFAULT_TOP_K);
        assert!(table.is_empty());
        assert_eq!(table.max_count(), 0);
    }

    #[test]
    fn serializes_as_ordered_list() {
        let tagged = tokens(&[("dogs", Noun), ("funny", Adjective), ("dogs", Noun)]);
        let table = rank(&tagged, &CategorySet::default(), DEFAULT_TOP_K);

        assert_eq!(
            serde_json::to_string(&table).unwrap(),
            r#"[{"word":"dogs","count":2},{"word":"funny","count":1}]"#,
        );
    }
}
