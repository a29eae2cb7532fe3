mod lexicon;
#[cfg(feature = "nltk")]
mod nltk;

use {
    std::{collections::HashSet, fmt, str::FromStr},
    serde::{Serialize, Deserialize},
    tokenizers::{
        pre_tokenizers::whitespace::Whitespace,
        OffsetReferential,
        OffsetType,
        PreTokenizedString,
        PreTokenizer,
    },
    crate::error::TaggingError,
};

pub use lexicon::LexiconTagger;
#[cfg(feature = "nltk")]
pub use nltk::NltkTagger;

/// Universal part-of-speech tagset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalCategory {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "ADJ", alias = "ADJECTIVE")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "ADP")]
    Adposition,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "CONJ")]
    Conjunction,
    #[serde(rename = "PRT")]
    Particle,
    #[serde(rename = ".")]
    Punctuation,
    #[serde(rename = "X")]
    Other,
}

impl GrammaticalCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Adjective => "ADJ",
            Self::Adverb => "ADV",
            Self::Pronoun => "PRON",
            Self::Determiner => "DET",
            Self::Adposition => "ADP",
            Self::Numeral => "NUM",
            Self::Conjunction => "CONJ",
            Self::Particle => "PRT",
            Self::Punctuation => ".",
            Self::Other => "X",
        }
    }
}

impl FromStr for GrammaticalCategory {
    type Err = TaggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_uppercase().as_str() {
            "NOUN" => Self::Noun,
            "VERB" => Self::Verb,
            "ADJ" | "ADJECTIVE" => Self::Adjective,
            "ADV" => Self::Adverb,
            "PRON" => Self::Pronoun,
            "DET" => Self::Determiner,
            "ADP" => Self::Adposition,
            "NUM" => Self::Numeral,
            "CONJ" => Self::Conjunction,
            "PRT" => Self::Particle,
            "." => Self::Punctuation,
            "X" => Self::Other,
            other => return Err(TaggingError::Tagger(format!("unknown category: {}", other))),
        })
    }
}

impl fmt::Display for GrammaticalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categories a word must carry to be counted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "Vec<GrammaticalCategory>", into = "Vec<GrammaticalCategory>")]
pub struct CategorySet {
    categories: HashSet<GrammaticalCategory>,
}

impl CategorySet {
    pub fn contains(&self, category: GrammaticalCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn with(mut self, category: GrammaticalCategory) -> Self {
        self.categories.insert(category);
        self
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::from(vec![GrammaticalCategory::Noun, GrammaticalCategory::Adjective])
    }
}

impl From<Vec<GrammaticalCategory>> for CategorySet {
    fn from(categories: Vec<GrammaticalCategory>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }
}

impl From<CategorySet> for Vec<GrammaticalCategory> {
    fn from(set: CategorySet) -> Self {
        let mut categories: Vec<_> = set.categories.into_iter().collect();
        categories.sort_by_key(|category| category.label());
        categories
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub word: String,
    pub category: GrammaticalCategory,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, category: GrammaticalCategory) -> Self {
        Self {
            word: word.into(),
            category,
        }
    }
}

pub trait Tagger: Send + Sync {
    fn tokenize(&self, corpus: &str) -> Result<Vec<String>, TaggingError> {
        tokenize(corpus)
    }

    fn tag(&self, tokens: Vec<String>) -> Result<Vec<TaggedToken>, TaggingError>;
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaggerKind {
    Lexicon,
    Nltk,
}

impl Default for TaggerKind {
    fn default() -> Self {
        Self::Lexicon
    }
}

impl TaggerKind {
    pub fn build(&self) -> Result<Box<dyn Tagger>, TaggingError> {
        match self {
            Self::Lexicon => Ok(Box::new(LexiconTagger::new())),
            #[cfg(feature = "nltk")]
            Self::Nltk => Ok(Box::new(NltkTagger::new()?)),
            #[cfg(not(feature = "nltk"))]
            Self::Nltk => Err(TaggingError::Tagger("built without the nltk feature".to_owned())),
        }
    }
}

/// Splits text into word and punctuation tokens, dropping whitespace.
pub fn tokenize(corpus: &str) -> Result<Vec<String>, TaggingError> {
    if corpus.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut pretokenized = PreTokenizedString::from(corpus);
    Whitespace::default()
        .pre_tokenize(&mut pretokenized)
        .map_err(|err| TaggingError::Tokenizer(err.to_string()))?;

    Ok(pretokenized.get_splits(OffsetReferential::Original, OffsetType::Char)
        .into_iter()
        .map(|(token, _, _)| token.to_owned())
        .filter(|token| !token.is_empty())
        .collect())
}

pub fn tag_corpus(corpus: &str, tagger: &dyn Tagger) -> Result<Vec<TaggedToken>, TaggingError> {
    let tokens = tagger.tokenize(corpus)?;
    let expected = tokens.len();

    let tagged = tagger.tag(tokens)?;
    if tagged.len() != expected {
        return Err(TaggingError::LengthMismatch {
            expected,
            actual: tagged.len(),
        });
    }

    Ok(tagged)
}
