use {
    std::collections::HashMap,
    once_cell::sync::Lazy,
    crate::error::TaggingError,
    super::{GrammaticalCategory, TaggedToken, Tagger},
};

use super::GrammaticalCategory::*;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "all", "both", "either", "neither", "another", "which", "whatever", "whichever",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "mine", "myself", "you", "yours", "yourself", "yourselves", "he", "him",
    "himself", "she", "hers", "herself", "it", "itself", "we", "us", "ours", "ourselves", "they",
    "them", "theirs", "themselves", "who", "whom", "what", "someone", "somebody", "anyone",
    "anybody", "everyone", "everybody", "nobody", "something", "anything", "everything",
    "nothing", "u", "ya",
];

const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their", "ur"];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they", "u"];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "down", "over", "under", "since",
    "without", "within", "than", "because", "if", "while", "as", "per", "via", "toward",
    "towards", "upon", "across", "behind", "beyond", "near", "around", "among", "until", "till",
    "whether", "though", "although", "onto", "throughout",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "plus", "&"];

const PARTICLES: &[&str] = &["to", "s"];

const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "do", "does",
    "did", "ll", "d", "gonna", "wanna",
];

const VERBS: &[&str] = &[
    "be", "is", "am", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "done", "doing", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must", "get", "gets", "got", "gotten", "getting", "make", "makes", "made",
    "go", "goes", "went", "gone", "going", "say", "says", "said", "know", "knows", "knew",
    "known", "think", "thinks", "see", "sees", "saw", "seen", "come", "comes", "came", "take",
    "takes", "took", "taken", "want", "wants", "feel", "feels", "felt", "give", "gives", "gave",
    "given", "find", "finds", "tell", "tells", "told", "become", "became", "keep", "kept", "let",
    "seem", "seems", "seemed", "try", "tried", "leave", "left", "put", "mean", "means", "meant",
    "hear", "heard", "believe", "remember", "forget", "forgot", "subscribe", "subscribed",
    "listen", "understand", "understood", "deserve", "deserves", "imagine", "agree", "ll",
    "gonna", "wanna", "m", "re", "ve", "t", "d", "don", "doesn", "didn", "isn", "aren", "wasn",
    "weren", "won", "wouldn", "couldn", "shouldn", "haven", "hasn", "ain",
];

const ADVERBS: &[&str] = &[
    "so", "very", "really", "too", "just", "also", "not", "never", "always", "now", "then",
    "here", "there", "still", "even", "only", "ever", "already", "again", "soon", "how", "when",
    "where", "why", "back", "much", "more", "most", "yet", "almost", "maybe", "quite", "rather",
    "once", "often", "sometimes", "anymore", "together", "away", "ago", "else", "instead",
    "n", "nt", "lot", "literally", "actually", "probably", "definitely", "absolutely", "totally",
];

const ADJECTIVES: &[&str] = &[
    "good", "great", "best", "better", "nice", "amazing", "awesome", "bad", "worst", "worse",
    "new", "old", "beautiful", "cool", "funny", "cute", "big", "small", "little", "long", "short",
    "high", "low", "real", "true", "whole", "full", "happy", "sad", "same", "different", "other",
    "last", "first", "next", "hard", "easy", "young", "perfect", "favorite", "favourite",
    "incredible", "wonderful", "fantastic", "epic", "hilarious", "sweet", "crazy", "lovely",
    "interesting", "stupid", "wrong", "own", "many", "few", "such", "entire", "huge", "sure",
    "glad", "free", "late", "early", "clear", "strong", "important", "possible", "legendary",
    "underrated", "insane", "wholesome", "brilliant", "excellent", "fine", "weird",
    "strange", "smart", "dumb", "pure", "rare", "simple", "special", "single", "certain",
    "original", "dead", "alive", "super", "dear", "poor", "rich",
];

const NUMERALS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million", "billion",
];

/// Nouns the adjective suffix rules would otherwise catch.
const NOUNS: &[&str] = &[
    "interest", "forest", "request", "contest", "protest", "harvest", "conquest", "topic",
    "comic", "logic", "traffic", "mechanic", "clinic", "picnic", "graphic", "republic", "public",
    "fabric", "panic", "tactic", "critic", "mimic",
];

const INTERJECTIONS: &[&str] = &[
    "lol", "lmao", "lmfao", "rofl", "omg", "haha", "hahaha", "wow", "oh", "ah", "yeah", "yes",
    "yep", "nope", "ok", "okay", "hi", "hello", "hey", "please", "hmm", "xd", "bruh", "wtf",
    "btw", "idk", "tbh", "imo", "ikr", "thanks", "thank", "uh", "um",
];

/// Words whose category depends on context, most likely reading first.
const AMBIGUOUS: &[(&str, &[GrammaticalCategory])] = &[
    ("love", &[Verb, Noun]),
    ("like", &[Adposition, Verb]),
    ("watch", &[Verb, Noun]),
    ("look", &[Verb, Noun]),
    ("need", &[Verb, Noun]),
    ("hope", &[Verb, Noun]),
    ("laugh", &[Verb, Noun]),
    ("hate", &[Verb, Noun]),
    ("wish", &[Verb, Noun]),
    ("work", &[Noun, Verb]),
    ("play", &[Verb, Noun]),
    ("thought", &[Verb, Noun]),
    ("song", &[Noun]),
    ("music", &[Noun]),
    ("fun", &[Noun, Adjective]),
    ("kind", &[Noun, Adjective]),
    ("right", &[Adjective, Adverb, Noun]),
    ("well", &[Adverb, Adjective]),
    ("pretty", &[Adverb, Adjective]),
    ("back", &[Adverb, Noun]),
    ("part", &[Noun, Verb]),
    ("end", &[Noun, Verb]),
    ("start", &[Verb, Noun]),
    ("show", &[Noun, Verb]),
    ("use", &[Verb, Noun]),
    ("help", &[Verb, Noun]),
    ("care", &[Verb, Noun]),
    ("cry", &[Verb, Noun]),
    ("smile", &[Noun, Verb]),
    ("dance", &[Noun, Verb]),
    ("feel", &[Verb, Noun]),
    ("up", &[Particle, Adposition]),
    ("out", &[Particle, Adposition]),
    ("off", &[Particle, Adposition]),
];

const ADVERB_SUFFIXES: &[&str] = &["ly"];
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ic", "ical", "ish", "est"];
const VERB_SUFFIXES: &[&str] = &["ing", "ed"];

static LEXICON: Lazy<HashMap<&'static str, &'static [GrammaticalCategory]>> = Lazy::new(|| {
    let tables: [(&[&str], &'static [GrammaticalCategory]); 12] = [
        (NOUNS, &[Noun]),
        (NUMERALS, &[Numeral]),
        (ADJECTIVES, &[Adjective]),
        (ADVERBS, &[Adverb]),
        (VERBS, &[Verb]),
        (PARTICLES, &[Particle]),
        (CONJUNCTIONS, &[Conjunction]),
        (ADPOSITIONS, &[Adposition]),
        (POSSESSIVES, &[Pronoun]),
        (PRONOUNS, &[Pronoun]),
        (DETERMINERS, &[Determiner]),
        (INTERJECTIONS, &[Other]),
    ];

    let mut lexicon = HashMap::new();
    for (words, categories) in tables {
        for word in words {
            lexicon.insert(*word, categories);
        }
    }
    for (word, categories) in AMBIGUOUS {
        lexicon.insert(*word, *categories);
    }
    lexicon
});

/// Rule-based tagger: a lexicon of function words and frequent comment
/// vocabulary plus word-shape fallbacks. A one-token look-behind picks
/// between the readings of ambiguous lexicon words only, so unknown words
/// never become verbs just because they follow a pronoun.
#[derive(Debug, Default, Clone)]
pub struct LexiconTagger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Start,
    NominalModifier,
    VerbTrigger,
    Other,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn classify(&self, word: &str, context: Context) -> GrammaticalCategory {
        if !word.chars().any(|c| c.is_alphanumeric()) {
            return Punctuation;
        }
        if word.chars().all(|c| c.is_numeric()) {
            return Numeral;
        }

        let lower = word.to_lowercase();
        if let Some(candidates) = LEXICON.get(lower.as_str()) {
            return disambiguate(candidates, context);
        }

        classify_by_shape(&lower, context)
    }
}

fn disambiguate(candidates: &[GrammaticalCategory], context: Context) -> GrammaticalCategory {
    let preferred: &[GrammaticalCategory] = match context {
        Context::NominalModifier => &[Noun, Adjective],
        Context::VerbTrigger => &[Verb],
        Context::Start | Context::Other => &[],
    };

    preferred.iter()
        .find(|category| candidates.contains(category))
        .or_else(|| candidates.first())
        .copied()
        .unwrap_or(Noun)
}

fn classify_by_shape(lower: &str, context: Context) -> GrammaticalCategory {
    let has_suffix = |suffixes: &[&str]| suffixes.iter()
        .any(|suffix| lower.len() > suffix.len() + 2 && lower.ends_with(suffix));

    if has_suffix(ADVERB_SUFFIXES) {
        Adverb
    } else if has_suffix(ADJECTIVE_SUFFIXES) {
        Adjective
    } else if has_suffix(VERB_SUFFIXES) {
        match context {
            Context::NominalModifier if lower.ends_with("ing") => Noun,
            Context::NominalModifier => Adjective,
            _ => Verb,
        }
    } else {
        Noun
    }
}

fn context_after(lower: &str, category: GrammaticalCategory) -> Context {
    if POSSESSIVES.contains(&lower) {
        return Context::NominalModifier;
    }
    if lower == "to" || SUBJECT_PRONOUNS.contains(&lower) || MODALS.contains(&lower) {
        return Context::VerbTrigger;
    }

    match category {
        Determiner | Adjective | Numeral => Context::NominalModifier,
        Punctuation => Context::Start,
        _ => Context::Other,
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: Vec<String>) -> Result<Vec<TaggedToken>, TaggingError> {
        let mut context = Context::Start;

        Ok(tokens.into_iter()
            .map(|word| {
                let category = self.classify(&word, context);
                context = context_after(&word.to_lowercase(), category);
                TaggedToken::new(word, category)
            })
            .collect())
    }
}
