use {
    pyo3::{prelude::*, types::IntoPyDict},
    tracing::info,
    crate::error::TaggingError,
    super::{GrammaticalCategory, TaggedToken, Tagger},
};

/// Delegates to NLTK's averaged perceptron tagger mapped onto the universal
/// tagset. Tokens come from `nltk.word_tokenize`. Needs `punkt`,
/// `averaged_perceptron_tagger` and `universal_tagset` data.
pub struct NltkTagger;

impl NltkTagger {
    pub fn new() -> Result<Self, TaggingError> {
        Python::with_gil(|py| py.import("nltk").map(|_| ()))
            .map_err(|err| TaggingError::Tagger(format!("failed to import nltk: {}", err)))?;

        info!("using nltk part-of-speech tagger");
        Ok(Self)
    }
}

impl Tagger for NltkTagger {
    fn tokenize(&self, corpus: &str) -> Result<Vec<String>, TaggingError> {
        if corpus.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tokens: Vec<String> = Python::with_gil(|py| {
            py.import("nltk")?
                .getattr("word_tokenize")?
                .call1((corpus,))?
                .extract()
        }).map_err(|err| TaggingError::Tokenizer(err.to_string()))?;

        Ok(tokens)
    }

    fn tag(&self, tokens: Vec<String>) -> Result<Vec<TaggedToken>, TaggingError> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let tagged: Vec<(String, String)> = Python::with_gil(|py| {
            py.import("nltk")?
                .getattr("pos_tag")?
                .call((tokens,), Some([("tagset", "universal")].into_py_dict(py)))?
                .extract()
        }).map_err(|err| TaggingError::Tagger(err.to_string()))?;

        Ok(tagged.into_iter()
            .map(|(word, tag)| {
                let category = tag.parse().unwrap_or(GrammaticalCategory::Other);
                TaggedToken::new(word, category)
            })
            .collect())
    }
}
