use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vectorizer::{
    compare::Comparator,
    corpus::Corpus,
    identity::DocumentIdentity,
    stop_words::{StopWordRule, DEFAULT_STOP_WORDS},
    tokenizer::Tokenizer,
};

/// Plain-data corpus configuration
/// Every field is optional when deserializing.
///
/// # Examples
/// ```
/// use tf_idf_similarity::{Corpus, CorpusConfig};
/// let config: CorpusConfig = serde_json::from_str(r#"{ "default_stop_words": true }"#).unwrap();
/// let corpus = Corpus::builder().config(config).build();
/// assert!(corpus.stop_words().matches("the"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// extra stop words
    pub stop_words: Vec<String>,
    /// seed the stop words with the built-in list
    pub default_stop_words: bool,
    /// documents ingested at construction
    pub documents: Vec<String>,
}

/// One recorded builder option
enum Step {
    StopWords(Vec<String>),
    DefaultStopWords,
    Rule(Box<dyn StopWordRule>),
    Documents(Vec<String>),
    Comparator(Box<dyn Comparator>),
    Identity(Box<dyn DocumentIdentity>),
    Tokenizer(Box<dyn Tokenizer>),
}

/// Corpus builder
/// Options are recorded and applied in call order by [`CorpusBuilder::build`],
/// so stop words given after `documents` do not filter those documents.
pub struct CorpusBuilder {
    steps: Vec<Step>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a plain configuration
    /// Its default list and stop words are applied before its documents.
    pub fn config(mut self, config: CorpusConfig) -> Self {
        if config.default_stop_words {
            self.steps.push(Step::DefaultStopWords);
        }
        if !config.stop_words.is_empty() {
            self.steps.push(Step::StopWords(config.stop_words));
        }
        if !config.documents.is_empty() {
            self.steps.push(Step::Documents(config.documents));
        }
        self
    }

    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.push(Step::StopWords(words.into_iter().map(Into::into).collect()));
        self
    }

    /// Enable the built-in stop-word list
    pub fn default_stop_words(mut self) -> Self {
        self.steps.push(Step::DefaultStopWords);
        self
    }

    pub fn stop_word_rule<R>(mut self, rule: R) -> Self
    where
        R: StopWordRule + 'static,
    {
        self.steps.push(Step::Rule(Box::new(rule)));
        self
    }

    /// Documents to ingest at this point of the build
    pub fn documents<I, S>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.push(Step::Documents(documents.into_iter().map(Into::into).collect()));
        self
    }

    pub fn comparator<C>(mut self, comparator: C) -> Self
    where
        C: Comparator + 'static,
    {
        self.steps.push(Step::Comparator(Box::new(comparator)));
        self
    }

    pub fn identity<I>(mut self, identity: I) -> Self
    where
        I: DocumentIdentity + 'static,
    {
        self.steps.push(Step::Identity(Box::new(identity)));
        self
    }

    pub fn tokenizer<T>(mut self, tokenizer: T) -> Self
    where
        T: Tokenizer + 'static,
    {
        self.steps.push(Step::Tokenizer(Box::new(tokenizer)));
        self
    }

    pub fn build(self) -> Corpus {
        let mut corpus = Corpus::new();
        let mut seeded = 0;
        for step in self.steps {
            match step {
                Step::StopWords(words) => {
                    corpus.stop_words.add_words(words.as_slice());
                }
                Step::DefaultStopWords => {
                    corpus.stop_words.add_words(DEFAULT_STOP_WORDS);
                }
                Step::Rule(rule) => {
                    corpus.stop_words.add_boxed_rule(rule);
                }
                Step::Documents(documents) => seeded += corpus.add_documents(&documents),
                Step::Comparator(comparator) => corpus.comparator = comparator,
                Step::Identity(identity) => corpus.identity = identity,
                Step::Tokenizer(tokenizer) => corpus.tokenizer = tokenizer,
            }
        }

        debug!(
            seeded,
            stop_words = corpus.stop_words.word_count(),
            stop_word_rules = corpus.stop_words.rule_count(),
            "corpus built"
        );
        corpus
    }
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new()
    }
}
