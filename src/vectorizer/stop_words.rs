use std::{collections::HashSet, fmt::Debug};

/// Built-in English stop-word list
/// Articles, auxiliaries, prepositions, conjunctions and pronouns.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    // articles & determiners
    "a", "an", "the", "this", "that", "these", "those",
    // be-verbs
    "is", "are", "was", "were", "be", "been", "being", "am",
    // auxiliaries
    "have", "has", "had", "do", "does", "did",
    // modals
    "will", "would", "shall", "should", "may", "might", "can", "could", "must",
    // prepositions
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "into", "about",
    // conjunctions & negation
    "and", "or", "but", "not", "no", "if", "then", "than", "so", "as",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they",
    "me", "him", "her", "us", "them",
    "my", "your", "his", "our", "their", "its",
    // interrogatives
    "who", "what", "which", "when", "where", "how", "why",
];

/// A predicate rule excluding terms from corpus accounting
pub trait StopWordRule: Send + Sync {
    fn matches(&self, term: &str) -> bool;
}

impl<F> StopWordRule for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    #[inline]
    fn matches(&self, term: &str) -> bool {
        self(term)
    }
}

/// StopWords
/// Exact-match list plus predicate rules, combined with OR.
/// All mutation is additive.
///
/// # Examples
/// ```
/// use tf_idf_similarity::StopWords;
/// let mut stop_words = StopWords::new();
/// stop_words.add_word("the");
/// stop_words.add_rule(|term: &str| term.len() == 1);
///
/// assert!(stop_words.matches("the"));
/// assert!(stop_words.matches("x"));
/// assert!(!stop_words.matches("rust"));
/// ```
#[derive(Default)]
pub struct StopWords {
    list: HashSet<String>,
    rules: Vec<Box<dyn StopWordRule>>,
}

impl StopWords {
    /// Create an empty filter that matches nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter seeded with [`DEFAULT_STOP_WORDS`]
    pub fn with_defaults() -> Self {
        let mut stop_words = Self::new();
        stop_words.add_words(DEFAULT_STOP_WORDS);
        stop_words
    }

    /// true if the term is listed or any rule accepts it
    #[inline]
    pub fn matches(&self, term: &str) -> bool {
        self.list.contains(term) || self.rules.iter().any(|rule| rule.matches(term))
    }

    /// Add a single word to the list
    pub fn add_word(&mut self, word: &str) -> &mut Self {
        self.list.insert(word.to_string());
        self
    }

    /// Add multiple words to the list
    pub fn add_words<T>(&mut self, words: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        self.list.extend(words.iter().map(|w| w.as_ref().to_string()));
        self
    }

    /// Register an additional predicate rule
    pub fn add_rule<R>(&mut self, rule: R) -> &mut Self
    where
        R: StopWordRule + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    pub(crate) fn add_boxed_rule(&mut self, rule: Box<dyn StopWordRule>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Number of listed words (rules are not counted)
    pub fn word_count(&self) -> usize {
        self.list.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Check if the filter can never match anything
    pub fn is_empty(&self) -> bool {
        self.list.is_empty() && self.rules.is_empty()
    }
}

impl Debug for StopWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopWords")
            .field("words", &self.list.len())
            .field("rules", &self.rules.len())
            .finish()
    }
}
