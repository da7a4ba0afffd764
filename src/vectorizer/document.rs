use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Document
/// One ingested text after tokenization and stop-word filtering.
///
/// - `all_tokens`: surviving tokens in order, duplicates kept
/// - `term_count`: occurrences per term, keyed in first-seen order
///
/// The key order of `term_count` is the document's unique-token order,
/// so the two can never disagree.
/// Documents are immutable once stored in a corpus.
///
/// # Examples
/// ```
/// use tf_idf_similarity::Document;
/// let doc = Document::from_tokens(&["this", "is", "a", "a", "sample"]);
///
/// assert_eq!(doc.term_count("a"), 2);
/// assert_eq!(doc.term_frequency("a"), 0.4);
/// assert_eq!(doc.unique_tokens().collect::<Vec<_>>(), vec!["this", "is", "a", "sample"]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Document {
    all_tokens: Vec<String>,
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
}

/// Building
impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from already filtered tokens
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut doc = Self::new();
        for token in tokens {
            doc.push_token(token.as_ref());
        }
        doc
    }

    /// Append a token
    ///
    /// # Returns
    /// * `bool` - true on the term's first occurrence in this document
    #[inline]
    pub(crate) fn push_token(&mut self, token: &str) -> bool {
        self.all_tokens.push(token.to_string());
        match self.term_count.get_mut(token) {
            Some(count) => {
                *count += 1;
                false
            }
            None => {
                self.term_count.insert(token.to_string(), 1);
                true
            }
        }
    }
}

/// Statistics
impl Document {
    /// Tokens in order of appearance, duplicates kept
    #[inline]
    pub fn all_tokens(&self) -> &[String] {
        &self.all_tokens
    }

    /// Distinct terms in first-seen order
    #[inline]
    pub fn unique_tokens(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|s| s.as_str())
    }

    /// Iterator over (term, count) in first-seen order
    #[inline]
    pub fn term_counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Number of post-filter tokens
    #[inline]
    pub fn token_count(&self) -> usize {
        self.all_tokens.len()
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    pub fn is_empty(&self) -> bool {
        self.all_tokens.is_empty()
    }

    /// Term frequency
    /// tf(t, d) = count(t, d) / |d|
    ///
    /// # Returns
    /// * `f64` - 0.0 for a term absent from the document, else in (0.0, 1.0]
    #[inline]
    pub fn term_frequency(&self, term: &str) -> f64 {
        match self.term_count.get(term) {
            Some(&count) => count as f64 / self.all_tokens.len() as f64,
            None => 0.0,
        }
    }
}

/// Pairwise vectors
impl Document {
    /// Build two aligned term-frequency vectors over a local term space
    ///
    /// The space is this document's unique terms in first-seen order,
    /// followed by `other`'s unique terms not already present, in its order.
    /// It is independent of any corpus vocabulary.
    ///
    /// # Returns
    /// * `(Vec<f64>, Vec<f64>)` - equal-length TF vectors for `self` and `other`
    pub fn vectors(&self, other: &Document) -> (Vec<f64>, Vec<f64>) {
        let mut terms: IndexSet<&str> = IndexSet::with_capacity(self.term_num() + other.term_num());
        terms.extend(self.unique_tokens());
        terms.extend(other.unique_tokens());

        terms
            .iter()
            .map(|term| (self.term_frequency(term), other.term_frequency(term)))
            .unzip()
    }
}
