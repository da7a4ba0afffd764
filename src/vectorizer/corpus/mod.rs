use std::collections::HashMap;
use std::fmt::Debug;

use indexmap::IndexSet;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{DocumentSide, Error, Result};
use crate::vectorizer::{
    compare::{Comparator, CosineComparator},
    config::CorpusBuilder,
    document::Document,
    identity::{DocumentIdentity, DocumentKey, Sha256Identity},
    stop_words::StopWords,
    tokenizer::{DefaultTokenizer, Tokenizer},
};

/// keep documents, vocabulary and document frequencies
///
/// Append-only: statistics only ever grow.
/// Mutation takes `&mut self`; queries take `&self` and may run concurrently.
pub struct Corpus {
    /// documents by content key
    pub(crate) documents: HashMap<DocumentKey, Document>,
    /// term -> vocabulary index, the index is the insertion position
    pub(crate) term_index: IndexSet<String>,
    /// term -> number of documents containing it
    pub(crate) document_frequency: HashMap<String, u64>,
    pub(crate) stop_words: StopWords,
    pub(crate) comparator: Box<dyn Comparator>,
    pub(crate) identity: Box<dyn DocumentIdentity>,
    pub(crate) tokenizer: Box<dyn Tokenizer>,
}

impl Default for Corpus {
    fn default() -> Self {
        Self {
            documents: HashMap::new(),
            term_index: IndexSet::new(),
            document_frequency: HashMap::new(),
            stop_words: StopWords::new(),
            comparator: Box::new(CosineComparator),
            identity: Box::new(Sha256Identity),
            tokenizer: Box::new(DefaultTokenizer),
        }
    }
}

impl Debug for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corpus")
            .field("documents", &self.documents.len())
            .field("vocabulary", &self.term_index.len())
            .field("stop_words", &self.stop_words)
            .finish_non_exhaustive()
    }
}

/// Construction and ingestion
impl Corpus {
    /// Create an empty corpus
    /// No stop words, cosine comparator, SHA-256 identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corpus seeded with documents
    pub fn with_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self::new();
        corpus.add_documents(documents);
        corpus
    }

    /// Create a builder for a configured corpus
    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::new()
    }

    /// Add a document by its raw text
    ///
    /// Re-adding identical text is a no-op.
    /// Text that tokenizes to nothing, or only to stop words, is dropped.
    ///
    /// # Returns
    /// * `bool` - true if a new document was stored
    pub fn add_document(&mut self, text: &str) -> bool {
        let key = self.identity.key(text);
        if self.documents.contains_key(&key) {
            debug!(key = %key, "document already present, skipping");
            return false;
        }

        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            debug!(key = %key, "document has no tokens, dropping");
            return false;
        }

        let mut doc = Document::new();
        for token in &tokens {
            if self.stop_words.matches(token) {
                continue;
            }
            if doc.push_token(token) {
                self.register_term(token);
            }
        }

        if doc.is_empty() {
            debug!(key = %key, "document has only stop words, dropping");
            return false;
        }

        debug!(
            key = %key,
            tokens = doc.token_count(),
            terms = doc.term_num(),
            vocabulary = self.term_index.len(),
            "document added"
        );
        self.documents.insert(key, doc);
        true
    }

    /// Add several documents in order
    ///
    /// # Returns
    /// * `usize` - number of documents actually stored
    pub fn add_documents<I, S>(&mut self, documents: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        documents
            .into_iter()
            .filter(|text| self.add_document(text.as_ref()))
            .count()
    }

    /// first occurrence of a term in the document being ingested
    fn register_term(&mut self, term: &str) {
        *self.document_frequency.entry(term.to_string()).or_insert(0) += 1;
        if !self.term_index.contains(term) {
            let (index, _) = self.term_index.insert_full(term.to_string());
            trace!(term, index, "vocabulary term assigned");
        }
    }
}

/// Lookup and introspection
impl Corpus {
    /// Get a stored document by its raw text
    pub fn get_document(&self, text: &str) -> Option<&Document> {
        self.documents.get(&self.identity.key(text))
    }

    /// Get a stored document by its content key
    pub fn get_document_by_key(&self, key: &DocumentKey) -> Option<&Document> {
        self.documents.get(key)
    }

    pub fn contains_document(&self, text: &str) -> bool {
        self.get_document(text).is_some()
    }

    /// Key this corpus assigns to a text
    pub fn key_of(&self, text: &str) -> DocumentKey {
        self.identity.key(text)
    }

    /// Iterator over stored documents, in no particular order
    pub fn documents(&self) -> impl Iterator<Item = (&DocumentKey, &Document)> {
        self.documents.iter()
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Current vocabulary size (number of distinct terms)
    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.term_index.len()
    }

    /// Vocabulary terms in index order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.term_index.iter().map(|s| s.as_str())
    }

    /// Stable vocabulary index of a term
    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.term_index.get_index_of(term)
    }

    /// Number of documents containing the term
    #[inline]
    pub fn document_frequency(&self, term: &str) -> u64 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}

/// TF-IDF
impl Corpus {
    /// Term frequency of a term in the document with this text
    /// 0.0 if the document is unknown or lacks the term.
    pub fn term_frequency(&self, term: &str, text: &str) -> f64 {
        self.get_document(text)
            .map_or(0.0, |doc| doc.term_frequency(term))
    }

    /// Inverse document frequency
    /// idf(t) = log10(N / df(t))
    ///
    /// An unseen term divides by zero: infinity, or NaN on an empty corpus.
    #[inline]
    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        let doc_num = self.documents.len() as f64;
        let doc_freq = self.document_frequency(term) as f64;
        (doc_num / doc_freq).log10()
    }

    /// tf(t, d) * idf(t), or 0.0 if the document is unknown
    pub fn tf_idf_for_term(&self, term: &str, text: &str) -> f64 {
        match self.get_document(text) {
            Some(doc) => doc.term_frequency(term) * self.inverse_document_frequency(term),
            None => 0.0,
        }
    }

    /// Dense TF-IDF vector over the global vocabulary
    ///
    /// Length is the vocabulary size at call time, so vectors taken before
    /// later insertions are shorter. Unknown documents give all zeros.
    pub fn tf_idf_for_document(&self, text: &str) -> Vec<f64> {
        match self.get_document(text) {
            Some(doc) => self.tf_idf_vector(doc),
            None => vec![0.0; self.vocabulary_size()],
        }
    }

    fn tf_idf_vector(&self, doc: &Document) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary_size()];
        // every token, repeats land on the same index with the same value
        for token in doc.all_tokens() {
            if let Some(index) = self.term_index(token) {
                vector[index] = doc.term_frequency(token) * self.inverse_document_frequency(token);
            }
        }
        vector
    }

    /// Global TF-IDF vectors of every stored document, computed in parallel
    pub fn tf_idf_vectors(&self) -> Vec<(DocumentKey, Vec<f64>)> {
        self.documents
            .par_iter()
            .map(|(key, doc)| (key.clone(), self.tf_idf_vector(doc)))
            .collect()
    }
}

/// Pairwise comparison
impl Corpus {
    /// Pairwise TF vectors of two stored documents, see [`Document::vectors`]
    pub fn vectors(&self, first: &str, second: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        let (doc1, doc2) = self.resolve_pair(first, second)?;
        Ok(doc1.vectors(doc2))
    }

    /// Compare two stored documents with the configured comparator
    ///
    /// Fails with [`Error::MissingDocument`] before any computation
    /// if either text was never added.
    pub fn compare(&self, first: &str, second: &str) -> Result<f64> {
        let (doc1, doc2) = self.resolve_pair(first, second)?;
        let (vec1, vec2) = doc1.vectors(doc2);
        Ok(self.comparator.compare(&vec1, &vec2))
    }

    fn resolve_pair(&self, first: &str, second: &str) -> Result<(&Document, &Document)> {
        let doc1 = self
            .get_document(first)
            .ok_or(Error::MissingDocument(DocumentSide::First))?;
        let doc2 = self
            .get_document(second)
            .ok_or(Error::MissingDocument(DocumentSide::Second))?;
        Ok((doc1, doc2))
    }
}
