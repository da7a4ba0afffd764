/// This crate is a TF-IDF accounting and document similarity engine.
pub mod vectorizer;
pub mod utils;
pub mod error;

/// Corpus (TF-IDF engine)
/// The top-level struct of this crate.
/// It ingests raw document texts and keeps:
/// - The stored documents, keyed by a content hash
/// - The corpus-wide vocabulary (term -> stable index, first-seen order)
/// - The number of documents containing each term
///
/// From these it answers term frequency, inverse document frequency,
/// TF-IDF per term or per document, and pairwise document similarity.
///
/// The corpus is append-only. Ingestion needs `&mut Corpus`;
/// every query takes `&Corpus` and may run concurrently with other queries.
pub use vectorizer::corpus::Corpus;

/// Corpus configuration
/// `CorpusConfig` is plain serde data (stop words, default list switch, seed documents).
/// `CorpusBuilder` adds the pluggable parts (comparator, identity, tokenizer, stop-word rules).
pub use vectorizer::config::{CorpusBuilder, CorpusConfig};

/// Document
/// One ingested text: its filtered tokens and per-term counts in first-seen order.
/// Also builds the pairwise term-frequency vectors the comparator consumes.
pub use vectorizer::document::Document;

/// Vector comparator trait and the cosine reference implementation
pub use vectorizer::compare::{Comparator, CosineComparator};

/// Stop-word filter
/// Exact-match list OR any predicate rule.
/// `DEFAULT_STOP_WORDS` is the built-in English list, opt-in.
pub use vectorizer::stop_words::{StopWordRule, StopWords, DEFAULT_STOP_WORDS};

/// Tokenizer
/// `tokenize` lowercases, strips `. , : ; ( ) /` and splits on whitespace.
pub use vectorizer::tokenizer::{tokenize, DefaultTokenizer, Tokenizer};

/// Document identity
/// Content-derived keys; SHA-256 hex by default.
pub use vectorizer::identity::{DocumentIdentity, DocumentKey, Sha256Identity};

/// Ranked similarity results
pub use vectorizer::search::{HitEntry, Hits};

pub use error::{DocumentSide, Error, Result};
