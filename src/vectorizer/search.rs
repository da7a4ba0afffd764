use std::fmt::{Debug, Display};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{DocumentSide, Error, Result};
use crate::vectorizer::{corpus::Corpus, identity::DocumentKey};

/// A single ranked document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEntry {
    pub key: DocumentKey,
    pub score: f64,
    /// post-filter token count of the hit
    pub doc_len: usize,
}

/// Ranked comparison results
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score
    /// NaN scores are removed, ties break on key.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.retain(|hit| !hit.score.is_nan());
        self.list
            .sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.key.cmp(&b.key)));
        self
    }

    /// Keep only the first `limit` entries
    pub fn truncate(&mut self, limit: usize) -> &mut Self {
        self.list.truncate(limit);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HitEntry> {
        self.list.iter()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {}: {:.6} (len: {})", hit.key, hit.score, hit.doc_len)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {:.6}  {} (len: {})", rank + 1, hit.score, hit.key, hit.doc_len)?;
        }
        Ok(())
    }
}

impl Corpus {
    /// Rank every other stored document against the one with this text
    ///
    /// Each pair is compared over its own local term space with the
    /// configured comparator, in parallel.
    ///
    /// # Arguments
    /// * `text` - text of a stored document
    /// * `limit` - maximum number of hits returned
    pub fn most_similar(&self, text: &str, limit: usize) -> Result<Hits> {
        let query_key = self.key_of(text);
        let query = self
            .get_document_by_key(&query_key)
            .ok_or(Error::MissingDocument(DocumentSide::Query))?;

        let list = self
            .documents
            .par_iter()
            .filter(|(key, _)| **key != query_key)
            .map(|(key, doc)| {
                let (vec1, vec2) = query.vectors(doc);
                HitEntry {
                    key: key.clone(),
                    score: self.comparator.compare(&vec1, &vec2),
                    doc_len: doc.token_count(),
                }
            })
            .collect();

        let mut hits = Hits::new(list);
        hits.sort_by_score_desc().truncate(limit);
        Ok(hits)
    }
}
