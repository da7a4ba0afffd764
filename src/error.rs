/// Which argument of a lookup failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    First,
    Second,
    Query,
}

impl std::fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentSide::First => f.write_str("first"),
            DocumentSide::Second => f.write_str("second"),
            DocumentSide::Query => f.write_str("query"),
        }
    }
}

/// Errors for corpus queries.
///
/// Degenerate numeric cases (unseen terms, zero-magnitude vectors)
/// are not errors; they surface as NaN or infinity.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A document text did not resolve to a stored document.
    #[error("missing document: {0} document was never added to the corpus")]
    MissingDocument(DocumentSide),
}

pub type Result<T> = std::result::Result<T, Error>;
