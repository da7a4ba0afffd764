use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content-derived document key
/// Callers normally address documents by their text; the key is what the corpus stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentKey(String);

impl DocumentKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Document identity function
/// Must be deterministic and practically collision-free.
pub trait DocumentIdentity: Send + Sync {
    fn key(&self, text: &str) -> DocumentKey;
}

impl<F> DocumentIdentity for F
where
    F: Fn(&str) -> DocumentKey + Send + Sync,
{
    #[inline]
    fn key(&self, text: &str) -> DocumentKey {
        self(text)
    }
}

/// Lower-case hex SHA-256 of the text's UTF-8 bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Identity;

impl DocumentIdentity for Sha256Identity {
    fn key(&self, text: &str) -> DocumentKey {
        let digest = Sha256::digest(text.as_bytes());
        DocumentKey(hex::encode(digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_digests() {
        assert_eq!(
            Sha256Identity.key("").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            Sha256Identity.key("abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn identical_text_same_key_distinct_text_distinct_key() {
        assert_eq!(Sha256Identity.key("doc1"), Sha256Identity.key("doc1"));
        assert_ne!(Sha256Identity.key("doc1"), Sha256Identity.key("doc2"));
    }

    #[test]
    fn closures_are_identities() {
        let by_len = |text: &str| DocumentKey::new(text.len().to_string());
        assert_eq!(by_len.key("abc").as_str(), "3");
        assert_eq!(DocumentKey::new("k").to_string(), "k");
    }
}
