/// Characters that split a word in two.
const SEPARATORS: [char; 5] = ['.', ',', ':', ';', '/'];
/// Characters that are dropped without splitting the word they sit in.
const REMOVED: [char; 2] = ['(', ')'];

/// Tokenizer trait
/// Turns raw document text into the term sequence the corpus counts.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// The reference tokenizer, see [`tokenize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

impl Tokenizer for DefaultTokenizer {
    #[inline]
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    #[inline]
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Split text into lowercase word tokens
///
/// `. , : ; /` become spaces, `(` and `)` are removed in place,
/// then the text is split on whitespace runs.
/// Empty or punctuation-only input yields an empty vector.
///
/// # Examples
/// ```
/// use tf_idf_similarity::tokenize;
/// assert_eq!(tokenize("Sentence one. (Sentence) two"), vec!["sentence", "one", "sentence", "two"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let folded: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !REMOVED.contains(c))
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();
    folded.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_lowercases() {
        assert_eq!(tokenize("two parts"), vec!["two", "parts"]);
        assert_eq!(tokenize("TWO PARTS"), vec!["two", "parts"]);
        assert_eq!(tokenize("one"), vec!["one"]);
    }

    #[test]
    fn empty_and_punctuation_only_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(".").is_empty());
        assert!(tokenize(" ,;: / () ").is_empty());
    }

    #[test]
    fn separators_split_words() {
        assert_eq!(
            tokenize("sentence, one, sentence, two."),
            vec!["sentence", "one", "sentence", "two"]
        );
        assert_eq!(
            tokenize("sentence one. sentence two."),
            vec!["sentence", "one", "sentence", "two"]
        );
        assert_eq!(tokenize("and/or key:value"), vec!["and", "or", "key", "value"]);
    }

    #[test]
    fn parentheses_collapse_instead_of_splitting() {
        assert_eq!(tokenize("func(arg)"), vec!["funcarg"]);
        assert_eq!(tokenize("(aside) text"), vec!["aside", "text"]);
    }

    #[test]
    fn whitespace_runs_are_one_boundary() {
        assert_eq!(tokenize("  a \t\n b  "), vec!["a", "b"]);
    }

    #[test]
    fn closures_are_tokenizers() {
        let by_space = |text: &str| text.split(' ').map(str::to_string).collect::<Vec<_>>();
        assert_eq!(Tokenizer::tokenize(&by_space, "A.B c"), vec!["A.B", "c"]);
        assert_eq!(DefaultTokenizer.tokenize("A.B c"), vec!["a", "b", "c"]);
    }
}
