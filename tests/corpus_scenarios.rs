use tf_idf_similarity::{Comparator, Corpus, CosineComparator, DocumentSide, Error};

const DOC1: &str = "this is a a sample";
const DOC2: &str = "this is another another example example example";

fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
}

#[test]
fn adding_the_same_text_twice_changes_nothing() {
    let mut once = Corpus::new();
    once.add_document(DOC1);
    once.add_document(DOC2);

    let mut twice = Corpus::new();
    for text in [DOC1, DOC1, DOC2, DOC2] {
        twice.add_document(text);
    }

    assert_eq!(once.len(), twice.len());
    assert_eq!(once.vocabulary_size(), twice.vocabulary_size());
    for term in once.vocabulary() {
        assert_eq!(once.document_frequency(term), twice.document_frequency(term));
        assert_eq!(once.term_index(term), twice.term_index(term));
    }
    assert_eq!(once.tf_idf_for_document(DOC2), twice.tf_idf_for_document(DOC2));
}

#[test]
fn pairwise_vectors_reference_scenario() {
    let corpus = Corpus::with_documents([DOC1, DOC2]);
    let (a, b) = corpus.vectors(DOC1, DOC2).unwrap();
    assert_eq!(a, vec![0.2, 0.2, 0.4, 0.2, 0.0, 0.0]);
    let want_b = [1.0 / 7.0, 1.0 / 7.0, 0.0, 0.0, 2.0 / 7.0, 3.0 / 7.0];
    assert_eq!(b.len(), want_b.len());
    for (got, want) in b.into_iter().zip(want_b) {
        assert_close(got, want);
    }
}

#[test]
fn idf_reference_scenario() {
    let corpus = Corpus::with_documents([DOC1, DOC2]);
    assert_eq!(corpus.inverse_document_frequency("this"), 0.0);
    assert_close(corpus.inverse_document_frequency("example"), 0.3010299957);
}

#[test]
fn idf_never_decreases_when_unrelated_documents_arrive() {
    let mut corpus = Corpus::with_documents([DOC1, DOC2]);
    let mut last = corpus.inverse_document_frequency("example");
    for text in ["alpha beta", "gamma delta", "epsilon", "zeta eta theta"] {
        corpus.add_document(text);
        let idf = corpus.inverse_document_frequency("example");
        assert!(idf >= last, "idf dropped from {last} to {idf}");
        last = idf;
    }
}

#[test]
fn self_similarity_is_one() {
    let corpus = Corpus::with_documents([DOC1, DOC2, "one (two) three/four"]);
    for text in [DOC1, DOC2, "one (two) three/four"] {
        assert_close(corpus.compare(text, text).unwrap(), 1.0);
    }
}

#[test]
fn compare_is_cosine_of_pairwise_vectors() {
    let corpus = Corpus::with_documents([DOC1, DOC2]);
    let (a, b) = corpus.vectors(DOC1, DOC2).unwrap();
    assert_eq!(corpus.compare(DOC1, DOC2).unwrap(), CosineComparator.compare(&a, &b));
}

#[test]
fn unknown_document_is_the_only_error() {
    let corpus = Corpus::with_documents(["known text"]);
    let err = corpus.compare("known text", "never added text").unwrap_err();
    assert_eq!(err, Error::MissingDocument(DocumentSide::Second));
    assert!(err.to_string().contains("second"));

    // numeric degenerate cases are values, not errors
    assert!(corpus.inverse_document_frequency("never").is_infinite());
    assert_eq!(corpus.tf_idf_for_term("known", "never added text"), 0.0);
}

#[test]
fn default_stop_words_shrink_vocabulary() {
    let corpus = Corpus::builder().default_stop_words().documents([DOC1, DOC2]).build();
    assert_eq!(
        corpus.vocabulary().collect::<Vec<_>>(),
        vec!["sample", "another", "example"]
    );
    let doc1 = corpus.get_document(DOC1).unwrap();
    assert_eq!(doc1.token_count(), 1);
    assert_eq!(doc1.term_frequency("sample"), 1.0);
}
