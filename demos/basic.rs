use tf_idf_similarity::Corpus;
use tracing_subscriber::EnvFilter;

fn main() -> tf_idf_similarity::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let documents = [
        "Rust is a systems programming language focused on safety and speed.",
        "Rust guarantees memory safety without a garbage collector.",
        "Python is a dynamic language popular for data science.",
        "Pasta is best cooked al dente (with salt).",
    ];

    let corpus = Corpus::builder()
        .default_stop_words()
        .documents(documents)
        .build();

    println!("{corpus:?}");
    println!("idf(rust)   = {:.6}", corpus.inverse_document_frequency("rust"));
    println!("idf(pasta)  = {:.6}", corpus.inverse_document_frequency("pasta"));
    println!(
        "tf-idf(safety, doc0) = {:.6}",
        corpus.tf_idf_for_term("safety", documents[0])
    );
    println!("compare(doc0, doc1) = {:.6}", corpus.compare(documents[0], documents[1])?);

    let hits = corpus.most_similar(documents[0], 3)?;
    println!("most similar to doc0:\n{hits}");

    let vector = corpus.tf_idf_for_document(documents[1]);
    for (term, weight) in corpus.vocabulary().zip(&vector).filter(|(_, w)| **w > 0.0) {
        println!("{term:>12}: {weight:.6}");
    }
    Ok(())
}
