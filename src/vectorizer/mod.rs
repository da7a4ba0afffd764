pub mod compare;
pub mod config;
pub mod corpus;
pub mod document;
pub mod identity;
pub mod search;
pub mod stop_words;
pub mod tokenizer;
