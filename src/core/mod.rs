// Core algorithm exports
pub mod matcher;
pub mod text;

pub use matcher::{jaccard_similarity, rank};
pub use text::{build_vocabulary, cosine_similarity, vectorize, TextMatchError, Tokenizer};
