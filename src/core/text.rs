use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{Document, MatchResult};

/// Errors from the text-similarity pipeline
#[derive(Debug, Error)]
pub enum TextMatchError {
    /// Vectors built from different vocabularies were compared. This is an
    /// integration error, not a runtime condition to recover from.
    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Bag-of-words tokenizer with a configured stopword set.
///
/// The stopword list is explicit configuration bound at construction time,
/// which keeps tokenization a pure function of (text, stopwords). The set is
/// immutable after construction, so a single instance is safe to share
/// across concurrent requests.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: HashSet<String>,
}

impl Tokenizer {
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|s| s.into().to_lowercase())
                .collect(),
        }
    }

    /// Tokenize free text into lowercase alphanumeric words.
    ///
    /// Every character that is not an ASCII letter, digit, or whitespace is
    /// stripped before splitting. That removes punctuation including hyphens
    /// and apostrophes, so "well-known" becomes "wellknown" and "don't"
    /// becomes "dont". Stopwords are dropped; splitting on whitespace runs
    /// guards against empty tokens. Token order follows the input text.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(*token))
            .map(str::to_string)
            .collect()
    }

    /// Rank documents against a reference text by cosine similarity.
    ///
    /// Runs the full pipeline: tokenize everything, build a vocabulary across
    /// exactly this call's documents (reference included), vectorize, and
    /// score each document against the reference. The vocabulary is local to
    /// the call — vectors from different calls are never comparable.
    ///
    /// Results are sorted by score descending; equal scores keep input order.
    pub fn rank_documents(
        &self,
        reference: &str,
        documents: &[Document],
    ) -> Result<Vec<MatchResult>, TextMatchError> {
        let reference_tokens = self.tokenize(reference);
        let document_tokens: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.tokenize(&doc.text))
            .collect();

        let mut corpus: Vec<&[String]> = Vec::with_capacity(documents.len() + 1);
        corpus.push(&reference_tokens);
        corpus.extend(document_tokens.iter().map(Vec::as_slice));
        let vocabulary = build_vocabulary(&corpus);

        let reference_vector = to_f64(&vectorize(&reference_tokens, &vocabulary));

        let mut results = Vec::with_capacity(documents.len());
        for (doc, tokens) in documents.iter().zip(&document_tokens) {
            let vector = to_f64(&vectorize(tokens, &vocabulary));
            results.push(MatchResult {
                mentor_id: doc.id.clone(),
                score: cosine_similarity(&reference_vector, &vector)?,
            });
        }

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(results)
    }
}

/// Build the vocabulary for a document set: the union of all tokens, in
/// first-seen order.
///
/// The ordering is stable within a call, which is what positional alignment
/// between vocabulary and frequency vectors requires. Never reuse a
/// vocabulary across unrelated document sets.
pub fn build_vocabulary(documents: &[&[String]]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();

    for tokens in documents {
        for token in *tokens {
            if seen.insert(token.clone()) {
                vocabulary.push(token.clone());
            }
        }
    }

    vocabulary
}

/// Vectorize a token sequence as term-frequency counts over a vocabulary.
///
/// The output is aligned positionally with the vocabulary and always has the
/// vocabulary's length, all zeros when there is no overlap.
pub fn vectorize(tokens: &[String], vocabulary: &[String]) -> Vec<u32> {
    let mut counts: HashMap<&str, u32> = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    vocabulary
        .iter()
        .map(|term| counts.get(term.as_str()).copied().unwrap_or(0))
        .collect()
}

/// Cosine similarity between two equal-length vectors.
///
/// Fails fast on a length mismatch (vectors from different vocabularies).
/// If either vector has zero magnitude the similarity is defined as 0.0
/// rather than dividing by zero. For non-negative term-frequency vectors the
/// result is in [0.0, 1.0].
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, TextMatchError> {
    if a.len() != b.len() {
        return Err(TextMatchError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a * norm_b))
}

#[inline]
fn to_f64(counts: &[u32]) -> Vec<f64> {
    counts.iter().map(|&c| f64::from(c)).collect()
}
