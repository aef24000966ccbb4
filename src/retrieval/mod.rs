//! Similarity search over the embedding corpus.
//!
//! Queries are projected through the fixed domain-term table in [`query`]
//! rather than the corpus vocabulary, so the two sides of the cosine live
//! in different spaces; overlap is driven by the term table's dimensions
//! and the feature tail. [`find_similar`] scores every corpus row, drops
//! matches under the similarity floor, and returns the top results in
//! descending order. An empty result is a normal outcome.
//!
//! Everything here is a pure function over `&EmbeddingCorpus`; concurrent
//! callers can share one corpus freely.

pub mod context;
pub mod query;

use serde::Serialize;
use tracing::debug;

use crate::corpus::{EmbeddingCorpus, TemplateDocument};

// ── Public types ──────────────────────────────────────────────────────────────

/// Knobs for a single retrieval call.
#[derive(Debug, Clone)]
pub struct RetrievalOptions {
    pub max_results: usize,
    pub min_similarity: f32,
}

impl Default for RetrievalOptions {
    fn default() -> Self {
        Self {
            max_results: 3,
            min_similarity: 0.1,
        }
    }
}

impl From<&crate::config::RetrievalConfig> for RetrievalOptions {
    fn from(config: &crate::config::RetrievalConfig) -> Self {
        Self {
            max_results: config.max_results,
            min_similarity: config.min_similarity,
        }
    }
}

/// One scored corpus row. `source_index` is the row's position in the
/// corpus arrays.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityMatch {
    pub template: TemplateDocument,
    pub similarity: f32,
    pub source_index: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Cosine similarity in `[-1, 1]`.
///
/// Vectors of different lengths compare to 0 (they live in different
/// spaces), as does anything with zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Rank corpus templates against a free-text query.
///
/// Keeps matches with `similarity >= min_similarity`, sorted descending;
/// equal scores stay in corpus order. At most `max_results` are returned.
pub fn find_similar(
    query: &str,
    corpus: &EmbeddingCorpus,
    options: &RetrievalOptions,
) -> Vec<SimilarityMatch> {
    let query_embedding = query::query_embedding(query);

    let mut matches: Vec<SimilarityMatch> = corpus
        .embeddings
        .iter()
        .enumerate()
        .map(|(i, embedding)| SimilarityMatch {
            template: corpus.templates[i].clone(),
            similarity: cosine_similarity(&query_embedding, embedding),
            source_index: i,
        })
        .filter(|m| m.similarity >= options.min_similarity)
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(options.max_results);

    debug!(
        query = %query,
        matches = matches.len(),
        scanned = corpus.len(),
        "similarity search"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusMetadata;
    use crate::embedding::EMBEDDING_DIM;

    fn unit(dim: usize) -> Vec<f32> {
        let mut v = vec![0.0_f32; EMBEDDING_DIM];
        v[dim] = 1.0;
        v
    }

    fn corpus_with(embeddings: Vec<Vec<f32>>) -> EmbeddingCorpus {
        let templates = (0..embeddings.len())
            .map(|i| TemplateDocument {
                id: format!("t{i}"),
                title: format!("Template {i}"),
                category: "Test".into(),
                description: "test".into(),
                code: "code".into(),
            })
            .collect::<Vec<_>>();
        EmbeddingCorpus {
            metadata: CorpusMetadata {
                version: "1.0".into(),
                model: "test".into(),
                dimensions: EMBEDDING_DIM,
                total_templates: templates.len(),
                created: "2026-01-01T00:00:00.000Z".into(),
                description: "test corpus".into(),
            },
            templates,
            embeddings,
        }
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.3, 0.0, 0.7, 0.2];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_zero_magnitude_is_zero() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_length_mismatch_is_zero() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_find_similar_filters_sorts_and_truncates() {
        // Query "tag" activates dims 1/10/20 plus the 0.1 position bonus on
        // dim 0. A row aligned with dim 1 scores far above one aligned with
        // dim 0, and a row on an untouched dim scores exactly zero.
        let corpus = corpus_with(vec![unit(0), unit(1), unit(50)]);

        let options = RetrievalOptions {
            max_results: 2,
            min_similarity: 0.05,
        };
        let matches = find_similar("tag", &corpus, &options);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].source_index, 1);
        assert_eq!(matches[1].source_index, 0);
        assert!(matches[0].similarity > matches[1].similarity);
        assert!(matches.iter().all(|m| m.similarity >= 0.05));
    }

    #[test]
    fn test_find_similar_applies_similarity_floor() {
        let corpus = corpus_with(vec![unit(0), unit(1), unit(50)]);
        let options = RetrievalOptions {
            max_results: 10,
            min_similarity: 0.1,
        };
        let matches = find_similar("tag", &corpus, &options);

        // Only the dim-1 row clears a 0.1 floor.
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].source_index, 1);
    }

    #[test]
    fn test_find_similar_keeps_corpus_order_on_ties() {
        let corpus = corpus_with(vec![unit(1), unit(1), unit(1)]);
        let options = RetrievalOptions {
            max_results: 3,
            min_similarity: 0.0,
        };
        let matches = find_similar("tag", &corpus, &options);

        let order: Vec<usize> = matches.iter().map(|m| m.source_index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_find_similar_empty_result_is_ok() {
        let corpus = corpus_with(vec![unit(50)]);
        let matches = find_similar("tag", &corpus, &RetrievalOptions::default());
        assert!(matches.is_empty());
    }
}
