//! Corpus vocabulary and the TF-IDF embedder.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::features::FeatureTable;
use super::EMBEDDING_DIM;

/// Validation failures when building embeddings from template input.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("cannot build embeddings from an empty template collection")]
    EmptyCorpus,
    #[error("template `{id}` is missing required field `{field}`")]
    MissingField { id: String, field: &'static str },
}

/// Split lowercased text into index terms.
///
/// Anything that is not an ASCII word character becomes a separator, and
/// tokens of two characters or fewer are dropped.
fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .map(str::to_string)
        .collect()
}

/// Ordered vocabulary with inverse document frequencies.
///
/// Token order is first-appearance order across the document collection.
/// That order fixes the meaning of every vector dimension, so rebuilding
/// from the same documents reproduces the same vectors.
#[derive(Debug)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl Vocabulary {
    /// Build from one search text per document.
    pub fn build(documents: &[String]) -> Result<Self, EmbedError> {
        if documents.is_empty() {
            return Err(EmbedError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> =
            documents.iter().map(|doc| tokenize(doc)).collect();

        let mut tokens: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for words in &tokenized {
            for word in words {
                if !index.contains_key(word.as_str()) {
                    index.insert(word.clone(), tokens.len());
                    tokens.push(word.clone());
                }
            }
        }

        let mut doc_counts = vec![0_usize; tokens.len()];
        for words in &tokenized {
            let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
            for word in unique {
                doc_counts[index[word]] += 1;
            }
        }

        let total = documents.len() as f32;
        let idf = doc_counts
            .iter()
            .map(|&count| (total / count as f32).ln())
            .collect();

        Ok(Self { tokens, index, idf })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token owning dimension `i`.
    pub fn token(&self, i: usize) -> &str {
        &self.tokens[i]
    }

    /// Inverse document frequency of the token owning dimension `i`.
    pub fn idf(&self, i: usize) -> f32 {
        self.idf[i]
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }
}

/// Embeds template text into fixed [`EMBEDDING_DIM`]-dimension vectors.
pub struct TfIdfEmbedder {
    vocabulary: Vocabulary,
    features: FeatureTable,
}

impl TfIdfEmbedder {
    pub fn new(vocabulary: Vocabulary, features: FeatureTable) -> Self {
        Self {
            vocabulary,
            features,
        }
    }

    /// Build the vocabulary from `documents` and wrap it with the default
    /// [`FeatureTable`].
    pub fn from_documents(documents: &[String]) -> Result<Self, EmbedError> {
        Ok(Self::new(Vocabulary::build(documents)?, FeatureTable::default()))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Embed one text.
    ///
    /// Never fails: tokens outside the vocabulary contribute nothing, and
    /// empty text leaves the TF-IDF portion at zero. The feature tail is
    /// written last and overwrites any TF-IDF weight in those dimensions.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; EMBEDDING_DIM];
        let lowered = text.to_lowercase();
        let words = tokenize(text);

        if !words.is_empty() {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for word in &words {
                *counts.entry(word.as_str()).or_insert(0) += 1;
            }
            let total = words.len() as f32;

            for i in 0..EMBEDDING_DIM.min(self.vocabulary.len()) {
                let count = counts
                    .get(self.vocabulary.token(i))
                    .copied()
                    .unwrap_or(0);
                vector[i] = (count as f32 / total) * self.vocabulary.idf(i);
            }
        }

        self.features.apply(&lowered, &mut vector);
        vector
    }
}
