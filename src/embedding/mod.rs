//! TF-IDF embedding pipeline for WinCC script templates.
//!
//! Every template vector has exactly [`EMBEDDING_DIM`] dimensions. The
//! leading [`TFIDF_DIMS`] carry term-frequency × inverse-document-frequency
//! weights over a corpus-derived [`tfidf::Vocabulary`]; the trailing
//! [`FEATURE_DIMS`] are overwritten with regex-derived domain scores from a
//! [`features::FeatureTable`], so structurally similar scripts stay close
//! even when their identifiers never overlap.
//!
//! Queries are not embedded here. They live in a different projection built
//! from a fixed domain-term table — see [`crate::retrieval::query`].

pub mod features;
pub mod tfidf;

/// Number of dimensions in every embedding vector.
pub const EMBEDDING_DIM: usize = 300;

/// Trailing dimensions reserved for domain features.
pub const FEATURE_DIMS: usize = 10;

/// Dimensions left to TF-IDF weights once the feature tail is written.
pub const TFIDF_DIMS: usize = EMBEDDING_DIM - FEATURE_DIMS;
