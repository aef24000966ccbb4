//! The embedding corpus: template summaries plus their vectors, persisted
//! as a single JSON document.
//!
//! `templates[i]` and `embeddings[i]` always describe the same template;
//! [`EmbeddingCorpus::load`] rejects any file where the arrays disagree.
//! A loaded corpus is immutable and safe to share across threads.
//! Regeneration never edits in place: [`embed_corpus`] produces a complete
//! new value, and [`EmbeddingCorpus::save`] writes a temp file and renames
//! it over the old one, so concurrent readers of the path never observe a
//! partial corpus.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::embedding::tfidf::{EmbedError, TfIdfEmbedder};
use crate::embedding::EMBEDDING_DIM;

/// On-disk format version.
pub const CORPUS_VERSION: &str = "1.0";

const CORPUS_DESCRIPTION: &str =
    "Lightweight TF-IDF embeddings optimized for WinCC JavaScript templates";

/// Configuration-level failures: the corpus file is missing, unreadable,
/// or does not hold a consistent corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus file not found at {}; run `faceplate embed` to generate it", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("corpus is internally inconsistent: {0}")]
    Inconsistent(String),
}

/// A template as the embedder sees it. The search text fed to TF-IDF is
/// the concatenation of every descriptive field plus the code body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDocument {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub code: String,
}

impl TemplateDocument {
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.category, self.description, self.code
        )
    }

    fn validate(&self) -> Result<(), EmbedError> {
        let missing = |id: &str, field: &'static str| EmbedError::MissingField {
            id: id.to_string(),
            field,
        };
        if self.id.is_empty() {
            return Err(missing("(unset)", "id"));
        }
        if self.title.is_empty() {
            return Err(missing(&self.id, "title"));
        }
        if self.description.is_empty() {
            return Err(missing(&self.id, "description"));
        }
        if self.code.is_empty() {
            return Err(missing(&self.id, "code"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusMetadata {
    pub version: String,
    pub model: String,
    pub dimensions: usize,
    pub total_templates: usize,
    pub created: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingCorpus {
    pub metadata: CorpusMetadata,
    pub templates: Vec<TemplateDocument>,
    pub embeddings: Vec<Vec<f32>>,
}

impl EmbeddingCorpus {
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Load and verify a corpus file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        if !path.exists() {
            return Err(CorpusError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let corpus: EmbeddingCorpus = serde_json::from_str(&contents)?;
        corpus.verify()?;

        info!(
            templates = corpus.len(),
            model = %corpus.metadata.model,
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Write the corpus as pretty JSON. The write is atomic: a temp file in
    /// the same directory is renamed over the destination.
    pub fn save(&self, path: &Path) -> Result<(), CorpusError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;

        info!(templates = self.len(), path = %path.display(), "corpus saved");
        Ok(())
    }

    fn verify(&self) -> Result<(), CorpusError> {
        if self.templates.len() != self.embeddings.len() {
            return Err(CorpusError::Inconsistent(format!(
                "{} templates but {} embeddings",
                self.templates.len(),
                self.embeddings.len()
            )));
        }
        if self.metadata.total_templates != self.templates.len() {
            return Err(CorpusError::Inconsistent(format!(
                "metadata declares {} templates, file holds {}",
                self.metadata.total_templates,
                self.templates.len()
            )));
        }
        for (i, embedding) in self.embeddings.iter().enumerate() {
            if embedding.len() != self.metadata.dimensions {
                return Err(CorpusError::Inconsistent(format!(
                    "embedding {} has {} dimensions, expected {}",
                    i,
                    embedding.len(),
                    self.metadata.dimensions
                )));
            }
        }
        Ok(())
    }
}

/// Embed every document and assemble a fresh corpus.
///
/// Validates each document first (every descriptive field and the code body
/// must be present), then builds the vocabulary from all search texts and
/// embeds them in order. Identical input produces identical vectors.
pub fn embed_corpus(
    documents: &[TemplateDocument],
    model: &str,
) -> Result<EmbeddingCorpus, EmbedError> {
    if documents.is_empty() {
        return Err(EmbedError::EmptyCorpus);
    }
    for document in documents {
        document.validate()?;
    }

    let search_texts: Vec<String> = documents
        .iter()
        .map(TemplateDocument::search_text)
        .collect();
    let embedder = TfIdfEmbedder::from_documents(&search_texts)?;
    let embeddings: Vec<Vec<f32>> = search_texts
        .iter()
        .map(|text| embedder.embed(text))
        .collect();

    info!(
        templates = documents.len(),
        vocabulary = embedder.vocabulary().len(),
        "corpus embedded"
    );

    Ok(EmbeddingCorpus {
        metadata: CorpusMetadata {
            version: CORPUS_VERSION.into(),
            model: model.into(),
            dimensions: EMBEDDING_DIM,
            total_templates: documents.len(),
            created: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            description: CORPUS_DESCRIPTION.into(),
        },
        templates: documents.to_vec(),
        embeddings,
    })
}
