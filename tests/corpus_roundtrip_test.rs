mod helpers;

use helpers::sample_documents;

use faceplate::corpus::{embed_corpus, CorpusError, EmbeddingCorpus};
use faceplate::embedding::EMBEDDING_DIM;

#[test]
fn save_and_load_preserves_index_correspondence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embeddings.json");

    let corpus = embed_corpus(&sample_documents(), "simple-tfidf-wincc").unwrap();
    corpus.save(&path).unwrap();

    let loaded = EmbeddingCorpus::load(&path).unwrap();
    assert_eq!(loaded.templates.len(), loaded.embeddings.len());
    assert_eq!(loaded.len(), corpus.len());
    for i in 0..corpus.len() {
        assert_eq!(loaded.templates[i].id, corpus.templates[i].id);
        assert_eq!(loaded.embeddings[i], corpus.embeddings[i]);
        assert_eq!(loaded.embeddings[i].len(), EMBEDDING_DIM);
    }
    assert_eq!(loaded.metadata.model, "simple-tfidf-wincc");
    assert_eq!(loaded.metadata.total_templates, corpus.len());
}

#[test]
fn save_overwrites_previous_corpus_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embeddings.json");

    let full = embed_corpus(&sample_documents(), "m").unwrap();
    full.save(&path).unwrap();

    let smaller = embed_corpus(&sample_documents()[..1], "m").unwrap();
    smaller.save(&path).unwrap();

    let loaded = EmbeddingCorpus::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    // No temp file left behind.
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn load_rejects_array_length_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embeddings.json");

    let mut corpus = embed_corpus(&sample_documents(), "m").unwrap();
    corpus.embeddings.pop();
    corpus.save(&path).unwrap();

    let err = EmbeddingCorpus::load(&path).unwrap_err();
    assert!(matches!(err, CorpusError::Inconsistent(_)), "got: {err}");
}

#[test]
fn load_rejects_wrong_dimension_vectors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embeddings.json");

    let mut corpus = embed_corpus(&sample_documents(), "m").unwrap();
    corpus.embeddings[1].truncate(12);
    corpus.save(&path).unwrap();

    let err = EmbeddingCorpus::load(&path).unwrap_err();
    assert!(matches!(err, CorpusError::Inconsistent(_)), "got: {err}");
}

#[test]
fn load_rejects_garbage_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embeddings.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let err = EmbeddingCorpus::load(&path).unwrap_err();
    assert!(matches!(err, CorpusError::Parse(_)), "got: {err}");
}

#[test]
fn load_missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = EmbeddingCorpus::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CorpusError::NotFound { .. }), "got: {err}");
}

#[test]
fn regeneration_is_deterministic() {
    let docs = sample_documents();
    let first = embed_corpus(&docs, "m").unwrap();
    let second = embed_corpus(&docs, "m").unwrap();
    assert_eq!(first.embeddings, second.embeddings);
    assert_eq!(
        first.templates.iter().map(|t| &t.id).collect::<Vec<_>>(),
        second.templates.iter().map(|t| &t.id).collect::<Vec<_>>()
    );
}
