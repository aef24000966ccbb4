#![allow(dead_code)]

use faceplate::corpus::{CorpusMetadata, EmbeddingCorpus, TemplateDocument};
use faceplate::embedding::tfidf::TfIdfEmbedder;
use faceplate::embedding::EMBEDDING_DIM;

/// A valid document with every field populated.
pub fn doc(id: &str, title: &str, description: &str, code: &str) -> TemplateDocument {
    TemplateDocument {
        id: id.into(),
        title: title.into(),
        category: "Tag Operations".into(),
        description: description.into(),
        code: code.into(),
    }
}

/// A small but realistic document set for corpus round-trip tests.
pub fn sample_documents() -> Vec<TemplateDocument> {
    vec![
        doc(
            "read-tag",
            "Read Tag Value",
            "Reads a tag and traces the value",
            "var v = Tags(\"Motor1_Speed\").Read(); HMIRuntime.Trace(v);",
        ),
        doc(
            "write-tag",
            "Write Tag Value",
            "Writes a setpoint to a tag",
            "Tags(\"Motor1_SetPoint\").Write(1500);",
        ),
        doc(
            "ack-alarm",
            "Acknowledge Alarm",
            "Acknowledges one active alarm",
            "Alarms(\"Tank1_HighLevel\").Acknowledge();",
        ),
    ]
}

/// Build a corpus directly from raw search texts, bypassing the document
/// field concatenation. Each entry is `(id, text)`; the text becomes the
/// embedded content and stands in for every descriptive field.
pub fn corpus_from_texts(entries: &[(&str, &str)]) -> EmbeddingCorpus {
    let texts: Vec<String> = entries.iter().map(|(_, t)| t.to_string()).collect();
    let embedder = TfIdfEmbedder::from_documents(&texts).unwrap();
    let embeddings: Vec<Vec<f32>> = texts.iter().map(|t| embedder.embed(t)).collect();

    let templates: Vec<TemplateDocument> = entries
        .iter()
        .map(|(id, text)| doc(id, text, text, text))
        .collect();

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
