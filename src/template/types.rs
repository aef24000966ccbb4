//! The template record.

use serde::{Deserialize, Serialize};

use crate::corpus::TemplateDocument;

/// One library entry: a WinCC Unified JavaScript snippet with the metadata
/// shown in listings and fed to the embedder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Unique id, e.g. `tag-read` for built-ins or `custom-<uuid>` for
    /// user-created entries.
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    /// The snippet body, complete and runnable.
    pub code: String,
    /// `true` for user-authored templates. Only custom templates are
    /// persisted and only custom templates may be removed.
    #[serde(default)]
    pub is_custom: bool,
    /// RFC 3339 creation timestamp. Set for custom templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Template {
    /// The embedder's view of this template.
    pub fn to_document(&self) -> TemplateDocument {
        TemplateDocument {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            code: self.code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_custom_defaults_to_false_on_deserialize() {
        let json = r#"{
            "id": "tag-read",
            "title": "Read Tag Value",
            "category": "Tag Operations",
            "description": "Reads a tag",
            "code": "var v = Tags(\"t\").Read();"
        }"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert!(!template.is_custom);
        assert!(template.created_at.is_none());
    }

    #[test]
    fn test_created_at_is_omitted_when_unset() {
        let template = Template {
            id: "x".into(),
            title: "X".into(),
            category: "Custom".into(),
            description: "d".into(),
            code: "c".into(),
            is_custom: false,
            created_at: None,
        };
        let value = serde_json::to_value(&template).unwrap();
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_to_document_carries_all_fields() {
        let template = Template {
            id: "tag-read".into(),
            title: "Read Tag Value".into(),
            category: "Tag Operations".into(),
            description: "Reads a tag".into(),
            code: "code body".into(),
            is_custom: true,
            created_at: Some("2026-01-01T00:00:00Z".into()),
        };
        let doc = template.to_document();
        assert_eq!(doc.id, "tag-read");
        assert_eq!(doc.title, "Read Tag Value");
        assert_eq!(doc.code, "code body");
    }
}
