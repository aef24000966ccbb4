//! The ordered template library.
//!
//! Every store starts from the built-in set; custom templates load from and
//! persist to a JSON file next to the corpus. Built-ins are protected from
//! removal, and only custom templates ever hit the disk. Writes are atomic:
//! a temp file in the same directory is renamed over the destination.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use tracing::{info, warn};

use super::builtin::builtin_templates;
use super::types::Template;
use crate::corpus::TemplateDocument;

/// Failures from template library operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no template with id `{id}`")]
    NotFound { id: String },
    #[error("template `{id}` is built-in and cannot be removed")]
    BuiltinProtected { id: String },
    #[error("invalid template: {0}")]
    Invalid(String),
    #[error("template file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("template JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Counts from one import call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportReport {
    /// Templates added under a new id.
    pub imported: usize,
    /// Templates that replaced an existing id.
    pub updated: usize,
    /// Records dropped for missing id, title, or code.
    pub skipped: usize,
}

/// In-memory template library with custom-template persistence.
pub struct TemplateStore {
    templates: Vec<Template>,
    index: HashMap<String, usize>,
    custom_path: PathBuf,
}

impl TemplateStore {
    /// Seed the built-in set, then load custom templates from `custom_path`
    /// if the file exists. A missing file is a fresh library, not an error.
    pub fn open(custom_path: &Path) -> Result<Self, StoreError> {
        let mut store = Self {
            templates: Vec::new(),
            index: HashMap::new(),
            custom_path: custom_path.to_path_buf(),
        };

        for template in builtin_templates() {
            store.insert(template);
        }
        let builtin_count = store.templates.len();

        if custom_path.exists() {
            let contents = std::fs::read_to_string(custom_path)?;
            let custom: Vec<Template> = serde_json::from_str(&contents)?;
            for mut template in custom {
                // Anything in the custom file is custom, whatever it claims.
                template.is_custom = true;
                store.insert(template);
            }
        }

        info!(
            builtin = builtin_count,
            custom = store.custom_count(),
            "template library loaded"
        );
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn custom_count(&self) -> usize {
        self.templates.iter().filter(|t| t.is_custom).count()
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    /// Every template in display order: built-ins first, then custom
    /// templates in the order they were added.
    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    pub fn by_category<'a>(&'a self, category: &str) -> Vec<&'a Template> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Category names with template counts, in first-appearance order.
    pub fn categories(&self) -> Vec<(String, usize)> {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for template in &self.templates {
            if !counts.contains_key(template.category.as_str()) {
                order.push(template.category.clone());
            }
            *counts.entry(template.category.as_str()).or_insert(0) += 1;
        }
        order
            .into_iter()
            .map(|category| {
                let count = counts[category.as_str()];
                (category, count)
            })
            .collect()
    }

    /// The embedder's view of the whole library.
    pub fn documents(&self) -> Vec<TemplateDocument> {
        self.templates.iter().map(Template::to_document).collect()
    }

    /// Add or replace a template. Replacing keeps the original position so
    /// corpus regeneration stays in a stable order. Custom additions are
    /// persisted immediately.
    pub fn add(&mut self, template: Template) -> Result<(), StoreError> {
        validate(&template)?;
        let persist = template.is_custom;
        self.insert(template);
        if persist {
            self.save_custom()?;
        }
        Ok(())
    }

    /// Remove a custom template by id and persist the change. Built-ins are
    /// protected.
    pub fn remove(&mut self, id: &str) -> Result<Template, StoreError> {
        let position = self
            .index
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        if !self.templates[position].is_custom {
            return Err(StoreError::BuiltinProtected { id: id.to_string() });
        }

        let removed = self.templates.remove(position);
        self.reindex();
        self.save_custom()?;
        info!(id = %removed.id, "custom template removed");
        Ok(removed)
    }

    /// Create, add, and persist a custom template. Category and description
    /// fall back to the stock values when not given.
    pub fn create_custom(
        &mut self,
        title: &str,
        description: Option<&str>,
        category: Option<&str>,
        code: &str,
    ) -> Result<Template, StoreError> {
        let template = Template {
            id: format!("custom-{}", uuid::Uuid::now_v7()),
            title: title.to_string(),
            category: category.unwrap_or("Custom").to_string(),
            description: description.unwrap_or("Custom template").to_string(),
            code: code.to_string(),
            is_custom: true,
            created_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        };
        self.add(template.clone())?;
        Ok(template)
    }

    /// Import templates from exported JSON. Every accepted record becomes
    /// custom regardless of its flag; existing ids are replaced. Records
    /// without id, title, or code are skipped and counted.
    pub fn import_json(&mut self, json: &str) -> Result<ImportReport, StoreError> {
        let incoming: Vec<Template> = serde_json::from_str(json)?;
        let mut report = ImportReport::default();

        for mut template in incoming {
            if template.id.is_empty() || template.title.is_empty() || template.code.is_empty()
            {
                warn!(id = %template.id, "skipping import record with missing fields");
                report.skipped += 1;
                continue;
            }
            template.is_custom = true;
            if self.index.contains_key(template.id.as_str()) {
                report.updated += 1;
            } else {
                report.imported += 1;
            }
            self.insert(template);
        }

        self.save_custom()?;
        info!(
            imported = report.imported,
            updated = report.updated,
            skipped = report.skipped,
            "templates imported"
        );
        Ok(report)
    }

    /// The whole library (built-ins included) as pretty JSON, the format
    /// [`Self::import_json`] accepts.
    pub fn export_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.templates)?)
    }

    fn insert(&mut self, template: Template) {
        match self.index.get(template.id.as_str()) {
            Some(&position) => self.templates[position] = template,
            None => {
                self.index
                    .insert(template.id.clone(), self.templates.len());
                self.templates.push(template);
            }
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .templates
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
    }

    fn save_custom(&self) -> Result<(), StoreError> {
        let custom: Vec<&Template> =
            self.templates.iter().filter(|t| t.is_custom).collect();

        if let Some(parent) = self.custom_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&custom)?;
        let tmp_path = self.custom_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.custom_path)?;
        Ok(())
    }
}

fn validate(template: &Template) -> Result<(), StoreError> {
    if template.id.is_empty() {
        return Err(StoreError::Invalid("id must not be empty".into()));
    }
    if template.title.is_empty() {
        return Err(StoreError::Invalid(format!(
            "template `{}` has no title",
            template.id
        )));
    }
    if template.code.is_empty() {
        return Err(StoreError::Invalid(format!(
            "template `{}` has no code",
            template.id
        )));
    }
    Ok(())
}
