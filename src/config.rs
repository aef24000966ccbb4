use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FaceplateConfig {
    pub log: LogConfig,
    pub storage: StorageConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub templates_path: String,
    pub corpus_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Label written into corpus metadata and checked by `doctor`.
    pub model: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    pub max_results: usize,
    pub min_similarity: f32,
    pub max_context_chars: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GenerationConfig {
    pub host: String,
    pub port: u16,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for FaceplateConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            storage: StorageConfig::default(),
            embedding: EmbeddingConfig::default(),
            retrieval: RetrievalConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let dir = default_faceplate_dir();
        Self {
            templates_path: dir.join("templates.json").to_string_lossy().into_owned(),
            corpus_path: dir.join("embeddings.json").to_string_lossy().into_owned(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "simple-tfidf-wincc".into(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            min_similarity: 0.1,
            max_context_chars: 1500,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 1234,
            model: "google/gemma-3-4b".into(),
            max_tokens: 500,
            temperature: 0.1,
            timeout_secs: 120,
        }
    }
}

impl GenerationConfig {
    /// Base URL of the LM Studio compatible server, e.g. `http://127.0.0.1:1234`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Returns `~/.faceplate/`
pub fn default_faceplate_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".faceplate")
}

/// Returns the default config file path: `~/.faceplate/config.toml`
pub fn default_config_path() -> PathBuf {
    default_faceplate_dir().join("config.toml")
}

impl FaceplateConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            FaceplateConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (FACEPLATE_TEMPLATES,
    /// FACEPLATE_CORPUS, FACEPLATE_LLM_HOST, FACEPLATE_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FACEPLATE_TEMPLATES") {
            self.storage.templates_path = val;
        }
        if let Ok(val) = std::env::var("FACEPLATE_CORPUS") {
            self.storage.corpus_path = val;
        }
        if let Ok(val) = std::env::var("FACEPLATE_LLM_HOST") {
            self.generation.host = val;
        }
        if let Ok(val) = std::env::var("FACEPLATE_LOG_LEVEL") {
            self.log.level = val;
        }
    }

    /// Resolve the template library path, expanding `~` if needed.
    pub fn resolved_templates_path(&self) -> PathBuf {
        expand_tilde(&self.storage.templates_path)
    }

    /// Resolve the embedding corpus path, expanding `~` if needed.
    pub fn resolved_corpus_path(&self) -> PathBuf {
        expand_tilde(&self.storage.corpus_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
