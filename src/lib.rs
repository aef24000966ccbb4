//! Template library and retrieval-assisted script generation for Siemens
//! WinCC Unified JavaScript.
//!
//! Faceplate keeps a library of WinCC code templates, embeds them into a
//! TF-IDF corpus, and ranks them against free-text queries so the best
//! matches can ride along as few-shot examples in a prompt to a local
//! LM Studio server.
//!
//! # Architecture
//!
//! - **Library**: built-in templates plus user-authored ones, the custom
//!   set persisted as JSON
//! - **Embeddings**: 300-dimension vectors — TF-IDF over a corpus-derived
//!   vocabulary, with ten regex-derived domain features in the tail
//! - **Retrieval**: cosine similarity over the whole corpus with a
//!   similarity floor and top-K truncation; queries use a fixed
//!   domain-term projection
//! - **Generation**: OpenAI-style chat completions against an LM Studio
//!   compatible endpoint, with static validation of the returned script
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`template`] — The template library: built-ins, custom CRUD, import/export
//! - [`embedding`] — TF-IDF vocabulary, embedder, and the domain feature table
//! - [`corpus`] — The persisted embedding corpus and the batch embed job
//! - [`retrieval`] — Query embedding, similarity search, and context assembly
//! - [`scripter`] — Prompt construction, the LLM client, and script validation

pub mod cli;
pub mod config;
pub mod corpus;
pub mod embedding;
pub mod retrieval;
pub mod scripter;
pub mod template;
