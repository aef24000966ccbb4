//! The template library: built-in WinCC snippets plus user-authored ones.
//!
//! [`store::TemplateStore`] owns the ordered library. Built-ins come from
//! [`builtin`] and can never be removed; custom templates are persisted to
//! their own JSON file and survive restarts.

pub mod builtin;
pub mod store;
pub mod types;

pub use store::{StoreError, TemplateStore};
pub use types::Template;
