//! # stache_store
//!
//! Bulk loading, naming, and caching of mustache template trees.
//!
//! Templates are discovered from a base directory (flat
//! `<name>.<tag>.mustache` files) and an optional modules directory
//! (`<module>/<template>.<tag>.mustache`, nested arbitrarily deep). A leaf
//! named `main` collapses to its module path; any other leaf appends
//! `_<leaf>` to it. Every template can reference any other as a `{{>name}}`
//! partial, and module templates shadow base templates sharing a name.
//!
//! Compiled templates are cached in memory after the first load. Enabling
//! reload mode (or running with `STACHE_ENV=development`) disables the cache
//! so template edits show up on the next query.
//!
//! ## Example
//!
//! ```rust,no_run
//! use stache_store::{SourceQuery, StoreConfig, TemplateStore};
//!
//! # async fn run() -> Result<(), stache_store::StoreError> {
//! let store = TemplateStore::new(
//!     StoreConfig::new()
//!         .base_dir("templates")
//!         .modules_dir("modules"),
//! );
//!
//! let html = store
//!     .render("welcome", &serde_json::json!({ "user": "ada" }))
//!     .await?;
//! let source = store.source(SourceQuery::parse("welcome")).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod name;
pub mod store;

pub use config::{RunMode, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use loader::TemplateSet;
pub use name::{flat_name, ModuleNamer};
pub use store::{SourceQuery, SourceText, TemplateStore};
