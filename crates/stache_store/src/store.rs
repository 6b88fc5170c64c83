//! Cache management and the render/source query facade.
//!
//! A [`TemplateStore`] lazily loads the base and module directory trees,
//! merges them into one namespace, and serves `render` and `source` queries
//! from the cached result. In reload mode nothing is cached and every query
//! triggers a full load, which keeps template edits visible during
//! development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::loader::{load_set, TemplateSet};
use crate::name::{flat_name, ModuleNamer};

/// The merged namespace: every compiled template registered under its name,
/// alongside the raw source for each. The registry doubles as the partial
/// lookup context, so any template can reference any other by name.
struct TemplateNamespace {
    registry: Handlebars<'static>,
    sources: HashMap<String, String>,
}

impl TemplateNamespace {
    /// Module entries are merged after base entries, so a module template
    /// shadows a base template sharing its name. Compiled and source maps
    /// are merged in lock-step from the same two inputs.
    fn merge(base: TemplateSet, modules: TemplateSet) -> Self {
        let mut registry = Handlebars::new();
        let mut sources = HashMap::new();
        for set in [base, modules] {
            for (name, template) in set.compiled {
                registry.register_template(&name, template);
            }
            sources.extend(set.source);
        }
        Self { registry, sources }
    }
}

/// A source request: one named template, or the whole mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceQuery {
    All,
    Named(String),
}

impl SourceQuery {
    /// `*` is the wildcard for the entire mapping; any other string names a
    /// single template.
    pub fn parse(raw: &str) -> Self {
        if raw == "*" {
            Self::All
        } else {
            Self::Named(raw.to_string())
        }
    }
}

/// Result of a [`SourceQuery`], mirroring its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceText {
    All(HashMap<String, String>),
    Named(String),
}

/// Template store: loads, caches, and queries a merged template namespace.
pub struct TemplateStore {
    config: StoreConfig,
    cache: RwLock<Option<Arc<TemplateNamespace>>>,
}

impl TemplateStore {
    /// Create a store. Nothing is loaded until the first query.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(None),
        }
    }

    /// Return the merged namespace, loading it if the cache is empty.
    ///
    /// Base and module trees load concurrently; the merge happens only after
    /// both complete. A failed load leaves the cache in its prior state, so
    /// a later call retries cleanly. Concurrent first calls may each run
    /// their own load; every such load is idempotent and the final cache
    /// writes all carry identical content.
    async fn load(&self) -> StoreResult<Arc<TemplateNamespace>> {
        if !self.config.reload {
            if let Some(namespace) = self.cache.read().expect("cache lock poisoned").as_ref() {
                debug!("template cache hit");
                return Ok(Arc::clone(namespace));
            }
        }

        let base = load_set(&self.config.base_dir, "*.mustache", flat_name);
        let modules = async {
            match &self.config.modules_dir {
                Some(dir) => {
                    let namer = ModuleNamer::new(dir);
                    load_set(dir, "**/*.mustache", |path| namer.name(path)).await
                }
                None => Ok(TemplateSet::default()),
            }
        };
        let (base, modules) = tokio::try_join!(base, modules)?;

        info!(
            "loaded {} base and {} module templates from {}",
            base.len(),
            modules.len(),
            self.config.base_dir.display()
        );

        let namespace = Arc::new(TemplateNamespace::merge(base, modules));
        if !self.config.reload {
            *self.cache.write().expect("cache lock poisoned") = Some(Arc::clone(&namespace));
        }
        Ok(namespace)
    }

    /// Render the named template against `view`.
    ///
    /// The full merged namespace serves as the partial-resolution context,
    /// so `{{>name}}` references resolve across the base and module trees.
    pub async fn render<T: Serialize>(&self, name: &str, view: &T) -> StoreResult<String> {
        let namespace = self.load().await?;
        if namespace.registry.get_template(name).is_none() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        Ok(namespace.registry.render(name, view)?)
    }

    /// Fetch raw template source.
    pub async fn source(&self, query: SourceQuery) -> StoreResult<SourceText> {
        let namespace = self.load().await?;
        match query {
            SourceQuery::All => Ok(SourceText::All(namespace.sources.clone())),
            SourceQuery::Named(name) => namespace
                .sources
                .get(&name)
                .cloned()
                .map(SourceText::Named)
                .ok_or(StoreError::NotFound(name)),
        }
    }

    /// All registered template names, sorted.
    pub async fn names(&self) -> StoreResult<Vec<String>> {
        let namespace = self.load().await?;
        let mut names: Vec<String> = namespace.sources.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
