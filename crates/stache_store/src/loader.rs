//! Template set loading: glob expansion, concurrent reads, compilation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use glob::Pattern;
use handlebars::Template;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// One directory tree's loaded templates: compiled templates and raw source
/// text under identical name keys.
#[derive(Debug, Default)]
pub struct TemplateSet {
    pub compiled: HashMap<String, Template>,
    pub source: HashMap<String, String>,
}

impl TemplateSet {
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// Load every template matching `glob_suffix` under `dir`, naming each file
/// through `name_fn`.
///
/// File contents are read concurrently and joined before compilation; any
/// expansion, read, naming, or compile failure aborts the whole load with no
/// partial set. An empty expansion is a valid empty set. Names are recorded
/// in expansion order, so a duplicate name within one directory resolves to
/// the last file expanded.
pub(crate) async fn load_set<F>(
    dir: &Path,
    glob_suffix: &str,
    name_fn: F,
) -> StoreResult<TemplateSet>
where
    F: Fn(&Path) -> StoreResult<String>,
{
    if !dir.exists() {
        warn!("template directory does not exist: {}", dir.display());
    }

    let dir_str = dir
        .to_str()
        .ok_or_else(|| StoreError::NameResolution(dir.to_path_buf()))?;
    let pattern = format!(
        "{}/{}",
        Pattern::escape(dir_str.trim_end_matches('/')),
        glob_suffix
    );

    let paths = glob::glob(&pattern)?.collect::<Result<Vec<PathBuf>, _>>()?;
    let contents = try_join_all(paths.iter().map(tokio::fs::read_to_string)).await?;

    let mut set = TemplateSet::default();
    for (path, text) in paths.iter().zip(contents) {
        let name = name_fn(path)?;
        let template = Template::compile(&text)?;
        debug!("compiled template {} from {}", name, path.display());
        set.compiled.insert(name.clone(), template);
        set.source.insert(name, text);
    }
    Ok(set)
}
