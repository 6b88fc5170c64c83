//! Path-to-name resolution for template files.
//!
//! Two naming conventions are supported:
//!
//! - *flat*: `<dir>/<name>.<tag>.mustache` resolves to `<name>`.
//! - *module-prefixed*: `<root>/<module...>/<leaf>.<tag>.mustache` resolves
//!   to `<module...>` when the leaf is literally named `main`, otherwise to
//!   `<module...>_<leaf>`. Module paths keep their `/` separators and may
//!   nest arbitrarily deep.

use std::path::{Component, Path, PathBuf};

use crate::error::{StoreError, StoreResult};

const TEMPLATE_SUFFIX: &str = ".mustache";

/// Derive the flat template name from a base-directory file path.
///
/// The portion before `.mustache` must itself carry a format-tag extension
/// (e.g. `foo.html.mustache`). The name capture is greedy, so
/// `a.b.c.mustache` resolves to `a.b`.
pub fn flat_name(path: &Path) -> StoreResult<String> {
    let leaf = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StoreError::NameResolution(path.to_path_buf()))?;
    double_extension_stem(leaf).ok_or_else(|| StoreError::NameResolution(path.to_path_buf()))
}

/// Name resolver bound to a modules root directory.
#[derive(Debug, Clone)]
pub struct ModuleNamer {
    root: PathBuf,
}

impl ModuleNamer {
    /// Create a resolver for files under `root`. A trailing separator on the
    /// root is irrelevant; `Path` component comparison ignores it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a module template path to its name.
    ///
    /// The leaf file must sit inside at least one directory under the root
    /// and must carry the double extension; anything else is a
    /// [`StoreError::NameResolution`] error.
    pub fn name(&self, path: &Path) -> StoreResult<String> {
        let fail = || StoreError::NameResolution(path.to_path_buf());

        let relative = path.strip_prefix(&self.root).map_err(|_| fail())?;
        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_str().ok_or_else(fail)?),
                _ => return Err(fail()),
            }
        }

        let leaf = segments.pop().ok_or_else(fail)?;
        if segments.is_empty() {
            return Err(fail());
        }

        let template = double_extension_stem(leaf).ok_or_else(fail)?;
        let module = segments.join("/");
        if template == "main" {
            Ok(module)
        } else {
            Ok(format!("{}_{}", module, template))
        }
    }
}

/// Strip `.mustache` plus one format-tag extension from a file name.
/// Returns `None` when the double extension is missing.
fn double_extension_stem(leaf: &str) -> Option<String> {
    let stem = leaf.strip_suffix(TEMPLATE_SUFFIX)?;
    let (name, tag) = stem.rsplit_once('.')?;
    if name.is_empty() || tag.is_empty() {
        return None;
    }
    Some(name.to_string())
}
