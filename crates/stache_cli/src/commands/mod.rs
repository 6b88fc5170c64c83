//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stache_store::{StoreConfig, TemplateStore};

pub mod list;
pub mod render;
pub mod source;

/// stache - load, cache, and render mustache template trees
#[derive(Parser)]
#[command(name = "stache")]
#[command(version, about = "Load, cache, and render mustache template trees")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base templates directory
    #[arg(long, default_value = "templates", global = true)]
    pub templates: PathBuf,

    /// Modules directory
    #[arg(long, default_value = "modules", global = true)]
    pub modules: PathBuf,

    /// Disable module loading
    #[arg(long, global = true)]
    pub no_modules: bool,

    /// Reload templates on every query instead of caching
    #[arg(long, global = true)]
    pub reload: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build a store from the global directory and reload flags.
    pub fn store(&self) -> TemplateStore {
        let mut config = StoreConfig::new()
            .base_dir(&self.templates)
            .reload(self.reload);
        config = if self.no_modules {
            config.without_modules()
        } else {
            config.modules_dir(&self.modules)
        };
        TemplateStore::new(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template against a JSON view
    Render(render::RenderArgs),

    /// Print raw template source (`*` prints every template)
    Source(source::SourceArgs),

    /// List registered template names
    List,
}
