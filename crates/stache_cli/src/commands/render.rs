//! Render command - render a named template against a JSON view.

use anyhow::{Context, Result};
use clap::Args;
use stache_store::TemplateStore;

#[derive(Args)]
pub struct RenderArgs {
    /// Template name
    pub name: String,

    /// View data as a JSON object
    #[arg(long, default_value = "{}")]
    pub view: String,
}

pub async fn execute(store: &TemplateStore, args: RenderArgs) -> Result<()> {
    let view: serde_json::Value =
        serde_json::from_str(&args.view).context("--view must be valid JSON")?;
    let output = store.render(&args.name, &view).await?;
    println!("{}", output);
    Ok(())
}
