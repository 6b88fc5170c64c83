//! Source command - print raw template source.

use anyhow::Result;
use clap::Args;
use stache_store::{SourceQuery, SourceText, TemplateStore};

#[derive(Args)]
pub struct SourceArgs {
    /// Template name, or `*` for every template
    pub name: String,
}

pub async fn execute(store: &TemplateStore, args: SourceArgs) -> Result<()> {
    match store.source(SourceQuery::parse(&args.name)).await? {
        SourceText::Named(text) => println!("{}", text),
        SourceText::All(sources) => {
            let mut names: Vec<&String> = sources.keys().collect();
            names.sort();
            for name in names {
                println!("--- {}", name);
                println!("{}", sources[name]);
            }
        }
    }
    Ok(())
}
