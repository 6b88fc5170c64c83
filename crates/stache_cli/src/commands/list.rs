//! List command - print every registered template name.

use anyhow::Result;
use stache_store::TemplateStore;

pub async fn execute(store: &TemplateStore) -> Result<()> {
    for name in store.names().await? {
        println!("{}", name);
    }
    Ok(())
}
