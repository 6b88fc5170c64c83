//! End-to-end tests for the template store.

use std::fs;
use std::path::Path;

use serde_json::json;
use stache_store::{SourceQuery, SourceText, StoreConfig, StoreError, TemplateStore};
use tempfile::tempdir;

fn write_template(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn base_only(dir: &Path) -> TemplateStore {
    TemplateStore::new(
        StoreConfig::new()
            .base_dir(dir)
            .without_modules()
            .reload(false),
    )
}

fn with_modules(base: &Path, modules: &Path) -> TemplateStore {
    TemplateStore::new(
        StoreConfig::new()
            .base_dir(base)
            .modules_dir(modules)
            .reload(false),
    )
}

#[tokio::test]
async fn renders_simple_template() {
    let temp = tempdir().unwrap();
    write_template(temp.path(), "foo.html.mustache", "{{foo}}");

    let store = base_only(temp.path());
    let html = store.render("foo", &json!({ "foo": "V" })).await.unwrap();
    assert_eq!(html, "V");
}

#[tokio::test]
async fn renders_partials_across_base_templates() {
    let temp = tempdir().unwrap();
    write_template(temp.path(), "partials.html.mustache", "{{>foo}}{{>bar}}");
    write_template(temp.path(), "foo.html.mustache", "{{foo}}");
    write_template(temp.path(), "bar.html.mustache", "{{bar}}");

    let store = base_only(temp.path());
    let html = store
        .render("partials", &json!({ "foo": "a", "bar": "b" }))
        .await
        .unwrap();
    assert_eq!(html, "ab");
}

#[tokio::test]
async fn source_round_trips_original_text() {
    let temp = tempdir().unwrap();
    write_template(temp.path(), "foo.html.mustache", "{{foo}}");

    let store = base_only(temp.path());
    let source = store.source(SourceQuery::parse("foo")).await.unwrap();
    assert_eq!(source, SourceText::Named("{{foo}}".to_string()));
}

#[tokio::test]
async fn wildcard_source_returns_whole_mapping() {
    let base = tempdir().unwrap();
    let modules = tempdir().unwrap();
    write_template(base.path(), "foo.html.mustache", "{{foo}}");
    write_template(modules.path(), "baz/qux.html.mustache", "fixed text");

    let store = with_modules(base.path(), modules.path());
    match store.source(SourceQuery::parse("*")).await.unwrap() {
        SourceText::All(sources) => {
            assert_eq!(sources.len(), 2);
            assert_eq!(sources["foo"], "{{foo}}");
            assert_eq!(sources["baz_qux"], "fixed text");
        }
        other => panic!("expected SourceText::All, got {:?}", other),
    }
}

#[tokio::test]
async fn module_main_renders_module_partial() {
    let base = tempdir().unwrap();
    let modules = tempdir().unwrap();
    write_template(modules.path(), "baz/main.html.mustache", "{{>baz_qux}}");
    write_template(modules.path(), "baz/qux.html.mustache", "fixed text");

    let store = TemplateStore::new(
        StoreConfig::new()
            .base_dir(base.path())
            .modules_dir(modules.path())
            .reload(true),
    );
    let html = store.render("baz", &json!({})).await.unwrap();
    assert_eq!(html, "fixed text");
}

#[tokio::test]
async fn module_template_shadows_base_template() {
    let base = tempdir().unwrap();
    let modules = tempdir().unwrap();
    write_template(base.path(), "greeting.html.mustache", "from base");
    write_template(modules.path(), "greeting/main.html.mustache", "from module");

    let store = with_modules(base.path(), modules.path());
    let html = store.render("greeting", &json!({})).await.unwrap();
    assert_eq!(html, "from module");

    let source = store.source(SourceQuery::parse("greeting")).await.unwrap();
    assert_eq!(source, SourceText::Named("from module".to_string()));
}

#[tokio::test]
async fn base_template_references_module_partial() {
    let base = tempdir().unwrap();
    let modules = tempdir().unwrap();
    write_template(base.path(), "page.html.mustache", "{{>widget}}");
    write_template(modules.path(), "widget/main.html.mustache", "WIDGET");

    let store = with_modules(base.path(), modules.path());
    let html = store.render("page", &json!({})).await.unwrap();
    assert_eq!(html, "WIDGET");
}

#[tokio::test]
async fn unknown_name_fails_with_not_found() {
    let temp = tempdir().unwrap();
    write_template(temp.path(), "foo.html.mustache", "{{foo}}");

    let store = base_only(temp.path());
    let err = store.render("nope", &json!({})).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(err.to_string(), "No template named: nope");

    let err = store.source(SourceQuery::parse("nope")).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    // The cache is untouched by the misses.
    let html = store.render("foo", &json!({ "foo": "x" })).await.unwrap();
    assert_eq!(html, "x");
}

#[tokio::test]
async fn cached_store_ignores_later_file_edits() {
    let temp = tempdir().unwrap();
    write_template(temp.path(), "foo.html.mustache", "{{foo}}");

    let store = base_only(temp.path());
    assert_eq!(
        store.render("foo", &json!({ "foo": "V" })).await.unwrap(),
        "V"
    );

    // Neither an edit nor a delete is observed once cached.
    write_template(temp.path(), "foo.html.mustache", "{{foo}}!");
    assert_eq!(
        store.render("foo", &json!({ "foo": "V" })).await.unwrap(),
        "V"
    );

    fs::remove_file(temp.path().join("foo.html.mustache")).unwrap();
    assert_eq!(
        store.render("foo", &json!({ "foo": "V" })).await.unwrap(),
        "V"
    );
}

#[tokio::test]
async fn reload_mode_observes_file_edits() {
    let temp = tempdir().unwrap();
    write_template(temp.path(), "foo.html.mustache", "{{foo}}");

    let store = TemplateStore::new(
        StoreConfig::new()
            .base_dir(temp.path())
            .without_modules()
            .reload(true),
    );
    assert_eq!(
        store.render("foo", &json!({ "foo": "V" })).await.unwrap(),
        "V"
    );

    write_template(temp.path(), "foo.html.mustache", "{{foo}}!");
    assert_eq!(
        store.render("foo", &json!({ "foo": "V" })).await.unwrap(),
        "V!"
    );
}

#[tokio::test]
async fn empty_base_directory_is_not_an_error() {
    let temp = tempdir().unwrap();
    let store = base_only(temp.path());

    match store.source(SourceQuery::All).await.unwrap() {
        SourceText::All(sources) => assert!(sources.is_empty()),
        other => panic!("expected SourceText::All, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_modules_directory_loads_base_only() {
    let base = tempdir().unwrap();
    write_template(base.path(), "foo.html.mustache", "{{foo}}");
    let missing = base.path().join("no-such-modules");

    let store = with_modules(base.path(), &missing);
    assert_eq!(store.names().await.unwrap(), vec!["foo".to_string()]);
}

#[tokio::test]
async fn failed_load_is_retried_after_fix() {
    let temp = tempdir().unwrap();
    write_template(temp.path(), "foo.html.mustache", "{{foo}}");
    write_template(temp.path(), "bad.mustache", "missing format tag");

    let store = base_only(temp.path());
    let err = store.render("foo", &json!({ "foo": "V" })).await.unwrap_err();
    assert!(matches!(err, StoreError::NameResolution(_)));

    // Nothing was cached on failure, so removing the offender recovers.
    fs::remove_file(temp.path().join("bad.mustache")).unwrap();
    assert_eq!(
        store.render("foo", &json!({ "foo": "V" })).await.unwrap(),
        "V"
    );
}

#[tokio::test]
async fn duplicate_names_resolve_to_last_expanded_file() {
    let base = tempdir().unwrap();
    let modules = tempdir().unwrap();
    // Both leaves are named `main`, so both resolve to the name `m`; glob
    // expansion is alphabetical, so main.txt.mustache is recorded last.
    write_template(modules.path(), "m/main.html.mustache", "html flavor");
    write_template(modules.path(), "m/main.txt.mustache", "txt flavor");

    let store = with_modules(base.path(), modules.path());
    let html = store.render("m", &json!({})).await.unwrap();
    assert_eq!(html, "txt flavor");
}

#[tokio::test]
async fn nested_module_names_are_queryable() {
    let base = tempdir().unwrap();
    let modules = tempdir().unwrap();
    write_template(modules.path(), "shop/cart/main.html.mustache", "cart");
    write_template(modules.path(), "shop/cart/row.html.mustache", "row");

    let store = with_modules(base.path(), modules.path());
    let names = store.names().await.unwrap();
    assert_eq!(
        names,
        vec!["shop/cart".to_string(), "shop/cart_row".to_string()]
    );
    assert_eq!(
        store.render("shop/cart", &json!({})).await.unwrap(),
        "cart"
    );
    assert_eq!(
        store.render("shop/cart_row", &json!({})).await.unwrap(),
        "row"
    );
}
