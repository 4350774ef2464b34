//! A todo list shared between a header, a list view and an input box.
//!
//! Run with `RUST_LOG=tinlist=debug cargo run --example todo_list` to see the
//! list events.

use serde_json::json;
use tinlist::{
    consume_list, item_from, use_list, with_list_manager, Component, ListConfig, ListProvider,
    Managed, Registry, Result,
};
use tracing_subscriber::EnvFilter;

fn header(registry: &Registry) -> Result<String> {
    consume_list(registry, "todos", |todos| {
        format!("Todos ({})", todos.items().len())
    })
}

fn render(registry: &Registry, provider: &ListProvider) -> Result<()> {
    let footer = with_list_manager(
        registry,
        |m: Managed<&str>| format!("{} [keyed by {:?}]", m.props, m.list_manager.key_by()),
        "todos",
    )?;

    provider.provide(|| -> Result<()> {
        println!("{}", header(registry)?);
        let todos = use_list(registry, "todos")?;
        for item in todos.items().iter() {
            println!("  - {} (done: {})", item["title"], item["done"]);
        }
        println!("{}", footer.render("end of list")?);
        Ok(())
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Registry::new();
    let provider = ListProvider::new(&registry, ListConfig::new("todos").key_by("id"))?;

    let _rerender = provider.subscribe(|items| {
        println!("[re-render] {} item(s)", items.len());
    });

    println!("=== Initial render ===");
    render(&registry, &provider)?;

    let todos = provider.manager();
    for (id, title) in [(1, "buy milk"), (2, "walk dog"), (3, "write docs")] {
        if let Some(item) = item_from(json!({ "id": id, "title": title, "done": false })) {
            todos.add_item(item)?;
        }
    }

    if let Some(item) = item_from(json!({ "title": "no id" })) {
        if let Err(e) = todos.add_item(item) {
            println!("rejected: {e}");
        }
    }

    if let Some(keyed) = todos.keyed() {
        if let Some(patch) = item_from(json!({ "done": true })) {
            keyed.update_item(&json!(2), patch);
        }
        keyed.remove_item(&json!(3));
    }

    println!("\n=== After edits ===");
    render(&registry, &provider)?;

    Ok(())
}
