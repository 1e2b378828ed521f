use std::sync::Arc;

use colored::Colorize;

use basket_core::{CartConfig, CartStore, RenderHook};
use basket_storage::FileKeyValueStore;
use basket_types::{parse_qty, slugify};

use crate::cli::*;
use crate::render::TerminalRenderer;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let storage = Arc::new(FileKeyValueStore::new(&cli.store));
    let config = match &cli.key {
        Some(key) => CartConfig::with_key(key),
        None => CartConfig::default(),
    };
    let mut store = CartStore::with_config(storage, config);
    // In text mode the renderer redraws the cart after every mutation; in
    // JSON mode the commands print structured output themselves.
    if matches!(cli.format, OutputFormat::Text) {
        store.set_render_hook(Arc::new(TerminalRenderer) as Arc<dyn RenderHook>);
    }

    match cli.command {
        Command::Add(args) => cmd_add(&store, args, &cli.format),
        Command::Remove(args) => cmd_remove(&store, args, &cli.format),
        Command::SetQty(args) => cmd_set_qty(&store, args, &cli.format),
        Command::List(_) => cmd_list(&store, &cli.format),
        Command::Count(_) => cmd_count(&store, &cli.format),
        Command::Clear(_) => cmd_clear(&store, &cli.format),
        Command::Submit(_) => cmd_submit(&store, &cli.format),
    }
}

fn cmd_add(store: &CartStore, args: AddArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let id = match (&args.id, &args.name) {
        (Some(id), _) => id.clone(),
        (None, Some(name)) => {
            let slug = slugify(name);
            anyhow::ensure!(!slug.is_empty(), "could not derive an id from {name:?}");
            slug
        }
        (None, None) => anyhow::bail!("provide --id or --name"),
    };
    let qty = parse_qty(&args.qty).unwrap_or(1);
    store.add_item(&id, args.name.as_deref(), qty)?;
    print_cart_if_json(store, format);
    Ok(())
}

fn cmd_remove(store: &CartStore, args: RemoveArgs, format: &OutputFormat) -> anyhow::Result<()> {
    store.remove_item(&args.id)?;
    print_cart_if_json(store, format);
    Ok(())
}

fn cmd_set_qty(store: &CartStore, args: SetQtyArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let qty = parse_qty(&args.qty).unwrap_or(0);
    store.update_quantity(&args.id, qty)?;
    print_cart_if_json(store, format);
    Ok(())
}

fn cmd_list(store: &CartStore, format: &OutputFormat) -> anyhow::Result<()> {
    let cart = store.items();
    match format {
        OutputFormat::Text => TerminalRenderer::render_cart(&cart),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cart)?),
    }
    Ok(())
}

fn cmd_count(store: &CartStore, format: &OutputFormat) -> anyhow::Result<()> {
    let count = store.count();
    match format {
        OutputFormat::Text => println!("{count}"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "count": count })),
    }
    Ok(())
}

fn cmd_clear(store: &CartStore, format: &OutputFormat) -> anyhow::Result<()> {
    store.clear()?;
    print_cart_if_json(store, format);
    Ok(())
}

fn cmd_submit(store: &CartStore, format: &OutputFormat) -> anyhow::Result<()> {
    let summary = store.submit()?;
    match format {
        OutputFormat::Text => {
            // The renderer already printed the confirmation; recap the order.
            println!(
                "  {} distinct {}, {} total",
                summary.entries.len(),
                if summary.entries.len() == 1 { "item" } else { "items" },
                summary.total_quantity.to_string().bold(),
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn print_cart_if_json(store: &CartStore, format: &OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        let cart = store.items();
        match serde_json::to_string_pretty(&cart) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{} {e}", "error:".red()),
        }
    }
}
