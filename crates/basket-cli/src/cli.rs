use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "basket",
    about = "basket — a persisted shopping cart",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the storage file backing the cart.
    #[arg(long, global = true, default_value = "basket-store.json")]
    pub store: PathBuf,

    /// Storage key override (defaults to the fixed cart key).
    #[arg(long, global = true)]
    pub key: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add an item to the cart
    Add(AddArgs),
    /// Remove an item from the cart
    Remove(RemoveArgs),
    /// Set an item's quantity (0 removes it)
    SetQty(SetQtyArgs),
    /// Show the cart
    List(ListArgs),
    /// Show the total item count
    Count(CountArgs),
    /// Empty the cart
    Clear(ClearArgs),
    /// Submit the cart (simulated)
    Submit(SubmitArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Item identifier. Derived from --name when omitted.
    #[arg(long)]
    pub id: Option<String>,

    /// Display name. Falls back to the id for new entries.
    #[arg(long)]
    pub name: Option<String>,

    /// Quantity to add. Unparseable input falls back to 1.
    #[arg(long, default_value = "1")]
    pub qty: String,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Item identifier.
    pub id: String,
}

#[derive(Args)]
pub struct SetQtyArgs {
    /// Item identifier.
    pub id: String,

    /// New quantity. Unparseable input falls back to 0 (removal).
    pub qty: String,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct CountArgs {}

#[derive(Args)]
pub struct ClearArgs {}

#[derive(Args)]
pub struct SubmitArgs {}
