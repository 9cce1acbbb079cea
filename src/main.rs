use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cartview::{CartItem, CartRepository, CartStore};

#[derive(Parser)]
#[command(name = "cartview")]
#[command(about = "Shopping cart viewer with enquiry submission")]
struct Cli {
    /// Path to the cart store file
    #[arg(long, value_name = "FILE", default_value = "cart.db")]
    store: PathBuf,

    /// Enquiry endpoint submissions are POSTed to
    #[arg(
        long,
        value_name = "URL",
        default_value = "http://localhost:3000/api/productenquire"
    )]
    endpoint: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Maintenance commands standing in for the storefront pages that normally
/// populate the cart.
#[derive(Subcommand)]
enum Command {
    /// Add an item to the stored cart, replacing any item with the same id
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
    },
    /// Print the stored cart items
    List,
}

fn main() -> anyhow::Result<()> {
    let mut args = Cli::parse();

    match args.command.take() {
        Some(command) => run_command(&args, command),
        None => {
            if args.verbose {
                println!("Opening cart store: {:?}", args.store);
                println!("Enquiry endpoint: {}", args.endpoint);
            }
            run_gui(args)
        }
    }
}

fn run_command(args: &Cli, command: Command) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let store = CartStore::open(&args.store);

    runtime.block_on(async {
        match command {
            Command::Add {
                id,
                title,
                category,
            } => {
                let mut items = store.load().await?;
                items.retain(|item| item.id != id);
                items.push(CartItem::new(id, title, category));
                let count = items.len();
                store.save(items).await?;
                if args.verbose {
                    println!("Cart now holds {count} item(s)");
                }
                Ok(())
            }
            Command::List => {
                let items = store.load().await?;
                if items.is_empty() {
                    println!("Your cart is empty.");
                }
                for item in &items {
                    println!("{} ({}) [{}]", item.title, item.category, item.id);
                }
                Ok(())
            }
        }
    })
}

#[cfg(feature = "gui")]
fn run_gui(args: Cli) -> anyhow::Result<()> {
    cartview::gui::run(args.store, args.endpoint)
        .map_err(|error| anyhow::anyhow!("GUI error: {error}"))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_args: Cli) -> anyhow::Result<()> {
    anyhow::bail!("cartview was built without the `gui` feature; only `add` and `list` are available")
}
