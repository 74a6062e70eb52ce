use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cart_store::config::{Config, StorageBackend};
use cart_store::logging::init_tracing;
use cart_store::storage::open_store;
use cart_store::{CartState, CartStore, ProductInfo};

#[derive(Parser)]
#[command(name = "cart")]
#[command(about = "Inspect and edit the locally persisted shopping cart", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cart
    Show {
        /// Print the raw JSON snapshot
        #[arg(long)]
        json: bool,
    },

    /// Add one unit of a product
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        title: String,

        /// Image reference
        #[arg(long, default_value = "")]
        image_url: String,

        /// Unit price
        #[arg(long)]
        price: f64,
    },

    /// Add one unit of a product already in the cart
    Inc { id: String },

    /// Remove one unit of a product
    Dec { id: String },

    /// Remove a product line entirely
    Remove { id: String },

    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init_tracing(level);

    if config.storage.backend == StorageBackend::Memory {
        tracing::warn!("storage.backend = \"memory\": cart changes will not persist between runs");
    }

    let store = CartStore::with_key(open_store(&config.storage), config.storage.key.clone());
    store.load().await.context("Failed to load cart")?;

    let (state, json) = match cli.command {
        Command::Show { json } => (store.snapshot()?, json),
        Command::Add {
            id,
            title,
            image_url,
            price,
        } => {
            let product = ProductInfo::new(id, title, image_url, price);
            (store.add_to_cart(product).await?, false)
        }
        Command::Inc { id } => (store.increment(&id).await?, false),
        Command::Dec { id } => (store.decrement(&id).await?, false),
        Command::Remove { id } => (store.remove(&id).await?, false),
        Command::Clear => (store.clear().await?, false),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_cart(&state);
    }
    Ok(())
}

fn print_cart(state: &CartState) {
    if state.is_empty() {
        println!("Cart is empty");
        return;
    }

    for item in state.items() {
        println!(
            "{:>4} x {:<24} {:>10.2}  [{}]",
            item.quantity, item.title, item.price, item.id
        );
    }
    println!(
        "{} line(s), {} unit(s)",
        state.len(),
        state.total_quantity()
    );
}
