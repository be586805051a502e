//! `rocketshoes-cart`: inspect and change the persisted cart from a terminal.
//!
//! ```bash
//! rocketshoes-cart show
//! rocketshoes-cart add 2
//! rocketshoes-cart update 2 3
//! rocketshoes-cart remove 2
//! rocketshoes-cart clear
//! RUST_LOG=debug rocketshoes-cart --api-url http://localhost:3333 add 1
//! ```

use actor_framework::tracing::setup_tracing;
use clap::{Parser, Subcommand};
use rocketshoes_cart::cart_actor::CartError;
use rocketshoes_cart::config::Config;
use rocketshoes_cart::lifecycle::CartSystem;
use rocketshoes_cart::model::{Cart, Product, ProductId};
use std::path::PathBuf;
use tracing::{error, info, Instrument};

#[derive(Parser, Debug)]
#[command(name = "rocketshoes-cart", version, about = "RocketShoes shopping cart")]
struct Cli {
    /// Config file (default: <config dir>/rocketshoes-cart/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `api.base_url`
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the cart
    Show,
    /// Add one unit of a product
    Add { id: u32 },
    /// Remove a product from the cart
    Remove { id: u32 },
    /// Set a product's amount
    Update { id: u32, amount: u32 },
    /// Empty the cart
    Clear,
}

fn load_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| e.to_string())?;

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
        config.validate().map_err(|e| e.to_string())?;
    }
    Ok(config)
}

fn print_cart(cart: &Cart) {
    if cart.lines.is_empty() {
        println!("Cart is empty");
        return;
    }
    for line in &cart.lines {
        println!(
            "{:>4}  {:<50} {:>3} x R$ {:>8.2} = R$ {:>9.2}",
            line.id.0,
            line.title,
            line.amount,
            line.price,
            line.subtotal()
        );
    }
    println!(
        "{} product(s), total R$ {:.2}",
        cart.distinct_count(),
        cart.total()
    );
}

async fn run(system: &CartSystem, command: Command) -> Result<Option<Vec<Product>>, CartError> {
    let cart = &system.cart;
    let lines = match command {
        Command::Show => return Ok(None),
        Command::Add { id } => cart.add_product(ProductId(id)).await?,
        Command::Remove { id } => cart.remove_product(ProductId(id)).await?,
        Command::Update { id, amount } => cart.update_product_amount(ProductId(id), amount).await?,
        Command::Clear => cart.clear().await?,
    };
    Ok(Some(lines))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let system = CartSystem::new(&config)
        .await
        .map_err(|e| e.to_string())?;
    let mut notices = system.subscribe_notices();

    let span = tracing::info_span!("command", command = ?cli.command);
    let outcome = run(&system, cli.command).instrument(span).await;

    while let Ok(notice) = notices.try_recv() {
        eprintln!("! {notice}");
    }

    let outcome = match outcome {
        Ok(Some(lines)) => {
            info!(lines = lines.len(), "Cart updated");
            system.cart.cart().await.map(|cart| print_cart(&cart))
        }
        Ok(None) => system.cart.cart().await.map(|cart| print_cart(&cart)),
        Err(e) => {
            error!(error = %e, "Cart operation failed");
            Err(e)
        }
    };

    system.shutdown().await?;
    outcome.map_err(|e| e.to_string())
}
