//! Filter Cocktails Example
//!
//! Filters cocktails by alcoholic type, category and glass, then prints how
//! many matched and the first few names.
//!
//! Run with: cargo run --example filter_cocktails

use cocktaildb_rs::{field_str, Client, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cocktaildb_rs=debug,cocktaildb_core=debug")),
        )
        .with_target(false)
        .init();

    let config = Config::load("config.json").unwrap_or_else(|_| {
        tracing::warn!("Failed to load config.json, using defaults");
        Config::default()
    });
    let client = Client::from_config(&config)?;

    let alcoholic = client.filter_cocktails_by_alcoholic_type("Alcoholic").await?;
    print_names("Filter by alcoholic type (Alcoholic)", &alcoholic);

    let ordinary = client.filter_cocktails_by_category("Ordinary_Drink").await?;
    print_names("Filter by category (Ordinary Drink)", &ordinary);

    let cocktail_glass = client.filter_cocktails_by_glass_type("Cocktail_glass").await?;
    print_names("Filter by glass type (Cocktail glass)", &cocktail_glass);

    Ok(())
}

fn print_names(title: &str, cocktails: &[cocktaildb_rs::Cocktail]) {
    println!("{title}: {} cocktails", cocktails.len());
    for cocktail in cocktails.iter().take(5) {
        println!("   {}", field_str(cocktail, "strDrink").unwrap_or("?"));
    }
    println!();
}
