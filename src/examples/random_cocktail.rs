//! Random Cocktail Example
//!
//! Looks up a random cocktail, prints its recipe, then fetches details for
//! its first ingredient.
//!
//! Run with: cargo run --example random_cocktail

use cocktaildb_rs::{field_str, ingredient_pairs, Client, DEFAULT_BASE_URL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cocktaildb_rs=info")),
        )
        .init();

    let client = Client::new(DEFAULT_BASE_URL);

    let cocktail = client.lookup_random_cocktail().await?;
    println!(
        "🍸 {} ({})",
        field_str(&cocktail, "strDrink").unwrap_or("?"),
        field_str(&cocktail, "strGlass").unwrap_or("any glass")
    );

    let pairs = ingredient_pairs(&cocktail);
    for pair in &pairs {
        match &pair.measure {
            Some(measure) => println!("   {} {}", measure, pair.ingredient),
            None => println!("   {}", pair.ingredient),
        }
    }

    if let Some(instructions) = field_str(&cocktail, "strInstructions") {
        println!("\n{instructions}\n");
    }

    if let Some(first) = pairs.first() {
        match client.search_ingredient_by_name(&first.ingredient).await {
            Ok(ingredient) => println!(
                "About {}: {}",
                first.ingredient,
                field_str(&ingredient, "strDescription").unwrap_or("no description")
            ),
            Err(e) => tracing::warn!("Ingredient lookup failed: {}", e),
        }
    }

    Ok(())
}
