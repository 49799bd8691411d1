use cocktaildb_core::{normalize, Cocktail, Ingredient, DRINKS_KEY, INGREDIENTS_KEY};

use crate::client::{require_non_empty, Endpoint};
use crate::transport::Transport;
use crate::{Client, Result};

const LOOKUP_PATH: &str = "lookup.php";

impl<T: Transport> Client<T> {
    /// Full cocktail details by `idDrink`, normalized
    pub async fn lookup_cocktail_by_id(&self, id: &str) -> Result<Cocktail> {
        require_non_empty(id, "ID")?;

        let endpoint = Endpoint::new(
            LOOKUP_PATH,
            DRINKS_KEY,
            format!("No cocktails found for the ID: {id}"),
        )
        .query("i", id);

        Ok(normalize(self.fetch_first(endpoint).await?))
    }

    /// Ingredient details by `idIngredient`, returned unfiltered
    pub async fn lookup_ingredient_by_id(&self, id: &str) -> Result<Ingredient> {
        require_non_empty(id, "ID")?;

        let endpoint = Endpoint::new(
            LOOKUP_PATH,
            INGREDIENTS_KEY,
            format!("No ingredients found for the ID: {id}"),
        )
        .query("iid", id);

        self.fetch_first(endpoint).await
    }

    /// One random cocktail, normalized
    pub async fn lookup_random_cocktail(&self) -> Result<Cocktail> {
        let endpoint = Endpoint::new("random.php", DRINKS_KEY, "No cocktails found");
        Ok(normalize(self.fetch_first(endpoint).await?))
    }
}
