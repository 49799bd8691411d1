use cocktaildb_core::{normalize, Cocktail, Ingredient, DRINKS_KEY, INGREDIENTS_KEY};

use crate::client::{require_non_empty, Endpoint};
use crate::transport::Transport;
use crate::{Client, ClientError, Result};

const SEARCH_PATH: &str = "search.php";

impl<T: Transport> Client<T> {
    /// Search for a cocktail by name and return the first match, normalized
    pub async fn search_cocktail_by_name(&self, name: &str) -> Result<Cocktail> {
        require_non_empty(name, "name")?;

        let endpoint = Endpoint::new(
            SEARCH_PATH,
            DRINKS_KEY,
            format!("No cocktails found for the name: {name}"),
        )
        .query("s", name);

        Ok(normalize(self.fetch_first(endpoint).await?))
    }

    /// List every cocktail starting with `letter`, each normalized
    ///
    /// `letter` must be a single character once surrounding whitespace is
    /// trimmed.
    pub async fn search_cocktails_by_first_letter(&self, letter: &str) -> Result<Vec<Cocktail>> {
        if letter.trim().chars().count() != 1 {
            return Err(ClientError::InvalidArgument(
                "The letter parameter must be a single character string".to_string(),
            ));
        }

        let endpoint = Endpoint::new(
            SEARCH_PATH,
            DRINKS_KEY,
            format!("No cocktails found for the letter: {letter}"),
        )
        .query("f", letter);

        let drinks = self.fetch_collection(endpoint).await?;
        Ok(drinks.into_iter().map(normalize).collect())
    }

    /// Search for an ingredient by name; the record is returned unfiltered
    pub async fn search_ingredient_by_name(&self, name: &str) -> Result<Ingredient> {
        require_non_empty(name, "name")?;

        let endpoint = Endpoint::new(
            SEARCH_PATH,
            INGREDIENTS_KEY,
            format!("No ingredients found for the name: {name}"),
        )
        .query("i", name);

        self.fetch_first(endpoint).await
    }
}
