use cocktaildb_core::{field_str, DRINKS_KEY};

use crate::client::Endpoint;
use crate::transport::Transport;
use crate::{Client, Result};

impl<T: Transport> Client<T> {
    /// All cocktail categories, in API order
    pub async fn list_cocktail_types(&self) -> Result<Vec<String>> {
        self.list_names("c", "strCategory", "No cocktail types found")
            .await
    }

    /// All glass types
    pub async fn list_glass_types(&self) -> Result<Vec<String>> {
        self.list_names("g", "strGlass", "No glass types found").await
    }

    /// All ingredient names
    pub async fn list_ingredients(&self) -> Result<Vec<String>> {
        self.list_names("i", "strIngredient1", "No ingredients found")
            .await
    }

    /// All alcoholic types (`Alcoholic`, `Non alcoholic`, `Optional alcohol`)
    pub async fn list_alcoholic_types(&self) -> Result<Vec<String>> {
        self.list_names("a", "strAlcoholic", "No alcoholic types found")
            .await
    }

    /// Query `list.php?<key>=list` and project `field` out of every entry.
    ///
    /// Entries without a string `field` are skipped and logged.
    async fn list_names(
        &self,
        key: &'static str,
        field: &str,
        not_found: &str,
    ) -> Result<Vec<String>> {
        let endpoint = Endpoint::new("list.php", DRINKS_KEY, not_found).query(key, "list");

        let entries = self.fetch_collection(endpoint).await?;
        let names: Vec<String> = entries
            .iter()
            .filter_map(|entry| field_str(entry, field))
            .map(str::to_string)
            .collect();

        if names.len() < entries.len() {
            tracing::warn!(
                "Skipped {} of {} list.php entries without a string '{}'",
                entries.len() - names.len(),
                entries.len(),
                field
            );
        }

        Ok(names)
    }
}
