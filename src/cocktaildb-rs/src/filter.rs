use cocktaildb_core::{normalize, Cocktail, DRINKS_KEY};

use crate::client::{require_non_empty, Endpoint};
use crate::transport::Transport;
use crate::{Client, Result};

impl<T: Transport> Client<T> {
    /// Cocktails of an alcoholic type (`Alcoholic`, `Non_Alcoholic`, ...)
    pub async fn filter_cocktails_by_alcoholic_type(&self, kind: &str) -> Result<Vec<Cocktail>> {
        self.filter_by("a", kind, "type", "alcoholic type").await
    }

    /// Cocktails in a category (`Ordinary_Drink`, `Cocktail`, ...)
    pub async fn filter_cocktails_by_category(&self, category: &str) -> Result<Vec<Cocktail>> {
        self.filter_by("c", category, "category", "category").await
    }

    /// Cocktails served in a glass (`Cocktail_glass`, `Champagne_flute`, ...)
    pub async fn filter_cocktails_by_glass_type(&self, glass: &str) -> Result<Vec<Cocktail>> {
        self.filter_by("g", glass, "glass", "glass type").await
    }

    async fn filter_by(
        &self,
        key: &'static str,
        value: &str,
        param: &str,
        label: &str,
    ) -> Result<Vec<Cocktail>> {
        require_non_empty(value, param)?;

        let endpoint = Endpoint::new(
            "filter.php",
            DRINKS_KEY,
            format!("No cocktails found for the {label}: {value}"),
        )
        .query(key, value);

        let drinks = self.fetch_collection(endpoint).await?;
        Ok(drinks.into_iter().map(normalize).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::transport::mock::{MockTransport, Reply};
    use crate::{Client, ClientError};
    use serde_json::{json, Value};

    fn filtered_drinks() -> Value {
        json!({
            "drinks": [
                {
                    "strDrink": "'57 Chevy with a White License Plate",
                    "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/qyyvtu1468878544.jpg",
                    "idDrink": "14029",
                    "dateModified": null
                },
                {
                    "strDrink": "155 Belmont",
                    "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/yqvvqs1475667388.jpg",
                    "idDrink": "15346"
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_filter_by_alcoholic_type() {
        let client = Client::with_transport(MockTransport::body(filtered_drinks()));

        let result = client
            .filter_cocktails_by_alcoholic_type("Alcoholic")
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert!(!result[0].contains_key("dateModified"));
        assert_eq!(result[1]["idDrink"], "15346");
        assert_eq!(
            client.transport().calls(),
            vec![(
                "filter.php".to_string(),
                vec![("a".to_string(), "Alcoholic".to_string())]
            )]
        );
    }

    #[tokio::test]
    async fn test_filter_by_category() {
        let client = Client::with_transport(MockTransport::body(filtered_drinks()));

        let result = client
            .filter_cocktails_by_category("Ordinary_Drink")
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(
            client.transport().calls()[0].1,
            vec![("c".to_string(), "Ordinary_Drink".to_string())]
        );
    }

    #[tokio::test]
    async fn test_filter_by_glass_type() {
        let client = Client::with_transport(MockTransport::body(filtered_drinks()));

        let result = client
            .filter_cocktails_by_glass_type("Cocktail_glass")
            .await
            .unwrap();

        assert_eq!(result[0]["strDrink"], "'57 Chevy with a White License Plate");
        assert_eq!(
            client.transport().calls()[0].1,
            vec![("g".to_string(), "Cocktail_glass".to_string())]
        );
    }

    #[tokio::test]
    async fn test_filter_rejects_blank_parameters() {
        let client = Client::with_transport(MockTransport::body(filtered_drinks()));

        let err = client.filter_cocktails_by_alcoholic_type(" ").await.unwrap_err();
        assert_eq!(err.to_string(), "The type parameter must be a non-empty string");

        let err = client.filter_cocktails_by_category("").await.unwrap_err();
        assert_eq!(err.to_string(), "The category parameter must be a non-empty string");

        let err = client.filter_cocktails_by_glass_type("\t").await.unwrap_err();
        assert_eq!(err.to_string(), "The glass parameter must be a non-empty string");

        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_filter_not_found_names_value() {
        let client = Client::with_transport(MockTransport::body(json!({"drinks": null})));

        let err = client
            .filter_cocktails_by_alcoholic_type("Unknown")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No cocktails found for the alcoholic type: Unknown");

        let err = client.filter_cocktails_by_category("Unknown").await.unwrap_err();
        assert_eq!(err.to_string(), "No cocktails found for the category: Unknown");

        let err = client.filter_cocktails_by_glass_type("Unknown").await.unwrap_err();
        assert_eq!(err.to_string(), "No cocktails found for the glass type: Unknown");
    }

    #[tokio::test]
    async fn test_filter_invalid_response() {
        let client = Client::with_transport(MockTransport::new(Reply::NoResponse));

        let err = client.filter_cocktails_by_category("Shot").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse));
    }
}
