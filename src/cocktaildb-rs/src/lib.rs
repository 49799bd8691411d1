//! CocktailDb Client Library
//!
//! Async client for TheCocktailDB JSON API. Cocktail records come back with
//! null, attribution and localized-instruction fields stripped; ingredient
//! records come back as the API sent them.
//!
//! ```rust,no_run
//! use cocktaildb_rs::Client;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Client::new(cocktaildb_rs::DEFAULT_BASE_URL);
//!     let margarita = client.search_cocktail_by_name("margarita").await?;
//!     println!("{}", serde_json::to_string_pretty(&margarita)?);
//!     Ok(())
//! }
//! ```

mod client;
mod filter;
mod list;
mod lookup;
mod search;
pub mod transport;

pub use client::Client;
pub use cocktaildb_core::config::DEFAULT_BASE_URL;
pub use cocktaildb_core::{
    field_str, filter_cocktail_data, ingredient_pairs, Cocktail, Config, Ingredient,
    IngredientPair, Record,
};
pub use transport::{ApiResponse, HttpTransport, Transport};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid response from the API")]
    InvalidResponse,

    #[error("{0}")]
    NotFound(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },
}

impl ClientError {
    /// True for failures raised by the transport itself
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Request(_) | ClientError::Serialization(_) | ClientError::Server { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
