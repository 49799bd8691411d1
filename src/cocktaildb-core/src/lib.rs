//! CocktailDb Core Library
//!
//! This crate provides the transport-free pieces of the CocktailDb client:
//! - Record types for cocktails and ingredients
//! - Response normalization
//! - Client configuration

pub mod config;
pub mod models;
pub mod normalize;

// Re-export commonly used types
pub use config::Config;
pub use models::*;
pub use normalize::{filter_cocktail_data, normalize};
