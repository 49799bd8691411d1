use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Record is one cocktail or ingredient as returned by the API.
///
/// Keys keep the order they had in the response body.
pub type Record = Map<String, Value>;

/// Cocktail record (`idDrink`, `strDrink`, `strIngredient1`, ...)
pub type Cocktail = Record;

/// Ingredient record (`idIngredient`, `strIngredient`, `strABV`, ...)
pub type Ingredient = Record;

/// Top-level response key holding cocktail records
pub const DRINKS_KEY: &str = "drinks";

/// Top-level response key holding ingredient records
pub const INGREDIENTS_KEY: &str = "ingredients";

/// Cocktail records carry at most this many ingredient/measure slots
pub const MAX_INGREDIENTS: usize = 15;

/// IngredientPair is one `strIngredientN` with its `strMeasureN`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientPair {
    pub position: usize, // 1-based slot number
    pub ingredient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
}

/// String value of `key`, if present and a string
pub fn field_str<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// Collect the ingredient slots of a cocktail in slot order.
///
/// Slots whose ingredient is missing, null or blank are skipped. Measures are
/// trimmed; a blank measure becomes `None`.
pub fn ingredient_pairs(cocktail: &Cocktail) -> Vec<IngredientPair> {
    (1..=MAX_INGREDIENTS)
        .filter_map(|position| {
            let ingredient = field_str(cocktail, &format!("strIngredient{position}"))
                .map(str::trim)
                .filter(|name| !name.is_empty())?;

            let measure = field_str(cocktail, &format!("strMeasure{position}"))
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string);

            Some(IngredientPair {
                position,
                ingredient: ingredient.to_string(),
                measure,
            })
        })
        .collect()
}
