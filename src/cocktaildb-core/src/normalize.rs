use serde_json::Value;

use crate::models::Record;

/// Fields dropped from every cocktail record
pub const UNWANTED_FIELDS: [&str; 4] = [
    "dateModified",
    "strCreativeCommonsConfirmed",
    "strImageAttribution",
    "strImageSource",
];

/// Canonical instructions field; localized variants share it as a prefix
pub const INSTRUCTIONS_FIELD: &str = "strInstructions";

/// Whether an entry survives normalization
fn keep_field(key: &str, value: &Value) -> bool {
    if value.is_null() || UNWANTED_FIELDS.contains(&key) {
        return false;
    }

    // strInstructionsDE, strInstructionsZH-HANS, ...
    !(key.starts_with(INSTRUCTIONS_FIELD) && key != INSTRUCTIONS_FIELD)
}

/// Filter null values and unwanted fields out of a cocktail record.
///
/// Drops null-valued entries, the attribution/modification fields in
/// [`UNWANTED_FIELDS`], and every localized `strInstructions*` variant.
/// Remaining entries keep their input order.
pub fn filter_cocktail_data(cocktail: &Record) -> Record {
    cocktail
        .iter()
        .filter(|(key, value)| keep_field(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Owning variant of [`filter_cocktail_data`]
pub fn normalize(mut cocktail: Record) -> Record {
    cocktail.retain(|key, value| keep_field(key, value));
    cocktail
}
