use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFoodItemValidator {
    #[validate(
        required(message = "Item name and expiry date are required"),
        length(min = 1, message = "Item name and expiry date are required")
    )]
    pub name: Option<String>,

    /// `YYYY-MM-DD`
    #[validate(
        required(message = "Item name and expiry date are required"),
        length(min = 1, message = "Item name and expiry date are required")
    )]
    #[schema(example = "2025-01-31")]
    pub expiry: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,
}

/// Partial update. A missing key leaves the field alone, an explicit `null`
/// clears it.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFoodItemValidator {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>, example = "2025-01-31")]
    pub expiry: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub quantity: Option<Option<f64>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub unit: Option<Option<String>>,
}

/// Keeps an explicit `null` as `Some(None)` so it can be told apart from a missing key.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
