use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    /// Ingredient names. An empty list or `null` yields a placeholder recipe;
    /// only a missing key is rejected.
    #[serde(
        default,
        deserialize_with = "crate::application::http::food_item::validators::deserialize_some"
    )]
    #[validate(required(message = "No inventory items provided"))]
    #[schema(value_type = Option<Vec<String>>, example = json!(["eggs", "spinach", "feta"]))]
    pub inventory_items: Option<Option<Vec<String>>>,
}

impl GenerateRecipeValidator {
    pub fn into_items(self) -> Vec<String> {
        self.inventory_items.flatten().unwrap_or_default()
    }
}
