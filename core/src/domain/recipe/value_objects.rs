#[derive(Debug, Clone, Default)]
pub struct GenerateRecipeInput {
    pub inventory_items: Vec<String>,
}
