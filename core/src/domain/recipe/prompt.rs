pub const RECIPE_NAME_LABEL: &str = "Recipe Name:";
pub const INGREDIENTS_LABEL: &str = "Ingredients:";
pub const INSTRUCTIONS_LABEL: &str = "Instructions:";

/// Builds the instruction sent to the generation service. The reply format
/// requested here is what [`parse_recipe_reply`](super::parser::parse_recipe_reply)
/// expects back.
pub fn build_recipe_prompt(inventory_items: &[String]) -> String {
    format!(
        "Generate a creative and practical recipe using ONLY these ingredients from a home kitchen inventory: \
         {items}. \
         Do not include ingredients not listed unless they are very common pantry staples \
         (like salt, pepper, oil, water) and explicitly mention them as such. \
         Provide the output in the following format:\n\n\
         {RECIPE_NAME_LABEL} [Your Recipe Name]\n\
         {INGREDIENTS_LABEL} [Comma-separated list of ALL ingredients, including pantry staples]\n\
         {INSTRUCTIONS_LABEL} [Numbered steps for cooking, each step on a new line]",
        items = inventory_items.join(", "),
    )
}
