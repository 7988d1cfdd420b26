use crate::domain::recipe::{
    entities::RecipeSuggestion,
    prompt::{INGREDIENTS_LABEL, INSTRUCTIONS_LABEL, RECIPE_NAME_LABEL},
};

/// Extracts a recipe from the free-text reply of the generation service.
///
/// Lines are matched on their raw prefix:
/// - `Recipe Name:` and `Ingredients:` take the rest of their own line.
/// - `Instructions:` takes every following non-empty line, trimmed, except
///   lines that start with one of the two other labels.
///
/// Sections that never show up keep the fallbacks of
/// [`RecipeSuggestion::default`]. The reply is never rejected.
pub fn parse_recipe_reply(reply: &str) -> RecipeSuggestion {
    let mut recipe = RecipeSuggestion::default();
    let lines: Vec<&str> = reply.trim().lines().collect();

    for (index, line) in lines.iter().enumerate() {
        if let Some(name) = line.strip_prefix(RECIPE_NAME_LABEL) {
            recipe.name = name.trim().to_string();
        } else if let Some(ingredients) = line.strip_prefix(INGREDIENTS_LABEL) {
            recipe.ingredients = ingredients.trim().to_string();
        } else if line.starts_with(INSTRUCTIONS_LABEL) {
            recipe.instructions = collect_steps(&lines[index + 1..]);
        }
    }

    recipe
}

fn collect_steps(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| {
            !line.is_empty()
                && !line.starts_with(RECIPE_NAME_LABEL)
                && !line.starts_with(INGREDIENTS_LABEL)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::{
        FALLBACK_INGREDIENTS, FALLBACK_INSTRUCTIONS, FALLBACK_RECIPE_NAME,
    };

    #[test]
    fn parses_a_well_formed_reply() {
        let reply = "\
Recipe Name:   Spinach Omelette  
Ingredients: eggs, spinach, salt (pantry staple), oil (pantry staple)
Instructions:
1. Whisk the eggs with a pinch of salt.

   2. Wilt the spinach in hot oil.  
3. Pour in the eggs and fold when set.
";

        let recipe = parse_recipe_reply(reply);

        assert_eq!(recipe.name, "Spinach Omelette");
        assert_eq!(
            recipe.ingredients,
            "eggs, spinach, salt (pantry staple), oil (pantry staple)"
        );
        assert_eq!(
            recipe.instructions,
            "1. Whisk the eggs with a pinch of salt.\n\
             2. Wilt the spinach in hot oil.\n\
             3. Pour in the eggs and fold when set."
        );
    }

    #[test]
    fn drops_labelled_lines_from_instructions() {
        let reply = "Instructions:\n1. Boil water.\n  Ingredients: stray\n2. Add pasta.";

        let recipe = parse_recipe_reply(reply);

        assert_eq!(recipe.instructions, "1. Boil water.\n2. Add pasta.");
    }

    #[test]
    fn missing_ingredients_label_keeps_fallback() {
        let reply = "Recipe Name: Plain Rice\nInstructions:\n1. Rinse.\n2. Simmer.";

        let recipe = parse_recipe_reply(reply);

        assert_eq!(recipe.name, "Plain Rice");
        assert_eq!(recipe.ingredients, FALLBACK_INGREDIENTS);
        assert_eq!(recipe.instructions, "1. Rinse.\n2. Simmer.");
    }

    #[test]
    fn unstructured_reply_keeps_every_fallback() {
        let recipe = parse_recipe_reply("Sorry, I can't help with that.");

        assert_eq!(recipe.name, FALLBACK_RECIPE_NAME);
        assert_eq!(recipe.ingredients, FALLBACK_INGREDIENTS);
        assert_eq!(recipe.instructions, FALLBACK_INSTRUCTIONS);
    }

    #[test]
    fn labels_must_start_the_line() {
        let reply = "**Recipe Name:** Toast\n  Ingredients: bread";

        let recipe = parse_recipe_reply(reply);

        assert_eq!(recipe.name, FALLBACK_RECIPE_NAME);
        assert_eq!(recipe.ingredients, FALLBACK_INGREDIENTS);
    }

    #[test]
    fn trailing_instructions_label_yields_empty_steps() {
        let recipe = parse_recipe_reply("Recipe Name: Water\nInstructions:");

        assert_eq!(recipe.name, "Water");
        assert_eq!(recipe.instructions, "");
    }

    #[test]
    fn text_after_instructions_label_on_same_line_is_ignored() {
        let recipe = parse_recipe_reply("Instructions: see below\nStir well.");

        assert_eq!(recipe.instructions, "Stir well.");
    }

    #[test]
    fn handles_windows_line_endings() {
        let reply = "Recipe Name: Tea\r\nIngredients: water, tea\r\nInstructions:\r\nSteep.\r\n";

        let recipe = parse_recipe_reply(reply);

        assert_eq!(recipe.name, "Tea");
        assert_eq!(recipe.ingredients, "water, tea");
        assert_eq!(recipe.instructions, "Steep.");
    }
}
