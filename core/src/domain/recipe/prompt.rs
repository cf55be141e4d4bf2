/// System message sent with every generation request.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional chef AI that creates amazing recipes. \
     Always respond with valid JSON only.";

/// Builds the user message asking the model for one recipe as a JSON object.
pub fn build_recipe_prompt(ingredients: &[String], preferences: Option<&str>) -> String {
    let mut prompt = format!(
        "Create a delicious recipe using these ingredients: {}.\n",
        ingredients.join(", ")
    );

    if let Some(preferences) = preferences {
        prompt.push_str(&format!("Additional preferences: {preferences}\n"));
    }

    prompt.push_str(
        "\nPlease respond with a JSON object containing exactly these fields:\n\
         - title: A creative name for the recipe\n\
         - description: A brief, appetizing description\n\
         - ingredients: Array of ingredients with quantities\n\
         - instructions: Array of step-by-step cooking instructions\n\
         - cookTime: Estimated cooking time (e.g., \"25 mins\")\n\
         - servings: Number of servings (as integer)\n\
         - difficulty: One of \"Easy\", \"Medium\", or \"Hard\"\n\
         \n\
         Make sure the recipe is practical and delicious!",
    );

    prompt
}
