//! Prompt text and token limits for each gateway call.

/// System persona for recipe requests.
pub const RECIPE_SYSTEM_PROMPT: &str = "You are a helpful cooking assistant specialized in creating simple, healthy recipes for elderly people.";

/// System persona for ingredient extraction from speech.
pub const EXTRACTION_SYSTEM_PROMPT: &str =
    "You are an expert at identifying food ingredients from spoken text.";

pub const RECIPE_MAX_TOKENS: u32 = 1500;
pub const PHOTO_MAX_TOKENS: u32 = 500;
pub const PHOTO_FALLBACK_MAX_TOKENS: u32 = 300;
pub const EXTRACTION_MAX_TOKENS: u32 = 300;
pub const EXTRACTION_FALLBACK_MAX_TOKENS: u32 = 200;

/// Render the JSON-mode recipe prompt for a comma-joined ingredient list.
pub fn render_recipe_prompt(ingredients: &str) -> String {
    format!(
        r#"You are a helpful cooking assistant for elderly people. Based on the following ingredients: {ingredients}

Please suggest a simple, healthy, and delicious recipe that can be made with most or all of these ingredients.

Provide your response in JSON format with the following structure:
{{
    "title": "Recipe name",
    "description": "Brief description of the dish",
    "prep_time": "Estimated preparation time",
    "servings": "Number of servings",
    "ingredients": ["List of ingredients with measurements"],
    "instructions": ["Step-by-step cooking instructions"],
    "tips": ["Helpful cooking tips for elderly cooks"]
}}

Make sure the recipe is:
- Easy to follow with clear, simple steps
- Suitable for elderly people (not too complex)
- Nutritious and balanced
- Uses common cooking methods
- Includes safety tips if needed"#
    )
}

/// Render the plain-text recipe prompt used after an unreadable JSON reply.
pub fn render_recipe_fallback_prompt(ingredients: &str) -> String {
    format!(
        "Based on these ingredients: {ingredients}, suggest a simple, healthy recipe with clear step-by-step instructions suitable for elderly people."
    )
}

/// Instruction sent alongside a photo in JSON mode.
pub const PHOTO_PROMPT: &str = r#"Look at this image and identify all the food ingredients you can see.
Return only a JSON object with an array of ingredient names.
Focus on identifying common cooking ingredients like vegetables, fruits, meats, dairy products, grains, spices, etc.
Use simple, common names for ingredients (e.g., "tomato" not "roma tomato").

Format your response as:
{"ingredients": ["ingredient1", "ingredient2", "ingredient3"]}

If you cannot identify any food ingredients, return: {"ingredients": []}"#;

/// Plain-text photo instruction.
pub const PHOTO_FALLBACK_PROMPT: &str = "Look at this image and list all the food ingredients you can see, separated by commas. Use simple ingredient names.";

/// Render the JSON-mode extraction prompt for a transcript.
pub fn render_extraction_prompt(transcript: &str) -> String {
    format!(
        r#"From the following text that was spoken by someone describing their available ingredients:
"{transcript}"

Extract and list only the food ingredients mentioned.
Return the response in JSON format:
{{"ingredients": ["ingredient1", "ingredient2", "ingredient3"]}}

Only include actual food ingredients (vegetables, fruits, meats, dairy, grains, spices, etc.).
Use simple, common names for ingredients.
If no ingredients are mentioned, return: {{"ingredients": []}}"#
    )
}

/// Render the plain-text extraction prompt.
pub fn render_extraction_fallback_prompt(transcript: &str) -> String {
    format!(
        "From this text: '{transcript}', list only the food ingredients mentioned, separated by commas:"
    )
}
