//! Fixed instructions sent to the vision and nutrition models.

pub const FOOD_INFO_PROMPT: &str = "
Extract only the food-related information from this image.
Focus on identifying the main ingredients, portion size, and any other relevant details about the food.
Specifically:
- Identify the number of main components (e.g., main dish, side dishes, garnishes).
- Describe each component in detail, including its type, estimated quantity, and notable ingredients.
";

/// Embeds a dish description into the nutrition instruction, which asks for
/// totals for the whole dish rather than per-serving figures.
pub fn nutrition_info_prompt(description: &str) -> String {
    format!(
        "
Provide a detailed TOTAL nutritional breakdown for the ENTIRE dish described below.
Include ONLY the total values for macronutrients like calories, carbohydrates, fats, proteins, etc.
Do not include per-serving information. Ensure the output is clear, concise, and well-organized.
{description}
"
    )
}
