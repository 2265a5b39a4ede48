use super::{context::AnalysisContext, prompts::nutrition_info_prompt};
use crate::{
    Result,
    llm::{ChatCompletionRequest, Completion, LlmClient},
};
use std::sync::Arc;
use tracing::info;

/// Asks a text model for total macronutrients of a described dish.
pub struct NutritionEstimator {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl NutritionEstimator {
    pub fn new(llm: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    pub async fn estimate(&self, ctx: &AnalysisContext, description: &str) -> Result<Completion> {
        let request =
            ChatCompletionRequest::with_text(&self.model, nutrition_info_prompt(description));
        let completion = self
            .llm
            .create_chat_completion(&ctx.credential, request)
            .await?;

        info!(
            request_id = %ctx.request_id,
            success = completion.is_success(),
            "Nutrition estimated with {}",
            self.model
        );
        Ok(completion)
    }
}
