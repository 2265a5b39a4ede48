use super::{context::AnalysisContext, image::FoodImage, prompts::FOOD_INFO_PROMPT};
use crate::{
    Result,
    llm::{ChatCompletionRequest, Completion, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Asks a vision-capable model to describe the food in a photo.
pub struct VisionExtractor {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl VisionExtractor {
    pub fn new(llm: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    pub async fn extract(&self, ctx: &AnalysisContext, image: &FoodImage) -> Result<Completion> {
        debug!(
            request_id = %ctx.request_id,
            "Encoding {} byte image for {}",
            image.len(),
            self.model
        );

        let request =
            ChatCompletionRequest::with_image(&self.model, FOOD_INFO_PROMPT, image.data_url());
        let completion = self
            .llm
            .create_chat_completion(&ctx.credential, request)
            .await?;

        info!(
            request_id = %ctx.request_id,
            success = completion.is_success(),
            "Food information extracted with {}",
            self.model
        );
        Ok(completion)
    }
}
