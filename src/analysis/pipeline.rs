use super::{
    context::AnalysisContext, image::FoodImage, nutrition::NutritionEstimator,
    vision::VisionExtractor,
};
use crate::{
    Result,
    config::OpenRouterConfig,
    llm::{Completion, LlmClient},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub food_info: Completion,
    /// `None` when the vision step failed and nutrition was never requested.
    /// A failed description is not forwarded to the nutrition model as text.
    pub nutrition_info: Option<Completion>,
}

/// Photo to description to nutrition estimate, strictly in that order.
pub struct FoodAnalyzer {
    vision: VisionExtractor,
    nutrition: NutritionEstimator,
}

impl FoodAnalyzer {
    pub fn new(vision: VisionExtractor, nutrition: NutritionEstimator) -> Self {
        Self { vision, nutrition }
    }

    /// Both steps share one client, each addressed to its configured model.
    pub fn from_config(llm: Arc<dyn LlmClient>, config: &OpenRouterConfig) -> Self {
        Self::new(
            VisionExtractor::new(llm.clone(), &config.vision_model),
            NutritionEstimator::new(llm, &config.nutrition_model),
        )
    }

    pub async fn extract_food_info(
        &self,
        ctx: &AnalysisContext,
        image: &FoodImage,
    ) -> Result<Completion> {
        self.vision.extract(ctx, image).await
    }

    pub async fn extract_nutrition_info(
        &self,
        ctx: &AnalysisContext,
        description: &str,
    ) -> Result<Completion> {
        self.nutrition.estimate(ctx, description).await
    }

    pub async fn analyze(&self, ctx: &AnalysisContext, image: &FoodImage) -> Result<AnalysisReport> {
        info!(request_id = %ctx.request_id, "Extracting food information...");
        let food_info = self.extract_food_info(ctx, image).await?;

        let nutrition_info = match food_info.text() {
            Some(description) => Some(self.extract_nutrition_info(ctx, description).await?),
            None => {
                warn!(
                    request_id = %ctx.request_id,
                    "Skipping nutrition estimate: {}",
                    food_info
                );
                None
            }
        };

        Ok(AnalysisReport {
            food_info,
            nutrition_info,
        })
    }
}
