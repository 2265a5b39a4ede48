mod context;
mod image;
mod nutrition;
mod pipeline;
pub mod prompts;
mod vision;

pub use context::AnalysisContext;
pub use image::FoodImage;
pub use nutrition::NutritionEstimator;
pub use pipeline::{AnalysisReport, FoodAnalyzer};
pub use vision::VisionExtractor;
