use crate::llm::Credential;
use uuid::Uuid;

/// Per-submission state handed explicitly to each pipeline step.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub request_id: Uuid,
    pub credential: Credential,
}

impl AnalysisContext {
    pub fn new(credential: Credential) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            credential,
        }
    }
}
