mod client;
mod credential;
mod types;

pub use client::{LlmClient, OpenRouterClient};
pub use credential::{Credential, INVALID_KEY_MESSAGE, MISSING_KEY_MESSAGE};
pub use types::*;
